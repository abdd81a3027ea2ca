use crate::selection::Selection;
use crate::view::{ViewId, ViewTarget};
use std::cell::RefCell;
use std::rc::Rc;

/// Single source of truth for what the shell shows. There is no back stack:
/// a view that wants "back" navigates to the view it came from explicitly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationController {
    current: ViewId,
    selection: Selection,
}

impl NavigationController {
    pub fn new(initial: ViewId) -> Self {
        Self {
            current: initial,
            selection: Selection::default(),
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.current
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Total transition. Raw names outside the closed set land on the
    /// default view; the selection is replaced (cleared when `None`).
    pub fn navigate(
        &mut self,
        target: impl Into<ViewTarget>,
        selection: Option<Selection>,
    ) -> ViewId {
        let view = target.into().resolve();
        tracing::trace!(from = %self.current, to = %view, "navigate");
        self.current = view;
        self.selection = selection.unwrap_or_default();
        view
    }
}

/// Shared handle to a [`NavigationController`], handed to child views in
/// place of an ambient global.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    inner: Rc<RefCell<NavigationController>>,
}

impl Navigator {
    pub fn new(initial: ViewId) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NavigationController::new(initial))),
        }
    }

    pub fn navigate(&self, target: impl Into<ViewTarget>, selection: Option<Selection>) -> ViewId {
        self.inner.borrow_mut().navigate(target, selection)
    }

    pub fn snapshot(&self) -> NavigationController {
        self.inner.borrow().clone()
    }
}

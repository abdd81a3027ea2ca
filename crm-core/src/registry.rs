use crate::selection::{EmployeeRecord, Selection};
use crate::view::ViewId;
use serde::Serialize;

/// Sidebar grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NavSection {
    Overview,
    Sales,
    Relationships,
    Operations,
    Administration,
}

impl NavSection {
    pub const ORDER: [NavSection; 5] = [
        NavSection::Overview,
        NavSection::Sales,
        NavSection::Relationships,
        NavSection::Operations,
        NavSection::Administration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Overview => "Overview",
            NavSection::Sales => "Sales",
            NavSection::Relationships => "Relationships",
            NavSection::Operations => "Operations",
            NavSection::Administration => "Administration",
        }
    }
}

/// Selection a view needs before it can render its real content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Requirement {
    Nothing,
    OptionalCompany,
    Company,
    Employee,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSpec {
    pub id: ViewId,
    pub title: &'static str,
    /// `None` for detail views reachable only from another view.
    pub section: Option<NavSection>,
    pub requires: Requirement,
}

/// Registry entry for every view. The match is exhaustive, so a new
/// [`ViewId`] does not compile without one.
pub fn spec(view: ViewId) -> ViewSpec {
    use NavSection::*;
    use Requirement::*;

    let (title, section, requires) = match view {
        ViewId::Dashboard => ("Dashboard", Some(Overview), Nothing),
        ViewId::Notifications => ("Notifications", Some(Overview), Nothing),
        ViewId::AiInsights => ("AI Insights", Some(Overview), Nothing),
        ViewId::Deals => ("Deals", Some(Sales), Nothing),
        ViewId::SalesLifecycle => ("Sales Lifecycle", Some(Sales), Nothing),
        ViewId::Reports => ("Reports", Some(Sales), Nothing),
        ViewId::Companies => ("Companies", Some(Relationships), OptionalCompany),
        ViewId::CompanyDetails => ("Company Details", None, Company),
        ViewId::Contacts => ("Contacts", Some(Relationships), Nothing),
        ViewId::Interactions => ("Interactions", Some(Relationships), Nothing),
        ViewId::Tasks => ("Task Board", Some(Operations), Nothing),
        ViewId::Documents => ("Documents", Some(Operations), Nothing),
        ViewId::Bills => ("Bills", Some(Operations), Nothing),
        ViewId::CompanyAdmin => ("Company Admin", Some(Administration), OptionalCompany),
        ViewId::AddEmployee => ("Add Employee", None, OptionalCompany),
        ViewId::EditEmployee => ("Edit Employee", None, Employee),
    };

    ViewSpec {
        id: view,
        title,
        section,
        requires,
    }
}

/// Props a view receives from the selection context.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewProps {
    Plain,
    Company { company_id: Option<String> },
    Employee {
        employee: EmployeeRecord,
        company_id: Option<String>,
    },
    /// The view requires a selection that was not set.
    Placeholder { missing: Requirement },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderUnit {
    pub view: ViewId,
    pub title: &'static str,
    pub props: ViewProps,
}

impl RenderUnit {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.props, ViewProps::Placeholder { .. })
    }

    pub fn company_id(&self) -> Option<&str> {
        match &self.props {
            ViewProps::Company { company_id } | ViewProps::Employee { company_id, .. } => {
                company_id.as_deref()
            }
            _ => None,
        }
    }
}

/// Pure and total: every view resolves, missing selections degrade to
/// [`ViewProps::Placeholder`].
pub fn resolve(view: ViewId, selection: &Selection) -> RenderUnit {
    let spec = spec(view);
    let props = match spec.requires {
        Requirement::Nothing => ViewProps::Plain,
        Requirement::OptionalCompany => ViewProps::Company {
            company_id: selection.company_id.clone(),
        },
        Requirement::Company => match &selection.company_id {
            Some(id) => ViewProps::Company {
                company_id: Some(id.clone()),
            },
            None => ViewProps::Placeholder {
                missing: Requirement::Company,
            },
        },
        Requirement::Employee => match &selection.employee {
            Some(employee) => ViewProps::Employee {
                employee: employee.clone(),
                company_id: selection.company_id.clone(),
            },
            None => ViewProps::Placeholder {
                missing: Requirement::Employee,
            },
        },
    };

    RenderUnit {
        view,
        title: spec.title,
        props,
    }
}

/// Resolves a raw view name, falling back to the default view.
pub fn resolve_named(name: &str, selection: &Selection) -> RenderUnit {
    resolve(ViewId::parse_or_default(name), selection)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub view: ViewId,
    pub title: &'static str,
    pub section: NavSection,
}

/// Sidebar entries, grouped in [`NavSection::ORDER`] and then in declaration
/// order of [`ViewId`].
pub fn sidebar() -> Vec<NavItem> {
    let mut items: Vec<NavItem> = ViewId::all()
        .filter_map(|view| {
            let spec = spec(view);
            spec.section.map(|section| NavItem {
                view,
                title: spec.title,
                section,
            })
        })
        .collect();
    items.sort_by_key(|item| {
        NavSection::ORDER
            .iter()
            .position(|s| *s == item.section)
            .unwrap_or(usize::MAX)
    });
    items
}

/// Views reachable from the sidebar. Only these are worth remembering
/// across reloads, since the selection a detail view needs is not stored.
pub fn is_landing(view: ViewId) -> bool {
    spec(view).section.is_some()
}

/// Restores a stored last view. Detail views fall back to the default.
pub fn restore_view(stored: Option<&str>) -> ViewId {
    let view = ViewId::from_preference(stored);
    if is_landing(view) {
        view
    } else {
        ViewId::DEFAULT
    }
}

use crm_core::error::StoreError;
use crm_core::identity::Identity;
use crm_core::registry::ViewProps;
use crm_core::selection::Selection;
use crm_core::shell::{Frame, Shell};
use crm_core::store::{AuthCallback, MemoryStore, RemoteStore, StoreSubscription};
use crm_core::view::ViewId;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::LocalSpawnExt;
use std::cell::RefCell;

/// Memory store whose `get_session` stays pending until the test answers it.
struct SlowStore {
    inner: MemoryStore,
    answer: RefCell<Option<oneshot::Receiver<Result<Option<Identity>, StoreError>>>>,
}

impl SlowStore {
    fn new(inner: MemoryStore) -> (Self, oneshot::Sender<Result<Option<Identity>, StoreError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                inner,
                answer: RefCell::new(Some(rx)),
            },
            tx,
        )
    }
}

impl RemoteStore for SlowStore {
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Identity>, StoreError>> {
        match self.answer.borrow_mut().take() {
            Some(rx) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(StoreError::Unavailable("answer dropped".into())))
            }
            .boxed_local(),
            None => self.inner.get_session(),
        }
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<StoreSubscription, StoreError> {
        self.inner.on_auth_state_change(callback)
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        self.inner.sign_out()
    }
}

#[test]
fn sign_in_then_navigate_end_to_end() {
    let memory = MemoryStore::new();
    let (store, answer) = SlowStore::new(memory.clone());
    let shell = Shell::new(store, ViewId::Dashboard);
    let mut pool = LocalPool::new();

    pool.spawner()
        .spawn_local(shell.mount())
        .expect("spawn initial check");
    pool.run_until_stalled();
    assert_eq!(shell.frame(), Frame::Loading);

    answer.send(Ok(None)).expect("answer initial check");
    pool.run_until_stalled();
    assert_eq!(shell.frame(), Frame::Entry);

    memory.sign_in(Identity::new("user-a").with_email("a@example.com"));
    shell.entry_completed();
    let frame = shell.frame();
    let ws = frame.workspace().expect("signed in");
    assert_eq!(ws.identity.id, "user-a");
    assert_eq!(ws.active, ViewId::Dashboard);

    let nav = shell.navigator();
    nav.navigate("companies", Some(Selection::company("42")));
    let frame = shell.frame();
    let ws = frame.workspace().expect("signed in");
    assert_eq!(ws.active, ViewId::Companies);
    assert_eq!(
        ws.unit.props,
        ViewProps::Company {
            company_id: Some("42".into())
        }
    );

    nav.navigate("not-a-real-view", None);
    let frame = shell.frame();
    assert_eq!(frame.workspace().map(|ws| ws.active), Some(ViewId::Dashboard));
}

#[test]
fn failed_initial_check_renders_entry() {
    let (store, answer) = SlowStore::new(MemoryStore::new());
    let shell = Shell::new(store, ViewId::Deals);
    let mut pool = LocalPool::new();

    pool.spawner()
        .spawn_local(shell.mount())
        .expect("spawn initial check");
    answer
        .send(Err(StoreError::Unavailable("timeout".into())))
        .expect("answer initial check");
    pool.run_until_stalled();

    assert!(shell.frame().is_entry());
}

#[test]
fn event_during_pending_check_wins() {
    let memory = MemoryStore::new();
    let (store, answer) = SlowStore::new(memory.clone());
    let shell = Shell::new(store, ViewId::Dashboard);
    let mut pool = LocalPool::new();

    pool.spawner()
        .spawn_local(shell.mount())
        .expect("spawn initial check");
    pool.run_until_stalled();

    memory.sign_in(Identity::new("user-a"));
    assert!(shell.frame().workspace().is_some());

    answer.send(Ok(None)).expect("answer initial check");
    pool.run_until_stalled();
    assert_eq!(
        shell.frame().workspace().map(|ws| ws.identity.id.clone()),
        Some("user-a".to_string())
    );
}

#[test]
fn sign_out_returns_to_entry() {
    let memory = MemoryStore::with_session(Identity::new("user-a"));
    let shell = Shell::new(memory.clone(), ViewId::Reports);
    futures::executor::block_on(shell.mount());
    assert_eq!(
        shell.frame().workspace().map(|ws| ws.active),
        Some(ViewId::Reports)
    );

    futures::executor::block_on(shell.sign_out());
    assert!(shell.frame().is_entry());
    assert!(memory.session().is_none());
}

#[test]
fn discarded_shell_stops_listening() {
    let memory = MemoryStore::new();
    let shell = Shell::new(memory.clone(), ViewId::Dashboard);
    futures::executor::block_on(shell.mount());
    assert_eq!(memory.listener_count(), 1);

    drop(shell);
    assert_eq!(memory.listener_count(), 0);
    memory.sign_in(Identity::new("user-a"));
}

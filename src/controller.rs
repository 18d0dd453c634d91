//! Todo Controller
//!
//! Async operations against the remote API, reconciling the shared state
//! slot when each call settles. Failures are logged and surfaced as notices.

use futures::future::join_all;
use thiserror::Error;
use todo_api::{Session, TodoApi};

use crate::models::{NewTodo, NoticeKind, Todo};
use crate::state::TodoState;

/// Holder of the single `TodoState` slot.
///
/// Access is closure-scoped so no borrow outlives a synchronous update.
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut TodoState));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("server rejected the todo")]
    Rejected,
}

pub struct TodoController<A, S> {
    api: A,
    session: Session,
    state: S,
}

impl<A: TodoApi, S: StateCell> TodoController<A, S> {
    pub fn new(api: A, session: Session, state: S) -> Self {
        Self { api, session, state }
    }

    /// Replace the canonical list with the server's. No retry.
    pub async fn load(&self) {
        self.state.update_state(TodoState::start_loading);
        let user_id = self.session.user_id();
        match self.api.fetch_all(user_id).await {
            Ok(todos) => {
                log::info!("Loaded {} todos for user {}", todos.len(), user_id);
                self.state.update_state(|s| s.finish_loading(Some(todos)));
            }
            Err(err) => {
                log::warn!("Loading todos failed: {}", err);
                self.state.update_state(|s| {
                    s.finish_loading(None);
                    s.notify(NoticeKind::LoadFailed);
                });
            }
        }
    }

    /// Create a todo from `title`, showing a placeholder until the server answers.
    pub async fn create(&self, title: &str) -> Result<Todo, CreateError> {
        let title = title.trim();
        if title.is_empty() {
            self.state.update_state(|s| {
                s.notify(NoticeKind::EmptyTitle);
            });
            return Err(CreateError::EmptyTitle);
        }

        let new_todo = NewTodo::new(self.session.user_id(), title);
        self.state.update_state(|s| s.begin_create(&new_todo));

        match self.api.create(&new_todo).await {
            Ok(todo) => {
                log::debug!("Created todo {}", todo.id);
                let created = todo.clone();
                self.state.update_state(|s| s.finish_create(Some(created)));
                Ok(todo)
            }
            Err(err) => {
                log::warn!("Creating todo failed: {}", err);
                self.state.update_state(|s| {
                    s.finish_create(None);
                    s.notify(NoticeKind::AddFailed);
                });
                Err(CreateError::Rejected)
            }
        }
    }

    /// Delete one todo. Returns whether it was removed.
    pub async fn delete(&self, id: u32) -> bool {
        self.state.update_state(|s| s.begin_delete(id));
        let removed = match self.api.delete(id).await {
            Ok(()) => {
                log::debug!("Deleted todo {}", id);
                true
            }
            Err(err) => {
                log::warn!("Deleting todo {} failed: {}", id, err);
                false
            }
        };
        self.state.update_state(|s| {
            s.finish_delete(id, removed);
            if !removed {
                s.notify(NoticeKind::DeleteFailed);
            }
        });
        removed
    }

    /// Delete every completed todo, one independent request each.
    ///
    /// Returns how many were removed; failures leave the last notice shown.
    pub async fn clear_completed(&self) -> usize {
        let ids = self.state.with_state(TodoState::completed_ids);
        log::debug!("Clearing {} completed todos", ids.len());
        join_all(ids.into_iter().map(|id| self.delete(id)))
            .await
            .into_iter()
            .filter(|removed| *removed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashSet};
    use std::rc::Rc;
    use todo_api::ApiError;

    impl StateCell for Rc<RefCell<TodoState>> {
        fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
            f(&*self.borrow())
        }

        fn update_state(&self, f: impl FnOnce(&mut TodoState)) {
            f(&mut *self.borrow_mut())
        }
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            url: "http://fake/todos".to_string(),
        }
    }

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 7,
            title: format!("Todo {}", id),
            completed,
        }
    }

    /// In-memory stand-in for the remote service.
    #[derive(Default)]
    struct FakeApi {
        todos: RefCell<Vec<Todo>>,
        next_id: RefCell<u32>,
        fail_fetch: bool,
        fail_create: bool,
        fail_delete: HashSet<u32>,
        calls: RefCell<Vec<String>>,
        /// Lets the fake observe client state mid-request
        probe: RefCell<Option<Rc<RefCell<TodoState>>>>,
        seen_placeholder: RefCell<Option<Todo>>,
        seen_deleting: RefCell<Vec<(u32, BTreeSet<u32>)>>,
    }

    impl FakeApi {
        fn with_todos(todos: Vec<Todo>) -> Self {
            let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            Self {
                todos: RefCell::new(todos),
                next_id: RefCell::new(next_id),
                ..Default::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn fetch_all(&self, user_id: u32) -> Result<Vec<Todo>, ApiError> {
            self.calls.borrow_mut().push(format!("fetch_all {}", user_id));
            if self.fail_fetch {
                return Err(failure());
            }
            Ok(self.todos.borrow().iter().filter(|t| t.user_id == user_id).cloned().collect())
        }

        async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
            self.calls.borrow_mut().push(format!("create {}", todo.title));
            if let Some(state) = self.probe.borrow().as_ref() {
                *self.seen_placeholder.borrow_mut() = state.borrow().temp_todo.clone();
            }
            if self.fail_create {
                return Err(failure());
            }
            let mut next_id = self.next_id.borrow_mut();
            let created = Todo {
                id: *next_id,
                user_id: todo.user_id,
                title: todo.title.clone(),
                completed: todo.completed,
            };
            *next_id += 1;
            self.todos.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn delete(&self, id: u32) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            // Let sibling deletes start before this one settles.
            tokio::task::yield_now().await;
            if let Some(state) = self.probe.borrow().as_ref() {
                let deleting = state.borrow().deleting.clone();
                self.seen_deleting.borrow_mut().push((id, deleting));
            }
            if self.fail_delete.contains(&id) {
                return Err(failure());
            }
            self.todos.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    type TestController = TodoController<FakeApi, Rc<RefCell<TodoState>>>;

    fn setup(api: FakeApi, todos: Vec<Todo>) -> (TestController, Rc<RefCell<TodoState>>) {
        let state = Rc::new(RefCell::new(TodoState::default()));
        state.borrow_mut().todos = todos;
        *api.probe.borrow_mut() = Some(state.clone());
        let session = Session::new("http://fake", 7).unwrap();
        (TodoController::new(api, session, state.clone()), state)
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let server = vec![make_todo(1, false), make_todo(2, true)];
        let (controller, state) = setup(FakeApi::with_todos(server.clone()), vec![make_todo(99, false)]);

        controller.load().await;

        let state = state.borrow();
        assert_eq!(state.todos, server);
        assert!(!state.loading);
        assert!(state.notice.is_none());
        assert_eq!(*controller.api.calls.borrow(), vec!["fetch_all 7".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_load_notifies_once() {
        let api = FakeApi {
            fail_fetch: true,
            ..Default::default()
        };
        let before = vec![make_todo(3, false)];
        let (controller, state) = setup(api, before.clone());

        controller.load().await;

        let state = state.borrow();
        assert_eq!(state.todos, before);
        assert!(!state.loading);
        assert_eq!(state.notice_seq, 1);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::LoadFailed));
    }

    #[tokio::test]
    async fn test_empty_title_never_reaches_server() {
        let (controller, state) = setup(FakeApi::default(), vec![make_todo(1, false)]);

        let result = controller.create("   \t ").await;

        assert_eq!(result, Err(CreateError::EmptyTitle));
        assert!(controller.api.calls.borrow().is_empty());
        let state = state.borrow();
        assert_eq!(state.todos.len(), 1);
        assert!(state.temp_todo.is_none());
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::EmptyTitle));
    }

    #[tokio::test]
    async fn test_create_appends_server_record() {
        let (controller, state) = setup(FakeApi::with_todos(vec![make_todo(1, false)]), vec![make_todo(1, false)]);

        let created = controller.create("  Write docs ").await.unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(created.title, "Write docs");
        let placeholder = controller.api.seen_placeholder.borrow().clone().unwrap();
        assert_eq!(placeholder.id, 0);
        assert_eq!(placeholder.title, "Write docs");

        let state = state.borrow();
        assert_eq!(state.todos.len(), 2);
        assert!(state.todos.iter().all(|t| t.id != 0));
        assert!(state.temp_todo.is_none());
        assert!(state.notice.is_none());
    }

    #[tokio::test]
    async fn test_failed_create_shows_add_notice() {
        let api = FakeApi {
            fail_create: true,
            ..Default::default()
        };
        let (controller, state) = setup(api, vec![]);

        let result = controller.create("Doomed").await;

        assert_eq!(result, Err(CreateError::Rejected));
        let state = state.borrow();
        assert!(state.todos.is_empty());
        assert!(state.temp_todo.is_none());
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::AddFailed));
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let todos = vec![make_todo(1, false), make_todo(2, true)];
        let (controller, state) = setup(FakeApi::with_todos(todos.clone()), todos);

        assert!(controller.delete(1).await);

        let state = state.borrow();
        assert!(state.todos.iter().all(|t| t.id != 1));
        assert!(state.deleting.is_empty());
        let seen = controller.api.seen_deleting.borrow();
        assert_eq!(seen[0], (1, BTreeSet::from([1])));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_item() {
        let todos = vec![make_todo(1, false)];
        let api = FakeApi {
            fail_delete: HashSet::from([1]),
            ..FakeApi::with_todos(todos.clone())
        };
        let (controller, state) = setup(api, todos.clone());

        assert!(!controller.delete(1).await);

        let state = state.borrow();
        assert_eq!(state.todos, todos);
        assert!(state.deleting.is_empty());
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::DeleteFailed));
    }

    #[tokio::test]
    async fn test_clear_completed_deletes_each() {
        let todos = vec![make_todo(1, true), make_todo(2, false), make_todo(3, true)];
        let (controller, state) = setup(FakeApi::with_todos(todos.clone()), todos);

        assert_eq!(controller.clear_completed().await, 2);

        assert_eq!(state.borrow().todos, vec![make_todo(2, false)]);
        assert_eq!(*controller.api.calls.borrow(), vec!["delete 1".to_string(), "delete 3".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_completed_keeps_sibling_markers() {
        let todos = vec![make_todo(1, true), make_todo(2, true)];
        let (controller, _state) = setup(FakeApi::with_todos(todos.clone()), todos);

        controller.clear_completed().await;

        let seen = controller.api.seen_deleting.borrow();
        // Both requests were in flight together, and the first to settle
        // did not re-enable the other.
        assert_eq!(seen[0], (1, BTreeSet::from([1, 2])));
        assert_eq!(seen[1], (2, BTreeSet::from([2])));
    }

    #[tokio::test]
    async fn test_clear_completed_partial_failure() {
        let todos = vec![make_todo(1, true), make_todo(2, true), make_todo(3, true)];
        let api = FakeApi {
            fail_delete: HashSet::from([2]),
            ..FakeApi::with_todos(todos.clone())
        };
        let (controller, state) = setup(api, todos);

        assert_eq!(controller.clear_completed().await, 2);

        let state = state.borrow();
        assert_eq!(state.todos, vec![make_todo(2, true)]);
        assert!(state.deleting.is_empty());
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::DeleteFailed));
    }
}

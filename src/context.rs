//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_api::{HttpTodoApi, Session};

use crate::controller::TodoController;
use crate::store::TodoStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single state slot
    pub store: TodoStore,
    /// Delay before an error banner hides itself
    pub hide_after_ms: u32,
    api: StoredValue<HttpTodoApi>,
    session: StoredValue<Session>,
}

impl AppContext {
    pub fn new(store: TodoStore, session: Session, hide_after_ms: u32) -> Self {
        Self {
            store,
            hide_after_ms,
            api: StoredValue::new(HttpTodoApi::new(session.clone())),
            session: StoredValue::new(session),
        }
    }

    /// Controller bound to the remote API and this context's store
    pub fn controller(&self) -> TodoController<HttpTodoApi, TodoStore> {
        TodoController::new(self.api.get_value(), self.session.get_value(), self.store)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

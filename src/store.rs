//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::StateCell;
use crate::state::TodoState;

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

impl StateCell for TodoStore {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        f(&*self.read_untracked())
    }

    fn update_state(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut *self.write())
    }
}

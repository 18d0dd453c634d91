//! View Derivation
//!
//! The visible list and counters, computed from the canonical list on every read.

use crate::models::{Filter, Todo};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoView {
    pub visible: Vec<Todo>,
    pub active_count: usize,
    pub completed_count: usize,
}

pub fn derive_view(todos: &[Todo], filter: Filter) -> TodoView {
    let completed_count = todos.iter().filter(|todo| todo.completed).count();
    TodoView {
        visible: todos.iter().filter(|todo| filter.matches(todo)).cloned().collect(),
        active_count: todos.len() - completed_count,
        completed_count,
    }
}

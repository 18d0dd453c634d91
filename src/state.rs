//! Client State
//!
//! The single state slot behind the UI. Every mutation goes through the
//! methods here; derived values come from `view::derive_view` and are
//! never stored.

use std::collections::BTreeSet;

use reactive_stores::Store;

use crate::models::{Filter, NewTodo, Notice, NoticeKind, Todo};

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Canonical list: cached copy of the server's todos
    pub todos: Vec<Todo>,
    pub filter: Filter,
    /// Optimistic placeholder for the create in flight
    pub temp_todo: Option<Todo>,
    /// Ids with a delete in flight
    pub deleting: BTreeSet<u32>,
    /// Initial fetch outstanding
    pub loading: bool,
    pub notice: Option<Notice>,
    /// Last ticket handed out by `notify`
    pub notice_seq: u64,
}

impl TodoState {
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    pub fn completed_ids(&self) -> Vec<u32> {
        self.todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect()
    }

    // ========================
    // Loading
    // ========================

    pub fn start_loading(&mut self) {
        self.notice = None;
        self.loading = true;
    }

    pub fn finish_loading(&mut self, loaded: Option<Vec<Todo>>) {
        if let Some(todos) = loaded {
            self.todos = todos;
        }
        self.loading = false;
    }

    // ========================
    // Create
    // ========================

    pub fn begin_create(&mut self, todo: &NewTodo) {
        self.temp_todo = Some(todo.placeholder());
    }

    pub fn finish_create(&mut self, created: Option<Todo>) {
        if let Some(todo) = created {
            self.todos.push(todo);
        }
        self.temp_todo = None;
    }

    // ========================
    // Delete
    // ========================

    pub fn begin_delete(&mut self, id: u32) {
        self.deleting.insert(id);
    }

    /// Clears only this id's pending marker; other deletes stay pending.
    pub fn finish_delete(&mut self, id: u32, removed: bool) {
        if removed {
            self.todos.retain(|todo| todo.id != id);
        }
        self.deleting.remove(&id);
    }

    // ========================
    // Notices
    // ========================

    /// Show a notice and return the ticket its hide timer must present.
    pub fn notify(&mut self, kind: NoticeKind) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            kind,
            ticket: self.notice_seq,
            hidden: false,
        });
        self.notice_seq
    }

    pub fn hide_notice(&mut self, ticket: u64) {
        if let Some(notice) = self.notice.as_mut().filter(|n| n.ticket == ticket) {
            notice.hidden = true;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

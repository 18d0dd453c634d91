//! Frontend Models
//!
//! Client-side state types layered over the wire models.

use serde::{Deserialize, Serialize};

pub use todo_api::{NewTodo, Todo};

/// Which todos the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Parse a location hash such as `#/active`; anything unknown is `All`.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }
}

/// Error banner category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    LoadFailed,
    AddFailed,
    DeleteFailed,
    EmptyTitle,
}

impl NoticeKind {
    pub fn message(self) -> &'static str {
        match self {
            NoticeKind::LoadFailed => "Unable to load todos",
            NoticeKind::AddFailed => "Unable to add a todo",
            NoticeKind::DeleteFailed => "Unable to delete a todo",
            NoticeKind::EmptyTitle => "Title should not be empty",
        }
    }
}

/// A shown error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Identifies this showing, so a stale hide timer leaves newer notices alone
    pub ticket: u64,
    pub hidden: bool,
}

//! Wire Models
//!
//! Task records as exchanged with the remote service.

use serde::{Deserialize, Serialize};

/// Identifier reserved for the unsaved placeholder shown while a create is in flight
pub const PLACEHOLDER_ID: u32 = 0;

/// Todo record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Create request body: a todo without an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(user_id: u32, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            completed: false,
        }
    }

    /// Local stand-in rendered until the server assigns an id
    pub fn placeholder(&self) -> Todo {
        Todo {
            id: PLACEHOLDER_ID,
            user_id: self.user_id,
            title: self.title.clone(),
            completed: self.completed,
        }
    }
}

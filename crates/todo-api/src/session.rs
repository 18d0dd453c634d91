//! Session
//!
//! Whose todos this client manages, and where they live.

/// Base URL plus owner id, passed explicitly to everything that talks to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    user_id: u32,
}

impl Session {
    /// Returns `None` for user id 0, which means no user is configured.
    pub fn new(base_url: impl Into<String>, user_id: u32) -> Option<Self> {
        if user_id == 0 {
            return None;
        }
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Some(Self { base_url, user_id })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

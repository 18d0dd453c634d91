//! Todo API Client
//!
//! Wire models, session and configuration for the remote todo service,
//! plus the `TodoApi` seam and its `reqwest` implementation.

mod client;
mod config;
mod error;
mod models;
mod session;

pub use client::{HttpTodoApi, TodoApi};
pub use config::{ApiSection, Config, LogSection, NoticeSection, UserSection};
pub use error::{ApiError, ConfigError};
pub use models::{NewTodo, Todo, PLACEHOLDER_ID};
pub use session::Session;

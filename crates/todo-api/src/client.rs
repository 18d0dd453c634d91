//! Remote API Client
//!
//! `TodoApi` is the seam the app talks through; `HttpTodoApi` is the
//! `reqwest` implementation used in the browser.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{NewTodo, Todo};
use crate::session::Session;

/// Remote todo collection: list, create, delete
#[async_trait(?Send)]
pub trait TodoApi {
    /// All todos owned by `user_id`
    async fn fetch_all(&self, user_id: u32) -> Result<Vec<Todo>, ApiError>;

    /// Persist a new todo and return it with its assigned id
    async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError>;

    async fn delete(&self, id: u32) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    session: Session,
}

impl HttpTodoApi {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn fetch_all(&self, user_id: u32) -> Result<Vec<Todo>, ApiError> {
        let url = self.session.todos_url();
        log::debug!("GET {} userId={}", url, user_id);
        let resp = self
            .client
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await?;
        decode(check_status(resp)?).await
    }

    async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        let url = self.session.todos_url();
        log::debug!("POST {}", url);
        let resp = self.client.post(&url).json(todo).send().await?;
        decode(check_status(resp)?).await
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let url = self.session.todo_url(id);
        log::debug!("DELETE {}", url);
        let resp = self.client.delete(&url).send().await?;
        check_status(resp)?;
        Ok(())
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    parse_body(&body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

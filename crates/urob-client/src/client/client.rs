use crate::{ClientError, ClientResult, Operation};

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use urob_config::ApiConfig;
use urob_core::{NewProject, NewTask, Project, ProjectPayload, Tag, Task, TaskPayload, User};

/// HTTP client for the project/task backend.
///
/// Every method performs exactly one request. Nothing is cached, retried or
/// timed out; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client for the configured backend
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Send the request and reject anything but a 2xx response
    async fn send(&self, operation: Operation, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await.map_err(|e| {
            warn!("{}: {}", operation, e);
            ClientError::transport(operation, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{}: HTTP {}", operation, status);
            return Err(ClientError::status(operation, status));
        }

        Ok(response)
    }

    /// Execute request and decode the JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        let response = self.send(operation, req).await?;
        let status = response.status();

        response.json::<T>().await.map_err(|e| {
            warn!("{}: undecodable body: {}", operation, e);
            ClientError::decode(operation, status, e)
        })
    }

    /// Execute a delete. The body may be empty, JSON or a plain confirmation.
    async fn execute_delete(
        &self,
        operation: Operation,
        req: RequestBuilder,
    ) -> ClientResult<Value> {
        let response = self.send(operation, req).await?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::decode(operation, status, e))?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn get_projects(&self) -> ClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/projects");
        self.execute(Operation::FetchProjects, req).await
    }

    /// Same as [`Client::get_projects`]
    pub async fn fetch_projects(&self) -> ClientResult<Vec<Project>> {
        self.get_projects().await
    }

    /// Create a project from just a name
    pub async fn add_project(&self, name: &str) -> ClientResult<Project> {
        self.create_project(&NewProject::named(name)).await
    }

    /// Create a new project, optionally with nested tasks
    pub async fn create_project(&self, project: &NewProject) -> ClientResult<Project> {
        let req = self.request(Method::POST, "/projects").json(project);
        self.execute(Operation::CreateProject, req).await
    }

    /// Replace a project
    pub async fn update_project(
        &self,
        id: i64,
        payload: &ProjectPayload,
    ) -> ClientResult<Project> {
        let req = self
            .request(Method::PUT, &format!("/projects/{}", id))
            .json(payload);
        self.execute(Operation::UpdateProject, req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: i64) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id));
        self.execute_delete(Operation::DeleteProject, req).await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Get a project with its tasks. There is no dedicated task list endpoint.
    pub async fn get_tasks(&self, project_id: i64) -> ClientResult<Project> {
        let req = self.request(Method::GET, &format!("/projects/{}", project_id));
        self.execute(Operation::GetTasks, req).await
    }

    /// Create a new task
    pub async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        let req = self.request(Method::POST, "/tasks").json(task);
        self.execute(Operation::CreateTask, req).await
    }

    /// Replace a task
    pub async fn update_task(&self, id: i64, payload: &TaskPayload) -> ClientResult<Task> {
        let req = self
            .request(Method::PUT, &format!("/tasks/{}", id))
            .json(payload);
        self.execute(Operation::UpdateTask, req).await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: i64) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/tasks/{}", id));
        self.execute_delete(Operation::DeleteTask, req).await
    }

    // =========================================================================
    // Tags & Users (read-only)
    // =========================================================================

    /// List all tags
    pub async fn get_tags(&self) -> ClientResult<Vec<Tag>> {
        let req = self.request(Method::GET, "/tags");
        self.execute(Operation::GetTags, req).await
    }

    /// List all users
    pub async fn get_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/users");
        self.execute(Operation::GetUsers, req).await
    }
}

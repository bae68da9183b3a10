//! Backend API client implementation.
//!
//! This module provides the [`ApiClient`] struct for talking to the
//! story-map backend: project fetching, story mutations, and wireframe
//! generation requests.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use storymap_protocol::{
    JobId, Priority, Project, ProjectId, ReleaseId, Story, StoryId, StoryStatus, TaskId,
    WireframeStatus,
};

use crate::error::{Result, from_response};

/// Payload for creating a new story in a grid cell.
#[derive(Debug, Clone, Serialize)]
pub struct NewStory {
    /// The task column the story belongs to.
    pub task_id: TaskId,
    /// The release row, or `None` for the unscheduled row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<ReleaseId>,
    /// The story title.
    pub title: String,
    /// An optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The story priority.
    pub priority: Priority,
    /// Acceptance criteria lines.
    pub acceptance_criteria: Vec<String>,
}

/// Payload for moving a story to a different cell or position.
#[derive(Debug, Clone, Serialize)]
pub struct StoryMove {
    /// The destination task column.
    pub task_id: TaskId,
    /// The destination release row, or `None` for the unscheduled row.
    pub release_id: Option<ReleaseId>,
    /// The position within the destination cell (0-based).
    pub position: u32,
}

/// Payload for the quick status-cycle mutation.
#[derive(Debug, Clone, Serialize)]
struct StatusUpdate {
    status: StoryStatus,
}

/// Response from a wireframe generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The id of the enqueued background job.
    pub job_id: JobId,
}

/// Response from a wireframe status check.
#[derive(Debug, Clone, Deserialize)]
pub struct WireframeStatusResponse {
    /// The current job status.
    pub status: WireframeStatus,
    /// The persisted error message, if the job failed.
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend API client with optional bearer-token authentication.
///
/// # Security
///
/// Tokens are stored using [`SecretString`] to prevent accidental logging
/// or exposure in debug output.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use storymap_api::ApiClient;
///
/// # async fn example() -> storymap_api::Result<()> {
/// let token = SecretString::from("eyJ_your_token".to_string());
/// let client = ApiClient::new("http://localhost:8000", Some(token))?;
///
/// let project = client.fetch_project(1).await?;
/// println!("Loaded {}", project.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The underlying reqwest client.
    http: reqwest::Client,
    /// Base URL of the backend, without a trailing slash.
    base_url: String,
    /// Optional bearer token.
    token: Option<SecretString>,
}

impl ApiClient {
    /// Creates a new API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root URL of the backend (e.g. `http://localhost:8000`).
    ///   A trailing slash is tolerated and stripped.
    /// * `token` - Optional bearer token. When `None`, requests are sent
    ///   unauthenticated and the backend will reject protected routes
    ///   with 401.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to initialize.
    #[instrument(skip(base_url, token), fields(authenticated = token.is_some()))]
    pub fn new(base_url: impl Into<String>, token: Option<SecretString>) -> Result<Self> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        debug!(%base_url, "creating API client");
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Returns whether this client carries a bearer token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Builds a request for `path`, applying the bearer token when present.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Sends a request and decodes the JSON body, mapping non-success
    /// statuses to [`Error::Unauthorized`](crate::error::Error::Unauthorized)
    /// or [`Error::Api`](crate::error::Error::Api).
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        if !response.status().is_success() {
            let err = from_response(response).await;
            warn!(error = %err, "API request rejected");
            return Err(err);
        }
        Ok(response.json().await?)
    }

    /// Fetches the full project snapshot, including wireframe fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`](crate::error::Error::Api) with the backend's
    /// detail message if the
    /// project does not exist or belongs to another user.
    #[instrument(skip(self))]
    pub async fn fetch_project(&self, project_id: ProjectId) -> Result<Project> {
        debug!("fetching project snapshot");
        let project: Project = self
            .send(self.request(Method::GET, &format!("/project/{project_id}")))
            .await?;
        debug!(
            activities = project.activities.len(),
            releases = project.releases.len(),
            "fetched project"
        );
        Ok(project)
    }

    /// Creates a new story in the cell named by the payload.
    #[instrument(skip(self, story), fields(task_id = story.task_id))]
    pub async fn create_story(&self, story: &NewStory) -> Result<Story> {
        debug!(title = %story.title, "creating story");
        self.send(self.request(Method::POST, "/story").json(story))
            .await
    }

    /// Sets a story's status directly.
    ///
    /// This is the quick mutation behind the status-cycle interaction;
    /// the caller computes the successor status locally and sends the
    /// result here.
    #[instrument(skip(self))]
    pub async fn update_story_status(
        &self,
        story_id: StoryId,
        status: StoryStatus,
    ) -> Result<Story> {
        debug!(?status, "updating story status");
        self.send(
            self.request(Method::PATCH, &format!("/story/{story_id}/status"))
                .json(&StatusUpdate { status }),
        )
        .await
    }

    /// Moves a story to a new cell and position.
    #[instrument(skip(self, target), fields(task_id = target.task_id, position = target.position))]
    pub async fn move_story(&self, story_id: StoryId, target: &StoryMove) -> Result<Story> {
        debug!("moving story");
        self.send(
            self.request(Method::PATCH, &format!("/story/{story_id}/move"))
                .json(target),
        )
        .await
    }

    /// Deletes a story.
    #[instrument(skip(self))]
    pub async fn delete_story(&self, story_id: StoryId) -> Result<()> {
        debug!("deleting story");
        let response = self
            .request(Method::DELETE, &format!("/story/{story_id}"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(from_response(response).await);
        }
        Ok(())
    }

    /// Requests generation of the project wireframe.
    ///
    /// The backend enqueues a background job and returns its id; the
    /// caller is expected to poll [`wireframe_status`](Self::wireframe_status)
    /// until the job leaves the pending state.
    #[instrument(skip(self))]
    pub async fn generate_wireframe(&self, project_id: ProjectId) -> Result<JobId> {
        debug!("requesting wireframe generation");
        let response: GenerateResponse = self
            .send(self.request(
                Method::POST,
                &format!("/project/{project_id}/generate-wireframe"),
            ))
            .await?;
        debug!(job_id = %response.job_id, "wireframe job enqueued");
        Ok(response.job_id)
    }

    /// Fetches the current wireframe job status for a project.
    #[instrument(skip(self))]
    pub async fn wireframe_status(&self, project_id: ProjectId) -> Result<WireframeStatusResponse> {
        self.send(self.request(
            Method::GET,
            &format!("/project/{project_id}/wireframe-status"),
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slashes() {
        let client = ApiClient::new("http://localhost:8000/", None).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn new_unauthenticated_client() {
        let client = ApiClient::new("http://localhost:8000", None).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn new_authenticated_client() {
        let token = SecretString::from("fake_token_for_testing".to_string());
        let client = ApiClient::new("http://localhost:8000", Some(token)).unwrap();
        assert!(client.is_authenticated());
    }

    #[test]
    fn new_story_serializes_without_empty_optionals() {
        let story = NewStory {
            task_id: 11,
            release_id: None,
            title: "Browse the catalog".to_string(),
            description: None,
            priority: Priority::Mvp,
            acceptance_criteria: vec![],
        };
        let json = serde_json::to_value(&story).unwrap();
        assert!(json.get("release_id").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["priority"], "MVP");
    }

    #[test]
    fn story_move_serializes_unscheduled_release_as_null() {
        let target = StoryMove {
            task_id: 11,
            release_id: None,
            position: 2,
        };
        let json = serde_json::to_value(&target).unwrap();
        assert!(json["release_id"].is_null());
        assert_eq!(json["position"], 2);
    }

    #[test]
    fn wireframe_status_response_deserializes_without_error_field() {
        let response: WireframeStatusResponse =
            serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        assert_eq!(response.status, WireframeStatus::Pending);
        assert!(response.error.is_none());
    }

    #[test]
    fn generate_response_deserializes_job_id() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"job_id": "4f9b2a1e-3c6d-4b8f-9e2a-1c5d7f8a9b0c"}"#).unwrap();
        assert_eq!(
            response.job_id.to_string(),
            "4f9b2a1e-3c6d-4b8f-9e2a-1c5d7f8a9b0c"
        );
    }
}

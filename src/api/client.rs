use crate::config::ServerConfig;
use crate::state::data::Student;

use super::error::ApiError;

/// REST client for the `/student` resource.
///
/// The client is cheap to clone (reqwest pools connections internally),
/// which lets each async task own its copy for the lifetime of one
/// request. Calls are fire-and-forget from the UI's point of view:
/// nothing is retried, queued, or cancelled.
#[derive(Debug, Clone)]
pub struct RosterApi {
    http: reqwest::Client,
    base_url: String,
}

impl RosterApi {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("http://{}:{}/student", config.host, config.port),
        }
    }

    /// The collection endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch the full collection
    pub async fn fetch_all(self) -> Result<Vec<Student>, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Create a record from the draft; the server assigns the real id
    /// and timestamp and echoes the authoritative copy back.
    pub async fn create(self, draft: Student) -> Result<Student, ApiError> {
        let response = self
            .http
            .post(&self.base_url)
            .json(&draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Update the record keyed by its id; returns the server's copy.
    pub async fn update(self, student: Student) -> Result<Student, ApiError> {
        let response = self
            .http
            .put(self.record_url(student.id))
            .json(&student)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Delete the record keyed by id; returns the id on success so the
    /// caller can reconcile the roster.
    pub async fn delete(self, id: i64) -> Result<i64, ApiError> {
        self.http
            .delete(self.record_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(id)
    }
}

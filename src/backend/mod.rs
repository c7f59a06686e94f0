//! Collaborator seams for the engine: directory data in, submissions out.
//!
//! This module defines the interfaces the hosting application implements,
//! along with common argument types and error handling. The engine never
//! knows the transport behind these traits (REST, GraphQL, a fixture in
//! tests).

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::FilterGroup;

/// Common error types for collaborator operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Payload for creating an activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    /// Activity model the draft is based on, if any. When set, the
    /// submission pipeline enriches the draft with the model's question ids.
    pub model_id: Option<String>,
    pub question_ids: Vec<String>,
    pub deadline: Option<NaiveDate>,
}

/// A submittable leaf selection, fully resolved.
///
/// Only complete records exist: extraction drops ids it cannot resolve
/// rather than producing partial recipients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub student_id: String,
    pub user_institution_id: String,
}

/// Supplies the category/item hierarchy a session or wizard is built from.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Fetch the full filter hierarchy (schools, grades, classes, students,
    /// subjects, ...).
    async fn fetch_groups(&self) -> Result<Vec<FilterGroup>, BackendError>;
}

/// Creates activities and assigns them to recipients.
#[async_trait]
pub trait ActivityBackend: Send + Sync {
    /// Create the activity and return its id.
    async fn create_activity(&self, draft: &ActivityDraft) -> Result<String, BackendError>;

    /// Assign a created activity to the given recipients.
    async fn assign_activity(&self, activity_id: &str, recipients: &[Recipient]) -> Result<(), BackendError>;

    /// Question ids attached to an activity model, if the model has any.
    async fn fetch_model_questions(&self, model_id: &str) -> Result<Option<Vec<String>>, BackendError>;
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::domain::{Activity, Application};

/// Failures reading payloads produced by the activities backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// `{ success, data, error, message }` wrapper used by the API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            success: None,
            data: None,
            error: None,
            message: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// An explicit `success` flag wins; otherwise the presence of `error` decides.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(self.error.is_none())
    }

    fn failure(self) -> CatalogError {
        CatalogError::Upstream(
            self.error
                .or(self.message)
                .unwrap_or_else(|| "request was not successful".to_string()),
        )
    }
}

/// The list endpoint answers either with a page object or a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivitiesPayload {
    Paginated {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<Activity>,
    },
    List(Vec<Activity>),
}

impl ActivitiesPayload {
    pub fn into_vec(self) -> Vec<Activity> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::List(activities) => activities,
        }
    }
}

impl ApiResponse<ActivitiesPayload> {
    /// Unwraps the activity list; a successful response without data is an empty list.
    pub fn into_activities(self) -> Result<Vec<Activity>, CatalogError> {
        if !self.is_success() {
            return Err(self.failure());
        }
        Ok(self.data.map(ActivitiesPayload::into_vec).unwrap_or_default())
    }
}

impl ApiResponse<Vec<Application>> {
    pub fn into_applications(self) -> Result<Vec<Application>, CatalogError> {
        if !self.is_success() {
            return Err(self.failure());
        }
        Ok(self.data.unwrap_or_default())
    }
}

fn is_envelope(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        !object.contains_key("results")
            && ["success", "data", "error"]
                .iter()
                .any(|key| object.contains_key(*key))
    })
}

/// Accepts an API envelope, a page object, or a bare array of activities.
pub fn parse_activities(raw: &str) -> Result<Vec<Activity>, CatalogError> {
    let value: Value = serde_json::from_str(raw)?;
    if is_envelope(&value) {
        let response: ApiResponse<ActivitiesPayload> = serde_json::from_value(value)?;
        response.into_activities()
    } else {
        let payload: ActivitiesPayload = serde_json::from_value(value)?;
        Ok(payload.into_vec())
    }
}

/// Accepts an API envelope or a bare array of applications.
pub fn parse_applications(raw: &str) -> Result<Vec<Application>, CatalogError> {
    let value: Value = serde_json::from_str(raw)?;
    if is_envelope(&value) {
        let response: ApiResponse<Vec<Application>> = serde_json::from_value(value)?;
        response.into_applications()
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Per-field validation failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub fields: BTreeMap<String, String>,
    pub status_code: u16,
}

/// Where the client should navigate after submit or reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub location: String,
}

/// Everything the filter form renders as selectable options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    #[serde(rename = "hometownFilters")]
    pub hometown_filters: Vec<String>,
    #[serde(rename = "workFilters")]
    pub work_filters: Vec<String>,
    #[serde(rename = "educationFilters")]
    pub education_filters: Vec<String>,
    pub genders: Vec<String>,
    #[serde(rename = "relationshipStatuses")]
    pub relationship_statuses: Vec<String>,
}

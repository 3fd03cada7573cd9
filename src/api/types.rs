//! API response types.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Response for the welcome page.
///
/// The endpoint map is a `BTreeMap` so the serialized body is byte-stable
/// across requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    /// Welcome message.
    pub message: String,
    /// Map of route path to human-readable description.
    pub endpoints: BTreeMap<String, String>,
}

/// Response describing the application.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    pub app_name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

/// Response for the health check.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}

/// Response from the addition calculator.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalcResponse {
    /// Operation performed, always "addition".
    pub operation: String,
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the marking
//! endpoints and the query parameters for the report endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /attendance`.
///
/// Used when the caller has already resolved the employee (e.g., a badge
/// reader or the administrative UI).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkRequest {
    /// The employee's business code.
    pub employee_id: String,
}

/// Request body for `POST /attendance/identify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifyRequest {
    /// The captured sample, encoded by the capture front end. Opaque to
    /// this engine; it is passed to the identification collaborator as-is.
    pub sample: String,
}

/// Query parameters for `GET /reports/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    /// The report year.
    pub year: i32,
    /// The report month (1..=12).
    pub month: u32,
}

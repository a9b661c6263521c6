//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints for recording attendance marks
//! and retrieving monthly attendance reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{IdentifyRequest, MarkRequest, ReportQuery};
pub use response::ApiError;
pub use state::AppState;

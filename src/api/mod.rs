//! HTTP API module for the payroll reporting engine.
//!
//! This module provides the REST endpoint for generating period reports
//! from weekly payroll records. Authentication and pagination belong to
//! the surrounding service, not to this engine.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::ApiError;

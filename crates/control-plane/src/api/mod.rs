// HTTP API routes
//
// This module contains the route handlers for the public API.
// Extractors and error types are shared so every endpoint reports validation
// failures the same way.

pub mod common;
pub mod extract;
pub mod workflows;

// Re-export common types
pub use common::{ApiError, ErrorResponse, ValidationErrorResponse, ValidationIssue};

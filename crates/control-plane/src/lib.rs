// Workflow Hub Control Plane Library
// Decision: Shared library for binaries (API server, OpenAPI export) and integration tests

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Router assembly (health, CORS, tracing, Swagger UI)
pub mod app;

// Environment configuration
pub mod config;

// Services layer
pub mod services;
pub use services::WorkflowService;

// OpenAPI spec generation
pub mod openapi;

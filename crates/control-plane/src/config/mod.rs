// Configuration loading
//
// This module handles environment-based configuration for the API server.
// The workflow catalog itself is loaded by wfhub-core from the configured path.

pub mod server;

pub use server::ServerConfig;

// Export OpenAPI specification as JSON
//
// Usage: cargo run --bin export-openapi > docs/api/openapi.json
//
// This binary generates the OpenAPI spec without starting the API server
// or loading the workflow catalog.

use anyhow::{Context, Result};
use wfhub_control_plane::openapi::ApiDoc;

fn main() -> Result<()> {
    let spec = ApiDoc::to_json().context("Failed to serialize OpenAPI spec")?;
    println!("{}", spec);
    Ok(())
}

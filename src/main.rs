//! Binary to convert the JSON:API JSON Schema into an OpenAPI 3 schema.
//!
//! Usage: `jsonapi-oas3`
//!
//! Reads `jsonapi-1.0-json-schema.json` from the working directory and writes
//! `jsonapi_oas3.json` next to it. Set `RUST_LOG=debug` to trace each step.

use std::process;

use json_schema_to_openapi::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, run};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use wiremock::ResponseTemplate;

/// Writes a config that points at `endpoint` and disables UI delays.
pub fn write_config(dir: &Path, endpoint: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[timing]\n\
         focus_delay_ms = 0\n\
         collapse_delay_ms = 0\n\
         verify_redirect_delay_ms = 0\n\
         \n\
         [api]\n\
         endpoint = \"{endpoint}\"\n\
         timeout_secs = 5\n"
    );
    fs::write(&path, contents).unwrap();
    path
}

/// A GraphQL reply whose aliased root field is `result`.
pub fn graphql_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": { "result": result } }))
}

//! info command - Display server metadata
//!
//! Fetches the heterogeneous key/value map the server exposes at /info and
//! prints it without interpreting individual entries.

use clap::Args;
use serde_json::Value;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Display server metadata
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Execute the info command
pub async fn execute(
    _args: InfoArgs,
    server: &Option<String>,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match super::connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.info().await {
        Ok(info) => {
            if formatter.is_json() {
                formatter.json(&info);
            } else if info.is_empty() {
                formatter.println("Server reported no metadata.");
            } else {
                let width = info.keys().map(String::len).max().unwrap_or(0);
                for (key, value) in &info {
                    // Pad before styling so ANSI codes don't skew alignment
                    let padded = format!("{key:<width$}");
                    formatter.println(&format!(
                        "{}  {}",
                        formatter.style_name(&padded),
                        render_value(value)
                    ));
                }
            }
            ExitCode::Success
        }
        Err(e) => super::fail(&formatter, "Failed to fetch server info", &e),
    }
}

/// Scalars print bare, nested values fall back to compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! objects command - List objects
//!
//! Lists every object the server reports, with key, size, and version.

use clap::Args;
use serde::Serialize;

use rp_core::ObjectSummary;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List objects
#[derive(Args, Debug)]
pub struct ObjectsArgs {
    /// Summarize output (show totals only)
    #[arg(long)]
    pub summarize: bool,
}

/// Output structure for the objects command (JSON format)
#[derive(Debug, Serialize)]
struct ObjectsOutput {
    objects: Vec<ObjectSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
}

#[derive(Debug, Serialize)]
struct Summary {
    total_objects: usize,
    total_size_bytes: i64,
    total_size_human: String,
}

/// Execute the objects command
pub async fn execute(
    args: ObjectsArgs,
    server: &Option<String>,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match super::connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.list_objects().await {
        Ok(objects) => {
            let total_size: i64 = objects.iter().filter_map(|o| o.size).sum();
            let summary = Summary {
                total_objects: objects.len(),
                total_size_bytes: total_size,
                total_size_human: humansize::format_size(
                    total_size.max(0) as u64,
                    humansize::BINARY,
                ),
            };

            if formatter.is_json() {
                let output = ObjectsOutput {
                    objects,
                    summary: args.summarize.then_some(summary),
                };
                formatter.json(&output);
            } else if objects.is_empty() {
                formatter.println("No objects found.");
            } else {
                if !args.summarize {
                    let mut table = formatter.table(&["KEY", "SIZE", "VERSION", "MODIFIED"]);
                    for object in &objects {
                        table.add_row(vec![
                            formatter.style_name(&object.key),
                            formatter.style_size(&object.size_human()),
                            version_cell(object.version_number),
                            formatter.style_date(object.timestamp.as_deref().unwrap_or("-")),
                        ]);
                    }
                    formatter.println(&table.to_string());
                }
                formatter.println(&format!(
                    "\nTotal: {} objects, {}",
                    summary.total_objects, summary.total_size_human
                ));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(&formatter, "Failed to list objects", &e),
    }
}

fn version_cell(version: Option<i64>) -> String {
    version.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

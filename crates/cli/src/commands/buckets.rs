//! buckets command - List buckets
//!
//! Renders the server's bucket descriptors as a table in human mode or as
//! a JSON document in --json mode.

use clap::Args;
use serde::Serialize;

use rp_core::BucketSummary;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List buckets
#[derive(Args, Debug)]
pub struct BucketsArgs {
    /// Show bucket names only, one per line
    #[arg(long)]
    pub names_only: bool,
}

/// Output structure for the buckets command (JSON format)
#[derive(Debug, Serialize)]
struct BucketsOutput {
    buckets: Vec<BucketSummary>,
    total: usize,
}

/// Execute the buckets command
pub async fn execute(
    args: BucketsArgs,
    server: &Option<String>,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match super::connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.list_buckets().await {
        Ok(buckets) => {
            if formatter.is_json() {
                let output = BucketsOutput {
                    total: buckets.len(),
                    buckets,
                };
                formatter.json(&output);
            } else if args.names_only {
                for bucket in &buckets {
                    formatter.println(&bucket.bucket_name);
                }
            } else if buckets.is_empty() {
                formatter.println("No buckets found.");
            } else {
                let mut table = formatter.table(&["NAME", "CREATED", "ACTIVE", "TOTAL"]);
                for bucket in &buckets {
                    table.add_row(vec![
                        formatter.style_name(&bucket.bucket_name),
                        formatter.style_date(bucket.creation_date.as_deref().unwrap_or("-")),
                        count_cell(bucket.active_objects),
                        count_cell(bucket.total_objects),
                    ]);
                }
                formatter.println(&table.to_string());
                formatter.println(&format!("\nTotal: {} buckets", buckets.len()));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(&formatter, "Failed to list buckets", &e),
    }
}

fn count_cell(count: Option<i64>) -> String {
    count.map(|n| n.to_string()).unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_cell() {
        assert_eq!(count_cell(Some(12)), "12");
        assert_eq!(count_cell(None), "-");
    }
}

//! rm command - Delete an object version
//!
//! Deletes exactly one (bucket, key, version) triple. The version is a
//! required argument: which version a server would pick by default is not
//! part of the protocol contract, so this client never guesses.

use clap::Args;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Delete an object version
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Bucket containing the object
    #[arg(short, long)]
    pub bucket: String,

    /// Object key
    #[arg(short, long)]
    pub key: String,

    /// Version to delete
    #[arg(short, long)]
    pub version: String,
}

#[derive(Debug, Serialize)]
struct RmOutput {
    status: &'static str,
    bucket: String,
    key: String,
    version: String,
}

/// Execute the rm command
pub async fn execute(
    args: RmArgs,
    server: &Option<String>,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    if args.key.is_empty() {
        formatter.error("Object key cannot be empty");
        return ExitCode::UsageError;
    }

    let client = match super::connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client
        .delete_object(&args.bucket, &args.key, &args.version)
        .await
    {
        Ok(_body) => {
            if formatter.is_json() {
                let output = RmOutput {
                    status: "success",
                    bucket: args.bucket.clone(),
                    key: args.key.clone(),
                    version: args.version.clone(),
                };
                formatter.json(&output);
            } else {
                formatter.success(&format!(
                    "Deleted '{}/{}' version {}.",
                    args.bucket, args.key, args.version
                ));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(
            &formatter,
            &format!("Failed to delete '{}/{}'", args.bucket, args.key),
            &e,
        ),
    }
}

//! mb command - Make bucket
//!
//! Creates a new bucket on the storage server. The server enforces name
//! uniqueness; a duplicate name surfaces as a conflict.

use clap::Args;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Create a bucket
#[derive(Args, Debug)]
pub struct MbArgs {
    /// Name of the bucket to create
    pub name: String,
}

#[derive(Debug, Serialize)]
struct MbOutput {
    status: &'static str,
    bucket: String,
    response: serde_json::Value,
}

/// Execute the mb command
pub async fn execute(
    args: MbArgs,
    server: &Option<String>,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    if let Err(e) = validate_bucket_name(&args.name) {
        formatter.error(&e);
        return ExitCode::UsageError;
    }

    let client = match super::connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.create_bucket(&args.name).await {
        Ok(body) => {
            if formatter.is_json() {
                let output = MbOutput {
                    status: "success",
                    bucket: args.name.clone(),
                    response: parse_confirmation(&body),
                };
                formatter.json(&output);
            } else {
                formatter.success(&format!("Bucket '{}' created.", args.name));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(&formatter, &format!("Failed to create bucket '{}'", args.name), &e),
    }
}

/// The confirmation body is implementation-defined; keep it verbatim when
/// it is not JSON
fn parse_confirmation(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}

fn validate_bucket_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Bucket name cannot be empty".to_string());
    }
    if name.contains('/') {
        return Err(format!("Bucket name cannot contain '/': '{name}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bucket_name_valid() {
        assert!(validate_bucket_name("corpus-1").is_ok());
    }

    #[test]
    fn test_validate_bucket_name_empty() {
        assert!(validate_bucket_name("").is_err());
        assert!(validate_bucket_name("   ").is_err());
    }

    #[test]
    fn test_validate_bucket_name_slash() {
        assert!(validate_bucket_name("a/b").is_err());
    }

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(
            parse_confirmation(r#"{"bucketName":"b1"}"#),
            serde_json::json!({"bucketName": "b1"})
        );
        assert_eq!(
            parse_confirmation("created"),
            serde_json::Value::String("created".into())
        );
    }
}

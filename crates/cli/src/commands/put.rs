//! put command - Upload a file as an object
//!
//! Uploads one local file into a bucket. The create mode decides whether
//! the upload must be a brand-new key, a new version of an existing key,
//! or whichever the server finds valid.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use rp_core::CreateMode;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload a file as a new object or object version
#[derive(Args, Debug)]
pub struct PutArgs {
    /// Local file to upload
    pub file: PathBuf,

    /// Target bucket (must already exist)
    #[arg(short, long)]
    pub bucket: String,

    /// Object key; defaults to the file's base name
    #[arg(short, long)]
    pub key: Option<String>,

    /// Create mode: new, version, or auto
    #[arg(short, long, default_value = "auto")]
    pub mode: String,
}

#[derive(Debug, Serialize)]
struct PutOutput {
    status: &'static str,
    bucket: String,
    key: String,
    mode: String,
    response: serde_json::Value,
}

/// Execute the put command
pub async fn execute(
    args: PutArgs,
    server: &Option<String>,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let mode: CreateMode = match args.mode.parse() {
        Ok(mode) => mode,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::UsageError;
        }
    };

    let key = match resolve_key(&args.key, &args.file) {
        Ok(key) => key,
        Err(e) => {
            formatter.error(&e);
            return ExitCode::UsageError;
        }
    };

    let client = match super::connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client
        .create_object(&args.bucket, &key, &args.file, mode)
        .await
    {
        Ok(body) => {
            if formatter.is_json() {
                let output = PutOutput {
                    status: "success",
                    bucket: args.bucket.clone(),
                    key: key.clone(),
                    mode: mode.to_string(),
                    response: serde_json::from_str(&body)
                        .unwrap_or_else(|_| serde_json::Value::String(body.clone())),
                };
                formatter.json(&output);
            } else {
                formatter.success(&format!(
                    "Uploaded '{}' to '{}/{}' (mode: {mode}).",
                    args.file.display(),
                    args.bucket,
                    key
                ));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(
            &formatter,
            &format!("Failed to upload '{}'", args.file.display()),
            &e,
        ),
    }
}

/// Use the explicit key when given, otherwise the file's base name
fn resolve_key(key: &Option<String>, file: &Path) -> Result<String, String> {
    if let Some(key) = key {
        if key.is_empty() {
            return Err("Object key cannot be empty".to_string());
        }
        return Ok(key.clone());
    }

    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| format!("Cannot derive a key from '{}'", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_key_explicit() {
        let key = resolve_key(&Some("docs/a.txt".into()), Path::new("./local.bin")).unwrap();
        assert_eq!(key, "docs/a.txt");
    }

    #[test]
    fn test_resolve_key_from_file_name() {
        let key = resolve_key(&None, Path::new("/tmp/upload/a.txt")).unwrap();
        assert_eq!(key, "a.txt");
    }

    #[test]
    fn test_resolve_key_empty_rejected() {
        assert!(resolve_key(&Some(String::new()), Path::new("a.txt")).is_err());
    }

    #[test]
    fn test_resolve_key_no_file_name() {
        assert!(resolve_key(&None, Path::new("/")).is_err());
    }
}

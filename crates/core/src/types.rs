//! Wire types shared between the client and the CLI
//!
//! These mirror the JSON descriptors produced by the storage service.
//! Decoding is forward-compatible: only the fields the client displays are
//! declared, everything else the server sends is ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Heterogeneous server metadata returned by GET /info
pub type ServerInfo = serde_json::Map<String, serde_json::Value>;

/// Bucket descriptor as returned by GET /buckets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    /// Bucket name, unique per server
    pub bucket_name: String,

    /// Last modification time, server-formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Creation time, server-formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// Number of non-deleted objects in the bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_objects: Option<i64>,

    /// Total object count including older versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_objects: Option<i64>,
}

/// Object descriptor as returned by GET /objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    /// Object key, unique within a bucket across versions
    pub key: String,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// Server-assigned revision number; higher is newer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,

    /// Checksum of the object contents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    /// MIME type recorded at upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Filename suggested for downloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_name: Option<String>,

    /// Last modification time, server-formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Creation time, server-formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// Lifecycle status (e.g. USED, DELETED)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Free-form tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ObjectSummary {
    /// Human-readable size, "-" when the server omitted it
    pub fn size_human(&self) -> String {
        match self.size {
            Some(size) if size >= 0 => humansize::format_size(size as u64, humansize::BINARY),
            _ => "-".to_string(),
        }
    }
}

/// Policy governing object creation
///
/// `New` must fail if the key already exists, `Version` must fail if it
/// does not, `Auto` does whichever is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    New,
    Version,
    #[default]
    Auto,
}

impl CreateMode {
    /// Wire value sent in the `create` multipart field
    pub const fn as_str(self) -> &'static str {
        match self {
            CreateMode::New => "new",
            CreateMode::Version => "version",
            CreateMode::Auto => "auto",
        }
    }
}

impl fmt::Display for CreateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreateMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(CreateMode::New),
            "version" => Ok(CreateMode::Version),
            "auto" => Ok(CreateMode::Auto),
            other => Err(Error::InvalidArgument(format!(
                "Unknown create mode '{other}'. Expected: new, version, or auto"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_round_trip() {
        for mode in [CreateMode::New, CreateMode::Version, CreateMode::Auto] {
            assert_eq!(mode.as_str().parse::<CreateMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_create_mode_rejects_unknown() {
        let err = "fresh".parse::<CreateMode>().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bucket_summary_tolerates_unknown_fields() {
        let json = r#"{"bucketName":"b1","bucketId":7,"replication":{"mode":"sync"}}"#;
        let bucket: BucketSummary = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.bucket_name, "b1");
        assert!(bucket.creation_date.is_none());
    }

    #[test]
    fn test_object_summary_decodes_server_fields() {
        let json = r#"{
            "key": "a.txt",
            "size": 1024,
            "versionNumber": 3,
            "checksum": "abc123",
            "status": "USED",
            "reproxyURL": "http://ignored.example/x"
        }"#;
        let object: ObjectSummary = serde_json::from_str(json).unwrap();
        assert_eq!(object.key, "a.txt");
        assert_eq!(object.size, Some(1024));
        assert_eq!(object.version_number, Some(3));
        assert_eq!(object.size_human(), "1 KiB");
    }

    #[test]
    fn test_object_summary_size_human_missing() {
        let object: ObjectSummary = serde_json::from_str(r#"{"key":"k"}"#).unwrap();
        assert_eq!(object.size_human(), "-");
    }
}

//! Storage service client
//!
//! A stateless façade over one HTTP transport. Each operation is a single
//! request/response with no retries; the shared [`reqwest::Client`] is only
//! a connection-reuse optimization with no observable effect on behavior.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;

use rp_core::{BucketSummary, CreateMode, Error, ObjectSummary, Result, ServerConfig, ServerInfo};

use crate::http::{RawResponse, decode_json, require_status};
use crate::upload;

/// Default per-request timeout; a resilience default, not part of the
/// protocol contract
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a versioned object-storage service
pub struct RepoClient {
    http: reqwest::Client,
    config: ServerConfig,
}

impl RepoClient {
    /// Create a client with the default request timeout
    pub fn new(config: ServerConfig) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(config: ServerConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// The server this client talks to
    pub fn server(&self) -> &ServerConfig {
        &self.config
    }

    /// Fetch server metadata
    pub async fn info(&self) -> Result<ServerInfo> {
        let resp = self.get("/info").await?;
        decode_json(resp, "info")
    }

    /// List all buckets
    pub async fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        let resp = self.get("/buckets").await?;
        decode_json(resp, "bucket list")
    }

    /// List all objects
    pub async fn list_objects(&self) -> Result<Vec<ObjectSummary>> {
        let resp = self.get("/objects").await?;
        decode_json(resp, "object list")
    }

    /// Create a bucket; the server's confirmation body is returned verbatim
    pub async fn create_bucket(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("Bucket name cannot be empty".into()));
        }

        let resp = self.post_form("/buckets", &[("name", name)]).await?;
        require_status(resp, StatusCode::OK)
    }

    /// Upload a local file as a new object or a new version of one
    ///
    /// The file must exist and be readable; an open failure surfaces as a
    /// transport error before any network call. The server decides whether
    /// the write is valid for the given mode and rejects with a non-201
    /// status otherwise.
    pub async fn create_object(
        &self,
        bucket: &str,
        key: &str,
        file: &Path,
        mode: CreateMode,
    ) -> Result<String> {
        let part = upload::file_part(file).await?;
        let form = Form::new()
            .text("bucketName", bucket.to_string())
            .text("key", key.to_string())
            .text("create", mode.as_str())
            .part("file", part);

        let resp = self.post_multipart("/objects", form).await?;
        require_status(resp, StatusCode::CREATED)
    }

    /// Delete one version of an object
    ///
    /// The version identifier is an external contract of the server; this
    /// client never substitutes a default for it.
    pub async fn delete_object(&self, bucket: &str, key: &str, version: &str) -> Result<String> {
        let path = format!("/objects/{bucket}");
        let resp = self
            .delete_form(&path, &[("key", key), ("version", version)])
            .await?;
        require_status(resp, StatusCode::OK)
    }

    async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Transport(format!("GET {url} failed: {e}")))?;
        Self::read_full(response).await
    }

    async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<RawResponse> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST (form)");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("POST {url} failed: {e}")))?;
        Self::read_full(response).await
    }

    async fn post_multipart(&self, path: &str, form: Form) -> Result<RawResponse> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST (multipart)");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("POST {url} failed: {e}")))?;
        Self::read_full(response).await
    }

    async fn delete_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<RawResponse> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("DELETE {url} failed: {e}")))?;
        Self::read_full(response).await
    }

    /// Read the body to completion regardless of status, so callers can
    /// always inspect error payloads
    async fn read_full(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {e}")))?;
        Ok(RawResponse { status, body })
    }
}

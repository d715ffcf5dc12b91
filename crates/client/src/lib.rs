//! HTTP protocol client for repoctl
//!
//! Implements the request/response contract with the storage service:
//! request construction, full-body reads, JSON decoding, and status
//! classification into the rp-core error taxonomy.

pub mod client;
mod http;
mod upload;

pub use client::{DEFAULT_TIMEOUT, RepoClient};

//! Core library for repoctl
//!
//! Shared types for the object-storage client: the error taxonomy,
//! configuration handling, and the wire-level descriptors exchanged with
//! the service. This crate knows nothing about HTTP or the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ConfigManager, DEFAULT_SERVER, Defaults, ServerConfig};
pub use error::{Error, Result};
pub use types::{BucketSummary, CreateMode, ObjectSummary, ServerInfo};

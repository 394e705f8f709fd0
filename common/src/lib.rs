//! Pingboard common types
//!
//! Data model, wire protocol, error taxonomy and configuration shared by the
//! server binary and its tests.

#![warn(missing_docs)]

/// Server configuration structures
pub mod config;

/// Error types (thiserror)
pub mod error;

/// HTTP request/response payloads
pub mod protocol;

/// Core data types (PingRecord, ProbeStatus)
pub mod types;

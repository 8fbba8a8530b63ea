//! Device Domain Types
//!
//! Defines the single domain entity (the latest report of one device) and
//! the shared time helper used to stamp it.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Device id substituted when a client reports without identifying itself.
pub const UNKNOWN_DEVICE_ID: &str = "unknown";

/// A single device's most recent location observation.
///
/// This is the value stored under `latest:<device_id>` and returned by the
/// query endpoints. Ingesting a new report for the same device overwrites
/// the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReport {
    /// Non-empty device identifier; `"unknown"` when the client sent none.
    pub device_id: String,
    /// Observation timestamp, epoch milliseconds. Client-supplied when
    /// valid, otherwise the server's ingest time.
    pub t_ms: i64,
    pub lat: f64,
    pub lon: f64,
    /// Server-assigned ingest timestamp, epoch milliseconds. Never
    /// client-supplied.
    pub received_at_ms: i64,
}

/// Current wall-clock time as epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

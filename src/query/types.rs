//! Query Data Types
//!
//! Response DTOs for the read endpoints. The single-device endpoint echoes
//! stored JSON (or shapes an error) and therefore works with raw
//! `serde_json::Value` instead of a DTO.

use crate::devices::types::DeviceReport;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /latest`.
#[derive(Debug, Deserialize)]
pub struct LatestParams {
    pub device_id: Option<String>,
}

/// Response of `GET /latest_all`.
///
/// `items` holds every report that could be read and parsed; the server
/// timestamp lets the polling client display its own staleness.
#[derive(Debug, Serialize)]
pub struct LatestAllResponse {
    pub server_time_ms: i64,
    pub items: Vec<DeviceReport>,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub server_time_ms: i64,
}

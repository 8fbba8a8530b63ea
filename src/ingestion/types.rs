//! Ingestion Data Types
//!
//! DTOs for the two ingestion protocols. The JSON protocol answers with a
//! structured acknowledgement; the Traccar protocol answers with bare text
//! and therefore has no response DTO.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by `POST /ingest`.
///
/// `{"ok":true}` on success; `{"ok":false,"error":...}` on rejection.
#[derive(Debug, Serialize)]
pub struct IngestAck {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IngestAck {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn error(message: &str) -> Self {
        Self {
            ok: false,
            error: Some(message.to_string()),
        }
    }
}

/// Query parameters of the Traccar-compatible endpoint.
///
/// All fields arrive as raw strings so the handler owns the numeric
/// validation and can answer with the protocol's plain-text `ERR` instead
/// of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct TraccarParams {
    pub id: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// Observation time in epoch seconds, per the OsmAnd protocol.
    pub timestamp: Option<String>,
}

use super::types::{IngestAck, TraccarParams};
use crate::devices::store::save_latest_and_register;
use crate::devices::types::{now_ms, DeviceReport, UNKNOWN_DEVICE_ID};
use crate::storage::kv::SharedStore;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::Value;

/// Generic JSON ingestion for `POST /ingest`.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that a malformed body yields this protocol's own 400 acknowledgement
/// instead of an extractor rejection.
pub async fn handle_ingest(
    Extension(store): Extension<SharedStore>,
    body: String,
) -> (StatusCode, Json<IngestAck>) {
    let data: Value = match serde_json::from_str(&body) {
        Ok(data) => data,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, Json(IngestAck::error("invalid JSON")));
        }
    };

    let (lat, lon) = match (finite_number(data.get("lat")), finite_number(data.get("lon"))) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(IngestAck::error("lat/lon required")),
            );
        }
    };

    let report = DeviceReport {
        device_id: coerce_device_id(data.get("device_id")),
        t_ms: finite_number(data.get("t_ms"))
            .map(|t| t as i64)
            .unwrap_or_else(now_ms),
        lat,
        lon,
        received_at_ms: now_ms(),
    };

    if let Err(err) = save_latest_and_register(store.as_ref(), &report).await {
        tracing::error!("Failed to persist report for {}: {}", report.device_id, err);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(IngestAck::error("store write failed")),
        );
    }

    (StatusCode::OK, Json(IngestAck::ok()))
}

/// Traccar Client (OsmAnd protocol) adapter for `GET /traccar`.
///
/// Expected request shape:
/// `GET /traccar?id=boat_01&lat=41.0786&lon=29.0034&timestamp=1738339200`
///
/// The client treats any non-`OK` body as a failed upload, so responses are
/// bare text, never JSON.
pub async fn handle_traccar(
    Extension(store): Extension<SharedStore>,
    Query(params): Query<TraccarParams>,
) -> (StatusCode, &'static str) {
    let lat = parse_finite(params.lat.as_deref());
    let lon = parse_finite(params.lon.as_deref());

    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return (StatusCode::BAD_REQUEST, "ERR"),
    };

    let report = DeviceReport {
        device_id: params
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNKNOWN_DEVICE_ID.to_string()),
        // The OsmAnd protocol reports seconds; storage is milliseconds.
        t_ms: parse_finite(params.timestamp.as_deref())
            .map(|ts_sec| (ts_sec * 1000.0) as i64)
            .unwrap_or_else(now_ms),
        lat,
        lon,
        received_at_ms: now_ms(),
    };

    if let Err(err) = save_latest_and_register(store.as_ref(), &report).await {
        tracing::error!("Failed to persist report for {}: {}", report.device_id, err);
        return (StatusCode::INTERNAL_SERVER_ERROR, "ERR");
    }

    (StatusCode::OK, "OK")
}

/// Extracts a finite number from a JSON value, if present.
fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

/// Parses a query-string field to a finite f64.
fn parse_finite(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.parse::<f64>().ok()).filter(|n| n.is_finite())
}

/// Coerces the optional `device_id` body field to a registry id.
///
/// Strings are taken as-is, numeric ids are stringified, and anything
/// missing or empty falls back to the placeholder id.
fn coerce_device_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => UNKNOWN_DEVICE_ID.to_string(),
    }
}

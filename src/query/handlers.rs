use super::types::{HealthResponse, LatestAllResponse, LatestParams};
use crate::devices::store::{load_latest_raw, load_registry};
use crate::devices::types::{now_ms, DeviceReport};
use crate::storage::kv::SharedStore;

use axum::extract::Query;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use axum::{Extension, Json};
use serde_json::{json, Value};

/// Serves the map UI for `GET /`, compiled into the binary and served verbatim.
pub async fn handle_map_page() -> Html<&'static str> {
    Html(include_str!("map.html"))
}

/// Liveness check for `GET /health`; deliberately touches no store.
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        server_time_ms: now_ms(),
    })
}

/// Returns the latest report for one device (`GET /latest?device_id=...`).
///
/// An unknown device is not an error: the response is a report-shaped body
/// with nulled coordinates, so polling clients need no special casing. A
/// stored value that no longer parses is a hard 500.
pub async fn handle_latest(
    Extension(store): Extension<SharedStore>,
    Query(params): Query<LatestParams>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, String)> {
    let device_id = match params.device_id.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "device_id required" })),
            ));
        }
    };

    let raw = load_latest_raw(store.as_ref(), &device_id)
        .await
        .map_err(internal_error)?;

    let raw = match raw {
        Some(raw) => raw,
        None => {
            return Ok((
                StatusCode::OK,
                Json(json!({
                    "device_id": device_id,
                    "lat": null,
                    "lon": null,
                    "t_ms": null,
                })),
            ));
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(report) => Ok((StatusCode::OK, Json(report))),
        Err(err) => {
            tracing::error!("Stored report for {} is corrupted: {}", device_id, err);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "stored JSON corrupted", "device_id": device_id })),
            ))
        }
    }
}

/// Returns the latest report of every registered device (`GET /latest_all`).
///
/// Aggregation is best-effort: absent or corrupted records are skipped so
/// one damaged entry never blanks the whole map.
pub async fn handle_latest_all(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<LatestAllResponse>, (StatusCode, String)> {
    let registry = load_registry(store.as_ref()).await.map_err(internal_error)?;

    let mut items: Vec<DeviceReport> = Vec::with_capacity(registry.len());
    for device_id in &registry {
        let raw = load_latest_raw(store.as_ref(), device_id)
            .await
            .map_err(internal_error)?;
        let Some(raw) = raw else { continue };

        match serde_json::from_str::<DeviceReport>(&raw) {
            Ok(report) => items.push(report),
            Err(err) => {
                tracing::warn!("Skipping corrupted report for {}: {}", device_id, err);
            }
        }
    }

    Ok(Json(LatestAllResponse {
        server_time_ms: now_ms(),
        items,
    }))
}

/// Fallback for every unmatched route.
pub async fn handle_not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found", "path": uri.path() })),
    )
}

fn internal_error(err: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Store access failed: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

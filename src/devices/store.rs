//! Latest-Position Store and Device Registry
//!
//! Read/write helpers over the raw `KvStore` handle. All values are JSON
//! strings: one `DeviceReport` object per `latest:<id>` key, one array of
//! device-id strings under the `devices` key.

use super::types::DeviceReport;
use crate::storage::keys::{latest_key, DEVICES_KEY};
use crate::storage::kv::KvStore;

use anyhow::Result;

/// Persists a report and ensures its device id is registered.
///
/// Two sequential, non-atomic steps:
/// 1. overwrite the device's latest-report key with the serialized report;
/// 2. read the registry, append the id if absent, write the registry back.
///
/// Step 2 is an unsynchronized read-modify-write: two concurrent first
/// ingests of different new devices can each read a registry missing the
/// other, and the later write wins. The lost id reappears on that device's
/// next ingest. This bounded inconsistency is accepted; the routine takes
/// no lock and performs no retry. A failed registry write is also not
/// rolled back against the already-written report.
pub async fn save_latest_and_register(store: &dyn KvStore, report: &DeviceReport) -> Result<()> {
    let serialized = serde_json::to_string(report)?;
    store.put(&latest_key(&report.device_id), serialized).await?;

    let mut registry = load_registry(store).await?;
    if !registry.contains(&report.device_id) {
        registry.push(report.device_id.clone());
        store
            .put(DEVICES_KEY, serde_json::to_string(&registry)?)
            .await?;
        tracing::info!("Registered new device {}", report.device_id);
    }

    Ok(())
}

/// Reads the device registry.
///
/// A missing, corrupted, or non-array registry value parses as the empty
/// list rather than an error, so a damaged registry degrades to "no known
/// devices" instead of taking down every caller.
pub async fn load_registry(store: &dyn KvStore) -> Result<Vec<String>> {
    let raw = store.get(DEVICES_KEY).await?;
    Ok(raw.as_deref().map(parse_registry).unwrap_or_default())
}

/// Reads the raw stored value of a device's latest report, if any.
///
/// Returns the stored JSON string untouched; callers decide whether a
/// deserialization failure is an error (single-device query) or something
/// to skip (aggregate query).
pub async fn load_latest_raw(store: &dyn KvStore, device_id: &str) -> Result<Option<String>> {
    store.get(&latest_key(device_id)).await
}

fn parse_registry(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!("Device registry value unreadable, treating as empty: {}", err);
            Vec::new()
        }
    }
}

//! Persisted Key Layout
//!
//! Two kinds of keys exist in the store:
//! - `devices` holds the serialized registry of every known device id.
//! - `latest:<device_id>` holds the serialized latest report for one device.
//!
//! The registry key carries a prefix-free name distinct from every report
//! key, so the two namespaces can never collide.

/// Well-known key for the device registry (JSON array of device-id strings).
pub const DEVICES_KEY: &str = "devices";

/// Prefix for per-device latest-report keys.
pub const LATEST_PREFIX: &str = "latest:";

/// Derives the latest-report key for a device id.
pub fn latest_key(device_id: &str) -> String {
    format!("{}{}", LATEST_PREFIX, device_id)
}

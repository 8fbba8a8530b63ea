//! GPS Latest-Position Tracker Library
//!
//! This library crate defines the core modules behind the tracking server
//! binary (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`storage`**: The key-value store seam. Defines the async `KvStore`
//!   capability trait plus an in-memory implementation, and the key layout
//!   (`devices` registry key, `latest:<device_id>` report keys).
//! - **`devices`**: The domain layer. Owns the `DeviceReport` entity, the
//!   device registry helpers, and the shared save-and-register routine that
//!   every ingestion path funnels through.
//! - **`ingestion`**: The data intake surface. Two HTTP protocols write
//!   reports: a generic JSON POST endpoint and a Traccar/OsmAnd-compatible
//!   query-string endpoint for mobile GPS clients.
//! - **`query`**: The read surface. Serves the latest report for one or all
//!   devices, the health check, and the map UI page that polls them.

pub mod devices;
pub mod ingestion;
pub mod query;
pub mod storage;

//! Query Service Module
//!
//! The read surface of the tracker: latest report per device, the aggregate
//! of all devices, liveness, and the map page that polls them.
//!
//! ## Responsibilities
//! - **Single device** (`GET /latest`): exact stored report, a nulled-out
//!   report for unknown ids, a hard error for corrupted stored data.
//! - **All devices** (`GET /latest_all`): best-effort aggregation over the
//!   registry; a single bad record never fails the listing.
//! - **Health** (`GET /health`): liveness only, no store dependency.
//! - **Map UI** (`GET /`): a compiled-in Leaflet page served verbatim.

pub mod handlers;
pub mod types;

//! Ingestion Service Module
//!
//! Accepts device location reports over two HTTP protocols and funnels both
//! into the shared save-and-register routine.
//!
//! ## Protocols
//! 1. **Generic JSON** (`POST /ingest`): structured body, JSON
//!    acknowledgements, for clients we control.
//! 2. **Traccar-compatible** (`GET /traccar`): query-string parameters and
//!    plain-text `OK`/`ERR` bodies, matching what the Traccar Client mobile
//!    app (OsmAnd protocol) expects from a server.
//!
//! Both paths validate and normalize the report (coordinate presence,
//! timestamp defaulting, placeholder device id) before anything is written.

pub mod handlers;
pub mod types;

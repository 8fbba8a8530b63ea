//! Device Tracking Module
//!
//! The domain layer shared by both ingestion protocols and the query surface.
//!
//! ## Core Concepts
//! - **Latest-Position Store**: every device keeps exactly one stored report,
//!   the most recently ingested one. Writes are unconditional overwrites; no
//!   history is retained.
//! - **Device Registry**: an insertion-ordered, duplicate-free list of every
//!   device id ever successfully ingested, stored as one JSON array value.
//!   Entries are never removed (no deregistration exists).
//! - **Save-and-register**: the single persistence routine both ingestion
//!   handlers delegate to. Its registry update is a plain read-modify-write
//!   against the store, which makes it the one race window of the system.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

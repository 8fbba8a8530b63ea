//! Key-Value Storage Module
//!
//! The single shared mutable resource of the system. Everything the server
//! remembers lives behind the `KvStore` trait as plain string values.
//!
//! ## Core Concepts
//! - **Capability handle**: handlers receive an `Arc<dyn KvStore>` via
//!   request extensions instead of reaching for global state, so the store
//!   is trivially substitutable with an in-memory fake in tests.
//! - **Semantics**: `get`/`put` only. No transactions, no atomic multi-key
//!   updates, no ordering guarantees across requests.
//! - **Key layout**: `keys` defines the registry key and the per-device
//!   report key derivation.

pub mod keys;
pub mod kv;

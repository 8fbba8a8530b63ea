use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Store handle injected into every handler via request extensions.
pub type SharedStore = Arc<dyn KvStore>;

/// Asynchronous string-keyed store capability.
///
/// Models the managed key-value service the server persists into: durable
/// from the caller's perspective, eventually consistent, `get`/`put` only.
/// Both operations are idempotent; a `put` is an unconditional overwrite.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any existing value.
    async fn put(&self, key: &str, value: String) -> Result<()>;
}

/// In-memory `KvStore` backed by a concurrent map.
///
/// Serves as the default process store and as the fake injected in tests.
/// Operations never fail; the `Result` signatures exist for real backends
/// behind the same trait.
#[derive(Default)]
pub struct MemoryKv {
    data: DashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored. Used by tests and stats logging.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }
}

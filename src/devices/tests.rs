//! Device Domain Tests
//!
//! Validates the save-and-register routine and the registry/report read
//! helpers against a fresh in-memory store.
//!
//! ## Test Scopes
//! - **Save-and-register**: report overwrite semantics, one-time
//!   registration, insertion order.
//! - **Registry loading**: absence, corruption, non-array values.
//!
//! *Note: the concurrent registry race is a property of the external store,
//! not of this code; it is documented on `save_latest_and_register` and not
//! reproduced here.*

#[cfg(test)]
mod tests {
    use crate::devices::store::{load_latest_raw, load_registry, save_latest_and_register};
    use crate::devices::types::DeviceReport;
    use crate::storage::keys::DEVICES_KEY;
    use crate::storage::kv::{KvStore, MemoryKv};

    fn report(device_id: &str, lat: f64, lon: f64, t_ms: i64) -> DeviceReport {
        DeviceReport {
            device_id: device_id.to_string(),
            t_ms,
            lat,
            lon,
            received_at_ms: 1_700_000_000_000,
        }
    }

    // ============================================================
    // SAVE-AND-REGISTER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_save_stores_report_and_registers_device() {
        let kv = MemoryKv::new();
        save_latest_and_register(&kv, &report("boat_01", 41.0, 29.0, 1_738_339_200_000))
            .await
            .unwrap();

        let raw = load_latest_raw(&kv, "boat_01").await.unwrap().unwrap();
        let stored: DeviceReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.lat, 41.0);
        assert_eq!(stored.lon, 29.0);

        let registry = load_registry(&kv).await.unwrap();
        assert_eq!(registry, vec!["boat_01".to_string()]);
    }

    #[tokio::test]
    async fn test_second_save_overwrites_first() {
        let kv = MemoryKv::new();
        save_latest_and_register(&kv, &report("rig1", 10.0, 20.0, 1)).await.unwrap();
        save_latest_and_register(&kv, &report("rig1", 11.0, 21.0, 2)).await.unwrap();

        let raw = load_latest_raw(&kv, "rig1").await.unwrap().unwrap();
        let stored: DeviceReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.lat, 11.0, "Only the second report should remain");
        assert_eq!(stored.t_ms, 2);
    }

    #[tokio::test]
    async fn test_device_registered_only_once() {
        let kv = MemoryKv::new();
        for i in 0..5 {
            save_latest_and_register(&kv, &report("rig1", i as f64, 0.0, i))
                .await
                .unwrap();
        }

        let registry = load_registry(&kv).await.unwrap();
        assert_eq!(registry.len(), 1, "Repeat ingests must not duplicate the id");
    }

    #[tokio::test]
    async fn test_registry_preserves_insertion_order() {
        let kv = MemoryKv::new();
        for id in ["charlie", "alpha", "bravo"] {
            save_latest_and_register(&kv, &report(id, 0.0, 0.0, 0)).await.unwrap();
        }

        let registry = load_registry(&kv).await.unwrap();
        assert_eq!(registry, vec!["charlie", "alpha", "bravo"]);
    }

    // ============================================================
    // REGISTRY LOADING TESTS
    // ============================================================

    #[tokio::test]
    async fn test_load_registry_absent_is_empty() {
        let kv = MemoryKv::new();
        let registry = load_registry(&kv).await.unwrap();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_load_registry_corrupted_is_empty() {
        let kv = MemoryKv::new();
        kv.put(DEVICES_KEY, "not json at all".to_string()).await.unwrap();

        let registry = load_registry(&kv).await.unwrap();
        assert!(registry.is_empty(), "Corrupted registry should read as empty");
    }

    #[tokio::test]
    async fn test_load_registry_non_array_is_empty() {
        let kv = MemoryKv::new();
        kv.put(DEVICES_KEY, "{\"devices\":[]}".to_string()).await.unwrap();

        let registry = load_registry(&kv).await.unwrap();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_load_latest_raw_absent_is_none() {
        let kv = MemoryKv::new();
        let raw = load_latest_raw(&kv, "ghost").await.unwrap();
        assert!(raw.is_none());
    }

    // ============================================================
    // ROUND-TRIP LAW
    // ============================================================

    #[tokio::test]
    async fn test_report_roundtrips_through_store_unchanged() {
        let kv = MemoryKv::new();
        let original = report("buoy-7", -33.8568, 151.2153, 1_738_339_200_000);
        save_latest_and_register(&kv, &original).await.unwrap();

        let raw = load_latest_raw(&kv, "buoy-7").await.unwrap().unwrap();
        let restored: DeviceReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, original);
    }
}

//! Reference-point registry — the satellites' fixed positions and their latest readings.
//!
//! `AppState` holds an `Arc<dyn SatelliteStore>`; `InMemoryStore` is the only
//! backend today. Writes are last-write-wins per satellite name.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::satellite::Satellite;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("satellite '{0}' not found")]
    NotFound(String),
}

#[async_trait]
pub trait SatelliteStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<Satellite, StoreError>;

    /// Inserts or replaces the satellite with the same name.
    async fn upsert(&self, satellite: Satellite) -> Result<(), StoreError>;

    /// All satellites in registration order.
    async fn list(&self) -> Result<Vec<Satellite>, StoreError>;
}

/// The three stations the service knows about at startup.
pub fn default_satellites() -> Vec<Satellite> {
    vec![
        Satellite::new("kenobi", -500.0, -200.0),
        Satellite::new("skywalker", 100.0, -100.0),
        Satellite::new("sato", 500.0, 100.0),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// InMemoryStore
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store. A `Vec` keeps registration order, which fixes the
/// message priority used when solving from stored readings.
pub struct InMemoryStore {
    satellites: RwLock<Vec<Satellite>>,
}

impl InMemoryStore {
    pub fn new(satellites: Vec<Satellite>) -> Self {
        Self {
            satellites: RwLock::new(satellites),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(default_satellites())
    }
}

#[async_trait]
impl SatelliteStore for InMemoryStore {
    async fn get(&self, name: &str) -> Result<Satellite, StoreError> {
        self.satellites
            .read()
            .await
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn upsert(&self, satellite: Satellite) -> Result<(), StoreError> {
        let mut satellites = self.satellites.write().await;
        match satellites.iter_mut().find(|s| s.name == satellite.name) {
            Some(existing) => *existing = satellite,
            None => satellites.push(satellite),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Satellite>, StoreError> {
        Ok(self.satellites.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_with_default_satellites() {
        let store = InMemoryStore::default();
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["kenobi", "skywalker", "sato"]);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = InMemoryStore::default();
        let err = store.get("vader").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(name) if name == "vader"));
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let store = InMemoryStore::default();
        let updated = store
            .get("skywalker")
            .await
            .unwrap()
            .with_reading(360.0, vec!["es".to_string()]);
        store.upsert(updated).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].name, "skywalker");
        assert_eq!(all[1].reading.as_ref().unwrap().distance, 360.0);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = InMemoryStore::default();
        let sat = store.get("sato").await.unwrap();
        store
            .upsert(sat.clone().with_reading(1.0, vec![]))
            .await
            .unwrap();
        store
            .upsert(sat.with_reading(2.0, vec![]))
            .await
            .unwrap();
        let reading = store.get("sato").await.unwrap().reading.unwrap();
        assert_eq!(reading.distance, 2.0);
    }

    #[tokio::test]
    async fn test_upsert_new_name_appends() {
        let store = InMemoryStore::new(vec![]);
        store
            .upsert(Satellite::new("leia", 0.0, 0.0))
            .await
            .unwrap();
        assert_eq!(store.get("leia").await.unwrap().name, "leia");
    }
}

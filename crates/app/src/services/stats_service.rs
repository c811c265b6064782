//! Stats service: per-collection record counts.

use std::collections::BTreeMap;

use hbnb_domain::error::HbnbError;
use hbnb_domain::kind::Kind;

use crate::ports::Storage;

/// Counts keyed by collection name (`amenities`, `cities`, …).
pub type Counts = BTreeMap<&'static str, u64>;

/// Application service reporting how many records of each kind are stored.
pub struct StatsService<S> {
    storage: S,
}

impl<S: Storage> StatsService<S> {
    /// Create a new service backed by the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Count every kind, including those with no records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the port.
    pub async fn counts(&self) -> Result<Counts, HbnbError> {
        let mut counts = Counts::new();
        for kind in Kind::ALL {
            counts.insert(kind.collection(), self.storage.count(kind).await?);
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_storage::InMemoryStorage;
    use hbnb_domain::amenity::Amenity;
    use hbnb_domain::user::User;

    #[tokio::test]
    async fn should_report_zero_for_every_kind_when_empty() {
        let svc = StatsService::new(InMemoryStorage::new());
        let counts = svc.counts().await.unwrap();
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|count| *count == 0));
    }

    #[tokio::test]
    async fn should_count_stored_records_per_kind() {
        let storage = InMemoryStorage::new();
        for name in ["Wifi", "Pool", "Gym"] {
            storage.insert(Amenity::new(name)).await.unwrap();
        }
        storage.insert(User::new("a@b.c", "pw")).await.unwrap();
        storage.insert(User::new("d@e.f", "pw")).await.unwrap();

        let counts = StatsService::new(storage).counts().await.unwrap();
        assert_eq!(counts["amenities"], 3);
        assert_eq!(counts["users"], 2);
        assert_eq!(counts["places"], 0);
        assert_eq!(counts["reviews"], 0);
    }
}

//! In-process [`Storage`] keeping every record in memory.
//!
//! Records are held in their serialized JSON form, keyed by kind then id,
//! so reads hand out fresh copies and nothing is shared with callers.
//! Cloning the handle shares the underlying map.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use hbnb_domain::error::HbnbError;
use hbnb_domain::kind::Kind;
use hbnb_domain::record::Record;

use crate::ports::Storage;

type Objects = BTreeMap<Kind, BTreeMap<String, Value>>;

/// Volatile storage, lost when the last handle is dropped.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    objects: Arc<RwLock<Objects>>,
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn encode<R: Record>(record: &R) -> Result<Value, HbnbError> {
        serde_json::to_value(record).map_err(|err| HbnbError::Storage(Box::new(err)))
    }

    fn decode<R: Record>(value: &Value) -> Result<R, HbnbError> {
        R::deserialize(value).map_err(|err| HbnbError::Storage(Box::new(err)))
    }

    async fn put<R: Record>(&self, record: R) -> Result<R, HbnbError> {
        let value = Self::encode(&record)?;
        self.objects
            .write()
            .await
            .entry(R::KIND)
            .or_default()
            .insert(record.id().to_string(), value);
        Ok(record)
    }
}

impl Storage for InMemoryStorage {
    fn all<R: Record>(&self) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send {
        async move {
            let objects = self.objects.read().await;
            objects
                .get(&R::KIND)
                .into_iter()
                .flat_map(BTreeMap::values)
                .map(Self::decode)
                .collect()
        }
    }

    fn get<R: Record>(
        &self,
        id: R::Id,
    ) -> impl Future<Output = Result<Option<R>, HbnbError>> + Send {
        async move {
            let objects = self.objects.read().await;
            objects
                .get(&R::KIND)
                .and_then(|by_id| by_id.get(&id.to_string()))
                .map(Self::decode)
                .transpose()
        }
    }

    fn insert<R: Record>(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send {
        self.put(record)
    }

    fn update<R: Record>(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send {
        self.put(record)
    }

    fn delete<R: Record>(&self, id: R::Id) -> impl Future<Output = Result<bool, HbnbError>> + Send {
        async move {
            let mut objects = self.objects.write().await;
            let removed = objects
                .get_mut(&R::KIND)
                .and_then(|by_id| by_id.remove(&id.to_string()));
            Ok(removed.is_some())
        }
    }

    fn exists(&self, kind: Kind, id: &str) -> impl Future<Output = Result<bool, HbnbError>> + Send {
        async move {
            let objects = self.objects.read().await;
            Ok(objects.get(&kind).is_some_and(|by_id| by_id.contains_key(id)))
        }
    }

    fn count(&self, kind: Kind) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        async move {
            let objects = self.objects.read().await;
            let count = objects.get(&kind).map_or(0, BTreeMap::len);
            Ok(u64::try_from(count).unwrap_or(u64::MAX))
        }
    }
}

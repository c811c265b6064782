//! `SQLite` implementation of [`Storage`].
//!
//! Every record kind shares the `objects` table. The record itself is kept
//! as a JSON document in `data`; `created_at` and `updated_at` are copied
//! into their own columns for ordering.

use std::future::Future;

use chrono::SecondsFormat;
use sqlx::SqlitePool;

use hbnb_app::ports::Storage;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::kind::Kind;
use hbnb_domain::record::Record;
use hbnb_domain::time::Timestamp;

use crate::error::StorageError;

const INSERT: &str = r"
    INSERT INTO objects (kind, id, data, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT data FROM objects WHERE kind = ? AND id = ?";
const SELECT_ALL: &str = "SELECT data FROM objects WHERE kind = ? ORDER BY created_at, id";
const UPDATE: &str = "UPDATE objects SET data = ?, updated_at = ? WHERE kind = ? AND id = ?";
const DELETE_BY_ID: &str = "DELETE FROM objects WHERE kind = ? AND id = ?";
const EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM objects WHERE kind = ? AND id = ?)";
const COUNT: &str = "SELECT COUNT(*) FROM objects WHERE kind = ?";

fn column_time(at: Timestamp) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode<R: Record>(data: &str) -> Result<R, StorageError> {
    Ok(serde_json::from_str(data)?)
}

/// `SQLite`-backed storage for every record kind.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Create a new storage using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Storage for SqliteStorage {
    fn all<R: Record>(&self) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<String> = sqlx::query_scalar(SELECT_ALL)
                .bind(R::KIND.class_name())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let records = rows
                .iter()
                .map(|data| decode::<R>(data))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        }
    }

    fn get<R: Record>(
        &self,
        id: R::Id,
    ) -> impl Future<Output = Result<Option<R>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<String> = sqlx::query_scalar(SELECT_BY_ID)
                .bind(R::KIND.class_name())
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.as_deref().map(decode::<R>).transpose()?)
        }
    }

    fn insert<R: Record>(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let data = serde_json::to_string(&record).map_err(StorageError::from)?;
            let stamps = record.timestamps();

            sqlx::query(INSERT)
                .bind(R::KIND.class_name())
                .bind(record.id().to_string())
                .bind(data)
                .bind(column_time(stamps.created_at))
                .bind(column_time(stamps.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn update<R: Record>(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let data = serde_json::to_string(&record).map_err(StorageError::from)?;

            let result = sqlx::query(UPDATE)
                .bind(data)
                .bind(column_time(record.timestamps().updated_at))
                .bind(R::KIND.class_name())
                .bind(record.id().to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::new(R::KIND, record.id().to_string()).into());
            }
            Ok(record)
        }
    }

    fn delete<R: Record>(&self, id: R::Id) -> impl Future<Output = Result<bool, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(R::KIND.class_name())
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn exists(&self, kind: Kind, id: &str) -> impl Future<Output = Result<bool, HbnbError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS)
                .bind(kind.class_name())
                .bind(id)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn count(&self, kind: Kind) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT)
                .bind(kind.class_name())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(count).unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use hbnb_domain::amenity::Amenity;
    use hbnb_domain::id::{CityId, PlaceId, UserId};
    use hbnb_domain::place::Place;
    use hbnb_domain::user::User;

    async fn setup() -> SqliteStorage {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteStorage::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_record_when_valid() {
        let storage = setup().await;
        let amenity = Amenity::new("Wifi");
        let id = amenity.id;

        storage.insert(amenity.clone()).await.unwrap();

        let fetched = storage.get::<Amenity>(id).await.unwrap().unwrap();
        assert_eq!(fetched, amenity);
    }

    #[tokio::test]
    async fn should_return_none_when_record_not_found() {
        let storage = setup().await;
        let result = storage.get::<Place>(PlaceId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_keep_password_in_stored_user() {
        let storage = setup().await;
        let user = User::new("a@b.c", "secret");
        let id = user.id;
        storage.insert(user).await.unwrap();

        let fetched = storage.get::<User>(id).await.unwrap().unwrap();
        assert_eq!(fetched.password, "secret");
    }

    #[tokio::test]
    async fn should_list_only_requested_kind() {
        let storage = setup().await;
        let first = Amenity::new("Wifi");
        let second = Amenity::new("Pool");
        storage.insert(first.clone()).await.unwrap();
        storage.insert(second.clone()).await.unwrap();
        storage.insert(User::new("a@b.c", "pw")).await.unwrap();

        let all = storage.all::<Amenity>().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));
    }

    #[tokio::test]
    async fn should_update_record_when_exists() {
        let storage = setup().await;
        let mut place = Place::builder(CityId::new(), UserId::new())
            .name("Loft")
            .build();
        let id = place.id;
        storage.insert(place.clone()).await.unwrap();

        place.name = "Penthouse".to_string();
        place.amenity_ids = vec!["wifi".to_string()];
        place.touch();
        storage.update(place).await.unwrap();

        let fetched = storage.get::<Place>(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Penthouse");
        assert_eq!(fetched.amenity_ids, ["wifi"]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_record() {
        let storage = setup().await;
        let result = storage.update(Amenity::new("Ghost")).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_record_once() {
        let storage = setup().await;
        let amenity = Amenity::new("Gym");
        let id = amenity.id;
        storage.insert(amenity).await.unwrap();

        assert!(storage.delete::<Amenity>(id).await.unwrap());
        assert!(!storage.delete::<Amenity>(id).await.unwrap());
        assert!(storage.get::<Amenity>(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_check_existence_by_kind_and_text_id() {
        let storage = setup().await;
        let user = User::new("a@b.c", "pw");
        let id = user.id.to_string();
        storage.insert(user).await.unwrap();

        assert!(storage.exists(Kind::User, &id).await.unwrap());
        assert!(!storage.exists(Kind::Place, &id).await.unwrap());
        assert!(!storage.exists(Kind::User, "garbage").await.unwrap());
    }

    #[tokio::test]
    async fn should_count_per_kind() {
        let storage = setup().await;
        for name in ["Wifi", "Pool", "Gym"] {
            storage.insert(Amenity::new(name)).await.unwrap();
        }

        assert_eq!(storage.count(Kind::Amenity).await.unwrap(), 3);
        assert_eq!(storage.count(Kind::Review).await.unwrap(), 0);
    }
}

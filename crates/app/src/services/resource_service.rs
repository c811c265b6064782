//! Resource service: the generic CRUD flow shared by every record type.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::RecordId;
use hbnb_domain::payload::Payload;
use hbnb_domain::record::{Child, Creatable, Patchable, Record};

use crate::ports::Storage;

/// Application service for record CRUD operations.
///
/// Identifiers arrive as text straight from the request path. Text that does
/// not parse as an id is treated as an unknown id.
pub struct ResourceService<S> {
    storage: S,
}

fn parse_id<R: Record>(id: &str) -> Result<R::Id, HbnbError> {
    R::Id::parse(id).ok_or_else(|| NotFoundError::new(R::KIND, id).into())
}

impl<S: Storage> ResourceService<S> {
    /// Create a new service backed by the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// List every record of type `R`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the port.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, HbnbError> {
        self.storage.all::<R>().await
    }

    /// List the records of type `C` whose parent is `parent_id`.
    ///
    /// The parent itself is not looked up: an unknown parent yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the port.
    pub async fn list_children<P, C>(&self, parent_id: &str) -> Result<Vec<C>, HbnbError>
    where
        P: Record,
        C: Child<P>,
    {
        let Some(parent_id) = P::Id::parse(parent_id) else {
            return Ok(Vec::new());
        };
        let children = self.storage.all::<C>().await?;
        Ok(children
            .into_iter()
            .filter(|child| child.parent_id() == parent_id)
            .collect())
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no record with `id` exists,
    /// or a storage error from the port.
    pub async fn get<R: Record>(&self, id: &str) -> Result<R, HbnbError> {
        let parsed = parse_id::<R>(id)?;
        self.storage
            .get::<R>(parsed)
            .await?
            .ok_or_else(|| NotFoundError::new(R::KIND, id).into())
    }

    /// Create a top-level record from a payload.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing or mistyped field,
    /// [`HbnbError::NotFound`] for an unresolved reference, or a storage
    /// error from the port.
    #[tracing::instrument(skip(self, payload), fields(kind = %R::KIND))]
    pub async fn create<R>(&self, payload: &Payload) -> Result<R, HbnbError>
    where
        R: Creatable<Scope = ()>,
    {
        self.insert_new::<R>((), payload).await
    }

    /// Create a record under the parent named in the request path.
    ///
    /// Required fields are checked before the parent id is interpreted.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceService::create`]; a malformed parent id is reported
    /// as [`HbnbError::NotFound`].
    #[tracing::instrument(skip(self, payload), fields(kind = %C::KIND))]
    pub async fn create_in<P, C>(&self, parent_id: &str, payload: &Payload) -> Result<C, HbnbError>
    where
        P: Record,
        C: Creatable<Scope = P::Id> + Child<P>,
    {
        payload.require(C::REQUIRED)?;
        let scope = parse_id::<P>(parent_id)?;
        self.insert_new::<C>(scope, payload).await
    }

    async fn insert_new<R: Creatable>(
        &self,
        scope: R::Scope,
        payload: &Payload,
    ) -> Result<R, HbnbError> {
        payload.require(R::REQUIRED)?;
        for reference in R::references(&scope, payload) {
            if !self.storage.exists(reference.kind, &reference.id).await? {
                return Err(NotFoundError::new(reference.kind, reference.id).into());
            }
        }
        let record = R::create(scope, payload)?;
        tracing::debug!(id = %record.id(), "creating record");
        self.storage.insert(record).await
    }

    /// Apply a payload to a fetched record and persist it.
    ///
    /// Protected fields in the payload are ignored; `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a mistyped field, or a storage
    /// error from the port.
    #[tracing::instrument(skip(self, record, payload), fields(kind = %R::KIND, id = %record.id()))]
    pub async fn update<R: Patchable>(&self, mut record: R, payload: &Payload) -> Result<R, HbnbError> {
        record.patch(payload)?;
        record.touch();
        self.storage.update(record).await
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when nothing is stored under `id`,
    /// or a storage error from the port.
    #[tracing::instrument(skip(self), fields(kind = %R::KIND))]
    pub async fn delete<R: Record>(&self, id: &str) -> Result<(), HbnbError> {
        let parsed = parse_id::<R>(id)?;
        if self.storage.delete::<R>(parsed).await? {
            Ok(())
        } else {
            Err(NotFoundError::new(R::KIND, id).into())
        }
    }
}

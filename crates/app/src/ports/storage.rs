//! Storage port: the gateway through which services reach persisted records.
//!
//! Records are addressed by kind and id. Typed methods are generic over
//! [`Record`]; `exists` and `count` take a [`Kind`] so that callers can ask
//! about a type they only know at runtime (references, stats).

use std::future::Future;

use hbnb_domain::error::HbnbError;
use hbnb_domain::kind::Kind;
use hbnb_domain::record::Record;

/// Persistence for every record kind.
///
/// Each mutating call is durable once its future resolves; there is no
/// separate flush.
pub trait Storage {
    /// All records of type `R`.
    fn all<R: Record>(&self) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send;

    /// The record of type `R` with the given id, if any.
    fn get<R: Record>(
        &self,
        id: R::Id,
    ) -> impl Future<Output = Result<Option<R>, HbnbError>> + Send;

    /// Store a new record.
    fn insert<R: Record>(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send;

    /// Overwrite an existing record.
    fn update<R: Record>(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send;

    /// Remove a record. Resolves to `false` when nothing was stored under `id`.
    fn delete<R: Record>(&self, id: R::Id) -> impl Future<Output = Result<bool, HbnbError>> + Send;

    /// Whether a record of `kind` is stored under the textual `id`.
    fn exists(&self, kind: Kind, id: &str) -> impl Future<Output = Result<bool, HbnbError>> + Send;

    /// Number of stored records of `kind`.
    fn count(&self, kind: Kind) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

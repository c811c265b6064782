//! Record traits: the contract every persisted type fulfils.
//!
//! The generic resource handler is written once against these traits:
//! - [`Record`]: identity, timestamps, kind, flat serialization
//! - [`Creatable`]: declared required fields, references, construction
//! - [`Patchable`]: allow-listed field assignment for updates
//! - [`Child`]: foreign key to a parent used by scoped listings

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::RecordId;
use crate::kind::Kind;
use crate::payload::Payload;
use crate::time::Timestamps;

/// Keys no update may touch, whatever the record type.
pub const BASE_PROTECTED: [&str; 3] = ["id", "created_at", "updated_at"];

/// Key added to serialized records to name their type.
pub const CLASS_KEY: &str = "__class__";

/// A persisted domain record.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Typed identifier.
    type Id: RecordId;

    /// Which of the six record types this is.
    const KIND: Kind;

    fn id(&self) -> Self::Id;

    fn timestamps(&self) -> &Timestamps;

    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Refresh `updated_at` after a mutation.
    fn touch(&mut self) {
        self.timestamps_mut().touch();
    }

    /// Flat key-value representation returned to API clients.
    ///
    /// Holds `id`, the timestamps, every attribute, and [`CLASS_KEY`].
    fn to_dict(&self) -> Map<String, Value> {
        flat_dict(self)
    }
}

/// Serialize `record` to an object and tag it with [`CLASS_KEY`].
pub fn flat_dict<R: Record>(record: &R) -> Map<String, Value> {
    // Records are structs, so they always serialize to an object.
    let mut dict = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    dict.insert(
        CLASS_KEY.to_string(),
        Value::String(R::KIND.class_name().to_string()),
    );
    dict
}

/// Another record that must exist before a new record may be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: Kind,
    pub id: String,
}

impl Reference {
    #[must_use]
    pub fn new(kind: Kind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Records that can be created from a request payload.
///
/// Creation runs in a fixed order: [`Payload::require`] over
/// [`Creatable::REQUIRED`], then an existence check for every
/// [`Creatable::references`] entry, then [`Creatable::create`].
pub trait Creatable: Record {
    /// Parent id taken from the request path, or `()` for top-level records.
    type Scope: Send + Sync;

    /// Required payload fields, in the order they are checked.
    const REQUIRED: &'static [&'static str];

    /// Records that must already exist, in the order they are checked.
    fn references(_scope: &Self::Scope, _payload: &Payload) -> Vec<Reference> {
        Vec::new()
    }

    /// Build a new record with a fresh id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a field has the wrong type.
    fn create(scope: Self::Scope, payload: &Payload) -> Result<Self, ValidationError>;
}

/// Records that accept partial updates.
pub trait Patchable: Record {
    /// Keys silently ignored by [`Patchable::patch`].
    const PROTECTED: &'static [&'static str];

    /// Assign every allow-listed field present in `payload`.
    ///
    /// Protected and unknown keys are ignored. Either every field is applied
    /// or, on error, none is.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when a field has the wrong type.
    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError>;
}

/// Records listed under a parent collection.
pub trait Child<P: Record>: Record {
    fn parent_id(&self) -> P::Id;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared assertions for the per-record test modules.

    use serde_json::{Value, json};

    use super::{BASE_PROTECTED, Patchable, Record};
    use crate::payload::Payload;

    /// Patch `record` with a payload overwriting every protected key and
    /// assert nothing protected moved.
    pub fn assert_protected_fields_ignored<R: Patchable>(record: &R) {
        let before = record.to_dict();
        let mut patched = record.clone();
        let mut hostile = serde_json::Map::new();
        for key in R::PROTECTED {
            hostile.insert((*key).to_string(), json!("tampered"));
        }
        patched
            .patch(&Payload::from_value(Value::Object(hostile)).unwrap())
            .unwrap();
        let after = patched.to_dict();
        for key in R::PROTECTED {
            assert_eq!(before.get(*key), after.get(*key), "{key} changed");
        }
        for key in BASE_PROTECTED {
            assert!(R::PROTECTED.contains(&key), "{key} not protected");
        }
    }
}

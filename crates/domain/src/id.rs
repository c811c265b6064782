//! Typed identifier newtypes backed by UUIDs.
//!
//! Identifiers are generated once, when a record is constructed, and travel
//! as their hyphenated string form everywhere else (paths, payloads, storage).

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Behaviour shared by every typed identifier.
pub trait RecordId:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Parse a textual id, returning `None` for anything that is not a UUID.
    fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl RecordId for $name {}

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for an [`Amenity`](crate::amenity::Amenity).
    AmenityId
);

define_id!(
    /// Unique identifier for a [`City`](crate::city::City).
    CityId
);

define_id!(
    /// Unique identifier for a [`Place`](crate::place::Place).
    PlaceId
);

define_id!(
    /// Unique identifier for a [`Review`](crate::review::Review).
    ReviewId
);

define_id!(
    /// Unique identifier for a [`State`](crate::state::State).
    StateId
);

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = AmenityId::new();
        let b = AmenityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = PlaceId::new();
        let text = id.to_string();
        let parsed: PlaceId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = ReviewId::from_str("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_none_when_parsing_garbage_through_record_id() {
        assert!(<CityId as RecordId>::parse("nope").is_none());
        let id = CityId::new();
        assert_eq!(<CityId as RecordId>::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn should_wrap_existing_uuid_when_using_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let id = StateId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }
}

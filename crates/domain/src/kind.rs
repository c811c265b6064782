//! Record kinds: the closed set of persisted types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discriminates the six persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl Kind {
    /// Every kind, ordered by collection name.
    pub const ALL: [Self; 6] = [
        Self::Amenity,
        Self::City,
        Self::Place,
        Self::Review,
        Self::State,
        Self::User,
    ];

    /// Type name, as written in the `__class__` key of serialized records.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Amenity => "Amenity",
            Self::City => "City",
            Self::Place => "Place",
            Self::Review => "Review",
            Self::State => "State",
            Self::User => "User",
        }
    }

    /// Lower-case plural, used for collection routes and stats keys.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Amenity => "amenities",
            Self::City => "cities",
            Self::Place => "places",
            Self::Review => "reviews",
            Self::State => "states",
            Self::User => "users",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Returned when parsing an unknown class name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.class_name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

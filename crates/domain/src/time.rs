//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Server-controlled creation and modification times carried by every record.
///
/// Flattened into the record on serialization, so the keys appear at the top
/// level next to the type-specific attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Default for Timestamps {
    fn default() -> Self {
        let at = now();
        Self {
            created_at: at,
            updated_at: at,
        }
    }
}

impl Timestamps {
    /// Refresh `updated_at`. Never moves it backwards.
    pub fn touch(&mut self) {
        self.updated_at = now().max(self.updated_at);
    }
}

//! Amenity: a feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::AmenityId;
use crate::kind::Kind;
use crate::payload::Payload;
use crate::record::{Creatable, Patchable, Record};
use crate::time::Timestamps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub name: String,
}

impl Amenity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AmenityId::new(),
            timestamps: Timestamps::default(),
            name: name.into(),
        }
    }
}

impl Record for Amenity {
    type Id = AmenityId;

    const KIND: Kind = Kind::Amenity;

    fn id(&self) -> AmenityId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

impl Creatable for Amenity {
    type Scope = ();

    const REQUIRED: &'static [&'static str] = &["name"];

    fn create((): (), payload: &Payload) -> Result<Self, ValidationError> {
        let name = payload.string("name")?.unwrap_or_default();
        Ok(Self::new(name))
    }
}

impl Patchable for Amenity {
    const PROTECTED: &'static [&'static str] = &["id", "created_at", "updated_at"];

    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(name) = payload.string("name")? {
            self.name = name;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::testing::assert_protected_fields_ignored;
    use serde_json::json;

    #[test]
    fn should_create_from_payload_with_fresh_identity() {
        let payload = Payload::from_value(json!({ "name": "Wifi" })).unwrap();
        let a = Amenity::create((), &payload).unwrap();
        let b = Amenity::create((), &payload).unwrap();
        assert_eq!(a.name, "Wifi");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_serialize_to_flat_dict_with_class() {
        let amenity = Amenity::new("Pool");
        let dict = amenity.to_dict();
        assert_eq!(dict["__class__"], "Amenity");
        assert_eq!(dict["name"], "Pool");
        assert_eq!(dict["id"], amenity.id.to_string());
        assert!(dict["created_at"].is_string());
        assert!(dict["updated_at"].is_string());
    }

    #[test]
    fn should_rename_when_patched() {
        let mut amenity = Amenity::new("Pool");
        let payload = Payload::from_value(json!({ "name": "Hot tub", "extra": 1 })).unwrap();
        amenity.patch(&payload).unwrap();
        assert_eq!(amenity.name, "Hot tub");
    }

    #[test]
    fn should_ignore_protected_fields_when_patched() {
        assert_protected_fields_ignored(&Amenity::new("Pool"));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let amenity = Amenity::new("Kitchen");
        let json = serde_json::to_string(&amenity).unwrap();
        let parsed: Amenity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, amenity);
    }
}

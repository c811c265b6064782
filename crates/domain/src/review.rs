//! Review: a user's text about a [`Place`](crate::place::Place).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{PlaceId, ReviewId, UserId};
use crate::kind::Kind;
use crate::payload::Payload;
use crate::place::Place;
use crate::record::{Child, Creatable, Patchable, Record, Reference};
use crate::time::Timestamps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
}

impl Review {
    #[must_use]
    pub fn new(place_id: PlaceId, user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id: ReviewId::new(),
            timestamps: Timestamps::default(),
            place_id,
            user_id,
            text: text.into(),
        }
    }
}

impl Record for Review {
    type Id = ReviewId;

    const KIND: Kind = Kind::Review;

    fn id(&self) -> ReviewId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

impl Creatable for Review {
    type Scope = PlaceId;

    const REQUIRED: &'static [&'static str] = &["user_id", "text"];

    fn references(place_id: &PlaceId, payload: &Payload) -> Vec<Reference> {
        let mut refs = Vec::with_capacity(2);
        if let Some(user_id) = payload.reference("user_id") {
            refs.push(Reference::new(Kind::User, user_id));
        }
        refs.push(Reference::new(Kind::Place, place_id.to_string()));
        refs
    }

    fn create(place_id: PlaceId, payload: &Payload) -> Result<Self, ValidationError> {
        let user_id = payload
            .reference("user_id")
            .and_then(|text| text.parse::<UserId>().ok())
            .ok_or(ValidationError::Invalid("user_id"))?;
        let text = payload.string("text")?.unwrap_or_default();
        Ok(Self::new(place_id, user_id, text))
    }
}

impl Patchable for Review {
    const PROTECTED: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "user_id",
        "place_id",
    ];

    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(text) = payload.string("text")? {
            self.text = text;
        }
        Ok(())
    }
}

impl Child<Place> for Review {
    fn parent_id(&self) -> PlaceId {
        self.place_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::testing::assert_protected_fields_ignored;
    use serde_json::json;

    #[test]
    fn should_check_user_before_place() {
        let place_id = PlaceId::new();
        let payload = Payload::from_value(json!({ "user_id": "u1", "text": "Nice" })).unwrap();
        let refs = Review::references(&place_id, &payload);
        assert_eq!(
            refs,
            [
                Reference::new(Kind::User, "u1"),
                Reference::new(Kind::Place, place_id.to_string()),
            ]
        );
    }

    #[test]
    fn should_bind_to_place_from_scope() {
        let place_id = PlaceId::new();
        let payload = Payload::from_value(json!({
            "user_id": UserId::new().to_string(),
            "text": "Great stay",
            "place_id": PlaceId::new().to_string(),
        }))
        .unwrap();
        let review = Review::create(place_id, &payload).unwrap();
        assert_eq!(review.place_id, place_id);
        assert_eq!(review.text, "Great stay");
    }

    #[test]
    fn should_ignore_protected_fields_when_patched() {
        let review = Review::new(PlaceId::new(), UserId::new(), "ok");
        assert_protected_fields_ignored(&review);
    }
}

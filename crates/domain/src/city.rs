//! City: belongs to a [`State`](crate::state::State) and hosts places.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{CityId, StateId};
use crate::kind::Kind;
use crate::payload::Payload;
use crate::record::{Child, Creatable, Patchable, Record, Reference};
use crate::state::State;
use crate::time::Timestamps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub state_id: StateId,
    pub name: String,
}

impl City {
    #[must_use]
    pub fn new(state_id: StateId, name: impl Into<String>) -> Self {
        Self {
            id: CityId::new(),
            timestamps: Timestamps::default(),
            state_id,
            name: name.into(),
        }
    }
}

impl Record for City {
    type Id = CityId;

    const KIND: Kind = Kind::City;

    fn id(&self) -> CityId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

impl Creatable for City {
    type Scope = StateId;

    const REQUIRED: &'static [&'static str] = &["name"];

    fn references(state_id: &StateId, _payload: &Payload) -> Vec<Reference> {
        vec![Reference::new(Kind::State, state_id.to_string())]
    }

    fn create(state_id: StateId, payload: &Payload) -> Result<Self, ValidationError> {
        Ok(Self::new(state_id, payload.string("name")?.unwrap_or_default()))
    }
}

impl Patchable for City {
    const PROTECTED: &'static [&'static str] = &["id", "created_at", "updated_at", "state_id"];

    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(name) = payload.string("name")? {
            self.name = name;
        }
        Ok(())
    }
}

impl Child<State> for City {
    fn parent_id(&self) -> StateId {
        self.state_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::testing::assert_protected_fields_ignored;
    use serde_json::json;

    #[test]
    fn should_take_state_from_scope() {
        let state_id = StateId::new();
        let payload = Payload::from_value(json!({
            "name": "San Francisco",
            "state_id": StateId::new().to_string(),
        }))
        .unwrap();
        let city = City::create(state_id, &payload).unwrap();
        assert_eq!(city.state_id, state_id);
        assert_eq!(city.parent_id(), state_id);
    }

    #[test]
    fn should_reference_parent_state() {
        let state_id = StateId::new();
        let refs = City::references(&state_id, &Payload::default());
        assert_eq!(refs, [Reference::new(Kind::State, state_id.to_string())]);
    }

    #[test]
    fn should_ignore_protected_fields_when_patched() {
        assert_protected_fields_ignored(&City::new(StateId::new(), "Reno"));
    }
}

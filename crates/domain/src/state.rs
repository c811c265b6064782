//! State: a top-level administrative region grouping cities.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::StateId;
use crate::kind::Kind;
use crate::payload::Payload;
use crate::record::{Creatable, Patchable, Record};
use crate::time::Timestamps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub name: String,
}

impl State {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StateId::new(),
            timestamps: Timestamps::default(),
            name: name.into(),
        }
    }
}

impl Record for State {
    type Id = StateId;

    const KIND: Kind = Kind::State;

    fn id(&self) -> StateId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

impl Creatable for State {
    type Scope = ();

    const REQUIRED: &'static [&'static str] = &["name"];

    fn create((): (), payload: &Payload) -> Result<Self, ValidationError> {
        Ok(Self::new(payload.string("name")?.unwrap_or_default()))
    }
}

impl Patchable for State {
    const PROTECTED: &'static [&'static str] = &["id", "created_at", "updated_at"];

    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(name) = payload.string("name")? {
            self.name = name;
        }
        Ok(())
    }
}

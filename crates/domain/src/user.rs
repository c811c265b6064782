//! User: an account owning places and writing reviews.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::UserId;
use crate::kind::Kind;
use crate::payload::Payload;
use crate::record::{Creatable, Patchable, Record, flat_dict};
use crate::time::Timestamps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            timestamps: Timestamps::default(),
            email: email.into(),
            password: password.into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

impl Record for User {
    type Id = UserId;

    const KIND: Kind = Kind::User;

    fn id(&self) -> UserId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    /// Same as the default, minus the password.
    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = flat_dict(self);
        dict.remove("password");
        dict
    }
}

impl Creatable for User {
    type Scope = ();

    const REQUIRED: &'static [&'static str] = &["email", "password"];

    fn create((): (), payload: &Payload) -> Result<Self, ValidationError> {
        let email = payload.string("email")?.unwrap_or_default();
        let password = payload.string("password")?.unwrap_or_default();
        let first_name = payload.string("first_name")?.unwrap_or_default();
        let last_name = payload.string("last_name")?.unwrap_or_default();

        Ok(Self {
            first_name,
            last_name,
            ..Self::new(email, password)
        })
    }
}

impl Patchable for User {
    const PROTECTED: &'static [&'static str] = &["id", "created_at", "updated_at", "email"];

    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        let password = payload.string("password")?;
        let first_name = payload.string("first_name")?;
        let last_name = payload.string("last_name")?;

        if let Some(password) = password {
            self.password = password;
        }
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
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
    fn should_hide_password_from_dict() {
        let user = User::new("a@b.c", "secret");
        let dict = user.to_dict();
        assert!(!dict.contains_key("password"));
        assert_eq!(dict["email"], "a@b.c");
        assert_eq!(dict["__class__"], "User");
    }

    #[test]
    fn should_keep_password_in_storage_form() {
        let user = User::new("a@b.c", "secret");
        let stored = serde_json::to_value(&user).unwrap();
        assert_eq!(stored["password"], "secret");
    }

    #[test]
    fn should_default_names_to_empty() {
        let payload = Payload::from_value(json!({ "email": "a@b.c", "password": "pw" })).unwrap();
        let user = User::create((), &payload).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn should_apply_names_when_patched() {
        let mut user = User::new("a@b.c", "pw");
        let payload = Payload::from_value(json!({
            "first_name": "Betty",
            "last_name": "Holberton",
            "email": "other@b.c",
        }))
        .unwrap();
        user.patch(&payload).unwrap();
        assert_eq!(user.first_name, "Betty");
        assert_eq!(user.last_name, "Holberton");
        assert_eq!(user.email, "a@b.c");
    }

    #[test]
    fn should_ignore_protected_fields_when_patched() {
        assert_protected_fields_ignored(&User::new("a@b.c", "pw"));
    }
}

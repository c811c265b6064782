//! Request payload: a JSON object submitted to a create or update operation.
//!
//! Handlers hand the raw body to [`Payload::from_slice`]; records then pull
//! typed values out of it field by field. Nothing here knows which fields a
//! record accepts: that is declared by each record type.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A parsed JSON object body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Parse a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAJson`] when the bytes are not valid JSON
    /// or decode to anything other than an object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|_| ValidationError::NotAJson)?;
        Self::from_value(value)
    }

    /// Wrap an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAJson`] unless `value` is an object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ValidationError::NotAJson),
        }
    }

    /// Whether `field` is present, whatever its value.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Required fields absent from the payload, in declaration order.
    #[must_use]
    pub fn missing(&self, required: &[&'static str]) -> Vec<&'static str> {
        required
            .iter()
            .copied()
            .filter(|field| !self.contains(field))
            .collect()
    }

    /// Check a declared list of required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] naming the first absent field.
    pub fn require(&self, required: &[&'static str]) -> Result<(), ValidationError> {
        match self.missing(required).first().copied() {
            Some(field) => Err(ValidationError::Missing(field)),
            None => Ok(()),
        }
    }

    /// Read a string field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when the value is not a string.
    pub fn string(&self, field: &'static str) -> Result<Option<String>, ValidationError> {
        self.typed(field, |value| value.as_str().map(str::to_string))
    }

    /// Read an integer field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when the value is not an integer.
    pub fn integer(&self, field: &'static str) -> Result<Option<i64>, ValidationError> {
        self.typed(field, Value::as_i64)
    }

    /// Read a numeric field; integers are widened.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when the value is not a number.
    pub fn number(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        self.typed(field, Value::as_f64)
    }

    /// Read an array-of-strings field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when the value is not an array or
    /// any element is not a string.
    pub fn strings(&self, field: &'static str) -> Result<Option<Vec<String>>, ValidationError> {
        self.typed(field, |value| {
            value
                .as_array()?
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect()
        })
    }

    /// Textual form of a field used as a reference to another record.
    ///
    /// Strings are returned as-is; any other JSON value is rendered, so a
    /// non-string reference simply fails to resolve.
    #[must_use]
    pub fn reference(&self, field: &str) -> Option<String> {
        self.0.get(field).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    fn typed<T>(
        &self,
        field: &'static str,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<Option<T>, ValidationError> {
        self.0
            .get(field)
            .map(|value| extract(value).ok_or(ValidationError::Invalid(field)))
            .transpose()
    }
}

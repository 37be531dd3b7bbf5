//! Field Validation
//!
//! Validation in this workspace is explicit: each request has a plain input
//! struct and a pure function that inspects every field and records every
//! violated rule in a [`FieldErrors`] collection. Nothing short-circuits, so
//! the client always receives the complete list.
//!
//! The message helpers produce the wording the front end already displays.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Field name → human-readable messages, serialized as a JSON object.
///
/// ## Examples
/// ```rust
/// use kernel::validation::{FieldErrors, messages};
///
/// let mut errors = FieldErrors::new();
/// errors.add("title", messages::required("title"));
/// assert!(errors.has("title"));
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field (a field may collect several)
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// A request member that should hold a JSON string
///
/// Any other JSON type still deserializes (as `NotText`) so the validator can
/// report it next to the other fields instead of failing the whole body.
/// `null` is handled by the surrounding `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Text(String),
    NotText,
}

impl TextInput {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextInput::Text(s) => Some(s),
            TextInput::NotText => None,
        }
    }

    /// Read an optional member, recording the `string` message for non-text
    ///
    /// The outer `None` means the member was rejected and its message is
    /// already recorded; `Some(None)` means it was absent.
    pub fn check<'a>(
        value: Option<&'a TextInput>,
        field: &str,
        errors: &mut FieldErrors,
    ) -> Option<Option<&'a str>> {
        match value {
            None => Some(None),
            Some(TextInput::Text(s)) => Some(Some(s)),
            Some(TextInput::NotText) => {
                errors.add(field, messages::string(field));
                None
            }
        }
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        TextInput::Text(value.to_string())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        TextInput::Text(value)
    }
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(s) => TextInput::Text(s),
            Wire::Other(_) => TextInput::NotText,
        })
    }
}

/// Message templates
pub mod messages {
    pub fn required(field: &str) -> String {
        format!("The {field} field is required.")
    }

    pub fn string(field: &str) -> String {
        format!("The {field} field must be a string.")
    }

    pub fn max_chars(field: &str, max: usize) -> String {
        format!("The {field} field must not be greater than {max} characters.")
    }

    pub fn min_chars(field: &str, min: usize) -> String {
        format!("The {field} field must be at least {min} characters.")
    }

    pub fn email(field: &str) -> String {
        format!("The {field} field must be a valid email address.")
    }

    pub fn confirmed(field: &str) -> String {
        format!("The {field} field confirmation does not match.")
    }

    pub fn taken(field: &str) -> String {
        format!("The {field} has already been taken.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", messages::required("name"));
        errors.add("title", messages::max_chars("title", 255));

        assert!(errors.has("name"));
        assert!(errors.has("title"));
        assert!(!errors.has("content"));
        assert_eq!(
            errors.get("title"),
            Some(&["The title field must not be greater than 255 characters.".to_string()][..])
        );
    }

    #[test]
    fn test_serializes_as_object_of_arrays() {
        let mut errors = FieldErrors::new();
        errors.add("password", messages::min_chars("password", 8));
        errors.add("password", messages::confirmed("password"));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "password": [
                    "The password field must be at least 8 characters.",
                    "The password field confirmation does not match."
                ]
            })
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("email", messages::email("email"));
        let err = errors.into_result().unwrap_err();
        assert_eq!(
            err.get("email"),
            Some(&["The email field must be a valid email address.".to_string()][..])
        );
    }

    #[derive(Debug, Deserialize)]
    struct Body {
        title: Option<TextInput>,
        content: Option<TextInput>,
    }

    #[test]
    fn test_text_input_accepts_any_json_type() {
        let body: Body = serde_json::from_str(r#"{"title": 123, "content": "x"}"#).unwrap();
        assert_eq!(body.title, Some(TextInput::NotText));
        assert_eq!(body.content, Some(TextInput::Text("x".to_string())));

        let body: Body = serde_json::from_str(r#"{"title": [1], "content": null}"#).unwrap();
        assert_eq!(body.title, Some(TextInput::NotText));
        assert_eq!(body.content, None);
    }

    #[test]
    fn test_text_input_check_records_string_message() {
        let mut errors = FieldErrors::new();
        let not_text = TextInput::NotText;
        let text = TextInput::from("hello");

        assert_eq!(TextInput::check(Some(&not_text), "title", &mut errors), None);
        assert_eq!(TextInput::check(Some(&text), "content", &mut errors), Some(Some("hello")));
        assert_eq!(TextInput::check(None, "name", &mut errors), Some(None));
        assert_eq!(
            errors.get("title"),
            Some(&["The title field must be a string.".to_string()][..])
        );
        assert!(!errors.has("content"));
    }
}

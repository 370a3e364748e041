use crate::models::{FilterField, FilterOptions, FilterSelection};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation messages, keyed by form field name
///
/// This is the only error kind the form core produces. At most one message is
/// kept per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", summarize(.errors))]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field; the first message for a field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.errors
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A selection whose every non-empty field passed its allow-list check
///
/// Only `validate` constructs one, so holding a `ValidSelection` is proof the
/// selection may be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSelection(FilterSelection);

impl ValidSelection {
    pub fn selection(&self) -> &FilterSelection {
        &self.0
    }

    pub fn into_inner(self) -> FilterSelection {
        self.0
    }
}

/// Message for a value outside its allow-list
pub fn not_allowed_message(field: FilterField, allowed: &[&str]) -> String {
    if allowed.is_empty() {
        format!("{} has no allowed values", field)
    } else {
        format!("{} must be one of the following values: {}", field, allowed.join(", "))
    }
}

/// Check every non-empty field of `selection` against its allow-list
///
/// Empty fields always pass. Gender and relationship status are checked
/// against the fixed sets; the rest against `options`, where an empty list
/// rejects every non-empty value.
pub fn validate(
    selection: &FilterSelection,
    options: &FilterOptions,
) -> Result<ValidSelection, FieldErrors> {
    let mut errors = FieldErrors::new();

    for (field, value) in selection.active_fields() {
        if !options.is_allowed(field, value) {
            errors.add(field.as_str(), not_allowed_message(field, &options.allowed(field)));
        }
    }

    errors.into_result()?;
    Ok(ValidSelection(selection.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FilterOptions {
        FilterOptions::new(
            vec!["Paris".to_string(), "London".to_string()],
            vec!["Acme".to_string()],
            vec!["MIT".to_string()],
        )
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let valid = validate(&FilterSelection::default(), &options()).unwrap();
        assert!(valid.selection().is_empty());
    }

    #[test]
    fn test_members_pass() {
        let selection = FilterSelection {
            hometown: Some("Paris".to_string()),
            work: Some("Acme".to_string()),
            education: Some("MIT".to_string()),
            gender: Some("Female".to_string()),
            relationship_status: Some("Single".to_string()),
        };

        let valid = validate(&selection, &options()).unwrap();
        assert_eq!(valid.into_inner(), selection);
    }

    #[test]
    fn test_only_offending_field_reported() {
        let selection = FilterSelection {
            hometown: Some("Atlantis".to_string()),
            gender: Some("Male".to_string()),
            ..Default::default()
        };

        let errors = validate(&selection, &options()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("hometown"),
            Some("hometown must be one of the following values: Paris, London")
        );
    }

    #[test]
    fn test_empty_allow_list_rejects_everything() {
        let selection = FilterSelection {
            work: Some("Acme".to_string()),
            ..Default::default()
        };

        let errors = validate(&selection, &FilterOptions::default()).unwrap_err();
        assert_eq!(errors.get("work"), Some("work has no allowed values"));
    }

    #[test]
    fn test_fixed_sets_are_case_sensitive() {
        let selection = FilterSelection {
            gender: Some("male".to_string()),
            relationship_status: Some("It's complicated".to_string()),
            ..Default::default()
        };

        let errors = validate(&selection, &options()).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["gender", "relationship_status"]);
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("new_password", "Required");
        errors.add("new_password", "too short");
        assert_eq!(errors.get("new_password"), Some("Required"));
        assert_eq!(errors.to_string(), "new_password: Required");
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.add("work", "work has no allowed values");
        errors.add("gender", "gender must be one of the following values: Male, Female, Others");

        let err: &dyn std::error::Error = &errors;
        assert_eq!(
            err.to_string(),
            "gender: gender must be one of the following values: Male, Female, Others; work: work has no allowed values"
        );
    }
}

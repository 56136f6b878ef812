//! Dropdown field validation

use std::collections::HashSet;

use crate::error::{font_size_error, FieldError};
use crate::meta::DropdownFieldMeta;

/// Validate a dropdown field against its configuration.
///
/// `font_size` arrives separately because the signing surface resolves it
/// outside the stored metadata. An empty default value is treated as no
/// default.
pub fn validate_dropdown_field(
    value: Option<&str>,
    meta: &DropdownFieldMeta,
    is_signing_page: bool,
    font_size: Option<f32>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let default_value = meta
        .default_value
        .as_deref()
        .filter(|default| !default.is_empty());

    if meta.read_only && meta.required {
        errors.push(FieldError::ReadOnlyRequired);
    }

    if meta.read_only && meta.values.is_empty() {
        errors.push(FieldError::ReadOnlyNoValue);
    }

    if is_signing_page && meta.required && value.map_or(true, str::is_empty) {
        errors.push(FieldError::SelectionRequired);
    }

    if meta.values.is_empty() {
        errors.push(FieldError::NoOptions);
    }

    if meta.values.is_empty() {
        if let Some(default) = default_value {
            errors.push(FieldError::UnknownDefaultValue {
                value: default.to_string(),
            });
        }
    }

    if let Some(selected) = value {
        if !selected.is_empty()
            && !meta.values.iter().any(|option| option.value == selected)
        {
            errors.push(FieldError::UnknownSelectedValue {
                value: selected.to_string(),
            });
        }
    }

    if let Some(default) = default_value {
        if !meta.values.iter().any(|option| option.value == default) {
            errors.push(FieldError::UnknownDefaultValue {
                value: default.to_string(),
            });
        }
    }

    if meta.values.iter().any(|option| option.value.is_empty()) {
        errors.push(FieldError::EmptyOptionValue);
    }

    let distinct: HashSet<&str> = meta
        .values
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    if distinct.len() != meta.values.len() {
        errors.push(FieldError::DuplicateOptionValues);
    }

    errors.extend(font_size_error(font_size));

    errors
}

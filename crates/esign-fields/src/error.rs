//! Structured validation errors
//!
//! Every error is a language-neutral kind plus named parameters; the
//! serialized form is `{"kind": ..., ...params}` so callers can localize
//! without parsing English text. The `Display` impl carries the canonical
//! English message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::meta::CheckboxValidationRule;
use crate::number_format::NumberFormat;

/// Whether an error concerns the author configuring a field or a signer
/// filling it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorClass {
    /// Contradictory or incomplete field configuration
    Authoring,
    /// A signer-entered value violates the configuration
    Signing,
}

/// A single validation rule violation.
///
/// Validators return zero or more of these; an empty list means valid.
#[derive(Error, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldError {
    #[error("Value is required")]
    Required,

    #[error("Value length ({length}) exceeds the character limit ({limit})")]
    CharacterLimitExceeded { length: usize, limit: u32 },

    #[error("A read-only field must have text")]
    ReadOnlyEmpty,

    #[error("A field cannot be both read-only and required")]
    ReadOnlyRequired,

    #[error("Font size must be between 8 and 96")]
    FontSizeOutOfRange { font_size: f32 },

    #[error("Value {value} does not match the number format - {format}")]
    FormatMismatch { value: String, format: NumberFormat },

    #[error("Value {value} is not a valid number")]
    NotANumber { value: String },

    #[error("Value {value} is less than the minimum value of {min_value}")]
    BelowMinimum { value: String, min_value: f64 },

    #[error("Value {value} is greater than the maximum value of {max_value}")]
    AboveMaximum { value: String, max_value: f64 },

    #[error("Minimum value cannot be greater than maximum value")]
    MinExceedsMax { min_value: f64, max_value: f64 },

    #[error("A read-only field must have a value greater than 0")]
    ReadOnlyNotPositive,

    #[error("At least one option must be added")]
    NoOptions,

    #[error("A read-only field must have at least one value")]
    ReadOnlyNoValue,

    #[error("Choosing an option is required")]
    SelectionRequired,

    #[error("You need to specify the number of options for validation")]
    MissingValidationLength,

    #[error("You need to specify the validation rule")]
    MissingValidationRule,

    #[error("You need to {} {length} options", .rule.phrase())]
    SelectionCountSigning { rule: CheckboxValidationRule, length: u32 },

    #[error("You need to {} at least {length} options", authoring_verb(.rule))]
    SelectionCountAuthoring { rule: CheckboxValidationRule, length: u32 },

    #[error("There cannot be more than one checked option")]
    MultipleCheckedOptions,

    #[error("Selected value must be one of the available options")]
    UnknownSelectedValue { value: String },

    #[error("Default value must be one of the available options")]
    UnknownDefaultValue { value: String },

    #[error("Option value cannot be empty")]
    EmptyOptionValue,

    #[error("Duplicate values are not allowed")]
    DuplicateOptionValues,
}

fn authoring_verb(rule: &CheckboxValidationRule) -> &'static str {
    match rule {
        CheckboxValidationRule::SelectAtMost => "select",
        _ => "add",
    }
}

impl FieldError {
    /// Classify the error per the authoring/signing taxonomy.
    pub fn class(&self) -> ErrorClass {
        match self {
            FieldError::Required
            | FieldError::CharacterLimitExceeded { .. }
            | FieldError::FormatMismatch { .. }
            | FieldError::NotANumber { .. }
            | FieldError::BelowMinimum { .. }
            | FieldError::AboveMaximum { .. }
            | FieldError::SelectionRequired
            | FieldError::SelectionCountSigning { .. }
            | FieldError::UnknownSelectedValue { .. } => ErrorClass::Signing,
            _ => ErrorClass::Authoring,
        }
    }
}

/// Shared font-size range rule. A missing or zero size is not checked.
pub(crate) fn font_size_error(font_size: Option<f32>) -> Option<FieldError> {
    let size = font_size?;
    if size != 0.0 && (size < 8.0 || size > 96.0) {
        return Some(FieldError::FontSizeOutOfRange { font_size: size });
    }
    None
}

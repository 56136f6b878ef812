//! Text field validation

use crate::error::{font_size_error, FieldError};
use crate::meta::TextFieldMeta;

/// Validate a text field value against its configuration.
///
/// Every rule is evaluated; violations accumulate in documented order
/// rather than short-circuiting.
pub fn validate_text_field(
    value: &str,
    meta: &TextFieldMeta,
    is_signing_page: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if meta.required && value.is_empty() && is_signing_page {
        errors.push(FieldError::Required);
    }

    let length = value.chars().count();

    if let Some(limit) = meta.character_limit {
        if limit > 0 && length > limit as usize {
            errors.push(FieldError::CharacterLimitExceeded { length, limit });
        }
    }

    if meta.read_only && length < 1 {
        errors.push(FieldError::ReadOnlyEmpty);
    }

    if meta.read_only && meta.required {
        errors.push(FieldError::ReadOnlyRequired);
    }

    errors.extend(font_size_error(meta.font_size));

    errors
}

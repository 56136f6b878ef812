//! Number field validation

use crate::error::{font_size_error, FieldError};
use crate::meta::NumberFieldMeta;
use crate::number_format::{is_number_like, leading_number};

/// Validate a number field value against its configuration.
///
/// Range checks use the leading numeric prefix of the value; a value with
/// no parseable prefix skips them entirely.
pub fn validate_number_field(
    value: &str,
    meta: &NumberFieldMeta,
    is_signing_page: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(format) = meta.number_format {
        if !format.matches(value) {
            errors.push(FieldError::FormatMismatch {
                value: value.to_string(),
                format,
            });
        }
    }

    let parsed = leading_number(value);

    if is_signing_page && meta.required && value.is_empty() {
        errors.push(FieldError::Required);
    }

    if !is_number_like(value) {
        errors.push(FieldError::NotANumber {
            value: value.to_string(),
        });
    }

    if let (Some(min), Some(number)) = (meta.min_value, parsed) {
        if min > 0.0 && number < min {
            errors.push(FieldError::BelowMinimum {
                value: value.to_string(),
                min_value: min,
            });
        }
    }

    if let (Some(max), Some(number)) = (meta.max_value, parsed) {
        if max > 0.0 && number > max {
            errors.push(FieldError::AboveMaximum {
                value: value.to_string(),
                max_value: max,
            });
        }
    }

    if let (Some(min), Some(max)) = (meta.min_value, meta.max_value) {
        if min > max {
            errors.push(FieldError::MinExceedsMax {
                min_value: min,
                max_value: max,
            });
        }
    }

    if meta.read_only {
        if let Some(number) = parsed {
            if number < 1.0 {
                errors.push(FieldError::ReadOnlyNotPositive);
            }
        }
    }

    if meta.read_only && meta.required {
        errors.push(FieldError::ReadOnlyRequired);
    }

    errors.extend(font_size_error(meta.font_size));

    errors
}

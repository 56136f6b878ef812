//! Validation for date, email, initials and name fields
//!
//! These types carry no type-specific configuration; the shared entry
//! point exists so every field type validates through the same seam.

use crate::error::{font_size_error, FieldError};
use crate::meta::SimpleFieldMeta;

/// Validate a simple field's configuration.
pub fn validate_simple_field(meta: &SimpleFieldMeta) -> Vec<FieldError> {
    font_size_error(meta.font_size).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_is_the_only_rule() {
        let meta = SimpleFieldMeta {
            font_size: Some(12.0),
            read_only: true,
            required: true,
        };
        assert!(validate_simple_field(&meta).is_empty());
    }

    #[test]
    fn test_font_size_out_of_range() {
        let meta = SimpleFieldMeta {
            font_size: Some(4.0),
            ..Default::default()
        };
        assert_eq!(
            validate_simple_field(&meta),
            vec![FieldError::FontSizeOutOfRange { font_size: 4.0 }]
        );
    }
}

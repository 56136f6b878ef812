//! Radio field validation

use crate::error::FieldError;
use crate::meta::RadioFieldMeta;

/// Validate a radio group against its configuration.
///
/// `value` is the option the signer picked, if any. Configuration checks
/// also enforce that the default state is unambiguous: at most one option
/// may be pre-checked.
pub fn validate_radio_field(
    value: Option<&str>,
    meta: &RadioFieldMeta,
    is_signing_page: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

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

    let checked = meta.values.iter().filter(|option| option.checked).count();
    if checked > 1 {
        errors.push(FieldError::MultipleCheckedOptions);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::RadioOption;

    fn options(values: &[(&str, bool)]) -> Vec<RadioOption> {
        values
            .iter()
            .enumerate()
            .map(|(index, (value, checked))| RadioOption {
                id: Some(index as u32),
                value: value.to_string(),
                checked: *checked,
            })
            .collect()
    }

    #[test]
    fn test_multiple_checked_options() {
        let meta = RadioFieldMeta {
            values: options(&[("a", true), ("b", true)]),
            ..Default::default()
        };

        let errors = validate_radio_field(None, &meta, false);
        assert_eq!(errors, vec![FieldError::MultipleCheckedOptions]);
    }

    #[test]
    fn test_single_checked_option_is_fine() {
        let meta = RadioFieldMeta {
            values: options(&[("a", true), ("b", false)]),
            ..Default::default()
        };

        assert!(validate_radio_field(None, &meta, false).is_empty());
    }

    #[test]
    fn test_no_options() {
        let errors = validate_radio_field(None, &RadioFieldMeta::default(), false);
        assert_eq!(errors, vec![FieldError::NoOptions]);
    }

    #[test]
    fn test_read_only_without_options() {
        let meta = RadioFieldMeta {
            read_only: true,
            ..Default::default()
        };

        let errors = validate_radio_field(None, &meta, false);
        assert_eq!(errors, vec![FieldError::ReadOnlyNoValue, FieldError::NoOptions]);
    }

    #[test]
    fn test_selection_required_when_signing() {
        let meta = RadioFieldMeta {
            required: true,
            values: options(&[("a", false), ("b", false)]),
            ..Default::default()
        };

        assert_eq!(
            validate_radio_field(None, &meta, true),
            vec![FieldError::SelectionRequired]
        );
        assert_eq!(
            validate_radio_field(Some(""), &meta, true),
            vec![FieldError::SelectionRequired]
        );
        assert!(validate_radio_field(Some("a"), &meta, true).is_empty());
        assert!(validate_radio_field(None, &meta, false).is_empty());
    }

    #[test]
    fn test_read_only_and_required_conflict() {
        let meta = RadioFieldMeta {
            read_only: true,
            required: true,
            values: options(&[("a", false)]),
            ..Default::default()
        };

        assert_eq!(
            validate_radio_field(Some("a"), &meta, false),
            vec![FieldError::ReadOnlyRequired]
        );
    }
}

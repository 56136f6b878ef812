//! OpenESign Fields - Field-validation rule engine
//!
//! Pure rule tables for every configurable field type on a document or
//! template. Each validator takes the current value(s), the field's
//! metadata and a flag distinguishing the signing page from the authoring
//! surface, and returns zero or more structured errors:
//! - `text`: free-form text with optional character limit
//! - `number`: numeric values with format grammars and bounds
//! - `checkbox`: selection-count rules over a checkbox group
//! - `radio`: single choice with unambiguous default state
//! - `dropdown`: option-list integrity and membership
//! - `simple`: date/email/initials/name, font size only
//!
//! Validators never panic, never perform I/O and never short-circuit:
//! every violated rule is reported in one pass. Localization is the
//! caller's concern; errors serialize as a kind plus named parameters.

pub mod checkbox;
pub mod dropdown;
pub mod error;
pub mod meta;
pub mod number;
pub mod number_format;
pub mod radio;
pub mod simple;
pub mod text;

pub use checkbox::validate_checkbox_field;
pub use dropdown::validate_dropdown_field;
pub use error::{ErrorClass, FieldError};
pub use meta::{
    CheckboxFieldMeta, CheckboxOption, CheckboxValidationRule, DropdownFieldMeta, DropdownOption,
    FieldMeta, NumberFieldMeta, RadioFieldMeta, RadioOption, SimpleFieldMeta, TextFieldMeta,
};
pub use number::validate_number_field;
pub use number_format::NumberFormat;
pub use radio::validate_radio_field;
pub use simple::validate_simple_field;
pub use text::validate_text_field;

/// Value a signer has entered for a field, in whatever shape the field
/// type produces.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Nothing entered yet
    None,
    /// A single value (text, number, radio, dropdown)
    Single(String),
    /// Multiple selected values (checkbox)
    Multi(Vec<String>),
}

impl FieldValue {
    /// The value as a single string, if it has that shape.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FieldValue::Single(value) => Some(value),
            _ => None,
        }
    }

    /// The value as a list of selections, if it has that shape.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            FieldValue::Multi(values) => Some(values),
            _ => None,
        }
    }
}

/// Validate a field by dispatching on its metadata variant.
///
/// A value of the wrong shape for the field type degrades to empty; the
/// per-type functions remain the precise contract.
pub fn validate_field(
    meta: &FieldMeta,
    value: &FieldValue,
    is_signing_page: bool,
) -> Vec<FieldError> {
    let errors = match meta {
        FieldMeta::Text(text) => {
            validate_text_field(value.as_single().unwrap_or(""), text, is_signing_page)
        }
        FieldMeta::Number(number) => {
            validate_number_field(value.as_single().unwrap_or(""), number, is_signing_page)
        }
        FieldMeta::Checkbox(checkbox) => {
            validate_checkbox_field(value.as_multi().unwrap_or(&[]), checkbox, is_signing_page)
        }
        FieldMeta::Radio(radio) => validate_radio_field(value.as_single(), radio, is_signing_page),
        FieldMeta::Dropdown(dropdown) => {
            validate_dropdown_field(value.as_single(), dropdown, is_signing_page, None)
        }
        FieldMeta::Date(simple)
        | FieldMeta::Email(simple)
        | FieldMeta::Initials(simple)
        | FieldMeta::Name(simple) => validate_simple_field(simple),
    };

    tracing::trace!(
        field_type = ?meta.field_type(),
        errors = errors.len(),
        "validated field"
    );

    errors
}

//! Field metadata records
//!
//! One record per configurable field type, owned by the document and
//! template editors. Validation treats metadata as immutable input.

use esign_common::FieldType;
use serde::{Deserialize, Serialize};

use crate::number_format::NumberFormat;

/// Metadata for a free-form text field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldMeta {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    /// Pre-filled text for read-only fields
    pub text: Option<String>,
    pub character_limit: Option<u32>,
    pub font_size: Option<f32>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub required: bool,
}

/// Metadata for a numeric field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFieldMeta {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    /// Pre-filled value for read-only fields
    pub value: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub number_format: Option<NumberFormat>,
    pub font_size: Option<f32>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub required: bool,
}

/// A single checkbox option as configured by the author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxOption {
    pub id: Option<u32>,
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

/// Comparison operator an author can attach to a checkbox group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckboxValidationRule {
    #[serde(rename = "Select at least")]
    SelectAtLeast,
    #[serde(rename = "Select at most")]
    SelectAtMost,
    #[serde(rename = "Select exactly")]
    SelectExactly,
}

impl CheckboxValidationRule {
    /// Comparison sign for the rule.
    pub fn sign(&self) -> &'static str {
        match self {
            CheckboxValidationRule::SelectAtLeast => ">=",
            CheckboxValidationRule::SelectAtMost => "<=",
            CheckboxValidationRule::SelectExactly => "=",
        }
    }

    /// Lowercase phrasing used in signer-facing messages.
    pub fn phrase(&self) -> &'static str {
        match self {
            CheckboxValidationRule::SelectAtLeast => "select at least",
            CheckboxValidationRule::SelectAtMost => "select at most",
            CheckboxValidationRule::SelectExactly => "select exactly",
        }
    }
}

/// Metadata for a checkbox group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxFieldMeta {
    #[serde(default)]
    pub values: Vec<CheckboxOption>,
    pub validation_rule: Option<CheckboxValidationRule>,
    pub validation_length: Option<u32>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub required: bool,
}

/// A single radio option as configured by the author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioOption {
    pub id: Option<u32>,
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

/// Metadata for a radio group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioFieldMeta {
    #[serde(default)]
    pub values: Vec<RadioOption>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub required: bool,
}

/// A single dropdown option.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownOption {
    pub value: String,
}

/// Metadata for a dropdown field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownFieldMeta {
    #[serde(default)]
    pub values: Vec<DropdownOption>,
    pub default_value: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub required: bool,
}

/// Metadata for field types that carry no type-specific configuration
/// (date, email, initials, name).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFieldMeta {
    pub font_size: Option<f32>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub required: bool,
}

/// Field metadata, discriminated by field type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldMeta {
    Text(TextFieldMeta),
    Number(NumberFieldMeta),
    Checkbox(CheckboxFieldMeta),
    Radio(RadioFieldMeta),
    Dropdown(DropdownFieldMeta),
    Date(SimpleFieldMeta),
    Email(SimpleFieldMeta),
    Initials(SimpleFieldMeta),
    Name(SimpleFieldMeta),
}

impl FieldMeta {
    /// The field type this metadata belongs to.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldMeta::Text(_) => FieldType::Text,
            FieldMeta::Number(_) => FieldType::Number,
            FieldMeta::Checkbox(_) => FieldType::Checkbox,
            FieldMeta::Radio(_) => FieldType::Radio,
            FieldMeta::Dropdown(_) => FieldType::Dropdown,
            FieldMeta::Date(_) => FieldType::Date,
            FieldMeta::Email(_) => FieldType::Email,
            FieldMeta::Initials(_) => FieldType::Initials,
            FieldMeta::Name(_) => FieldType::Name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wire_format() {
        let meta = FieldMeta::Checkbox(CheckboxFieldMeta {
            values: vec![CheckboxOption {
                id: Some(1),
                value: "Option A".into(),
                checked: false,
            }],
            validation_rule: Some(CheckboxValidationRule::SelectAtLeast),
            validation_length: Some(2),
            read_only: false,
            required: true,
        });

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["type"], "checkbox");
        assert_eq!(json["validationRule"], "Select at least");
        assert_eq!(json["validationLength"], 2);

        let back: FieldMeta = serde_json::from_value(json).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_meta_defaults_omitted_flags() {
        let meta: FieldMeta = serde_json::from_str(r#"{"type":"text"}"#).unwrap();
        match meta {
            FieldMeta::Text(text) => {
                assert!(!text.read_only);
                assert!(!text.required);
                assert_eq!(text.character_limit, None);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_rule_signs() {
        assert_eq!(CheckboxValidationRule::SelectExactly.sign(), "=");
        assert_eq!(CheckboxValidationRule::SelectAtLeast.sign(), ">=");
        assert_eq!(CheckboxValidationRule::SelectAtMost.sign(), "<=");
    }

    #[test]
    fn test_field_type_mapping() {
        let meta = FieldMeta::Date(SimpleFieldMeta::default());
        assert_eq!(meta.field_type(), FieldType::Date);
        assert!(!meta.field_type().is_advanced());
    }
}

//! Field type discriminants

use serde::{Deserialize, Serialize};

/// Type of a placeable field on a document or template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// Full signature drawn or typed by a recipient
    Signature,
    /// Recipient initials
    Initials,
    /// Recipient display name
    Name,
    /// Recipient email address
    Email,
    /// Signing date
    Date,
    /// Free-form text
    Text,
    /// Numeric value with optional format and bounds
    Number,
    /// Single choice among configured options
    Radio,
    /// Zero or more choices among configured options
    Checkbox,
    /// Single choice from a dropdown list
    Dropdown,
}

impl FieldType {
    /// Human-readable label for logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Signature => "Signature",
            FieldType::Initials => "Initials",
            FieldType::Name => "Name",
            FieldType::Email => "Email",
            FieldType::Date => "Date",
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Radio => "Radio",
            FieldType::Checkbox => "Checkbox",
            FieldType::Dropdown => "Dropdown",
        }
    }

    /// Whether the field type carries advanced settings metadata beyond
    /// the common read-only/required flags.
    pub fn is_advanced(&self) -> bool {
        matches!(
            self,
            FieldType::Text
                | FieldType::Number
                | FieldType::Radio
                | FieldType::Checkbox
                | FieldType::Dropdown
        )
    }
}

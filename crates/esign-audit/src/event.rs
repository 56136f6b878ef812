//! Typed audit events
//!
//! Every mutation worth showing a document owner is one of these
//! variants. The wire form is `{"type": ..., "data": {...}}` so rows can
//! be stored as plain JSON and parsed back into the union.

use esign_common::{FieldType, RecipientRole};
use serde::{Deserialize, Serialize};

/// Position of a field on a document page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPosition {
    pub page: i32,
    pub position_x: f64,
    pub position_y: f64,
}

/// Size of a field on a document page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDimension {
    pub width: f64,
    pub height: f64,
}

/// A single observed change to a field's placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDiff {
    Position { from: FieldPosition, to: FieldPosition },
    Dimension { from: FieldDimension, to: FieldDimension },
}

/// A single observed change to a recipient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientDiff {
    AccessAuth { from: String, to: String },
    ActionAuth { from: String, to: String },
    Email { from: String, to: String },
    Name { from: String, to: String },
    Role { from: RecipientRole, to: RecipientRole },
}

/// A single observed change to document settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentMetaDiff {
    DateFormat { from: String, to: String },
    Message { from: String, to: String },
    Subject { from: String, to: String },
    Timezone { from: String, to: String },
    RedirectUrl { from: String, to: String },
    // Password values never enter the trail.
    Password,
}

/// An audit trail event with its payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum AuditEvent {
    FieldCreated {
        field_id: i64,
        field_type: FieldType,
    },
    FieldDeleted {
        field_id: i64,
        field_type: FieldType,
    },
    FieldUpdated {
        field_id: i64,
        field_type: FieldType,
        changes: Vec<FieldDiff>,
    },
    RecipientCreated {
        recipient_id: i64,
        recipient_email: String,
        recipient_role: RecipientRole,
    },
    RecipientDeleted {
        recipient_id: i64,
        recipient_email: String,
        recipient_role: RecipientRole,
    },
    RecipientUpdated {
        recipient_id: i64,
        recipient_email: String,
        recipient_role: RecipientRole,
        changes: Vec<RecipientDiff>,
    },
    DocumentCreated {
        title: String,
    },
    DocumentDeleted {
        title: String,
    },
    DocumentFieldInserted {
        field_id: i64,
        field_type: FieldType,
    },
    DocumentFieldUninserted {
        field_id: i64,
    },
    DocumentVisibilityUpdated {
        from: String,
        to: String,
    },
    DocumentGlobalAuthAccessUpdated {
        from: Option<String>,
        to: Option<String>,
    },
    DocumentGlobalAuthActionUpdated {
        from: Option<String>,
        to: Option<String>,
    },
    DocumentMetaUpdated {
        changes: Vec<DocumentMetaDiff>,
    },
    DocumentOpened,
    DocumentTitleUpdated {
        from: String,
        to: String,
    },
    DocumentExternalIdUpdated {
        from: Option<String>,
        to: Option<String>,
    },
    DocumentSent,
    DocumentMovedToTeam {
        team_id: i64,
    },
    DocumentRecipientCompleted {
        recipient_id: i64,
        recipient_email: String,
        recipient_role: RecipientRole,
    },
    EmailSent {
        recipient_email: String,
        recipient_role: RecipientRole,
        is_resending: bool,
    },
    DocumentCompleted,
}

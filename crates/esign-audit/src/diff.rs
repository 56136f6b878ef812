//! Change diffing for audit payloads
//!
//! Pure comparisons between a before and after snapshot, producing the
//! diff entries stored on update events. Only changed attributes are
//! emitted, in a fixed order.

use serde::{Deserialize, Serialize};

use crate::event::{
    DocumentMetaDiff, FieldDiff, FieldDimension, FieldPosition, RecipientDiff,
};
use esign_common::RecipientRole;

/// Recipient attributes compared when diffing.
///
/// A `None` auth entry means "unchanged" on the new side and inherits the
/// old value before comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientSnapshot {
    pub email: String,
    pub name: String,
    pub role: RecipientRole,
    pub access_auth: Option<String>,
    pub action_auth: Option<String>,
}

/// Field placement attributes compared when diffing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    pub page: i32,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Document settings compared when diffing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetaSnapshot {
    pub date_format: Option<String>,
    pub message: Option<String>,
    pub subject: Option<String>,
    pub timezone: Option<String>,
    pub password: Option<String>,
    pub redirect_url: Option<String>,
}

/// Diff two recipient snapshots.
pub fn diff_recipient_changes(
    old: &RecipientSnapshot,
    new: &RecipientSnapshot,
) -> Vec<RecipientDiff> {
    let mut diffs = Vec::new();

    let old_access = old.access_auth.as_deref();
    let old_action = old.action_auth.as_deref();
    let new_access = new.access_auth.as_deref().or(old_access);
    let new_action = new.action_auth.as_deref().or(old_action);

    if old_access != new_access {
        diffs.push(RecipientDiff::AccessAuth {
            from: old_access.unwrap_or("").to_string(),
            to: new_access.unwrap_or("").to_string(),
        });
    }

    if old_action != new_action {
        diffs.push(RecipientDiff::ActionAuth {
            from: old_action.unwrap_or("").to_string(),
            to: new_action.unwrap_or("").to_string(),
        });
    }

    if old.email != new.email {
        diffs.push(RecipientDiff::Email {
            from: old.email.clone(),
            to: new.email.clone(),
        });
    }

    if old.role != new.role {
        diffs.push(RecipientDiff::Role {
            from: old.role,
            to: new.role,
        });
    }

    if old.name != new.name {
        diffs.push(RecipientDiff::Name {
            from: old.name.clone(),
            to: new.name.clone(),
        });
    }

    diffs
}

/// Diff two field placements.
pub fn diff_field_changes(old: &FieldSnapshot, new: &FieldSnapshot) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();

    if old.page != new.page
        || old.position_x != new.position_x
        || old.position_y != new.position_y
    {
        diffs.push(FieldDiff::Position {
            from: FieldPosition {
                page: old.page,
                position_x: old.position_x,
                position_y: old.position_y,
            },
            to: FieldPosition {
                page: new.page,
                position_x: new.position_x,
                position_y: new.position_y,
            },
        });
    }

    if old.width != new.width || old.height != new.height {
        diffs.push(FieldDiff::Dimension {
            from: FieldDimension {
                width: old.width,
                height: old.height,
            },
            to: FieldDimension {
                width: new.width,
                height: new.height,
            },
        });
    }

    diffs
}

/// Diff document settings against their previous state. A missing old
/// snapshot compares every attribute against the empty state.
pub fn diff_document_meta_changes(
    old: Option<&DocumentMetaSnapshot>,
    new: &DocumentMetaSnapshot,
) -> Vec<DocumentMetaDiff> {
    let mut diffs = Vec::new();

    let old_date_format = old.and_then(|meta| meta.date_format.as_deref()).unwrap_or("");
    let old_message = old.and_then(|meta| meta.message.as_deref()).unwrap_or("");
    let old_subject = old.and_then(|meta| meta.subject.as_deref()).unwrap_or("");
    let old_timezone = old.and_then(|meta| meta.timezone.as_deref()).unwrap_or("");
    let old_password = old.and_then(|meta| meta.password.as_deref());
    let old_redirect_url = old
        .and_then(|meta| meta.redirect_url.as_deref())
        .unwrap_or("");

    let new_date_format = new.date_format.as_deref().unwrap_or("");
    let new_message = new.message.as_deref().unwrap_or("");
    let new_subject = new.subject.as_deref().unwrap_or("");
    let new_timezone = new.timezone.as_deref().unwrap_or("");
    let new_redirect_url = new.redirect_url.as_deref().unwrap_or("");

    if old_date_format != new_date_format {
        diffs.push(DocumentMetaDiff::DateFormat {
            from: old_date_format.to_string(),
            to: new_date_format.to_string(),
        });
    }

    if old_message != new_message {
        diffs.push(DocumentMetaDiff::Message {
            from: old_message.to_string(),
            to: new_message.to_string(),
        });
    }

    if old_subject != new_subject {
        diffs.push(DocumentMetaDiff::Subject {
            from: old_subject.to_string(),
            to: new_subject.to_string(),
        });
    }

    if old_timezone != new_timezone {
        diffs.push(DocumentMetaDiff::Timezone {
            from: old_timezone.to_string(),
            to: new_timezone.to_string(),
        });
    }

    if old_redirect_url != new_redirect_url {
        diffs.push(DocumentMetaDiff::RedirectUrl {
            from: old_redirect_url.to_string(),
            to: new_redirect_url.to_string(),
        });
    }

    if old_password != new.password.as_deref() {
        diffs.push(DocumentMetaDiff::Password);
    }

    diffs
}

//! Human-readable audit descriptions
//!
//! Turns a log entry into the sentence shown in the document's activity
//! feed. Each event has two renderings: an anonymous sentence used when
//! no actor is known ("A field was added") and an identified clause used
//! behind a subject prefix ("Alice added a field" / "You added a field").

use crate::log::AuditLog;
use crate::event::AuditEvent;

/// A formatted audit trail line.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditLogAction {
    /// Sentence subject: "You", the actor's name, or their email.
    pub prefix: Option<String>,
    /// Action clause or standalone sentence, depending on the prefix.
    pub description: String,
}

/// Format a log entry. `user_id` is the viewer; when it matches the
/// actor the prefix becomes "You".
pub fn format_audit_log_action(log: &AuditLog, user_id: Option<i64>) -> AuditLogAction {
    let is_current_user = user_id.is_some() && user_id == log.user_id;

    let mut prefix = if is_current_user {
        Some("You".to_string())
    } else {
        log.name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| log.email.clone().filter(|email| !email.is_empty()))
    };

    let plain = |anonymous: &str, identified: &str| (anonymous.to_string(), identified.to_string());

    let (anonymous, identified) = match &log.event {
        AuditEvent::FieldCreated { .. } => plain("A field was added", "added a field"),
        AuditEvent::FieldDeleted { .. } => plain("A field was removed", "removed a field"),
        AuditEvent::FieldUpdated { .. } => plain("A field was updated", "updated a field"),
        AuditEvent::RecipientCreated { .. } => {
            plain("A recipient was added", "added a recipient")
        }
        AuditEvent::RecipientDeleted { .. } => {
            plain("A recipient was removed", "removed a recipient")
        }
        AuditEvent::RecipientUpdated { .. } => {
            plain("A recipient was updated", "updated a recipient")
        }
        AuditEvent::DocumentCreated { .. } => plain("Document created", "created the document"),
        AuditEvent::DocumentDeleted { .. } => plain("Document deleted", "deleted the document"),
        AuditEvent::DocumentFieldInserted { .. } => plain("Field signed", "signed a field"),
        AuditEvent::DocumentFieldUninserted { .. } => plain("Field unsigned", "unsigned a field"),
        AuditEvent::DocumentVisibilityUpdated { .. } => plain(
            "Document visibility updated",
            "updated the document visibility",
        ),
        AuditEvent::DocumentGlobalAuthAccessUpdated { .. } => plain(
            "Document access auth updated",
            "updated the document access auth requirements",
        ),
        AuditEvent::DocumentGlobalAuthActionUpdated { .. } => plain(
            "Document signing auth updated",
            "updated the document signing auth requirements",
        ),
        AuditEvent::DocumentMetaUpdated { .. } => plain("Document updated", "updated the document"),
        AuditEvent::DocumentOpened => plain("Document opened", "opened the document"),
        AuditEvent::DocumentTitleUpdated { .. } => {
            plain("Document title updated", "updated the document title")
        }
        AuditEvent::DocumentExternalIdUpdated { .. } => plain(
            "Document external ID updated",
            "updated the document external ID",
        ),
        AuditEvent::DocumentSent => plain("Document sent", "sent the document"),
        AuditEvent::DocumentMovedToTeam { .. } => {
            plain("Document moved to team", "moved the document to team")
        }
        AuditEvent::DocumentRecipientCompleted { recipient_role, .. } => {
            let clause = format!("{} the document", recipient_role.actioned().to_lowercase());
            (format!("Recipient {clause}"), clause)
        }
        AuditEvent::EmailSent {
            recipient_email,
            is_resending,
            ..
        } => {
            let verb = if *is_resending { "resent" } else { "sent" };
            (
                format!("Email {verb}"),
                format!("{verb} an email to {recipient_email}"),
            )
        }
        AuditEvent::DocumentCompleted => {
            // Completion belongs to the document, not to whoever
            // triggered the final signature.
            prefix = None;
            plain("Document completed", "Document completed")
        }
    };

    let description = if prefix.is_some() { identified } else { anonymous };

    AuditLogAction {
        prefix,
        description,
    }
}

/// Format a log entry as a single sentence.
pub fn format_audit_log_action_string(log: &AuditLog, user_id: Option<i64>) -> String {
    let action = format_audit_log_action(log, user_id);

    match action.prefix {
        Some(prefix) => format!("{prefix} {}", action.description),
        None => action.description,
    }
}

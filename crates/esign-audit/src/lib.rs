//! OpenESign Audit - Document audit trail
//!
//! Typed audit events, change diffing and the activity-feed formatter:
//! - `event`: the audit event union and its diff payloads
//! - `log`: stored log records, construction and strict parsing
//! - `diff`: before/after snapshot comparison
//! - `format`: human-readable action descriptions
//!
//! Storage and delivery are elsewhere; everything here is pure data and
//! pure functions over it.

pub mod diff;
pub mod event;
pub mod format;
pub mod log;

pub use diff::{
    diff_document_meta_changes, diff_field_changes, diff_recipient_changes, DocumentMetaSnapshot,
    FieldSnapshot, RecipientSnapshot,
};
pub use event::{
    AuditEvent, DocumentMetaDiff, FieldDiff, FieldDimension, FieldPosition, RecipientDiff,
};
pub use format::{format_audit_log_action, format_audit_log_action_string, AuditLogAction};
pub use log::{Actor, AuditLog, RequestMetadata};

//! Recipient roles and transactional email categories

use serde::{Deserialize, Serialize};

/// Role a recipient plays in a document's signing flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientRole {
    /// Signs the document
    Signer,
    /// Approves the completed document
    Approver,
    /// Receives a copy, takes no action
    Cc,
    /// Views the document
    Viewer,
}

impl RecipientRole {
    /// Imperative action verb, e.g. "Sign".
    pub fn action_verb(&self) -> &'static str {
        match self {
            RecipientRole::Signer => "Sign",
            RecipientRole::Approver => "Approve",
            RecipientRole::Cc => "CC",
            RecipientRole::Viewer => "View",
        }
    }

    /// Past tense of the action, e.g. "Signed".
    pub fn actioned(&self) -> &'static str {
        match self {
            RecipientRole::Signer => "Signed",
            RecipientRole::Approver => "Approved",
            RecipientRole::Cc => "CC'd",
            RecipientRole::Viewer => "Viewed",
        }
    }

    /// Progressive form of the action, e.g. "Signing".
    pub fn progressive_verb(&self) -> &'static str {
        match self {
            RecipientRole::Signer => "Signing",
            RecipientRole::Approver => "Approving",
            RecipientRole::Cc => "CC",
            RecipientRole::Viewer => "Viewing",
        }
    }

    /// Singular role name shown in recipient lists.
    pub fn role_name(&self) -> &'static str {
        match self {
            RecipientRole::Signer => "Signer",
            RecipientRole::Approver => "Approver",
            RecipientRole::Cc => "Cc",
            RecipientRole::Viewer => "Viewer",
        }
    }

    /// Plural role name.
    pub fn role_name_plural(&self) -> &'static str {
        match self {
            RecipientRole::Signer => "Signers",
            RecipientRole::Approver => "Approvers",
            RecipientRole::Cc => "Cc'ers",
            RecipientRole::Viewer => "Viewers",
        }
    }

    /// Reason recorded on the signing certificate.
    pub fn signing_reason(&self) -> &'static str {
        match self {
            RecipientRole::Signer => "I am a signer of this document",
            RecipientRole::Approver => "I am an approver of this document",
            RecipientRole::Cc => "I am required to receive a copy of this document",
            RecipientRole::Viewer => "I am a viewer of this document",
        }
    }

    /// Request email category sent to this role, if any. Cc recipients
    /// only receive the completion email.
    pub fn email_type(&self) -> Option<DocumentEmailType> {
        match self {
            RecipientRole::Signer => Some(DocumentEmailType::SigningRequest),
            RecipientRole::Viewer => Some(DocumentEmailType::ViewRequest),
            RecipientRole::Approver => Some(DocumentEmailType::ApproveRequest),
            RecipientRole::Cc => None,
        }
    }
}

/// Category of transactional email recorded in the audit trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentEmailType {
    /// Request to sign
    SigningRequest,
    /// Request to view
    ViewRequest,
    /// Request to approve
    ApproveRequest,
    /// Carbon copy
    Cc,
    /// Completion notification
    DocumentCompleted,
}

impl DocumentEmailType {
    /// Short description shown in the audit trail.
    pub fn description(&self) -> &'static str {
        match self {
            DocumentEmailType::SigningRequest => "Signing request",
            DocumentEmailType::ViewRequest => "Viewing request",
            DocumentEmailType::ApproveRequest => "Approval request",
            DocumentEmailType::Cc => "CC",
            DocumentEmailType::DocumentCompleted => "Document completed",
        }
    }
}

//! Audit log records

use chrono::{DateTime, Utc};
use esign_common::{EsignError, EsignResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::AuditEvent;

/// Who performed an action, as known at request time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Request context captured alongside an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetadata {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// One stored audit trail entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Uuid,
    pub document_id: i64,
    #[serde(flatten)]
    pub event: AuditEvent,
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Build a log entry from an event and whatever actor and request
    /// context is available.
    pub fn new(
        document_id: i64,
        event: AuditEvent,
        actor: Option<&Actor>,
        request: Option<&RequestMetadata>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            event,
            user_id: actor.and_then(|actor| actor.id),
            email: actor.and_then(|actor| actor.email.clone()),
            name: actor.and_then(|actor| actor.name.clone()),
            ip_address: request.and_then(|request| request.ip_address.clone()),
            user_agent: request.and_then(|request| request.user_agent.clone()),
            created_at: Utc::now(),
        }
    }

    /// Parse a stored row. Rows written before the current schema fail
    /// the strict parse and surface as `MigrationRequired` so callers can
    /// route them to a migration instead of crashing the trail view.
    pub fn from_json(value: serde_json::Value) -> EsignResult<Self> {
        serde_json::from_value(value).map_err(|error| {
            tracing::debug!(%error, "audit log row failed to parse");
            EsignError::MigrationRequired
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fans_out_actor_and_request() {
        let actor = Actor {
            id: Some(7),
            email: Some("owner@example.com".into()),
            name: Some("Document Owner".into()),
        };
        let request = RequestMetadata {
            ip_address: Some("203.0.113.7".into()),
            user_agent: Some("Mozilla/5.0".into()),
        };

        let log = AuditLog::new(
            42,
            AuditEvent::DocumentSent,
            Some(&actor),
            Some(&request),
        );

        assert_eq!(log.document_id, 42);
        assert_eq!(log.user_id, Some(7));
        assert_eq!(log.email.as_deref(), Some("owner@example.com"));
        assert_eq!(log.ip_address.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_new_without_actor() {
        let log = AuditLog::new(42, AuditEvent::DocumentOpened, None, None);
        assert_eq!(log.user_id, None);
        assert_eq!(log.email, None);
        assert_eq!(log.ip_address, None);
    }

    #[test]
    fn test_round_trip() {
        let log = AuditLog::new(
            1,
            AuditEvent::DocumentCreated {
                title: "NDA.pdf".into(),
            },
            None,
            None,
        );

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["type"], "DOCUMENT_CREATED");
        assert_eq!(value["data"]["title"], "NDA.pdf");

        let back = AuditLog::from_json(value).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn test_malformed_row_needs_migration() {
        let row = serde_json::json!({
            "type": "SOME_RETIRED_EVENT",
            "documentId": 1,
        });

        let result = AuditLog::from_json(row);
        assert!(matches!(result, Err(EsignError::MigrationRequired)));
    }
}

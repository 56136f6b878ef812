//! Error types for OpenESign

use thiserror::Error;

/// OpenESign error type
#[derive(Error, Debug)]
pub enum EsignError {
    /// Stored row predates the current schema and needs a migration
    #[error("migration required")]
    MigrationRequired,

    /// Field type discriminant not recognised
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// Serialization error
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for OpenESign
pub type EsignResult<T> = Result<T, EsignError>;

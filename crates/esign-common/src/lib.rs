//! OpenESign Common - Shared domain vocabulary for the signing platform
//!
//! This crate provides the types every other OpenESign crate speaks in:
//! - Field type discriminants
//! - Recipient roles and their description tables
//! - Transactional email categories
//! - Error handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod recipient;

pub use error::*;
pub use field::*;
pub use recipient::*;

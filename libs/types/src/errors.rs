//! Error types for catalog and order reconciliation
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

use crate::identity::Role;
use crate::ids::ItemId;

/// Terminal failure of a catalog or order build
///
/// Business-rule rejections (`RejectedUnavailable`, `RejectedNoSuchSeller`,
/// `RoleMismatch`) are always decided before any write happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("these items are not available: {}", .names.join(", "))]
    RejectedUnavailable { names: Vec<String> },

    #[error("no seller exists with id {seller_id}")]
    RejectedNoSuchSeller { seller_id: String },

    #[error("only a `{required}` may perform this operation (caller is `{actual}`)")]
    RoleMismatch { required: Role, actual: Role },

    /// Store unreachable or timed out. Carries only the operation name.
    #[error("Store unavailable during {operation}")]
    Unavailable { operation: &'static str },
}

impl ReconcileError {
    /// Whether the caller, rather than the system, is at fault
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ReconcileError::Unavailable { .. })
    }
}

/// Failures reported by store adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate item name: {0}")]
    DuplicateName(String),

    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store call timed out after {millis}ms")]
    Timeout { millis: u64 },
}

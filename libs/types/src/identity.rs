//! Authenticated identity types
//!
//! Callers are identified by an explicit `{id, role}` value rather than by
//! fields attached to a request object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::AccountId;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Places orders against seller catalogs
    Buyer,
    /// Registers a catalog and receives orders
    Seller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Seller => write!(f, "seller"),
        }
    }
}

/// An authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: AccountId,
    pub role: Role,
}

impl Identity {
    pub fn new(id: AccountId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn buyer(id: AccountId) -> Self {
        Self::new(id, Role::Buyer)
    }

    pub fn seller(id: AccountId) -> Self {
        Self::new(id, Role::Seller)
    }

    pub fn is_seller(&self) -> bool {
        self.role == Role::Seller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
        let role: Role = serde_json::from_str("\"buyer\"").unwrap();
        assert_eq!(role, Role::Buyer);
    }

    #[test]
    fn test_identity_constructors() {
        let id = AccountId::new();
        assert!(Identity::seller(id).is_seller());
        assert!(!Identity::buyer(id).is_seller());
    }
}

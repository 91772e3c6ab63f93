//! Types library for the marketplace
//!
//! Core type definitions shared by the reconciliation engine and the gateway.
//!
//! # Modules
//! - `ids`: Unique identifiers (ItemId, OrderId, AccountId)
//! - `identity`: Authenticated caller identity and role
//! - `item`: Items, name indexes, and resolution results
//! - `catalog`: Per-seller catalogs
//! - `order`: Validated buyer orders
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod identity;
pub mod item;
pub mod catalog;
pub mod order;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::identity::*;
    pub use crate::item::*;
    pub use crate::catalog::*;
    pub use crate::order::*;
    pub use crate::errors::*;
}

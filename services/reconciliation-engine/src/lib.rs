//! Reconciliation Engine
//!
//! Matches buyer requests against seller catalogs. Both catalog registration
//! and order placement reduce to one problem: partition a caller-supplied
//! list of item names against an authoritative name → id mapping, and only
//! write when nothing is left unresolved.
//!
//! **Key Invariants:**
//! - Every requested name is classified exactly once (resolved or not)
//! - Deterministic output (same inputs → same partition, same item order)
//! - No partial writes: rejections are decided before any store mutation
//! - Catalog registration replaces, never merges

pub mod catalog_builder;
pub mod config;
mod guard;
pub mod marketplace;
pub mod memory;
pub mod order_builder;
pub mod query;
pub mod resolver;
pub mod store;
pub mod validation;

pub use catalog_builder::{CatalogBuilder, CatalogReceipt};
pub use config::EngineConfig;
pub use marketplace::Marketplace;
pub use memory::InMemoryStores;
pub use order_builder::OrderBuilder;
pub use query::{MarketQuery, SellerOrderView};
pub use resolver::resolve;
pub use store::Stores;

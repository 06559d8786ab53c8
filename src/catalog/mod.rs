//! Menu catalog collaborator
//!
//! Read-only menu data consumed by the ordering workflow: menu items,
//! per-size price adjustments, and the catalog collection that resolves
//! lookups.
//!
//! # Module Structure
//!
//! - [`menu_item`] - `MenuItem` and `MenuCategory`
//! - [`size_pricing`] - `SizePricing` rows
//! - [`menu_catalog`] - `MenuCatalog` collection

pub mod menu_catalog;
pub mod menu_item;
pub mod size_pricing;

// =============================================================================
// Type re-exports
// =============================================================================

pub use menu_catalog::MenuCatalog;
pub use menu_item::{MenuCategory, MenuItem};
pub use size_pricing::SizePricing;

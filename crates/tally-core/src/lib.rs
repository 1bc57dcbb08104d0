//! # tally-core: Checkout Pricing for Tally
//!
//! Prices a basket of scanned SKUs against a catalogue and a list of
//! promotions ("3 for 2", bulk discounts). Pure logic: no I/O, no async.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Barcode scanner ──► till app ──► Checkout::scan ──► Checkout::total  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ★ tally-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ catalogue │  │ checkout  │  │ promotion │  │  config   │  │   │
//! │  │   │  Product  │─►│  ledger   │─►│  XForY    │  │  JSON     │  │   │
//! │  │   │  prices   │  │  total()  │  │  Bulk     │  │  loading  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   money • types • validation • error                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cent `Money`
//! - [`types`] - `Sku`, `Product`, `LineItem`
//! - [`catalogue`] - SKU → product price list
//! - [`promotion`] - Pricing rules
//! - [`checkout`] - The scan accumulator
//! - [`config`] - JSON pricing configuration
//! - [`validation`] - Configuration checks
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{standard_promotions, Checkout};
//!
//! let mut co = Checkout::new(standard_promotions());
//! for code in ["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"] {
//!     co.scan_code(code);
//! }
//!
//! // 2 Apple TVs + 5 Super iPads at the bulk price
//! assert_eq!(co.total().to_string(), "$2718.95");
//! ```

pub mod catalogue;
pub mod checkout;
pub mod config;
pub mod error;
pub mod money;
pub mod promotion;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalogue::Catalogue;
pub use checkout::Checkout;
pub use config::{Pricing, PricingConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use promotion::{standard_promotions, BulkDiscount, Promotion, XForYDeal};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest SKU a catalogue accepts.
pub const MAX_SKU_LENGTH: usize = 50;

/// Longest product display name a catalogue accepts.
pub const MAX_PRODUCT_NAME_LENGTH: usize = 200;

/// Highest unit price a catalogue or bulk discount accepts ($10,000,000.00).
///
/// Keeps `price × quantity` far inside `i64` for any quantity a till can scan.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

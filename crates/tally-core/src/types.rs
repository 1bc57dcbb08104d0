//! # Domain Types
//!
//! The nouns of a checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐        ┌───────────────────────┐                   │
//! │  │    Product      │        │      LineItem         │                   │
//! │  │  ─────────────  │  snap  │  ───────────────────  │                   │
//! │  │  sku            │ ─────► │  sku                  │                   │
//! │  │  name           │        │  quantity   (frozen)  │                   │
//! │  │  price_cents    │ ─────► │  unit_price (frozen)  │                   │
//! │  └─────────────────┘        │  total_price (mutable │                   │
//! │     lives in the            │   by promotions only) │                   │
//! │     Catalogue               └───────────────────────┘                   │
//! │                                built fresh on every total()             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_sku, ValidationResult};

// =============================================================================
// SKU
// =============================================================================

/// Stock Keeping Unit: the identifier a scanner reports.
///
/// Two SKUs are equal when their strings are equal; nothing else is implied.
/// Deserialization does not validate, [`Catalogue::new`](crate::Catalogue::new)
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sku(String);

impl Sku {
    /// Creates a validated SKU (trimmed).
    ///
    /// ```rust
    /// use tally_core::Sku;
    ///
    /// assert_eq!(Sku::new(" atv ").unwrap().as_str(), "atv");
    /// assert!(Sku::new("not a sku").is_err());
    /// ```
    pub fn new(sku: &str) -> ValidationResult<Self> {
        validate_sku(sku)?;
        Ok(Sku(sku.trim().to_string()))
    }

    /// Wraps a compile-time literal without validation.
    pub fn from_static(sku: &'static str) -> Self {
        Sku(sku.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalogue entry. Immutable once the catalogue is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Business identifier.
    pub sku: Sku,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    pub fn new(sku: Sku, name: impl Into<String>, price: Money) -> Self {
        Product {
            sku,
            name: name.into(),
            price_cents: price.cents(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the cart snapshot: every scanned unit of a single SKU.
///
/// ## Invariants
/// - `quantity` and `unit_price_cents` are frozen at construction.
/// - `total_price_cents` starts at the baseline `quantity × unit_price` and
///   only promotions may rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    sku: Sku,
    quantity: i64,
    unit_price_cents: i64,
    total_price_cents: i64,
}

impl LineItem {
    /// Creates a line at its undiscounted baseline.
    ///
    /// ```rust
    /// use tally_core::{LineItem, Money, Sku};
    ///
    /// let line = LineItem::baseline(Sku::from_static("atv"), 3, Money::from_cents(10950));
    /// assert_eq!(line.total_price().cents(), 32850);
    /// ```
    pub fn baseline(sku: Sku, quantity: i64, unit_price: Money) -> Self {
        LineItem {
            sku,
            quantity,
            unit_price_cents: unit_price.cents(),
            total_price_cents: unit_price.multiply_quantity(quantity).cents(),
        }
    }

    #[inline]
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Current line total (after whatever promotions have run).
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }

    /// `quantity × unit_price`, regardless of promotions.
    #[inline]
    pub fn baseline_price(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// How much promotions took off this line.
    #[inline]
    pub fn discount(&self) -> Money {
        self.baseline_price() - self.total_price()
    }

    pub(crate) fn set_total_price(&mut self, total: Money) {
        self.total_price_cents = total.cents();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Checkout
//!
//! The scan accumulator at the till.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  scan("atv") scan("ipd") scan("atv") ...                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Scan ledger   [atv: 2, ipd: 5, zzz: 1]   (first-scan order)            │
//! │       │                                                                 │
//! │       │ total()                                                         │
//! │       ▼                                                                 │
//! │  1. Snapshot   catalogue lookup per SKU; unknown SKUs dropped           │
//! │                [atv 2×$109.50=$219.00, ipd 5×$549.99=$2749.95]          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Promote    each promotion in order, same &mut [LineItem]            │
//! │                [atv $219.00, ipd 5×$499.99=$2499.95]                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Sum        $2718.95                                                 │
//! │                                                                         │
//! │  total() reads the ledger, never writes it: call it as often as you    │
//! │  like between scans.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tally_core::{standard_promotions, Checkout, Sku};
//!
//! let mut co = Checkout::new(standard_promotions());
//! for sku in ["atv", "atv", "atv", "vga"] {
//!     co.scan(&Sku::from_static(sku));
//! }
//! assert_eq!(co.total().to_string(), "$249.00");
//! ```

use tracing::debug;

use crate::catalogue::Catalogue;
use crate::money::Money;
use crate::promotion::Promotion;
use crate::types::{LineItem, Sku};

/// Accumulates scans and prices them on demand.
///
/// The promotion list is fixed at construction. The ledger only grows; there
/// is no reset, start a new `Checkout` for the next customer.
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    catalogue: &'a Catalogue,
    promotions: Vec<Promotion>,
    /// (sku, quantity) in first-scan order
    scanned: Vec<(Sku, i64)>,
}

impl Checkout<'static> {
    /// A checkout over the shop's [`Catalogue::standard`] price list.
    pub fn new(promotions: Vec<Promotion>) -> Self {
        Checkout::with_catalogue(Catalogue::standard(), promotions)
    }
}

impl<'a> Checkout<'a> {
    /// A checkout over a caller-supplied catalogue.
    pub fn with_catalogue(catalogue: &'a Catalogue, promotions: Vec<Promotion>) -> Self {
        Checkout {
            catalogue,
            promotions,
            scanned: Vec::new(),
        }
    }

    /// Records one unit of `sku`.
    ///
    /// Any SKU is accepted, including ones the catalogue does not sell; those
    /// are dropped when the cart is priced.
    pub fn scan(&mut self, sku: &Sku) {
        let quantity = match self.scanned.iter_mut().find(|(s, _)| s == sku) {
            Some((_, quantity)) => {
                *quantity += 1;
                *quantity
            }
            None => {
                self.scanned.push((sku.clone(), 1));
                1
            }
        };

        debug!(sku = %sku, quantity, "Scanned item");
    }

    /// Scans a raw code straight off the scanner.
    ///
    /// A code that is not even a well-formed SKU is ignored, the same way an
    /// unknown SKU is: the till keeps going.
    pub fn scan_code(&mut self, code: &str) {
        match Sku::new(code) {
            Ok(sku) => self.scan(&sku),
            Err(err) => debug!(code, error = %err, "Ignoring malformed scan"),
        }
    }

    /// How many units of `sku` have been scanned so far (0 if none).
    pub fn scanned_quantity(&self, sku: &Sku) -> i64 {
        self.scanned
            .iter()
            .find(|(s, _)| s == sku)
            .map_or(0, |(_, quantity)| *quantity)
    }

    /// True until the first scan.
    pub fn is_empty(&self) -> bool {
        self.scanned.is_empty()
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn catalogue(&self) -> &Catalogue {
        self.catalogue
    }

    /// The priced cart: one line per scanned SKU the catalogue knows, in
    /// first-scan order, with every promotion applied.
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut lines = self.snapshot();

        for promotion in &self.promotions {
            promotion.apply(&mut lines);
        }

        lines
    }

    /// The amount due after promotions.
    ///
    /// Line totals are exact cent amounts, so summing them is the single
    /// rounding point to two decimals. An empty ledger totals $0.00.
    pub fn total(&self) -> Money {
        let lines = self.line_items();
        let total: Money = lines.iter().map(LineItem::total_price).sum();
        debug!(total = %total, lines = lines.len(), "Computed checkout total");
        total
    }

    /// The amount due before promotions.
    pub fn subtotal(&self) -> Money {
        self.snapshot().iter().map(LineItem::baseline_price).sum()
    }

    /// How much the promotions saved the customer.
    pub fn savings(&self) -> Money {
        self.subtotal() - self.total()
    }

    fn snapshot(&self) -> Vec<LineItem> {
        self.scanned
            .iter()
            .filter_map(|(sku, quantity)| match self.catalogue.get(sku) {
                Some(product) => Some(LineItem::baseline(sku.clone(), *quantity, product.price())),
                None => {
                    debug!(sku = %sku, quantity, "Skipping SKU not in catalogue");
                    None
                }
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

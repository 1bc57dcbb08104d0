//! # Promotions
//!
//! Pricing rules that rewrite the total of the one line they target.
//!
//! ## Application Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  [LineItem, LineItem, ...]   every total == quantity × unit_price      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  promotions[0].apply(&mut lines)  ── finds its SKU, maybe rewrites     │
//! │          │                           that line's total                  │
//! │          ▼                                                              │
//! │  promotions[1].apply(&mut lines)                                        │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  sum of totals                                                          │
//! │                                                                         │
//! │  A promotion NEVER adds, removes or reorders lines, and never touches  │
//! │  quantity or unit price. Each one prices from quantity/unit price, so  │
//! │  two rules on the same SKU do not compound: the later one wins.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LineItem, Sku};
use crate::validation::{
    validate_deal_counts, validate_price_cents, validate_stored_sku, validate_threshold,
    ValidationResult,
};

// =============================================================================
// X for Y
// =============================================================================

/// "Buy `x`, pay for `y`", repeatable for every full group of `x`.
///
/// ## Pricing
/// ```text
/// groups    = quantity / x
/// remainder = quantity % x
/// total     = groups × y × unit_price + remainder × unit_price
///
/// 3-for-2 on Apple TV ($109.50):
///   qty 2 → $219.00  (below x, untouched)
///   qty 3 → $219.00  (one group)
///   qty 4 → $328.50  (one group + 1 at full price)
///   qty 6 → $438.00  (two groups)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct XForYDeal {
    pub sku: Sku,
    /// Items that make up one deal group.
    pub x: i64,
    /// Items charged per deal group.
    pub y: i64,
}

impl XForYDeal {
    /// Builds the deal as given. See [`XForYDeal::validate`] for checks.
    pub fn new(sku: Sku, x: i64, y: i64) -> Self {
        XForYDeal { sku, x, y }
    }

    pub fn apply(&self, lines: &mut [LineItem]) {
        // x <= 0 would never form a group; treat it as inert instead of dividing by zero
        if self.x <= 0 {
            return;
        }

        let Some(line) = lines.iter_mut().find(|l| l.sku() == &self.sku) else {
            return;
        };
        if line.quantity() < self.x {
            return;
        }

        let groups = line.quantity() / self.x;
        let remainder = line.quantity() % self.x;
        let unit_price = line.unit_price();
        let total = unit_price.multiply_quantity(groups.saturating_mul(self.y))
            + unit_price.multiply_quantity(remainder);

        debug!(
            sku = %self.sku,
            quantity = line.quantity(),
            groups,
            remainder,
            total = %total,
            "Applied x-for-y deal"
        );
        line.set_total_price(total);
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_stored_sku(self.sku.as_str())?;
        validate_deal_counts(self.x, self.y)
    }
}

// =============================================================================
// Bulk Discount
// =============================================================================

/// Buy more than `threshold` and every unit drops to the discounted price.
///
/// The comparison is strict: exactly `threshold` items pay full price.
/// ```text
/// Super iPad $549.99, threshold 4, bulk price $499.99:
///   qty 4 → 4 × $549.99 = $2199.96
///   qty 5 → 5 × $499.99 = $2499.95   (all five, not just the fifth)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkDiscount {
    pub sku: Sku,
    pub threshold: i64,
    pub discounted_price_cents: i64,
}

impl BulkDiscount {
    pub fn new(sku: Sku, threshold: i64, discounted_price: Money) -> Self {
        BulkDiscount {
            sku,
            threshold,
            discounted_price_cents: discounted_price.cents(),
        }
    }

    #[inline]
    pub fn discounted_price(&self) -> Money {
        Money::from_cents(self.discounted_price_cents)
    }

    pub fn apply(&self, lines: &mut [LineItem]) {
        let Some(line) = lines.iter_mut().find(|l| l.sku() == &self.sku) else {
            return;
        };
        if line.quantity() <= self.threshold {
            return;
        }

        let total = self.discounted_price().multiply_quantity(line.quantity());
        debug!(
            sku = %self.sku,
            quantity = line.quantity(),
            threshold = self.threshold,
            total = %total,
            "Applied bulk discount"
        );
        line.set_total_price(total);
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_stored_sku(self.sku.as_str())?;
        validate_threshold(self.threshold)?;
        validate_price_cents("discounted price", self.discounted_price_cents)
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// Every pricing rule a checkout can be configured with.
///
/// ## JSON Shape
/// ```json
/// { "type": "x_for_y", "sku": "atv", "x": 3, "y": 2 }
/// { "type": "bulk_discount", "sku": "ipd", "threshold": 4, "discounted_price_cents": 49999 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Promotion {
    XForY(XForYDeal),
    BulkDiscount(BulkDiscount),
}

impl Promotion {
    /// Shorthand for `Promotion::XForY(XForYDeal::new(..))`.
    pub fn x_for_y(sku: Sku, x: i64, y: i64) -> Self {
        Promotion::XForY(XForYDeal::new(sku, x, y))
    }

    /// Shorthand for `Promotion::BulkDiscount(BulkDiscount::new(..))`.
    pub fn bulk_discount(sku: Sku, threshold: i64, discounted_price: Money) -> Self {
        Promotion::BulkDiscount(BulkDiscount::new(sku, threshold, discounted_price))
    }

    /// Rewrites the total of this rule's line, if present and eligible.
    pub fn apply(&self, lines: &mut [LineItem]) {
        match self {
            Promotion::XForY(deal) => deal.apply(lines),
            Promotion::BulkDiscount(discount) => discount.apply(lines),
        }
    }

    /// The SKU this rule governs.
    pub fn sku(&self) -> &Sku {
        match self {
            Promotion::XForY(deal) => &deal.sku,
            Promotion::BulkDiscount(discount) => &discount.sku,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        match self {
            Promotion::XForY(deal) => deal.validate(),
            Promotion::BulkDiscount(discount) => discount.validate(),
        }
    }
}

/// The shop's running promotions: 3-for-2 on Apple TV, and Super iPads drop
/// to $499.99 each when more than 4 are bought.
pub fn standard_promotions() -> Vec<Promotion> {
    vec![
        Promotion::x_for_y(Sku::from_static("atv"), 3, 2),
        Promotion::bulk_discount(Sku::from_static("ipd"), 4, Money::from_cents(49999)),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ATV_CENTS: i64 = 10950;
    const IPD_CENTS: i64 = 54999;

    fn atv_line(quantity: i64) -> Vec<LineItem> {
        vec![LineItem::baseline(
            Sku::from_static("atv"),
            quantity,
            Money::from_cents(ATV_CENTS),
        )]
    }

    fn ipd_line(quantity: i64) -> Vec<LineItem> {
        vec![LineItem::baseline(
            Sku::from_static("ipd"),
            quantity,
            Money::from_cents(IPD_CENTS),
        )]
    }

    fn three_for_two() -> XForYDeal {
        XForYDeal::new(Sku::from_static("atv"), 3, 2)
    }

    fn ipad_bulk() -> BulkDiscount {
        BulkDiscount::new(Sku::from_static("ipd"), 4, Money::from_cents(49999))
    }

    #[test]
    fn test_x_for_y_below_x_is_untouched() {
        let mut cart = atv_line(2);
        three_for_two().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 2 * ATV_CENTS);
    }

    #[test]
    fn test_x_for_y_exactly_x() {
        let mut cart = atv_line(3);
        three_for_two().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 2 * ATV_CENTS);
    }

    #[test]
    fn test_x_for_y_multiples_of_x() {
        let mut cart = atv_line(6);
        three_for_two().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 4 * ATV_CENTS);
    }

    #[test]
    fn test_x_for_y_with_remainder() {
        let mut cart = atv_line(7);
        three_for_two().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 4 * ATV_CENTS + ATV_CENTS);

        let mut cart = atv_line(4);
        three_for_two().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 3 * ATV_CENTS);
    }

    #[test]
    fn test_x_for_y_ignores_other_skus() {
        let mut cart = ipd_line(9);
        three_for_two().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 9 * IPD_CENTS);
    }

    #[test]
    fn test_x_for_y_with_zero_x_is_inert() {
        let mut cart = atv_line(5);
        XForYDeal::new(Sku::from_static("atv"), 0, 0).apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 5 * ATV_CENTS);
    }

    #[test]
    fn test_bulk_at_threshold_keeps_baseline() {
        let mut cart = ipd_line(4);
        ipad_bulk().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 4 * IPD_CENTS);
    }

    #[test]
    fn test_bulk_over_threshold_reprices_every_unit() {
        let mut cart = ipd_line(5);
        ipad_bulk().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 5 * 49999);
        assert_eq!(cart[0].quantity(), 5);
        assert_eq!(cart[0].unit_price().cents(), IPD_CENTS);
    }

    #[test]
    fn test_bulk_ignores_other_skus() {
        let mut cart = atv_line(5);
        ipad_bulk().apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), 5 * ATV_CENTS);
    }

    #[test]
    fn test_apply_on_empty_cart_is_noop() {
        let mut cart: Vec<LineItem> = Vec::new();
        for promotion in standard_promotions() {
            promotion.apply(&mut cart);
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_later_promotion_overwrites_instead_of_compounding() {
        let mut cart = atv_line(6);
        Promotion::x_for_y(Sku::from_static("atv"), 3, 2).apply(&mut cart);
        Promotion::bulk_discount(Sku::from_static("atv"), 5, Money::from_cents(10000)).apply(&mut cart);

        // 6 × $100.00, computed from quantity, not from the 3-for-2 result
        assert_eq!(cart[0].total_price().cents(), 60000);
    }

    #[test]
    fn test_promotion_sku() {
        let promotions = standard_promotions();
        assert_eq!(promotions[0].sku().as_str(), "atv");
        assert_eq!(promotions[1].sku().as_str(), "ipd");
    }

    #[test]
    fn test_validate() {
        assert!(three_for_two().validate().is_ok());
        assert!(ipad_bulk().validate().is_ok());

        assert!(XForYDeal::new(Sku::from_static("atv"), 2, 3).validate().is_err());
        assert!(XForYDeal::new(Sku::from_static("atv"), 0, 0).validate().is_err());
        assert!(BulkDiscount::new(Sku::from_static("ipd"), -1, Money::from_cents(1))
            .validate()
            .is_err());
        assert!(BulkDiscount::new(Sku::from_static("ipd"), 4, Money::from_cents(-1))
            .validate()
            .is_err());
        assert!(Promotion::x_for_y(Sku::from_static("bad sku"), 3, 2).validate().is_err());
        assert!(Promotion::x_for_y(Sku::from_static("atv "), 3, 2).validate().is_err());
    }

    #[test]
    fn test_unvalidated_extremes_saturate_instead_of_panicking() {
        let mut cart = atv_line(2);
        XForYDeal::new(Sku::from_static("atv"), 1, i64::MAX).apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), i64::MAX);

        let mut cart = ipd_line(3);
        BulkDiscount::new(Sku::from_static("ipd"), 0, Money::from_cents(i64::MAX)).apply(&mut cart);
        assert_eq!(cart[0].total_price().cents(), i64::MAX);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(&standard_promotions()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "type": "x_for_y", "sku": "atv", "x": 3, "y": 2 },
                { "type": "bulk_discount", "sku": "ipd", "threshold": 4, "discounted_price_cents": 49999 }
            ])
        );

        let parsed: Vec<Promotion> = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, standard_promotions());
    }
}

//! # Catalogue
//!
//! The read-only price list a checkout looks scanned SKUs up in.
//!
//! The catalogue is supplied once, before the first scan, and never mutated
//! by the pricing code. It is trusted as given: prices are not re-checked on
//! every total.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, Sku};
use crate::validation::{validate_price_cents, validate_product_name, validate_stored_sku};

/// SKU → product lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    products: BTreeMap<Sku, Product>,
}

impl Catalogue {
    /// Builds a catalogue, validating every entry.
    ///
    /// ## Errors
    /// - Invalid SKU (including surrounding whitespace), empty name, or a
    ///   price outside 0..=MAX_PRICE_CENTS
    /// - The same SKU listed twice (`ValidationError::Duplicate`)
    ///
    /// ```rust
    /// use tally_core::{Catalogue, Money, Product, Sku};
    ///
    /// let catalogue = Catalogue::new(vec![
    ///     Product::new(Sku::new("tea").unwrap(), "Green Tea", Money::from_cents(250)),
    /// ])
    /// .unwrap();
    /// assert_eq!(catalogue.len(), 1);
    /// ```
    pub fn new(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();

        for product in products {
            validate_stored_sku(product.sku.as_str())?;
            validate_product_name(&product.name)?;
            validate_price_cents("price", product.price_cents)?;

            if map.contains_key(&product.sku) {
                return Err(ValidationError::Duplicate {
                    field: "sku".to_string(),
                    value: product.sku.to_string(),
                }
                .into());
            }
            map.insert(product.sku.clone(), product);
        }

        Ok(Catalogue { products: map })
    }

    /// The shop's standard price list.
    ///
    /// | SKU | Name        | Price    |
    /// |-----|-------------|----------|
    /// | ipd | Super iPad  | $549.99  |
    /// | mbp | MacBook Pro | $1399.99 |
    /// | atv | Apple TV    | $109.50  |
    /// | vga | VGA adapter | $30.00   |
    pub fn standard() -> &'static Catalogue {
        static STANDARD: OnceLock<Catalogue> = OnceLock::new();

        STANDARD.get_or_init(|| {
            let products = [
                ("ipd", "Super iPad", Money::from_cents(54999)),
                ("mbp", "MacBook Pro", Money::from_cents(139999)),
                ("atv", "Apple TV", Money::from_cents(10950)),
                ("vga", "VGA adapter", Money::from_cents(3000)),
            ]
            .into_iter()
            .map(|(sku, name, price)| {
                let sku = Sku::from_static(sku);
                (sku.clone(), Product::new(sku, name, price))
            })
            .collect();

            Catalogue { products }
        })
    }

    /// Looks up a product. `None` is an ordinary answer, not an error.
    #[inline]
    pub fn get(&self, sku: &Sku) -> Option<&Product> {
        self.products.get(sku)
    }

    #[inline]
    pub fn contains(&self, sku: &Sku) -> bool {
        self.products.contains_key(sku)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in SKU order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

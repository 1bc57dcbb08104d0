//! # Pricing Configuration
//!
//! Loads a price list and its promotions from JSON.
//!
//! ## File Shape
//! ```json
//! {
//!   "catalogue": [
//!     { "sku": "atv", "name": "Apple TV", "price_cents": 10950 }
//!   ],
//!   "promotions": [
//!     { "type": "x_for_y", "sku": "atv", "x": 3, "y": 2 }
//!   ]
//! }
//! ```
//!
//! ## Loading Flow
//! ```text
//! JSON ──► serde_json ──► PricingConfig::validate ──► Pricing ──► Checkout
//!             │                   │
//!             ▼                   ▼
//!     CoreError::Config   CoreError::Validation
//! ```
//!
//! Promotions built by hand skip this path and are never validated; only a
//! loaded configuration is guaranteed to make sense.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::catalogue::Catalogue;
use crate::checkout::Checkout;
use crate::error::{CoreResult, ValidationError};
use crate::promotion::{standard_promotions, Promotion};
use crate::types::Product;

/// Serialized pricing setup: a catalogue plus ordered promotions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfig {
    pub catalogue: Vec<Product>,
    /// Applied in this order on every total.
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

impl PricingConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// ```rust
    /// use tally_core::PricingConfig;
    ///
    /// let config = PricingConfig::from_json(r#"{
    ///     "catalogue": [{ "sku": "atv", "name": "Apple TV", "price_cents": 10950 }],
    ///     "promotions": [{ "type": "x_for_y", "sku": "atv", "x": 3, "y": 2 }]
    /// }"#).unwrap();
    ///
    /// let pricing = config.into_pricing().unwrap();
    /// let mut co = pricing.checkout();
    /// co.scan_code("atv");
    /// co.scan_code("atv");
    /// co.scan_code("atv");
    /// assert_eq!(co.total().cents(), 21900);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: PricingConfig = serde_json::from_str(json)?;
        config.validate()?;

        info!(
            products = config.catalogue.len(),
            promotions = config.promotions.len(),
            "Loaded pricing configuration"
        );
        Ok(config)
    }

    /// The standard price list with the standard promotions.
    pub fn standard() -> Self {
        PricingConfig {
            catalogue: Catalogue::standard().iter().cloned().collect(),
            promotions: standard_promotions(),
        }
    }

    /// Checks the catalogue and that every promotion is sane and targets a
    /// SKU the catalogue sells.
    pub fn validate(&self) -> CoreResult<()> {
        let catalogue = Catalogue::new(self.catalogue.iter().cloned())?;
        validate_promotions(&catalogue, &self.promotions)
    }

    /// Validates and builds the runtime pricing setup.
    pub fn into_pricing(self) -> CoreResult<Pricing> {
        let catalogue = Catalogue::new(self.catalogue)?;
        validate_promotions(&catalogue, &self.promotions)?;

        Ok(Pricing {
            catalogue,
            promotions: self.promotions,
        })
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn validate_promotions(catalogue: &Catalogue, promotions: &[Promotion]) -> CoreResult<()> {
    for promotion in promotions {
        promotion.validate()?;

        if !catalogue.contains(promotion.sku()) {
            return Err(ValidationError::UnknownSku(promotion.sku().to_string()).into());
        }
        debug!(sku = %promotion.sku(), "Promotion validated");
    }

    Ok(())
}

/// A validated catalogue and its promotions, ready to open checkouts.
#[derive(Debug, Clone)]
pub struct Pricing {
    catalogue: Catalogue,
    promotions: Vec<Promotion>,
}

impl Pricing {
    /// Opens a fresh checkout. Each one gets its own copy of the promotions.
    pub fn checkout(&self) -> Checkout<'_> {
        Checkout::with_catalogue(&self.catalogue, self.promotions.clone())
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

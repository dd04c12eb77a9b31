//! Quick cost estimate for a new company licence.
//!
//! | Component   | Amount |
//! |-------------|--------|
//! | Base        | fixed licence fee |
//! | Activities  | per licensed activity |
//! | Shareholders| per shareholder |
//! | Trade name  | flat fee when a trade name is requested |
//! | Location    | flat fee once a location is chosen |
//!
//! The total is the sum of the five components.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use setup_core::calculations::CostEstimator;
//! use setup_core::{BusinessLocation, EstimateSelections, PricingSchedule};
//!
//! let pricing = PricingSchedule::default();
//! let selections = EstimateSelections {
//!     business_category: None,
//!     number_of_activities: 3,
//!     number_of_shareholders: 2,
//!     has_trade_name: true,
//!     business_location: Some(BusinessLocation::DragonMartOne),
//! };
//!
//! let costs = CostEstimator::new(&pricing).estimate(&selections);
//!
//! assert_eq!(costs.total_cost(), dec!(14000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::{CostBreakdown, EstimateSelections, PricingSchedule};

/// Derives cost components from a set of selections under one pricing
/// schedule. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator<'a> {
    pricing: &'a PricingSchedule,
}

impl<'a> CostEstimator<'a> {
    pub fn new(pricing: &'a PricingSchedule) -> Self {
        Self { pricing }
    }

    pub fn estimate(
        &self,
        selections: &EstimateSelections,
    ) -> CostBreakdown {
        let costs = CostBreakdown::new(
            self.base_cost(),
            self.activity_cost(selections.number_of_activities),
            self.shareholder_cost(selections.number_of_shareholders),
            self.trade_name_cost(selections.has_trade_name),
            self.location_cost(selections.business_location.is_some()),
        );
        debug!(total = %costs.total_cost(), "estimated setup cost");
        costs
    }

    fn base_cost(&self) -> Decimal {
        self.pricing.base_cost
    }

    fn activity_cost(
        &self,
        activities: u8,
    ) -> Decimal {
        Decimal::from(activities) * self.pricing.per_activity
    }

    fn shareholder_cost(
        &self,
        shareholders: u8,
    ) -> Decimal {
        Decimal::from(shareholders) * self.pricing.per_shareholder
    }

    fn trade_name_cost(
        &self,
        has_trade_name: bool,
    ) -> Decimal {
        if has_trade_name {
            self.pricing.trade_name
        } else {
            Decimal::ZERO
        }
    }

    fn location_cost(
        &self,
        has_location: bool,
    ) -> Decimal {
        if has_location {
            self.pricing.location
        } else {
            Decimal::ZERO
        }
    }
}

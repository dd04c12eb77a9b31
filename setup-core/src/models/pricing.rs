use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee schedule used by the cost estimator, in AED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSchedule {
    #[serde(alias = "base")]
    pub base_cost: Decimal,
    pub per_activity: Decimal,
    pub per_shareholder: Decimal,
    pub trade_name: Decimal,
    pub location: Decimal,
}

impl Default for PricingSchedule {
    fn default() -> Self {
        Self {
            base_cost: Decimal::from(5000),
            per_activity: Decimal::from(1000),
            per_shareholder: Decimal::from(500),
            trade_name: Decimal::from(2000),
            location: Decimal::from(3000),
        }
    }
}

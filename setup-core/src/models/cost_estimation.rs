use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::calculations::CostEstimator;
use crate::{BusinessCategory, BusinessLocation, PricingSchedule};

/// What the user has chosen so far in the quick estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSelections {
    pub business_category: Option<BusinessCategory>,
    pub number_of_activities: u8,
    pub number_of_shareholders: u8,
    pub has_trade_name: bool,
    pub business_location: Option<BusinessLocation>,
}

/// A partial set of selections produced by one estimate step. `None`
/// leaves the existing selection untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateUpdate {
    pub business_category: Option<BusinessCategory>,
    pub number_of_activities: Option<u8>,
    pub number_of_shareholders: Option<u8>,
    pub has_trade_name: Option<bool>,
    pub business_location: Option<BusinessLocation>,
}

/// Cost components derived from the selections. The total is never stored;
/// it is summed from the components on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    base_cost: Decimal,
    activity_cost: Decimal,
    shareholder_cost: Decimal,
    trade_name_cost: Decimal,
    location_cost: Decimal,
}

impl CostBreakdown {
    pub(crate) fn new(
        base_cost: Decimal,
        activity_cost: Decimal,
        shareholder_cost: Decimal,
        trade_name_cost: Decimal,
        location_cost: Decimal,
    ) -> Self {
        Self {
            base_cost,
            activity_cost,
            shareholder_cost,
            trade_name_cost,
            location_cost,
        }
    }

    pub fn base_cost(&self) -> Decimal {
        self.base_cost
    }

    pub fn activity_cost(&self) -> Decimal {
        self.activity_cost
    }

    pub fn shareholder_cost(&self) -> Decimal {
        self.shareholder_cost
    }

    pub fn trade_name_cost(&self) -> Decimal {
        self.trade_name_cost
    }

    pub fn location_cost(&self) -> Decimal {
        self.location_cost
    }

    pub fn total_cost(&self) -> Decimal {
        self.base_cost
            + self.activity_cost
            + self.shareholder_cost
            + self.trade_name_cost
            + self.location_cost
    }
}

impl Serialize for CostBreakdown {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CostBreakdown", 6)?;
        state.serialize_field("base_cost", &self.base_cost)?;
        state.serialize_field("activity_cost", &self.activity_cost)?;
        state.serialize_field("shareholder_cost", &self.shareholder_cost)?;
        state.serialize_field("trade_name_cost", &self.trade_name_cost)?;
        state.serialize_field("location_cost", &self.location_cost)?;
        state.serialize_field("total_cost", &self.total_cost())?;
        state.end()
    }
}

/// The quick-estimate record: selections plus the costs derived from them.
///
/// Deserialising only reads the pricing and selections back; costs are
/// recomputed so a stored payload can never carry a stale total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EstimateSnapshot")]
pub struct CostEstimationData {
    pricing: PricingSchedule,
    selections: EstimateSelections,
    costs: CostBreakdown,
}

#[derive(Deserialize)]
struct EstimateSnapshot {
    #[serde(default)]
    pricing: PricingSchedule,
    selections: EstimateSelections,
}

impl From<EstimateSnapshot> for CostEstimationData {
    fn from(snapshot: EstimateSnapshot) -> Self {
        let mut data = Self::new(snapshot.pricing);
        data.selections = snapshot.selections;
        data.recompute();
        data
    }
}

impl Default for CostEstimationData {
    fn default() -> Self {
        Self::new(PricingSchedule::default())
    }
}

impl CostEstimationData {
    pub fn new(pricing: PricingSchedule) -> Self {
        let selections = EstimateSelections::default();
        let costs = CostEstimator::new(&pricing).estimate(&selections);
        Self {
            pricing,
            selections,
            costs,
        }
    }

    pub fn pricing(&self) -> &PricingSchedule {
        &self.pricing
    }

    pub fn selections(&self) -> &EstimateSelections {
        &self.selections
    }

    pub fn costs(&self) -> &CostBreakdown {
        &self.costs
    }

    /// Merges a partial update into the selections and recomputes every
    /// cost component from the merged result.
    pub fn update_costs(
        &mut self,
        update: EstimateUpdate,
    ) {
        let selections = &mut self.selections;
        if let Some(category) = update.business_category {
            selections.business_category = Some(category);
        }
        if let Some(count) = update.number_of_activities {
            selections.number_of_activities = count;
        }
        if let Some(count) = update.number_of_shareholders {
            selections.number_of_shareholders = count;
        }
        if let Some(has_trade_name) = update.has_trade_name {
            selections.has_trade_name = has_trade_name;
        }
        if let Some(location) = update.business_location {
            selections.business_location = Some(location);
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.costs = CostEstimator::new(&self.pricing).estimate(&self.selections);
    }
}

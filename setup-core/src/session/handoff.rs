use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CostEstimationData;
use crate::calculations::common::round_half_up;

/// Step number under which a finished quick estimate is handed to the
/// company-setup wizard.
pub const QUICK_ESTIMATE_STEP: u32 = 1;

const DEFAULT_TOTAL_STEPS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StepPayload {
    QuickEstimate(CostEstimationData),
    Snapshot(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepData {
    pub data: StepPayload,
    pub is_valid: bool,
    pub is_visited: bool,
}

/// Step-keyed store owned by the caller and passed by reference to the
/// wizards that read or write it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStore {
    total_steps: u32,
    steps: BTreeMap<u32, StepData>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_STEPS)
    }
}

impl SessionStore {
    pub fn new(total_steps: u32) -> Self {
        Self {
            total_steps,
            steps: BTreeMap::new(),
        }
    }

    /// Stores `data` for `step`, marking it visited.
    pub fn update_step_data(
        &mut self,
        step: u32,
        data: StepPayload,
        is_valid: bool,
    ) {
        debug!(step, is_valid, "session step updated");
        self.steps.insert(
            step,
            StepData {
                data,
                is_valid,
                is_visited: true,
            },
        );
    }

    pub fn step(
        &self,
        step: u32,
    ) -> Option<&StepData> {
        self.steps.get(&step)
    }

    pub fn is_step_valid(
        &self,
        step: u32,
    ) -> bool {
        self.steps.get(&step).is_some_and(|s| s.is_valid)
    }

    /// The quick estimate handed over for prefill, if one was stored.
    pub fn quick_estimate(&self) -> Option<&CostEstimationData> {
        match self.steps.get(&QUICK_ESTIMATE_STEP).map(|s| &s.data) {
            Some(StepPayload::QuickEstimate(estimate)) => Some(estimate),
            _ => None,
        }
    }

    /// Percentage of steps marked valid, to two places.
    pub fn progress(&self) -> Decimal {
        if self.total_steps == 0 {
            return Decimal::ZERO;
        }
        let valid = self.steps.values().filter(|s| s.is_valid).count();
        round_half_up(
            Decimal::from(valid) / Decimal::from(self.total_steps) * Decimal::ONE_HUNDRED,
        )
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

//! The concrete wizards: company setup and quick cost estimate, plus the
//! account forms that front them.

pub mod account;
pub mod company_setup;
mod error;
pub mod forms;
pub mod quick_estimate;

pub use company_setup::{ActiveStep, COMPANY_SETUP_STEPS, CompanySetupFlow, CompanySetupPatch, Prefill};
pub use error::FlowError;
pub use quick_estimate::{EstimateForm, QUICK_ESTIMATE_STEPS, QuickEstimateFlow};

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// The wizard moved to step `step`.
    Advanced { step: usize },
    /// Same entity, next sub-step.
    SubStepAdvanced { entity: usize, sub_step: crate::wizard::SubStep },
    /// First sub-step of the next entity.
    EntityAdvanced { entity: usize },
    /// Submitting the terminal step changes nothing.
    AtEnd,
}

/// What a back action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackEvent {
    SubStep,
    Entity,
    Step,
    AtStart,
}

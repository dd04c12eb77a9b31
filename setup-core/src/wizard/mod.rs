//! Generic wizard machinery: the top-level step sequence and the
//! sub-stepped, per-entity step controller used for people.

mod controller;
mod entity_step;
mod person_form;

pub use controller::{StepDefinition, WizardController, WizardRecord};
pub use entity_step::{
    EntityKind, EntityStepController, ManagerKind, ShareholderKind, StepError, StepProgress,
    SubStep,
};
pub use person_form::{PersonForm, SubStepOutput};

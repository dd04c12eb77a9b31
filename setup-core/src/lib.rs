pub mod calculations;
pub mod flows;
pub mod models;
pub mod services;
pub mod session;
pub mod validation;
pub mod wizard;

pub use models::*;
pub use services::{ServiceError, TradeNameChecker};
pub use validation::{BatchError, BatchPolicy, FieldError, ValidationErrors};
pub use wizard::{StepDefinition, WizardController, WizardRecord};

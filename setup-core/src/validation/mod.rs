//! Field-level and cross-entity validation.
//!
//! Field rules run when a sub-step is committed and report every failing
//! field at once. Batch rules run only when a whole entity collection is
//! complete and report the first rule that fails.

mod batch;
mod error;
pub mod fields;
mod rules;

pub use batch::{
    BatchPolicy, OWNERSHIP_TOLERANCE, are_emirates_ids_unique, are_names_unique,
    is_ownership_complete, validate_shareholders, validate_trade_names,
};
pub use error::{BatchError, FieldError, ValidationErrors};
pub use rules::{FieldValidator, MAX_ENTITY_COUNT, MIN_ENTITY_COUNT, MIN_PASSWORD_LENGTH};

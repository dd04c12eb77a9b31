use thiserror::Error;

use crate::validation::{BatchError, ValidationErrors};
use crate::wizard::StepError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Fields(#[from] ValidationErrors),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("{label} {position} has not been completed")]
    Incomplete { label: &'static str, position: usize },

    #[error("'{action}' is only available on the {expected} step")]
    WrongStep {
        action: &'static str,
        expected: &'static str,
    },
}

impl From<StepError> for FlowError {
    fn from(err: StepError) -> Self {
        match err {
            StepError::Fields(errors) => Self::Fields(errors),
            StepError::Batch(err) => Self::Batch(err),
            StepError::Incomplete { label, position } => Self::Incomplete { label, position },
        }
    }
}

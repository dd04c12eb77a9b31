use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A partially entered person. Each section is filled once its sub-step
/// has been validated and committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub personal: Option<PersonalInfo>,
    pub identity: Option<Identity>,
    pub share_percentage: Option<Decimal>,
}

impl PersonDraft {
    pub fn is_blank(&self) -> bool {
        self.personal.is_none() && self.identity.is_none() && self.share_percentage.is_none()
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Identity, PersonDraft, PersonalInfo};

/// A fully entered shareholder. `id` is the 1-based position in the
/// shareholder list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shareholder {
    pub id: u32,
    #[serde(flatten)]
    pub personal: PersonalInfo,
    pub identity: Identity,
    pub share_percentage: Decimal,
}

impl Shareholder {
    pub fn to_draft(&self) -> PersonDraft {
        PersonDraft {
            personal: Some(self.personal.clone()),
            identity: Some(self.identity.clone()),
            share_percentage: Some(self.share_percentage),
        }
    }
}

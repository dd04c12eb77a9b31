use serde::{Deserialize, Serialize};

use crate::{Identity, PersonDraft, PersonalInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    pub identity: Identity,
}

impl Manager {
    pub fn to_draft(&self) -> PersonDraft {
        PersonDraft {
            personal: Some(self.personal.clone()),
            identity: Some(self.identity.clone()),
            share_percentage: None,
        }
    }
}

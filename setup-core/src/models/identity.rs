use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DocumentRef;

/// How a person proves their identity. Residents carry an Emirates ID,
/// everyone else a passport; a person never has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Resident(ResidentIdentity),
    Foreign(ForeignIdentity),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentIdentity {
    pub emirates_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignIdentity {
    pub passport_number: String,
    pub passport_expiry: NaiveDate,
    pub country_code: String,
    pub passport_copy: DocumentRef,
}

impl Identity {
    pub fn is_uae_resident(&self) -> bool {
        matches!(self, Self::Resident(_))
    }

    pub fn emirates_id(&self) -> Option<&str> {
        match self {
            Self::Resident(resident) => Some(resident.emirates_id.as_str()),
            Self::Foreign(_) => None,
        }
    }
}

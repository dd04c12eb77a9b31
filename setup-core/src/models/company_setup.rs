use serde::{Deserialize, Serialize};

use crate::{Activity, BusinessCategory, Manager, PersonDraft, Shareholder, TradeName};

/// The company-setup record, filled in step by step. Fields for steps that
/// have not been completed keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySetupData {
    pub business_category: Option<BusinessCategory>,
    pub activities: Vec<Activity>,
    pub trade_name: Option<TradeName>,
    pub number_of_shareholders: u8,
    pub shareholders: Vec<Shareholder>,
    pub manager: Option<Manager>,
    /// Per-shareholder drafts, kept in step with `shareholders` once the
    /// shareholder step has been completed.
    #[serde(skip)]
    pub shareholder_drafts: Vec<PersonDraft>,
}

impl CompanySetupData {
    pub fn manager_draft(&self) -> PersonDraft {
        self.manager
            .as_ref()
            .map(Manager::to_draft)
            .unwrap_or_default()
    }
}

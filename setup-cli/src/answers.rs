//! Drives the company setup wizard from a TOML answer file.
//!
//! ```toml
//! business_category = "Technology"
//! activities = ["A1", "A3"]
//!
//! [trade_name]
//! reserved = false
//! suggested_names = ["Falcon Labs", "Desert Code", "Oasis Soft"]
//!
//! [[shareholders]]
//! name = "Aisha Al Mansoori"
//! email = "aisha@example.ae"
//! phone = "+971501234567"
//! emirates_id = "784-1988-1234567-1"
//! share_percentage = 100
//!
//! [manager]
//! name = "Omar Haddad"
//! email = "omar@example.ae"
//! phone = "0521112233"
//! is_uae_resident = false
//! passport_number = "N1234567"
//! passport_expiry = "2031-06-30"
//! country_code = "JO"
//! passport_file = "omar_passport.pdf"
//! ```
//!
//! Answers are typed into the same forms an interactive user fills, so the
//! wizard applies every rule it normally would.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use setup_core::flows::{ActiveStep, CompanySetupFlow, FlowError, FlowEvent};
use setup_core::services::{TradeNameCheck, check_name};
use setup_core::wizard::PersonForm;
use setup_core::{BusinessCategory, DocumentRef, TradeNameChecker};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("cannot read answer file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid answer file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown business category '{0}'")]
    UnknownCategory(String),

    #[error("{step}: {given} answered, {expected} expected")]
    PeopleCount {
        step: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("{step}: {error}")]
    Step {
        step: &'static str,
        error: FlowError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TradeNameAnswers {
    pub reserved: Option<bool>,
    pub reserved_document: Option<String>,
    pub suggested_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonAnswers {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_uae_resident: Option<bool>,
    pub emirates_id: String,
    pub passport_number: String,
    pub passport_expiry: String,
    pub country_code: String,
    pub passport_file: Option<String>,
    pub share_percentage: Option<Decimal>,
}

impl PersonAnswers {
    fn to_form(&self) -> PersonForm {
        PersonForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            is_uae_resident: Some(self.is_uae_resident.unwrap_or(true)),
            emirates_id: self.emirates_id.clone(),
            passport_number: self.passport_number.clone(),
            passport_expiry: self.passport_expiry.clone(),
            country_code: self.country_code.clone(),
            passport_copy: self.passport_file.as_deref().map(DocumentRef::new),
            share_percentage: self
                .share_percentage
                .map(|p| p.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SetupAnswers {
    /// Category id or name. May be left out when a quick estimate is
    /// handed over.
    pub business_category: Option<String>,
    pub activities: Vec<String>,
    pub trade_name: TradeNameAnswers,
    /// Defaults to the number of `[[shareholders]]` entries.
    pub shareholder_count: Option<u8>,
    pub shareholders: Vec<PersonAnswers>,
    pub manager: Option<PersonAnswers>,
}

/// Advisory result for one suggested name. `check` is `None` when the
/// service call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCheckNote {
    pub name: String,
    pub check: Option<TradeNameCheck>,
}

impl SetupAnswers {
    pub fn load(path: &Path) -> Result<Self, AnswerError> {
        let text = fs::read_to_string(path).map_err(|source| AnswerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, AnswerError> {
        Ok(toml::from_str(text)?)
    }

    /// Answers every step until the flow reaches "Complete Setup". Suggested
    /// names are checked through `checker` before the trade-name step is
    /// committed; failed checks only leave the name unannotated.
    pub async fn apply(
        &self,
        flow: &mut CompanySetupFlow,
        checker: &dyn TradeNameChecker,
    ) -> Result<Vec<NameCheckNote>, AnswerError> {
        let mut notes = Vec::new();

        loop {
            let step = flow.current_step().title;
            match flow.active() {
                ActiveStep::Complete => break,
                ActiveStep::ShareholderDetails(_) => {
                    self.fill_people(flow, &self.shareholders, step)?;
                    continue;
                }
                ActiveStep::ManagerDetails(_) => {
                    self.fill_people(flow, self.manager.as_slice(), step)?;
                    continue;
                }
                _ => {}
            }

            self.fill_form(flow.active_mut())?;
            if matches!(flow.active(), ActiveStep::TradeName(_)) {
                notes = Self::check_names(flow, checker).await;
            }

            flow.submit()
                .map_err(|error| AnswerError::Step { step, error })?;
        }

        Ok(notes)
    }

    fn fill_form(
        &self,
        active: &mut ActiveStep,
    ) -> Result<(), AnswerError> {
        match active {
            ActiveStep::BusinessCategory(form) => {
                if let Some(answer) = &self.business_category {
                    let category = BusinessCategory::parse(answer)
                        .ok_or_else(|| AnswerError::UnknownCategory(answer.clone()))?;
                    if !form.select(category.id) && form.category_id() != Some(category.id) {
                        warn!(
                            answered = %category.name,
                            "category is fixed by the quick estimate, keeping it"
                        );
                    }
                }
            }
            ActiveStep::ActivitySelection(form) => {
                for code in &self.activities {
                    if !form.is_selected(code) {
                        form.toggle(code);
                    }
                }
            }
            ActiveStep::TradeName(form) => {
                if self.trade_name.reserved.is_some() {
                    form.has_reserved_name = self.trade_name.reserved;
                }
                form.reserved_document =
                    self.trade_name.reserved_document.as_deref().map(DocumentRef::new);
                form.suggested_names = self.trade_name.suggested_names.clone();
            }
            ActiveStep::ShareholderCount(form) => {
                let count = self.shareholder_count.map(usize::from).or_else(|| {
                    (!self.shareholders.is_empty()).then_some(self.shareholders.len())
                });
                if let Some(count) = count {
                    form.value = count.to_string();
                }
            }
            ActiveStep::ShareholderDetails(_)
            | ActiveStep::ManagerDetails(_)
            | ActiveStep::Complete => {}
        }
        Ok(())
    }

    async fn check_names(
        flow: &mut CompanySetupFlow,
        checker: &dyn TradeNameChecker,
    ) -> Vec<NameCheckNote> {
        let count = match flow.active() {
            ActiveStep::TradeName(form) => form.suggested_names.len(),
            _ => 0,
        };

        let mut notes = Vec::new();
        for index in 0..count {
            let Some((ticket, name)) = flow.dispatch_name_check(index) else {
                continue;
            };
            let result = check_name(checker, &name).await;
            let check = result.as_ref().ok().cloned();
            if !flow.apply_name_check(ticket, result) {
                debug!(name, "name check went stale");
            }
            notes.push(NameCheckNote { name, check });
        }
        notes
    }

    /// Types each person into the mounted person step and commits every
    /// sub-step.
    fn fill_people(
        &self,
        flow: &mut CompanySetupFlow,
        people: &[PersonAnswers],
        step: &'static str,
    ) -> Result<(), AnswerError> {
        let expected = match flow.active() {
            ActiveStep::ShareholderDetails(controller) => controller.entity_count(),
            ActiveStep::ManagerDetails(controller) => controller.entity_count(),
            _ => 0,
        };
        if people.len() != expected {
            return Err(AnswerError::PeopleCount {
                step,
                expected,
                given: people.len(),
            });
        }

        for person in people {
            if let Some(form) = person_form(flow) {
                *form = person.to_form();
            }
            loop {
                let event = flow
                    .submit()
                    .map_err(|error| AnswerError::Step { step, error })?;
                if !matches!(event, FlowEvent::SubStepAdvanced { .. }) {
                    break;
                }
            }
        }
        Ok(())
    }
}

fn person_form(flow: &mut CompanySetupFlow) -> Option<&mut PersonForm> {
    match flow.active_mut() {
        ActiveStep::ShareholderDetails(controller) => Some(controller.form_mut()),
        ActiveStep::ManagerDetails(controller) => Some(controller.form_mut()),
        _ => None,
    }
}

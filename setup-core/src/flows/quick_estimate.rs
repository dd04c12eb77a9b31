//! The six-step quick cost estimate.

use tracing::info;

use crate::flows::forms::{CategoryForm, CountForm};
use crate::flows::{BackEvent, FlowError, FlowEvent};
use crate::session::{QUICK_ESTIMATE_STEP, SessionStore, StepPayload};
use crate::validation::{FieldValidator, ValidationErrors, fields};
use crate::wizard::{StepDefinition, WizardController, WizardRecord};
use crate::{BusinessLocation, CostEstimationData, EstimateSelections, EstimateUpdate, PricingSchedule};

pub const QUICK_ESTIMATE_STEPS: &[StepDefinition; 6] = &[
    StepDefinition::new("Business Category", "Select your business category"),
    StepDefinition::new("Number of Activities", "How many business activities you need"),
    StepDefinition::new("Number of Shareholders", "How many shareholders the company will have"),
    StepDefinition::new("Trade Name", "Whether you need a trade name"),
    StepDefinition::new("Business Location", "Where the business will operate"),
    StepDefinition::new("Cost Summary", "Your estimated setup cost"),
];

const SUMMARY: usize = 5;

impl WizardRecord for CostEstimationData {
    type Patch = EstimateUpdate;

    fn merge(
        &mut self,
        patch: EstimateUpdate,
    ) {
        self.update_costs(patch);
    }
}

/// Raw answers for every estimate step. Values survive going back and
/// forth between steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateForm {
    pub category_id: Option<u32>,
    pub number_of_activities: String,
    pub number_of_shareholders: String,
    pub has_trade_name: Option<bool>,
    pub business_location: String,
}

impl EstimateForm {
    pub fn from_selections(selections: &EstimateSelections) -> Self {
        let count = |n: u8| if n == 0 { String::new() } else { n.to_string() };
        Self {
            category_id: selections.business_category.as_ref().map(|c| c.id),
            number_of_activities: count(selections.number_of_activities),
            number_of_shareholders: count(selections.number_of_shareholders),
            has_trade_name: Some(selections.has_trade_name),
            business_location: selections
                .business_location
                .map(|l| l.label().to_string())
                .unwrap_or_default(),
        }
    }

    /// The update produced by committing step `index`. The summary step
    /// produces none.
    pub fn validate_step(
        &self,
        index: usize,
    ) -> Result<Option<EstimateUpdate>, ValidationErrors> {
        let update = match index {
            0 => EstimateUpdate {
                business_category: Some(CategoryForm::new(self.category_id).validate()?),
                ..Default::default()
            },
            1 => EstimateUpdate {
                number_of_activities: Some(
                    CountForm::activities(self.number_of_activities.as_str()).validate()?,
                ),
                ..Default::default()
            },
            2 => EstimateUpdate {
                number_of_shareholders: Some(
                    CountForm::shareholders(self.number_of_shareholders.as_str()).validate()?,
                ),
                ..Default::default()
            },
            3 => {
                let mut v = FieldValidator::new();
                let has_trade_name =
                    v.choice(fields::HAS_TRADE_NAME, self.has_trade_name, "Please select an option");
                v.finish(|| has_trade_name)?;
                EstimateUpdate {
                    has_trade_name,
                    ..Default::default()
                }
            }
            4 => EstimateUpdate {
                business_location: Some(self.location()?),
                ..Default::default()
            },
            _ => return Ok(None),
        };
        Ok(Some(update))
    }

    fn location(&self) -> Result<BusinessLocation, ValidationErrors> {
        let mut v = FieldValidator::new();
        let label = v.required(
            fields::BUSINESS_LOCATION,
            &self.business_location,
            "Please select a business location",
        );
        let location = label.as_deref().and_then(BusinessLocation::parse);
        if label.is_some() && location.is_none() {
            v.reject(fields::BUSINESS_LOCATION, "Unknown business location");
        }
        v.finish(|| location)
    }
}

/// Quick estimate: every committed step goes through
/// [`CostEstimationData::update_costs`].
#[derive(Debug)]
pub struct QuickEstimateFlow {
    wizard: WizardController<CostEstimationData>,
    form: EstimateForm,
}

impl Default for QuickEstimateFlow {
    fn default() -> Self {
        Self::new(PricingSchedule::default())
    }
}

impl QuickEstimateFlow {
    pub fn new(pricing: PricingSchedule) -> Self {
        let record = CostEstimationData::new(pricing);
        let form = EstimateForm {
            has_trade_name: None,
            ..EstimateForm::from_selections(record.selections())
        };
        Self {
            wizard: WizardController::new(QUICK_ESTIMATE_STEPS, record),
            form,
        }
    }

    pub fn step_index(&self) -> usize {
        self.wizard.current_index()
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        self.wizard.current_step()
    }

    pub fn is_at_summary(&self) -> bool {
        self.step_index() == SUMMARY
    }

    pub fn form(&self) -> &EstimateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EstimateForm {
        &mut self.form
    }

    pub fn estimate(&self) -> &CostEstimationData {
        self.wizard.record()
    }

    pub fn into_estimate(self) -> CostEstimationData {
        self.wizard.into_record()
    }

    pub fn submit(&mut self) -> Result<FlowEvent, FlowError> {
        let Some(update) = self.form.validate_step(self.step_index())? else {
            return Ok(FlowEvent::AtEnd);
        };
        self.wizard.advance(update);
        info!(
            step = self.step_index(),
            total = %self.estimate().costs().total_cost(),
            "quick estimate advanced"
        );
        Ok(FlowEvent::Advanced {
            step: self.step_index(),
        })
    }

    pub fn back(&mut self) -> BackEvent {
        if self.wizard.retreat() {
            BackEvent::Step
        } else {
            BackEvent::AtStart
        }
    }

    /// Hands the finished estimate to the company-setup wizard through the
    /// session store. Only available on the summary step.
    pub fn continue_to_company_setup(
        &self,
        session: &mut SessionStore,
    ) -> Result<(), FlowError> {
        if !self.is_at_summary() {
            return Err(FlowError::WrongStep {
                action: "continue to company setup",
                expected: QUICK_ESTIMATE_STEPS[SUMMARY].title,
            });
        }
        session.update_step_data(
            QUICK_ESTIMATE_STEP,
            StepPayload::QuickEstimate(self.estimate().clone()),
            true,
        );
        info!("quick estimate handed over to company setup");
        Ok(())
    }
}

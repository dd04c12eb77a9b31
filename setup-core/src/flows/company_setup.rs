//! The seven-step company setup wizard.

use tracing::{debug, info};

use crate::flows::forms::{ActivityForm, CategoryForm, CountForm, TradeNameForm};
use crate::flows::{BackEvent, FlowError, FlowEvent};
use crate::services::{NameCheckTicket, NameCheckTracker, ServiceError, TradeNameCheck};
use crate::session::SessionStore;
use crate::validation::BatchPolicy;
use crate::wizard::{
    EntityKind, EntityStepController, ManagerKind, ShareholderKind, StepDefinition, StepProgress,
    WizardController, WizardRecord,
};
use crate::{
    Activity, BusinessCategory, CompanySetupData, Manager, PersonDraft, Shareholder, TradeName,
};

pub const COMPANY_SETUP_STEPS: &[StepDefinition; 7] = &[
    StepDefinition::new("Business Category", "Select your business category"),
    StepDefinition::new("Activity Selection", "Choose your business activities"),
    StepDefinition::new("Trade Name", "Provide or reserve your trade name"),
    StepDefinition::new("Number of Shareholders", "How many shareholders will the company have"),
    StepDefinition::new("Shareholder Details", "Enter the details of each shareholder"),
    StepDefinition::new("Manager Details", "Enter the details of the company manager"),
    StepDefinition::new("Complete Setup", "Review and finish your company setup"),
];

const SHAREHOLDER_DETAILS: usize = 4;

/// Output of one completed company-setup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanySetupPatch {
    BusinessCategory(BusinessCategory),
    Activities(Vec<Activity>),
    TradeName(TradeName),
    /// Replaces every shareholder with `n` blank drafts.
    ShareholderCount(u8),
    Shareholders(Vec<Shareholder>),
    Manager(Manager),
}

impl WizardRecord for CompanySetupData {
    type Patch = CompanySetupPatch;

    fn merge(
        &mut self,
        patch: CompanySetupPatch,
    ) {
        match patch {
            CompanySetupPatch::BusinessCategory(category) => {
                let changed = self.business_category.as_ref().map(|c| c.id) != Some(category.id);
                if changed {
                    self.activities.clear();
                }
                self.business_category = Some(category);
            }
            CompanySetupPatch::Activities(activities) => self.activities = activities,
            CompanySetupPatch::TradeName(trade_name) => self.trade_name = Some(trade_name),
            CompanySetupPatch::ShareholderCount(count) => {
                self.number_of_shareholders = count;
                self.shareholders.clear();
                self.shareholder_drafts = vec![PersonDraft::default(); usize::from(count)];
            }
            CompanySetupPatch::Shareholders(shareholders) => {
                self.shareholder_drafts = shareholders.iter().map(Shareholder::to_draft).collect();
                self.shareholders = shareholders;
            }
            CompanySetupPatch::Manager(manager) => self.manager = Some(manager),
        }
    }
}

/// Values taken from a quick estimate when the user continues into the
/// full setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub business_category: Option<BusinessCategory>,
    pub number_of_shareholders: Option<u8>,
}

impl Prefill {
    pub fn from_session(session: &SessionStore) -> Self {
        match session.quick_estimate() {
            Some(estimate) => {
                let selections = estimate.selections();
                Self {
                    business_category: selections.business_category.clone(),
                    number_of_shareholders: (selections.number_of_shareholders > 0)
                        .then_some(selections.number_of_shareholders),
                }
            }
            None => Self::default(),
        }
    }
}

/// The content mounted for the current wizard step.
#[derive(Debug, Clone)]
pub enum ActiveStep {
    BusinessCategory(CategoryForm),
    ActivitySelection(ActivityForm),
    TradeName(TradeNameForm),
    ShareholderCount(CountForm),
    ShareholderDetails(EntityStepController<ShareholderKind>),
    ManagerDetails(EntityStepController<ManagerKind>),
    Complete,
}

enum Outcome {
    Advance(CompanySetupPatch),
    Moved(FlowEvent),
}

/// Company setup: a [`WizardController`] over [`CompanySetupData`] with
/// the step content for each position.
#[derive(Debug)]
pub struct CompanySetupFlow {
    wizard: WizardController<CompanySetupData>,
    active: ActiveStep,
    prefill: Prefill,
    policy: BatchPolicy,
    name_checks: NameCheckTracker,
}

impl Default for CompanySetupFlow {
    fn default() -> Self {
        Self::new(BatchPolicy::default(), Prefill::default())
    }
}

impl CompanySetupFlow {
    pub fn new(
        policy: BatchPolicy,
        prefill: Prefill,
    ) -> Self {
        let wizard = WizardController::new(COMPANY_SETUP_STEPS, CompanySetupData::default());
        let active = ActiveStep::Complete;
        let mut flow = Self {
            wizard,
            active,
            prefill,
            policy,
            name_checks: NameCheckTracker::new(),
        };
        flow.mount();
        flow
    }

    /// Starts a setup prefilled from a quick estimate stored in `session`.
    pub fn from_session(
        session: &SessionStore,
        policy: BatchPolicy,
    ) -> Self {
        Self::new(policy, Prefill::from_session(session))
    }

    pub fn wizard(&self) -> &WizardController<CompanySetupData> {
        &self.wizard
    }

    pub fn record(&self) -> &CompanySetupData {
        self.wizard.record()
    }

    pub fn into_record(self) -> CompanySetupData {
        self.wizard.into_record()
    }

    pub fn step_index(&self) -> usize {
        self.wizard.current_index()
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        self.wizard.current_step()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.active, ActiveStep::Complete)
    }

    pub fn active(&self) -> &ActiveStep {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveStep {
        &mut self.active
    }

    /// Validates the mounted content and moves forward: to the next
    /// sub-step or entity inside a person step, otherwise to the next
    /// wizard step. On error nothing moves.
    pub fn submit(&mut self) -> Result<FlowEvent, FlowError> {
        let outcome = match &mut self.active {
            ActiveStep::BusinessCategory(form) => {
                Outcome::Advance(CompanySetupPatch::BusinessCategory(form.validate()?))
            }
            ActiveStep::ActivitySelection(form) => {
                Outcome::Advance(CompanySetupPatch::Activities(form.validate()?))
            }
            ActiveStep::TradeName(form) => {
                Outcome::Advance(CompanySetupPatch::TradeName(form.validate()?))
            }
            ActiveStep::ShareholderCount(form) => {
                Outcome::Advance(CompanySetupPatch::ShareholderCount(form.validate()?))
            }
            ActiveStep::ShareholderDetails(step) => match step.next_sub_step()? {
                StepProgress::Completed(shareholders) => {
                    Outcome::Advance(CompanySetupPatch::Shareholders(shareholders))
                }
                progress => Outcome::Moved(Self::inner_event(progress)),
            },
            ActiveStep::ManagerDetails(step) => match step.next_sub_step()? {
                StepProgress::Completed(mut managers) => match managers.pop() {
                    Some(manager) => Outcome::Advance(CompanySetupPatch::Manager(manager)),
                    None => Outcome::Moved(FlowEvent::AtEnd),
                },
                progress => Outcome::Moved(Self::inner_event(progress)),
            },
            ActiveStep::Complete => Outcome::Moved(FlowEvent::AtEnd),
        };

        match outcome {
            Outcome::Advance(patch) => {
                self.wizard.advance(patch);
                self.mount();
                info!(
                    step = self.step_index(),
                    title = self.current_step().title,
                    "company setup advanced"
                );
                Ok(FlowEvent::Advanced {
                    step: self.step_index(),
                })
            }
            Outcome::Moved(event) => Ok(event),
        }
    }

    /// Steps back: within a person step first by sub-step, then by entity;
    /// from the very first sub-step the wizard itself retreats.
    pub fn back(&mut self) -> BackEvent {
        let inner = match &mut self.active {
            ActiveStep::ShareholderDetails(step) => Self::inner_back(step),
            ActiveStep::ManagerDetails(step) => Self::inner_back(step),
            _ => None,
        };
        if let Some(event) = inner {
            return event;
        }

        if self.wizard.retreat() {
            self.mount();
            BackEvent::Step
        } else {
            BackEvent::AtStart
        }
    }

    fn inner_back<K: EntityKind>(
        step: &mut EntityStepController<K>,
    ) -> Option<BackEvent> {
        if step.prev_sub_step() {
            Some(BackEvent::SubStep)
        } else if step.prev_entity() {
            Some(BackEvent::Entity)
        } else {
            None
        }
    }

    fn inner_event<E>(progress: StepProgress<E>) -> FlowEvent {
        match progress {
            StepProgress::SubStep { entity, sub_step } => {
                FlowEvent::SubStepAdvanced { entity, sub_step }
            }
            StepProgress::NextEntity { entity } => FlowEvent::EntityAdvanced { entity },
            StepProgress::Completed(_) => FlowEvent::AtEnd,
        }
    }

    /// Builds the content for the current step from the record, falling
    /// back on the prefill for steps not yet completed.
    fn mount(&mut self) {
        self.name_checks.refocus();
        let record = self.wizard.record();
        self.active = match self.wizard.current_index() {
            0 => ActiveStep::BusinessCategory(match &self.prefill.business_category {
                Some(category) => CategoryForm::locked(category.id),
                None => CategoryForm::new(record.business_category.as_ref().map(|c| c.id)),
            }),
            1 => {
                let category_id = record.business_category.as_ref().map_or(0, |c| c.id);
                let selected = record.activities.iter().map(|a| a.code.clone()).collect();
                ActiveStep::ActivitySelection(ActivityForm::new(category_id, selected))
            }
            2 => ActiveStep::TradeName(TradeNameForm::from_record(record.trade_name.as_ref())),
            3 => {
                let count = match record.number_of_shareholders {
                    0 => self.prefill.number_of_shareholders.unwrap_or(1),
                    n => n,
                };
                ActiveStep::ShareholderCount(CountForm::shareholders(count.to_string()))
            }
            SHAREHOLDER_DETAILS => ActiveStep::ShareholderDetails(EntityStepController::new(
                record.shareholder_drafts.clone(),
                self.policy,
            )),
            5 => ActiveStep::ManagerDetails(EntityStepController::new(
                vec![record.manager_draft()],
                BatchPolicy::default(),
            )),
            _ => ActiveStep::Complete,
        };
        debug!(step = self.wizard.current_index(), "step mounted");
    }

    // ── trade-name advisory checks ───────────────────────────────────────

    /// Issues a ticket for checking suggested name `index`, or `None` when
    /// the trade-name step is not mounted or the name is blank. A blank name
    /// loses whatever result it carried.
    pub fn dispatch_name_check(
        &mut self,
        index: usize,
    ) -> Option<(NameCheckTicket, String)> {
        let ActiveStep::TradeName(form) = &self.active else {
            return None;
        };
        let name = form.suggested_names.get(index)?.trim().to_string();
        if name.is_empty() {
            self.name_checks.invalidate(index);
            return None;
        }
        Some((self.name_checks.dispatch(index), name))
    }

    /// Replaces the text of suggested name `index` on the mounted trade-name
    /// form. An edit drops the field's check result until it is re-checked.
    pub fn set_suggested_name(
        &mut self,
        index: usize,
        name: &str,
    ) -> bool {
        let ActiveStep::TradeName(form) = &mut self.active else {
            return false;
        };
        let Some(slot) = form.suggested_names.get_mut(index) else {
            return false;
        };
        if slot.as_str() != name {
            *slot = name.to_string();
            self.name_checks.invalidate(index);
        }
        true
    }

    /// Applies a check response unless it has gone stale. Returns whether
    /// it was applied.
    pub fn apply_name_check(
        &mut self,
        ticket: NameCheckTicket,
        response: Result<TradeNameCheck, ServiceError>,
    ) -> bool {
        self.name_checks.apply(ticket, response)
    }

    pub fn name_check(
        &self,
        index: usize,
    ) -> Option<&TradeNameCheck> {
        self.name_checks.result(index)
    }

    /// Removes suggested name `index` from the mounted trade-name form.
    pub fn remove_suggested_name(
        &mut self,
        index: usize,
    ) -> bool {
        let ActiveStep::TradeName(form) = &mut self.active else {
            return false;
        };
        if index >= form.suggested_names.len() {
            return false;
        }
        form.suggested_names.remove(index);
        self.name_checks.remove_field(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::session::{QUICK_ESTIMATE_STEP, StepPayload};
    use crate::validation::BatchError;
    use crate::wizard::{PersonForm, SubStep};
    use crate::{CostEstimationData, EstimateUpdate};

    fn fill_person(
        form: &mut PersonForm,
        name: &str,
        emirates_id: &str,
        share: &str,
    ) {
        form.name = name.into();
        form.email = format!("{}@example.com", name.to_lowercase());
        form.phone = "0501234567".into();
        form.is_uae_resident = Some(true);
        form.emirates_id = emirates_id.into();
        form.share_percentage = share.into();
    }

    fn category_form(flow: &mut CompanySetupFlow) -> &mut CategoryForm {
        match flow.active_mut() {
            ActiveStep::BusinessCategory(form) => form,
            other => panic!("expected category step, got {other:?}"),
        }
    }

    fn shareholder_step(flow: &mut CompanySetupFlow) -> &mut EntityStepController<ShareholderKind> {
        match flow.active_mut() {
            ActiveStep::ShareholderDetails(step) => step,
            other => panic!("expected shareholder step, got {other:?}"),
        }
    }

    /// Walks the flow up to (and including) the shareholder count step.
    fn flow_at_shareholders(count: &str) -> CompanySetupFlow {
        let mut flow = CompanySetupFlow::default();
        category_form(&mut flow).select(1);
        flow.submit().unwrap();
        if let ActiveStep::ActivitySelection(form) = flow.active_mut() {
            form.toggle("A1");
            form.toggle("A2");
        }
        flow.submit().unwrap();
        if let ActiveStep::TradeName(form) = flow.active_mut() {
            form.suggested_names = vec!["Falcon".into(), "Oasis".into(), "Dune".into()];
        }
        flow.submit().unwrap();
        if let ActiveStep::ShareholderCount(form) = flow.active_mut() {
            form.value = count.into();
        }
        flow.submit().unwrap();
        flow
    }

    fn submit_person(flow: &mut CompanySetupFlow) -> Result<FlowEvent, FlowError> {
        loop {
            match flow.submit()? {
                FlowEvent::SubStepAdvanced { .. } => continue,
                event => return Ok(event),
            }
        }
    }

    // =========================================================================
    // Single steps
    // =========================================================================

    #[test]
    fn starts_on_an_unlocked_empty_category_step() {
        let mut flow = CompanySetupFlow::default();

        assert_eq!(flow.step_index(), 0);
        assert_eq!(flow.current_step().title, "Business Category");
        assert!(!category_form(&mut flow).is_locked());
    }

    #[test]
    fn missing_category_blocks_advance() {
        let mut flow = CompanySetupFlow::default();

        let err = flow.submit().unwrap_err();

        assert!(matches!(err, FlowError::Fields(ref e) if e.has_field("business_category")));
        assert_eq!(flow.step_index(), 0);
    }

    #[test]
    fn shareholder_count_creates_blank_drafts() {
        let flow = flow_at_shareholders("3");

        assert_eq!(flow.step_index(), SHAREHOLDER_DETAILS);
        assert_eq!(flow.record().number_of_shareholders, 3);
        assert_eq!(flow.record().shareholder_drafts.len(), 3);
        assert!(flow.record().shareholder_drafts.iter().all(PersonDraft::is_blank));
    }

    #[test]
    fn changing_category_clears_activities() {
        let mut record = CompanySetupData::default();
        record.merge(CompanySetupPatch::BusinessCategory(BusinessCategory::find(1).unwrap()));
        record.merge(CompanySetupPatch::Activities(Activity::for_category(1)));

        record.merge(CompanySetupPatch::BusinessCategory(BusinessCategory::find(3).unwrap()));

        assert!(record.activities.is_empty());
    }

    // =========================================================================
    // Full walk-through
    // =========================================================================

    #[test]
    fn complete_setup_collects_every_step() {
        let mut flow = flow_at_shareholders("2");
        fill_person(shareholder_step(&mut flow).form_mut(), "Ana", "784-1990-1234567-1", "60");
        assert_eq!(submit_person(&mut flow), Ok(FlowEvent::EntityAdvanced { entity: 1 }));
        fill_person(shareholder_step(&mut flow).form_mut(), "Bo", "784-1991-7654321-2", "40");
        assert_eq!(submit_person(&mut flow), Ok(FlowEvent::Advanced { step: 5 }));

        if let ActiveStep::ManagerDetails(step) = flow.active_mut() {
            fill_person(step.form_mut(), "Cy", "784-1980-1111111-3", "");
        }
        assert_eq!(submit_person(&mut flow), Ok(FlowEvent::Advanced { step: 6 }));

        assert!(flow.is_complete());
        assert_eq!(flow.submit(), Ok(FlowEvent::AtEnd));
        let record = flow.into_record();
        assert_eq!(record.business_category.map(|c| c.id), Some(1));
        assert_eq!(record.activities.len(), 2);
        assert_eq!(
            record.shareholders.iter().map(|s| (s.id, s.share_percentage)).collect::<Vec<_>>(),
            vec![(1, dec!(60)), (2, dec!(40))]
        );
        assert_eq!(record.manager.map(|m| m.personal.name), Some("Cy".to_string()));
    }

    #[test]
    fn duplicate_shareholder_names_keep_the_flow_on_the_step() {
        let mut flow = flow_at_shareholders("2");
        fill_person(shareholder_step(&mut flow).form_mut(), "Ana", "784-1990-1234567-1", "50");
        submit_person(&mut flow).unwrap();
        fill_person(shareholder_step(&mut flow).form_mut(), "ANA", "784-1991-7654321-2", "50");

        let err = submit_person(&mut flow).unwrap_err();

        assert_eq!(
            err,
            FlowError::Batch(BatchError::DuplicateShareholderName { name: "ANA".into() })
        );
        assert_eq!(flow.step_index(), SHAREHOLDER_DETAILS);
        assert_eq!(shareholder_step(&mut flow).position(), (1, 2));
    }

    // =========================================================================
    // Back navigation
    // =========================================================================

    #[test]
    fn back_walks_sub_steps_then_entities_then_steps() {
        let mut flow = flow_at_shareholders("2");
        fill_person(shareholder_step(&mut flow).form_mut(), "Ana", "784-1990-1234567-1", "50");
        submit_person(&mut flow).unwrap();
        flow.submit().unwrap_err();
        fill_person(shareholder_step(&mut flow).form_mut(), "Bo", "784-1991-7654321-2", "50");
        flow.submit().unwrap();

        assert_eq!(flow.back(), BackEvent::SubStep);
        assert_eq!(flow.back(), BackEvent::Entity);
        assert_eq!(shareholder_step(&mut flow).form().name, "Ana");
        assert_eq!(flow.back(), BackEvent::Step);

        assert_eq!(flow.current_step().title, "Number of Shareholders");
        match flow.active() {
            ActiveStep::ShareholderCount(form) => assert_eq!(form.value, "2"),
            other => panic!("expected count step, got {other:?}"),
        }
    }

    #[test]
    fn remounted_person_step_starts_at_first_sub_step() {
        let mut flow = flow_at_shareholders("1");
        fill_person(shareholder_step(&mut flow).form_mut(), "Ana", "784-1990-1234567-1", "100");
        submit_person(&mut flow).unwrap();

        assert_eq!(flow.back(), BackEvent::Step);

        let step = shareholder_step(&mut flow);
        assert_eq!(step.position(), (0, 0));
        assert_eq!(step.current_sub_step(), SubStep::PersonalInfo);
        assert_eq!(step.form().share_percentage, "100");
    }

    #[test]
    fn back_at_first_step_reports_start() {
        let mut flow = CompanySetupFlow::default();

        assert_eq!(flow.back(), BackEvent::AtStart);
    }

    // =========================================================================
    // Quick-estimate prefill
    // =========================================================================

    #[test]
    fn quick_estimate_prefills_and_locks_category() {
        let mut estimate = CostEstimationData::default();
        estimate.update_costs(EstimateUpdate {
            business_category: BusinessCategory::find(4),
            number_of_shareholders: Some(3),
            ..Default::default()
        });
        let mut session = SessionStore::default();
        session.update_step_data(QUICK_ESTIMATE_STEP, StepPayload::QuickEstimate(estimate), true);

        let mut flow = CompanySetupFlow::from_session(&session, BatchPolicy::default());
        let form = category_form(&mut flow);

        assert!(form.is_locked());
        assert!(!form.select(1));
        flow.submit().unwrap();
        assert_eq!(flow.record().business_category.as_ref().map(|c| c.id), Some(4));

        flow.back();
        flow.submit().unwrap();
        if let ActiveStep::ActivitySelection(form) = flow.active_mut() {
            form.toggle("D2");
        }
        flow.submit().unwrap();
        if let ActiveStep::TradeName(form) = flow.active_mut() {
            form.has_reserved_name = Some(true);
            form.reserved_document = Some(crate::DocumentRef::new("reservation.pdf"));
        }
        flow.submit().unwrap();
        match flow.active() {
            ActiveStep::ShareholderCount(form) => assert_eq!(form.value, "3"),
            other => panic!("expected count step, got {other:?}"),
        }
    }

    // =========================================================================
    // Trade-name checks
    // =========================================================================

    fn flow_at_trade_name() -> CompanySetupFlow {
        let mut flow = CompanySetupFlow::default();
        category_form(&mut flow).select(2);
        flow.submit().unwrap();
        if let ActiveStep::ActivitySelection(form) = flow.active_mut() {
            form.toggle("B1");
        }
        flow.submit().unwrap();
        if let ActiveStep::TradeName(form) = flow.active_mut() {
            form.suggested_names = vec!["Falcon 1".into(), "  ".into(), "Oasis".into()];
        }
        flow
    }

    #[test]
    fn name_check_applies_while_step_is_focused() {
        let mut flow = flow_at_trade_name();
        let (ticket, name) = flow.dispatch_name_check(0).unwrap();

        let check = crate::services::HeuristicTradeNameChecker::evaluate(&name);

        assert!(flow.apply_name_check(ticket, Ok(check)));
        assert!(flow.name_check(0).is_some_and(|c| c.has_number));
    }

    #[test]
    fn blank_name_is_not_checked() {
        let mut flow = flow_at_trade_name();

        assert!(flow.dispatch_name_check(1).is_none());
        assert!(flow.dispatch_name_check(7).is_none());
    }

    #[test]
    fn name_check_arriving_after_leaving_the_step_is_discarded() {
        let mut flow = flow_at_trade_name();
        let (ticket, _) = flow.dispatch_name_check(2).unwrap();

        flow.back();

        assert!(!flow.apply_name_check(ticket, Ok(TradeNameCheck::default())));
        assert!(flow.name_check(2).is_none());
    }

    fn check_first_name(flow: &mut CompanySetupFlow) {
        let (ticket, name) = flow.dispatch_name_check(0).unwrap();
        let check = crate::services::HeuristicTradeNameChecker::evaluate(&name);
        assert!(flow.apply_name_check(ticket, Ok(check)));
    }

    #[test]
    fn blanking_a_checked_name_drops_its_result() {
        let mut flow = flow_at_trade_name();
        assert!(flow.set_suggested_name(0, "Dubai 24"));
        check_first_name(&mut flow);
        assert!(flow.name_check(0).is_some_and(|c| c.has_region_name));

        assert!(flow.set_suggested_name(0, "   "));

        assert!(flow.dispatch_name_check(0).is_none());
        assert!(flow.name_check(0).is_none());
    }

    #[test]
    fn editing_a_checked_name_drops_result_and_pending_check() {
        let mut flow = flow_at_trade_name();
        check_first_name(&mut flow);
        let (pending, _) = flow.dispatch_name_check(0).unwrap();

        assert!(flow.set_suggested_name(0, "Falcon Trading"));

        assert!(flow.name_check(0).is_none());
        assert!(!flow.apply_name_check(pending, Ok(TradeNameCheck::default())));
        assert!(!flow.set_suggested_name(9, "Dune"));
    }

    #[test]
    fn unchanged_text_keeps_the_result() {
        let mut flow = flow_at_trade_name();
        check_first_name(&mut flow);

        assert!(flow.set_suggested_name(0, "Falcon 1"));

        assert!(flow.name_check(0).is_some_and(|c| c.has_number));
    }

    #[test]
    fn removing_a_name_invalidates_pending_checks() {
        let mut flow = flow_at_trade_name();
        let (ticket, _) = flow.dispatch_name_check(2).unwrap();

        assert!(flow.remove_suggested_name(1));

        assert!(!flow.apply_name_check(ticket, Ok(TradeNameCheck::default())));
    }
}

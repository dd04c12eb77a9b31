use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::validation::{BatchError, BatchPolicy, ValidationErrors, validate_shareholders};
use crate::wizard::{PersonForm, SubStepOutput};
use crate::{Manager, PersonDraft, Shareholder};

/// One inner stage of a person step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubStep {
    PersonalInfo,
    ResidencyInfo,
    ShareInfo,
}

impl SubStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::ResidencyInfo => "Residency Info",
            Self::ShareInfo => "Share Info",
        }
    }
}

impl fmt::Display for SubStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The kind of person a step collects: which sub-steps it runs, how a
/// finished draft becomes an entity and which rules bind the whole list.
pub trait EntityKind {
    type Entity: Clone + fmt::Debug;

    const LABEL: &'static str;
    const SUB_STEPS: &'static [SubStep];

    /// Builds the entity at `position` (0-based), or `None` while a
    /// section of the draft is still missing.
    fn finalize(
        position: usize,
        draft: &PersonDraft,
    ) -> Option<Self::Entity>;

    fn validate_batch(
        entities: &[Self::Entity],
        policy: &BatchPolicy,
    ) -> Result<(), BatchError>;
}

#[derive(Debug, Clone, Copy)]
pub struct ShareholderKind;

impl EntityKind for ShareholderKind {
    type Entity = Shareholder;

    const LABEL: &'static str = "Shareholder";
    const SUB_STEPS: &'static [SubStep] = &[
        SubStep::PersonalInfo,
        SubStep::ResidencyInfo,
        SubStep::ShareInfo,
    ];

    fn finalize(
        position: usize,
        draft: &PersonDraft,
    ) -> Option<Shareholder> {
        Some(Shareholder {
            id: u32::try_from(position + 1).ok()?,
            personal: draft.personal.clone()?,
            identity: draft.identity.clone()?,
            share_percentage: draft.share_percentage?,
        })
    }

    fn validate_batch(
        entities: &[Shareholder],
        policy: &BatchPolicy,
    ) -> Result<(), BatchError> {
        validate_shareholders(entities, policy)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ManagerKind;

impl EntityKind for ManagerKind {
    type Entity = Manager;

    const LABEL: &'static str = "Manager";
    const SUB_STEPS: &'static [SubStep] = &[SubStep::PersonalInfo, SubStep::ResidencyInfo];

    fn finalize(
        _position: usize,
        draft: &PersonDraft,
    ) -> Option<Manager> {
        Some(Manager {
            personal: draft.personal.clone()?,
            identity: draft.identity.clone()?,
        })
    }

    fn validate_batch(
        _entities: &[Manager],
        _policy: &BatchPolicy,
    ) -> Result<(), BatchError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error(transparent)]
    Fields(#[from] ValidationErrors),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("{label} {position} has not been completed")]
    Incomplete { label: &'static str, position: usize },
}

/// Where a successful commit moved the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepProgress<E> {
    /// Same entity, next sub-step.
    SubStep { entity: usize, sub_step: SubStep },
    /// First sub-step of the next entity.
    NextEntity { entity: usize },
    /// The last sub-step of the last entity was committed and the list
    /// passed its batch rules.
    Completed(Vec<E>),
}

/// Walks a list of people through the sub-steps of `K`, one entity at a
/// time.
///
/// Position is always `(0, 0)` on construction, whatever the drafts hold:
/// drafts keep data across re-mounts, never navigation.
///
/// Values typed for an entity but not yet committed are parked in `typed`
/// when the controller moves to another entity and restored on return.
#[derive(Debug, Clone)]
pub struct EntityStepController<K: EntityKind> {
    drafts: Vec<PersonDraft>,
    typed: Vec<Option<PersonForm>>,
    form: PersonForm,
    entity_index: usize,
    sub_step_index: usize,
    policy: BatchPolicy,
    kind: PhantomData<K>,
}

impl<K: EntityKind> EntityStepController<K> {
    /// An empty draft list is treated as a single blank entity.
    pub fn new(
        drafts: Vec<PersonDraft>,
        policy: BatchPolicy,
    ) -> Self {
        let drafts = if drafts.is_empty() {
            vec![PersonDraft::default()]
        } else {
            drafts
        };
        let form = PersonForm::from_draft(&drafts[0]);
        debug!(kind = K::LABEL, entities = drafts.len(), "step mounted");
        Self {
            typed: vec![None; drafts.len()],
            drafts,
            form,
            entity_index: 0,
            sub_step_index: 0,
            policy,
            kind: PhantomData,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.entity_index, self.sub_step_index)
    }

    pub fn entity_index(&self) -> usize {
        self.entity_index
    }

    pub fn sub_step_index(&self) -> usize {
        self.sub_step_index
    }

    pub fn entity_count(&self) -> usize {
        self.drafts.len()
    }

    pub fn sub_steps(&self) -> &'static [SubStep] {
        K::SUB_STEPS
    }

    pub fn current_sub_step(&self) -> SubStep {
        K::SUB_STEPS[self.sub_step_index]
    }

    pub fn is_final_sub_step(&self) -> bool {
        self.sub_step_index + 1 == K::SUB_STEPS.len()
    }

    pub fn is_last_entity(&self) -> bool {
        self.entity_index + 1 == self.drafts.len()
    }

    /// Heading for the current entity, e.g. "Shareholder 2 of 3".
    pub fn heading(&self) -> String {
        if self.drafts.len() == 1 {
            K::LABEL.to_string()
        } else {
            format!(
                "{} {} of {}",
                K::LABEL,
                self.entity_index + 1,
                self.drafts.len()
            )
        }
    }

    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PersonForm {
        &mut self.form
    }

    pub fn drafts(&self) -> &[PersonDraft] {
        &self.drafts
    }

    pub fn into_drafts(self) -> Vec<PersonDraft> {
        self.drafts
    }

    /// Validates the current sub-step and, on success, commits it to the
    /// current draft and moves on. On failure nothing is committed and the
    /// position is unchanged.
    pub fn next_sub_step(&mut self) -> Result<StepProgress<K::Entity>, StepError> {
        let sub_step = self.current_sub_step();
        let output: SubStepOutput = self.form.validate(sub_step).inspect_err(|errors| {
            warn!(
                kind = K::LABEL,
                entity = self.entity_index,
                %sub_step,
                %errors,
                "sub-step rejected"
            );
        })?;
        self.drafts[self.entity_index].apply(output);

        if !self.is_final_sub_step() {
            self.sub_step_index += 1;
            let sub_step = self.current_sub_step();
            debug!(kind = K::LABEL, entity = self.entity_index, %sub_step, "sub-step advanced");
            return Ok(StepProgress::SubStep {
                entity: self.entity_index,
                sub_step,
            });
        }

        if !self.is_last_entity() {
            self.load_entity(self.entity_index + 1);
            debug!(kind = K::LABEL, entity = self.entity_index, "next entity");
            return Ok(StepProgress::NextEntity {
                entity: self.entity_index,
            });
        }

        let entities = self.finalize_all()?;
        K::validate_batch(&entities, &self.policy)?;
        info!(kind = K::LABEL, count = entities.len(), "step completed");
        Ok(StepProgress::Completed(entities))
    }

    /// Goes back one sub-step without validating. Values already typed stay
    /// in the form, including those of later sub-steps, and travel with the
    /// entity if the controller then leaves it. Returns `false` at the first
    /// sub-step.
    pub fn prev_sub_step(&mut self) -> bool {
        if self.sub_step_index == 0 {
            return false;
        }
        self.sub_step_index -= 1;
        debug!(
            kind = K::LABEL,
            entity = self.entity_index,
            sub_step = %self.current_sub_step(),
            "sub-step retreated"
        );
        true
    }

    /// Returns to the first sub-step of the previous entity, restoring what
    /// was typed for it. Returns `false` for the first entity.
    pub fn prev_entity(&mut self) -> bool {
        if self.entity_index == 0 {
            return false;
        }
        self.load_entity(self.entity_index - 1);
        debug!(kind = K::LABEL, entity = self.entity_index, "previous entity");
        true
    }

    /// Sets the residency answer. The sub-step stays where it is; only the
    /// set of required fields changes.
    pub fn set_uae_resident(
        &mut self,
        resident: bool,
    ) {
        self.form.is_uae_resident = Some(resident);
    }

    fn load_entity(
        &mut self,
        index: usize,
    ) {
        let leaving = std::mem::take(&mut self.form);
        self.typed[self.entity_index] = Some(leaving);
        self.entity_index = index;
        self.sub_step_index = 0;
        self.form = self.typed[index]
            .take()
            .unwrap_or_else(|| PersonForm::from_draft(&self.drafts[index]));
    }

    fn finalize_all(&self) -> Result<Vec<K::Entity>, StepError> {
        self.drafts
            .iter()
            .enumerate()
            .map(|(position, draft)| {
                K::finalize(position, draft).ok_or(StepError::Incomplete {
                    label: K::LABEL,
                    position: position + 1,
                })
            })
            .collect()
    }
}

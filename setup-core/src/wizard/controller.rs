use serde::Serialize;
use tracing::debug;

/// A record that accumulates the output of completed wizard steps.
pub trait WizardRecord {
    /// The partial result produced by completing one step.
    type Patch;

    fn merge(
        &mut self,
        patch: Self::Patch,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub title: &'static str,
    pub description: &'static str,
}

impl StepDefinition {
    pub const fn new(
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self { title, description }
    }
}

/// Owns the ordered steps, the current position and the accumulated record.
///
/// The controller performs no validation. A step only calls [`advance`]
/// once its own checks have passed.
///
/// [`advance`]: WizardController::advance
#[derive(Debug, Clone)]
pub struct WizardController<R: WizardRecord> {
    steps: &'static [StepDefinition],
    current: usize,
    record: R,
}

impl<R: WizardRecord> WizardController<R> {
    /// Starts at the first of `steps`. An empty table does not compile.
    pub fn new<const N: usize>(
        steps: &'static [StepDefinition; N],
        record: R,
    ) -> Self {
        const { assert!(N > 0, "a wizard needs at least one step") };
        Self {
            steps,
            current: 0,
            record,
        }
    }

    pub fn steps(&self) -> &'static [StepDefinition] {
        self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        &self.steps[self.current]
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_at_last_step(&self) -> bool {
        self.current == self.last_index()
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }

    /// Merges `patch` into the record and moves to the next step.
    ///
    /// At the last step this does nothing, the patch included, and returns
    /// `false`.
    pub fn advance(
        &mut self,
        patch: R::Patch,
    ) -> bool {
        if self.is_at_last_step() {
            debug!(step = self.current, "advance ignored at last step");
            return false;
        }
        self.record.merge(patch);
        self.current += 1;
        debug!(
            step = self.current,
            title = self.current_step().title,
            "wizard advanced"
        );
        true
    }

    /// Moves back one step without touching the record. Returns `false` at
    /// the first step.
    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        debug!(
            step = self.current,
            title = self.current_step().title,
            "wizard retreated"
        );
        true
    }
}

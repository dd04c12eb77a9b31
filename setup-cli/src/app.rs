//! The work behind each subcommand, kept out of `main` so it can be tested.

use std::path::Path;

use anyhow::{Context, Result};
use setup_core::flows::account::{LoginForm, SignupForm};
use setup_core::flows::{CompanySetupFlow, FlowError, QuickEstimateFlow};
use setup_core::services::{
    CheckerRegistry, LoginService, TradeNameChecker, check_name,
};
use setup_core::session::{Access, AccessGate, Route, TokenStore};
use setup_core::{BatchPolicy, BusinessCategory, CompanySetupData, PricingSchedule};
use thiserror::Error;
use tracing::info;

use crate::answers::{NameCheckNote, SetupAnswers};
use crate::http_checker::HttpCheckerFactory;
use crate::state::{load_session, save_session};

/// Every trade-name backend the command line can use.
pub fn build_registry() -> CheckerRegistry {
    let mut registry = CheckerRegistry::with_defaults();
    registry.register(Box::new(HttpCheckerFactory));
    registry
}

#[derive(Debug, Error)]
#[error("{step}: {error}")]
pub struct StepFailure {
    pub step: &'static str,
    pub error: FlowError,
}

/// Raw quick-estimate answers as typed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateInput {
    pub category: String,
    pub activities: String,
    pub shareholders: String,
    pub trade_name: bool,
    pub location: String,
}

/// Runs the quick estimate up to its summary step.
pub fn run_estimate(
    input: &EstimateInput,
    pricing: PricingSchedule,
) -> Result<QuickEstimateFlow, StepFailure> {
    let mut flow = QuickEstimateFlow::new(pricing);
    let form = flow.form_mut();
    form.category_id = match input.category.trim() {
        "" => None,
        answer => Some(BusinessCategory::parse(answer).map_or(0, |c| c.id)),
    };
    form.number_of_activities = input.activities.clone();
    form.number_of_shareholders = input.shareholders.clone();
    form.has_trade_name = Some(input.trade_name);
    form.business_location = input.location.clone();

    while !flow.is_at_summary() {
        let step = flow.current_step().title;
        flow.submit().map_err(|error| StepFailure { step, error })?;
    }
    Ok(flow)
}

/// Writes the finished estimate into the session file read by `setup`.
pub fn hand_off_estimate(
    flow: &QuickEstimateFlow,
    session_path: &Path,
) -> Result<()> {
    let mut session = load_session(session_path)?;
    flow.continue_to_company_setup(&mut session)?;
    save_session(session_path, &session)?;
    info!(path = %session_path.display(), progress = %session.progress(), "estimate handed off");
    Ok(())
}

/// Runs the company setup from an answer file, prefilled from the session
/// file when one is given.
pub async fn run_setup(
    answers: &SetupAnswers,
    policy: BatchPolicy,
    session_path: Option<&Path>,
    checker: &dyn TradeNameChecker,
) -> Result<(CompanySetupData, Vec<NameCheckNote>)> {
    let mut flow = match session_path {
        Some(path) => CompanySetupFlow::from_session(&load_session(path)?, policy),
        None => CompanySetupFlow::new(policy, Default::default()),
    };
    let notes = answers.apply(&mut flow, checker).await?;
    info!(
        shareholders = flow.record().shareholders.len(),
        "company setup completed"
    );
    Ok((flow.into_record(), notes))
}

pub async fn check_names(
    checker: &dyn TradeNameChecker,
    names: &[String],
) -> Vec<NameCheckNote> {
    let mut notes = Vec::with_capacity(names.len());
    for name in names {
        let check = check_name(checker, name).await.ok();
        notes.push(NameCheckNote {
            name: name.clone(),
            check,
        });
    }
    notes
}

pub async fn login(
    form: &LoginForm,
    service: &dyn LoginService,
    store: &mut dyn TokenStore,
) -> Result<()> {
    let credentials = form.validate()?;
    let token = service
        .login(&credentials)
        .await
        .context("Login failed")?;
    store.set_token(token).context("Failed to store token")?;
    Ok(())
}

pub async fn signup(
    form: &SignupForm,
    service: &dyn LoginService,
) -> Result<()> {
    let details = form.validate()?;
    service.signup(&details).await.context("Signup failed")?;
    Ok(())
}

pub fn logout(store: &mut dyn TokenStore) -> Result<()> {
    store.clear().context("Failed to remove token")
}

/// Access to every route under the current token.
pub fn route_access(store: &dyn TokenStore) -> Vec<(Route, Access)> {
    Route::all()
        .iter()
        .map(|route| (*route, AccessGate.check(*route, store)))
        .collect()
}

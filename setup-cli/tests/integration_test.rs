//! End-to-end runs of the command layer against the bundled fixtures.

use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use setup_cli::app::{self, EstimateInput};
use setup_cli::state::{FileTokenStore, load_session};
use setup_cli::{AppConfig, SetupAnswers};
use setup_core::TradeName;
use setup_core::session::{QUICK_ESTIMATE_STEP, TokenStore};

const CONFIG: &str = include_str!("fixtures/config.toml");
const ANSWERS: &str = include_str!("fixtures/answers.toml");

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn estimate_input() -> EstimateInput {
    EstimateInput {
        category: "1".into(),
        activities: "2".into(),
        shareholders: "2".into(),
        trade_name: true,
        location: "Dragon Mart One".into(),
    }
}

#[test]
fn test_config_fixture_loads() {
    let config = AppConfig::load(Some(&fixture("config.toml"))).expect("Failed to load config");

    assert_eq!(config, AppConfig::from_toml_str(CONFIG).unwrap());
    assert_eq!(config.log_level, "warn");
    assert!(config.policy.require_full_ownership);
    assert_eq!(config.pricing.per_shareholder, dec!(500));
}

#[tokio::test]
async fn test_estimate_then_setup_through_session_file() {
    let config = AppConfig::from_toml_str(CONFIG).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    let estimate = app::run_estimate(&estimate_input(), config.pricing.clone()).unwrap();
    assert_eq!(estimate.estimate().costs().total_cost(), dec!(13000));
    app::hand_off_estimate(&estimate, &session_path).unwrap();

    let session = load_session(&session_path).unwrap();
    assert!(session.is_step_valid(QUICK_ESTIMATE_STEP));

    let answers = SetupAnswers::from_toml_str(ANSWERS).unwrap();
    let checker = app::build_registry().create(&config.trade_name).unwrap();
    let (record, notes) = app::run_setup(&answers, config.policy, Some(&session_path), &*checker)
        .await
        .expect("Setup should complete");

    assert_eq!(record.business_category.as_ref().map(|c| c.id), Some(1));
    assert_eq!(record.number_of_shareholders, 2);
    assert_eq!(record.shareholders.len(), 2);
    assert_eq!(record.manager.as_ref().unwrap().personal.name, "Omar Haddad");

    let flagged: Vec<_> = notes
        .iter()
        .filter(|n| !n.check.as_ref().unwrap().is_clear())
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(flagged, vec!["Global Sands", "Oasis 7"]);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["shareholders"][1]["identity"]["kind"], "foreign");
    assert_eq!(json["shareholders"][0]["name"], "Aisha Al Mansoori");
}

#[tokio::test]
async fn test_setup_without_handoff_needs_a_category() {
    let config = AppConfig::from_toml_str(CONFIG).unwrap();
    let answers = SetupAnswers::from_toml_str(ANSWERS).unwrap();
    let checker = app::build_registry().create(&config.trade_name).unwrap();

    let err = app::run_setup(&answers, config.policy, None, &*checker)
        .await
        .expect_err("No category was given");

    assert_eq!(
        err.to_string(),
        "Business Category: business_category: Please select a business category"
    );
}

#[tokio::test]
async fn test_reserved_trade_name_answers() {
    let answers =
        SetupAnswers::load(&fixture("answers_reserved.toml")).expect("Failed to load answers");
    let checker = app::build_registry().create(&Default::default()).unwrap();

    let (record, notes) = app::run_setup(&answers, Default::default(), None, &*checker)
        .await
        .expect("Setup should complete");

    assert!(notes.is_empty());
    assert_eq!(record.business_category.unwrap().name, "Manufacturing");
    assert!(matches!(record.trade_name, Some(TradeName::Reserved { .. })));
    assert_eq!(record.shareholders[0].share_percentage, dec!(100));
}

#[tokio::test]
async fn test_login_persists_token_file() {
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");
    let form = setup_core::flows::account::LoginForm {
        email: "aisha@example.ae".into(),
        password: "secret1".into(),
    };

    let mut store = FileTokenStore::open(&token_path).unwrap();
    app::login(&form, &setup_core::services::MockLoginService, &mut store)
        .await
        .unwrap();

    assert!(FileTokenStore::open(&token_path).unwrap().token().is_some());
    app::logout(&mut store).unwrap();
    assert!(!token_path.exists());
}

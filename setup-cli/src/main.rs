use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use setup_cli::app::{self, EstimateInput};
use setup_cli::logging;
use setup_cli::report::{AccessReport, EstimateReport, NameCheckReport};
use setup_cli::state::FileTokenStore;
use setup_cli::{AppConfig, SetupAnswers};
use setup_core::flows::account::{LoginForm, SignupForm};
use setup_core::services::MockLoginService;
use setup_core::session::TokenStore;
use setup_core::{Activity, BusinessCategory, BusinessLocation};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Business registration helper: cost estimates, company setup and
/// trade-name checks.
#[derive(Debug, Parser)]
#[command(name = "company-setup", version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). Built-in defaults apply without one.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide log output on stderr. A configured log file still receives it.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the setup cost.
    Estimate {
        /// Category id or name.
        #[arg(long)]
        category: String,

        #[arg(long)]
        activities: String,

        #[arg(long)]
        shareholders: String,

        /// A trade name is needed.
        #[arg(long)]
        trade_name: bool,

        #[arg(long)]
        location: String,

        /// Session file to hand the estimate over to `setup`.
        #[arg(long)]
        handoff: Option<PathBuf>,

        /// Print the estimate as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the company setup from an answer file and print the record.
    Setup {
        #[arg(long)]
        answers: PathBuf,

        /// Session file written by `estimate --handoff`.
        #[arg(long)]
        handoff: Option<PathBuf>,
    },

    /// Run advisory checks on candidate trade names.
    CheckName {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List categories, their activities and locations.
    Catalogue,

    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    Signup {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    Logout,

    /// Show login state and which pages it opens.
    Status,
}

// ─── logging ─────────────────────────────────────────────────────────────────

/// Applies the configured logging on top of the startup defaults.
///
/// * `--verbose` always means `debug`.
/// * Otherwise `RUST_LOG` wins over the configured level.
fn configure_logging(
    cli: &Cli,
    config: &AppConfig,
) -> Result<()> {
    if cli.verbose {
        logging::set_log_level("debug")?;
    } else if !logging::env_overrides_level() {
        logging::set_log_level(&config.log_level)?;
    }
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    if cli.quiet {
        logging::set_stderr_enabled(false)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging("info");

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    configure_logging(&cli, &config)?;
    debug!(backend = %config.trade_name.backend, "configuration ready");

    match cli.command {
        Command::Estimate {
            category,
            activities,
            shareholders,
            trade_name,
            location,
            handoff,
            json,
        } => {
            let input = EstimateInput {
                category,
                activities,
                shareholders,
                trade_name,
                location,
            };
            let flow = app::run_estimate(&input, config.pricing.clone())?;
            if json {
                println!("{}", serde_json::to_string_pretty(flow.estimate())?);
            } else {
                print!("{}", EstimateReport(flow.estimate()));
            }
            if let Some(path) = handoff {
                app::hand_off_estimate(&flow, &path)
                    .with_context(|| format!("Failed to write session: {}", path.display()))?;
                println!("Estimate saved to {} for company setup.", path.display());
            }
        }

        Command::Setup { answers, handoff } => {
            let answers = SetupAnswers::load(&answers)?;
            let checker = app::build_registry().create(&config.trade_name)?;
            let (record, notes) =
                app::run_setup(&answers, config.policy, handoff.as_deref(), &*checker).await?;
            if !notes.is_empty() {
                eprint!("{}", NameCheckReport(&notes));
            }
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Command::CheckName { names } => {
            let checker = app::build_registry().create(&config.trade_name)?;
            let notes = app::check_names(&*checker, &names).await;
            print!("{}", NameCheckReport(&notes));
        }

        Command::Catalogue => {
            for category in BusinessCategory::catalogue() {
                println!("{} {} - {}", category.id, category.name, category.description);
                for activity in Activity::for_category(category.id) {
                    println!("    {:<4}{}", activity.code, activity.description);
                }
            }
            println!("Locations:");
            for location in BusinessLocation::all() {
                println!("    {location}");
            }
        }

        Command::Login { email, password } => {
            let mut store = FileTokenStore::open(&config.token_path)?;
            let form = LoginForm { email, password };
            app::login(&form, &MockLoginService, &mut store).await?;
            println!("Logged in.");
        }

        Command::Signup {
            full_name,
            email,
            password,
            confirm_password,
            phone,
        } => {
            let form = SignupForm {
                full_name,
                email,
                password,
                confirm_password,
                phone,
            };
            app::signup(&form, &MockLoginService).await?;
            println!("Account created. Log in with `company-setup login`.");
        }

        Command::Logout => {
            let mut store = FileTokenStore::open(&config.token_path)?;
            app::logout(&mut store)?;
            println!("Logged out.");
        }

        Command::Status => {
            let store = FileTokenStore::open(&config.token_path)?;
            let state = if store.token().is_some() {
                "logged in"
            } else {
                "logged out"
            };
            println!("{state} ({})", store.path().display());
            print!("{}", AccessReport(app::route_access(&store)));
        }
    }

    Ok(())
}

pub mod answers;
pub mod app;
pub mod config;
pub mod http_checker;
pub mod logging;
pub mod report;
pub mod state;

pub use answers::{AnswerError, NameCheckNote, SetupAnswers};
pub use config::{AppConfig, ConfigError};
pub use http_checker::{HttpCheckerFactory, HttpTradeNameChecker};

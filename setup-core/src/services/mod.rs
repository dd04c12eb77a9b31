//! Outside collaborators: the trade-name advisory service and the login
//! service, plus the registry that picks a trade-name backend by name.

mod error;
pub mod factory;
pub mod login;
pub mod trade_name;

pub use error::ServiceError;
pub use factory::{CheckerRegistry, HeuristicCheckerFactory, ServiceConfig, TradeNameCheckerFactory};
pub use login::{AuthToken, Credentials, LoginService, MockLoginService, SignupDetails};
pub use trade_name::{
    HeuristicTradeNameChecker, NameCheckTicket, NameCheckTracker, TradeNameCheck, TradeNameChecker,
    TradeNameRequest, check_name,
};

use tracing::debug;

use crate::services::{AuthToken, ServiceError};

/// Where the bearer token lives between requests.
pub trait TokenStore {
    fn token(&self) -> Option<AuthToken>;

    fn set_token(
        &mut self,
        token: AuthToken,
    ) -> Result<(), ServiceError>;

    fn clear(&mut self) -> Result<(), ServiceError>;
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<AuthToken>,
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<AuthToken> {
        self.token.clone()
    }

    fn set_token(
        &mut self,
        token: AuthToken,
    ) -> Result<(), ServiceError> {
        self.token = Some(token);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ServiceError> {
        self.token = None;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Login,
    Signup,
    QuickEstimate,
    CompanySetup,
    Dashboard,
    Requests,
    RequestDetails,
    EmployeeLanding,
    ClientRegistration,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Contact,
            Route::Login,
            Route::Signup,
            Route::QuickEstimate,
            Route::CompanySetup,
            Route::Dashboard,
            Route::Requests,
            Route::RequestDetails,
            Route::EmployeeLanding,
            Route::ClientRegistration,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contactus",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::QuickEstimate => "/quick-estimate",
            Self::CompanySetup => "/company-setup",
            Self::Dashboard => "/dashboard",
            Self::Requests => "/requests",
            Self::RequestDetails => "/requests/details",
            Self::EmployeeLanding => "/employee",
            Self::ClientRegistration => "/employee/clients",
        }
    }

    /// Routes that are only reachable with a token.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Requests | Self::RequestDetails)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

/// Decides whether a route may be shown given the current token.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGate;

impl AccessGate {
    pub fn check(
        &self,
        route: Route,
        store: &dyn TokenStore,
    ) -> Access {
        if !route.requires_auth() || store.token().is_some() {
            return Access::Granted;
        }
        debug!(path = route.path(), "no token, redirecting to login");
        Access::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_need_no_token() {
        let store = MemoryTokenStore::default();

        assert_eq!(AccessGate.check(Route::QuickEstimate, &store), Access::Granted);
        assert_eq!(AccessGate.check(Route::CompanySetup, &store), Access::Granted);
    }

    #[test]
    fn private_routes_redirect_without_token() {
        let store = MemoryTokenStore::default();

        assert_eq!(AccessGate.check(Route::Requests, &store), Access::RedirectToLogin);
    }

    #[test]
    fn token_unlocks_private_routes_until_cleared() {
        let mut store = MemoryTokenStore::default();
        store.set_token(AuthToken::new("t")).unwrap();

        assert_eq!(AccessGate.check(Route::RequestDetails, &store), Access::Granted);

        store.clear().unwrap();

        assert_eq!(AccessGate.check(Route::RequestDetails, &store), Access::RedirectToLogin);
    }
}

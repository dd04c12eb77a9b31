use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::services::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDetails {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Bearer token issued by the login service. The value is never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[async_trait]
pub trait LoginService: Send + Sync {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthToken, ServiceError>;

    async fn signup(
        &self,
        details: &SignupDetails,
    ) -> Result<(), ServiceError>;
}

/// Accepts any well-formed credentials and issues a random token. There is
/// no account backend behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLoginService;

#[async_trait]
impl LoginService for MockLoginService {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthToken, ServiceError> {
        info!(email = %credentials.email, "login accepted");
        Ok(AuthToken::new(Uuid::new_v4().simple().to_string()))
    }

    async fn signup(
        &self,
        details: &SignupDetails,
    ) -> Result<(), ServiceError> {
        info!(email = %details.email, "signup accepted");
        Ok(())
    }
}

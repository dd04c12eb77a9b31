//! Login and signup forms.

use crate::services::{Credentials, SignupDetails};
use crate::validation::{FieldValidator, MIN_PASSWORD_LENGTH, ValidationErrors, fields};

const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut v = FieldValidator::new();
        let email = v.email(fields::EMAIL, &self.email);
        let password = self.password(&mut v);

        v.finish(|| {
            Some(Credentials {
                email: email?,
                password: password?,
            })
        })
    }

    fn password(
        &self,
        v: &mut FieldValidator,
    ) -> Option<String> {
        if self.password.is_empty() {
            v.reject(fields::PASSWORD, "Please enter password");
            return None;
        }
        v.min_length(fields::PASSWORD, &self.password, MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupDetails, ValidationErrors> {
        let mut v = FieldValidator::new();
        let full_name = v.required(fields::FULL_NAME, &self.full_name, "Please enter your full name");
        let email = v.email(fields::EMAIL, &self.email);
        let password = if self.password.is_empty() {
            v.reject(fields::PASSWORD, "Please enter password");
            None
        } else {
            v.min_length(fields::PASSWORD, &self.password, MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)
        };
        if self.confirm_password.is_empty() {
            v.reject(fields::CONFIRM_PASSWORD, "Please confirm your password");
        } else if self.confirm_password != self.password {
            v.reject(fields::CONFIRM_PASSWORD, "The two passwords do not match");
        }
        let phone = v.optional_phone_number(fields::PHONE, &self.phone);

        v.finish(|| {
            Some(SignupDetails {
                full_name: full_name?,
                email: email?,
                password: password?,
                phone: phone?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            full_name: "Ana Silva".into(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            phone: String::new(),
        }
    }

    #[test]
    fn login_requires_valid_email_and_password() {
        let err = LoginForm::default().validate().unwrap_err();

        assert_eq!(err.fields(), vec!["email", "password"]);
    }

    #[test]
    fn login_password_needs_six_characters() {
        let form = LoginForm {
            email: "ana@example.com".into(),
            password: "12345".into(),
        };

        let err = form.validate().unwrap_err();

        assert_eq!(err.message_for("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn signup_accepts_blank_phone() {
        let details = signup().validate().unwrap();

        assert_eq!(details.phone, None);
        assert_eq!(details.full_name, "Ana Silva");
    }

    #[test]
    fn signup_checks_phone_when_given() {
        let form = SignupForm {
            phone: "abc".into(),
            ..signup()
        };

        assert!(form.validate().unwrap_err().has_field("phone"));
    }

    #[test]
    fn signup_requires_matching_confirmation() {
        let form = SignupForm {
            confirm_password: "secret2".into(),
            ..signup()
        };

        let err = form.validate().unwrap_err();

        assert_eq!(
            err.message_for("confirm_password"),
            Some("The two passwords do not match")
        );
    }
}

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::validation::ValidationErrors;
use crate::{DocumentKind, DocumentRef};

pub const MIN_ENTITY_COUNT: u8 = 1;
pub const MAX_ENTITY_COUNT: u8 = 10;
pub const MIN_PASSWORD_LENGTH: usize = 6;

type Pattern = LazyLock<Option<Regex>>;

static EMAIL: Pattern = LazyLock::new(|| compile("email", r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static EMIRATES_ID: Pattern = LazyLock::new(|| compile("emirates_id", r"^784-\d{4}-\d{7}-\d$"));
static PHONE_NUMBER: Pattern = LazyLock::new(|| compile("phone", r"^\+?\d{7,15}$"));

/// A pattern that fails to compile matches nothing.
fn compile(
    name: &str,
    source: &str,
) -> Option<Regex> {
    Regex::new(source)
        .inspect_err(|error| warn!(pattern = name, %error, "validation pattern failed to compile"))
        .ok()
}

fn is_match(
    pattern: &Pattern,
    value: &str,
) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// Accumulates field errors for one commit attempt.
///
/// Each check returns the parsed value when the field is valid and records
/// an error otherwise, so a form can run every check before deciding
/// whether to advance.
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: ValidationErrors,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
    ) {
        self.errors.push(field, message);
    }

    /// Non-empty after trimming. Returns the trimmed value.
    pub fn required(
        &mut self,
        field: &'static str,
        value: &str,
        message: &str,
    ) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.reject(field, message);
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn email(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<String> {
        let email = self.required(field, value, "Please enter email")?;
        if is_match(&EMAIL, &email) {
            Some(email)
        } else {
            self.reject(field, "Please enter a valid email");
            None
        }
    }

    /// Emirates ID in the `784-####-#######-#` layout.
    pub fn emirates_id(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<String> {
        let id = self.required(field, value, "Please enter Emirates ID")?;
        if is_match(&EMIRATES_ID, &id) {
            Some(id)
        } else {
            self.reject(field, "Please enter a valid Emirates ID (784-XXXX-XXXXXXX-X)");
            None
        }
    }

    /// Optional phone number; when present it must be 7 to 15 digits with
    /// an optional leading `+`. `Some(None)` means the field was left blank.
    pub fn optional_phone_number(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<Option<String>> {
        let phone = value.trim();
        if phone.is_empty() {
            Some(None)
        } else if is_match(&PHONE_NUMBER, phone) {
            Some(Some(phone.to_string()))
        } else {
            self.reject(field, "Please enter a valid phone number");
            None
        }
    }

    pub fn choice(
        &mut self,
        field: &'static str,
        value: Option<bool>,
        message: &str,
    ) -> Option<bool> {
        if value.is_none() {
            self.reject(field, message);
        }
        value
    }

    /// A whole number of entities between one and ten.
    pub fn entity_count(
        &mut self,
        field: &'static str,
        value: &str,
        message: &str,
    ) -> Option<u8> {
        let raw = self.required(field, value, message)?;
        self.in_range(
            field,
            &raw,
            MIN_ENTITY_COUNT..=MAX_ENTITY_COUNT,
            "Number must be between 1 and 10",
        )
    }

    /// Ownership share between 0 and 100 inclusive.
    pub fn percentage(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<Decimal> {
        let raw = self.required(field, value, "Please enter share percentage")?;
        self.in_range(
            field,
            &raw,
            Decimal::ZERO..=Decimal::ONE_HUNDRED,
            "Share percentage must be between 0 and 100",
        )
    }

    fn in_range<T>(
        &mut self,
        field: &'static str,
        raw: &str,
        range: RangeInclusive<T>,
        message: &str,
    ) -> Option<T>
    where
        T: FromStr + PartialOrd,
    {
        match raw.parse::<T>() {
            Ok(value) if range.contains(&value) => Some(value),
            _ => {
                self.reject(field, message);
                None
            }
        }
    }

    /// ISO `YYYY-MM-DD` date.
    pub fn date(
        &mut self,
        field: &'static str,
        value: &str,
        message: &str,
    ) -> Option<NaiveDate> {
        let raw = self.required(field, value, message)?;
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.reject(field, "Please enter a date as YYYY-MM-DD");
                None
            }
        }
    }

    /// A document of the given kind must be attached and have an accepted
    /// extension.
    pub fn document(
        &mut self,
        field: &'static str,
        document: Option<&DocumentRef>,
        kind: DocumentKind,
        message: &str,
    ) -> Option<DocumentRef> {
        let Some(document) = document.filter(|d| !d.file_name.trim().is_empty()) else {
            self.reject(field, message);
            return None;
        };
        if kind.accepts(document) {
            Some(document.clone())
        } else {
            self.reject(
                field,
                format!(
                    "Only {} files are accepted",
                    kind.allowed_extensions().join(", ")
                ),
            );
            None
        }
    }

    pub fn min_length(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        message: &str,
    ) -> Option<String> {
        if value.chars().count() < min {
            self.reject(field, message);
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Ends the attempt. `build` is only called when no error was recorded
    /// and assembles the output from the checked values.
    pub fn finish<T>(
        self,
        build: impl FnOnce() -> Option<T>,
    ) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or_else(|| ValidationErrors::single("form", "Form is incomplete"))
    }
}

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// A single failing field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error raised by one commit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summary(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn single(
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
    ) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_field(
        &self,
        field: &str,
    ) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// The first message reported for `field`, if any.
    pub fn message_for(
        &self,
        field: &str,
    ) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

/// A cross-entity business rule that failed when a collection was committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("Each shareholder name must be unique (\"{name}\" appears more than once)")]
    DuplicateShareholderName { name: String },

    #[error("Each Emirates ID must be unique among all shareholders ({emirates_id} is repeated)")]
    DuplicateEmiratesId { emirates_id: String },

    #[error("The sum of all shareholder percentages must be exactly 100% (currently {total}%)")]
    OwnershipIncomplete { total: Decimal },

    #[error("All trade names must be different (\"{name}\" appears more than once)")]
    DuplicateTradeName { name: String },
}

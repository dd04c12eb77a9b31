//! Single-screen step forms shared by the two wizards.

use tracing::warn;

use crate::flows::FlowError;
use crate::validation::{FieldValidator, ValidationErrors, fields, validate_trade_names};
use crate::{Activity, BusinessCategory, DocumentKind, DocumentRef, TradeName};

pub const MIN_SUGGESTED_NAMES: usize = 3;

/// Business category picker. A category handed over from a quick estimate
/// is locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    category_id: Option<u32>,
    locked: bool,
}

impl CategoryForm {
    pub fn new(category_id: Option<u32>) -> Self {
        Self {
            category_id,
            locked: false,
        }
    }

    pub fn locked(category_id: u32) -> Self {
        Self {
            category_id: Some(category_id),
            locked: true,
        }
    }

    pub fn category_id(&self) -> Option<u32> {
        self.category_id
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns `false` and keeps the current choice when the form is locked.
    pub fn select(
        &mut self,
        category_id: u32,
    ) -> bool {
        if self.locked {
            return false;
        }
        self.category_id = Some(category_id);
        true
    }

    pub fn validate(&self) -> Result<BusinessCategory, ValidationErrors> {
        let Some(id) = self.category_id else {
            return Err(ValidationErrors::single(
                fields::BUSINESS_CATEGORY,
                "Please select a business category",
            ));
        };
        BusinessCategory::find(id).ok_or_else(|| {
            ValidationErrors::single(fields::BUSINESS_CATEGORY, "Unknown business category")
        })
    }
}

/// A "how many" question answered with a number between one and ten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountForm {
    field: &'static str,
    required_message: &'static str,
    pub value: String,
}

impl CountForm {
    pub fn shareholders(value: impl Into<String>) -> Self {
        Self {
            field: fields::SHAREHOLDER_COUNT,
            required_message: "Please enter the number of shareholders",
            value: value.into(),
        }
    }

    pub fn activities(value: impl Into<String>) -> Self {
        Self {
            field: fields::ACTIVITY_COUNT,
            required_message: "Please enter the number of activities",
            value: value.into(),
        }
    }

    pub fn validate(&self) -> Result<u8, ValidationErrors> {
        let mut v = FieldValidator::new();
        let count = v.entity_count(self.field, &self.value, self.required_message);
        v.finish(|| count)
    }
}

/// Activity checklist for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityForm {
    available: Vec<Activity>,
    selected: Vec<String>,
}

impl ActivityForm {
    pub fn new(
        category_id: u32,
        selected: Vec<String>,
    ) -> Self {
        Self {
            available: Activity::for_category(category_id),
            selected,
        }
    }

    pub fn available(&self) -> &[Activity] {
        &self.available
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(
        &self,
        code: &str,
    ) -> bool {
        self.selected.iter().any(|c| c == code)
    }

    pub fn toggle(
        &mut self,
        code: &str,
    ) {
        if self.is_selected(code) {
            self.selected.retain(|c| c != code);
        } else {
            self.selected.push(code.to_string());
        }
    }

    /// Selected activities in catalogue order.
    pub fn validate(&self) -> Result<Vec<Activity>, ValidationErrors> {
        let mut v = FieldValidator::new();
        if self.selected.is_empty() {
            v.reject(fields::ACTIVITIES, "Please select at least one business activity");
        }
        for code in &self.selected {
            if !self.available.iter().any(|a| &a.code == code) {
                v.reject(
                    fields::ACTIVITIES,
                    format!("Activity {code} is not offered for this category"),
                );
            }
        }
        v.finish(|| {
            Some(
                self.available
                    .iter()
                    .filter(|a| self.is_selected(&a.code))
                    .cloned()
                    .collect(),
            )
        })
    }
}

/// Trade name: a reserved name with its document, or a list of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeNameForm {
    pub has_reserved_name: Option<bool>,
    pub reserved_document: Option<DocumentRef>,
    pub suggested_names: Vec<String>,
}

impl Default for TradeNameForm {
    fn default() -> Self {
        Self {
            has_reserved_name: Some(false),
            reserved_document: None,
            suggested_names: Vec::new(),
        }
    }
}

impl TradeNameForm {
    pub fn from_record(trade_name: Option<&TradeName>) -> Self {
        match trade_name {
            Some(TradeName::Reserved { document }) => Self {
                has_reserved_name: Some(true),
                reserved_document: Some(document.clone()),
                suggested_names: Vec::new(),
            },
            Some(TradeName::Suggested { names }) => Self {
                suggested_names: names.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<TradeName, FlowError> {
        let mut v = FieldValidator::new();
        let reserved = v.choice(
            fields::HAS_RESERVED_NAME,
            self.has_reserved_name,
            "Please select an option",
        );

        let trade_name = match reserved {
            Some(true) => {
                let document = v.document(
                    fields::RESERVED_NAME_DOCUMENT,
                    self.reserved_document.as_ref(),
                    DocumentKind::ReservedTradeName,
                    "Please upload the document",
                );
                v.finish(|| document.map(|document| TradeName::Reserved { document }))?
            }
            Some(false) => {
                let names = self.suggested_names(&mut v);
                v.finish(|| names.map(|names| TradeName::Suggested { names }))?
            }
            None => v.finish(|| None)?,
        };

        if let TradeName::Suggested { names } = &trade_name {
            validate_trade_names(names).inspect_err(|e| warn!(error = %e, "trade names rejected"))?;
        }
        Ok(trade_name)
    }

    fn suggested_names(
        &self,
        v: &mut FieldValidator,
    ) -> Option<Vec<String>> {
        if self.suggested_names.is_empty() {
            v.reject(fields::SUGGESTED_NAMES, "Please provide at least one suggested name");
            return None;
        }
        let names: Vec<Option<String>> = self
            .suggested_names
            .iter()
            .map(|name| {
                v.required(
                    fields::SUGGESTED_NAMES,
                    name,
                    "Please enter a name or delete this field",
                )
            })
            .collect();
        if self.suggested_names.len() < MIN_SUGGESTED_NAMES {
            v.reject(fields::SUGGESTED_NAMES, "Please provide at least 3 suggested names");
        }
        names.into_iter().collect()
    }
}

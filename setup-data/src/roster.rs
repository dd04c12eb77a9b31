use std::io::Read;

use serde::Deserialize;
use setup_core::validation::{BatchError, BatchPolicy, MAX_ENTITY_COUNT, ValidationErrors};
use setup_core::wizard::{EntityStepController, PersonForm, ShareholderKind, StepError, StepProgress};
use setup_core::{DocumentRef, PersonDraft, Shareholder};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading a shareholder roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Roster has no shareholders")]
    Empty,

    #[error("Roster has {0} shareholders; at most 10 are allowed")]
    TooMany(usize),

    #[error("Row {row}: {errors}")]
    Row { row: usize, errors: ValidationErrors },

    #[error("{0}")]
    Batch(#[from] BatchError),

    #[error("Shareholder {0} could not be completed")]
    Incomplete(usize),
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        RosterError::CsvParse(err.to_string())
    }
}

/// A single shareholder row.
///
/// - `is_uae_resident`: `true`/`false`, `yes`/`no` or `1`/`0`
/// - `emirates_id`: required for residents, ignored otherwise
/// - `passport_*`, `country_code`, `passport_file`: required for
///   non-residents, ignored otherwise
/// - `share_percentage`: 0 to 100, decimals allowed
///
/// Values are kept as text so that bad values are reported by the same
/// field rules the interactive wizard uses.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RosterRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_uae_resident: Option<bool>,
    #[serde(default)]
    pub emirates_id: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub passport_expiry: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub passport_file: String,
    pub share_percentage: String,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => match s.as_str() {
            "true" | "yes" | "y" | "1" => Ok(Some(true)),
            "false" | "no" | "n" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid residency flag '{other}'"
            ))),
        },
    }
}

impl RosterRecord {
    /// The values a user would have typed into the shareholder form.
    pub fn to_form(&self) -> PersonForm {
        PersonForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            is_uae_resident: self.is_uae_resident,
            emirates_id: self.emirates_id.clone(),
            passport_number: self.passport_number.clone(),
            passport_expiry: self.passport_expiry.clone(),
            country_code: self.country_code.clone(),
            passport_copy: (!self.passport_file.trim().is_empty())
                .then(|| DocumentRef::new(self.passport_file.trim())),
            share_percentage: self.share_percentage.clone(),
        }
    }
}

/// Loader for shareholder rosters kept as CSV.
///
/// Rows are replayed through the shareholder step one sub-step at a time,
/// so a roster is accepted exactly when the wizard would accept the same
/// entries typed by hand.
pub struct RosterLoader;

impl RosterLoader {
    /// Parse roster rows from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RosterRecord>, RosterError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RosterRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Validate the rows and return the finished shareholders with their
    /// positional ids.
    pub fn replay(
        records: &[RosterRecord],
        policy: BatchPolicy,
    ) -> Result<Vec<Shareholder>, RosterError> {
        if records.is_empty() {
            return Err(RosterError::Empty);
        }
        if records.len() > usize::from(MAX_ENTITY_COUNT) {
            return Err(RosterError::TooMany(records.len()));
        }

        let mut step = EntityStepController::<ShareholderKind>::new(
            vec![PersonDraft::default(); records.len()],
            policy,
        );

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            *step.form_mut() = record.to_form();
            loop {
                match step.next_sub_step() {
                    Ok(StepProgress::SubStep { sub_step, .. }) => {
                        debug!(row, %sub_step, "row sub-step accepted");
                    }
                    Ok(StepProgress::NextEntity { .. }) => break,
                    Ok(StepProgress::Completed(shareholders)) => {
                        info!(count = shareholders.len(), "roster accepted");
                        return Ok(shareholders);
                    }
                    Err(StepError::Fields(errors)) => return Err(RosterError::Row { row, errors }),
                    Err(StepError::Batch(err)) => return Err(RosterError::Batch(err)),
                    Err(StepError::Incomplete { position, .. }) => {
                        return Err(RosterError::Incomplete(position));
                    }
                }
            }
        }

        Err(RosterError::Incomplete(records.len()))
    }

    /// Parse and replay in one go.
    pub fn load<R: Read>(
        reader: R,
        policy: BatchPolicy,
    ) -> Result<Vec<Shareholder>, RosterError> {
        let records = Self::parse(reader)?;
        Self::replay(&records, policy)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const HEADER: &str = "name,email,phone,is_uae_resident,emirates_id,passport_number,passport_expiry,country_code,passport_file,share_percentage";

    fn csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn test_parse_resident_row() {
        let data = csv(&["Ana,ana@example.com,0501234567,yes,784-1990-1234567-1,,,,,60"]);

        let records = RosterLoader::parse(data.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].is_uae_resident, Some(true));
        assert_eq!(records[0].emirates_id, "784-1990-1234567-1");
        assert_eq!(records[0].passport_number, "");
    }

    #[test]
    fn test_parse_blank_flag_is_unanswered() {
        let data = csv(&["Ana,ana@example.com,0501234567,,,,,,,60"]);

        let records = RosterLoader::parse(data.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records[0].is_uae_resident, None);
    }

    #[test]
    fn test_parse_invalid_flag() {
        let data = csv(&["Ana,ana@example.com,0501234567,maybe,,,,,,60"]);

        let err = RosterLoader::parse(data.as_bytes()).expect_err("Should fail for bad flag");

        let RosterError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(msg.contains("invalid residency flag"), "got: {msg}");
    }

    #[test]
    fn test_parse_missing_column() {
        let data = "name,email\nAna,ana@example.com";

        let err = RosterLoader::parse(data.as_bytes()).expect_err("Should fail for missing column");

        assert!(matches!(err, RosterError::CsvParse(ref msg) if msg.contains("missing field")));
    }

    #[test]
    fn test_to_form_keeps_passport_file() {
        let record = RosterRecord {
            passport_file: " scan.pdf ".into(),
            ..RosterRecord::default()
        };

        assert_eq!(record.to_form().passport_copy, Some(DocumentRef::new("scan.pdf")));
        assert_eq!(RosterRecord::default().to_form().passport_copy, None);
    }

    #[test]
    fn test_replay_empty_roster() {
        let result = RosterLoader::replay(&[], BatchPolicy::default());

        assert!(matches!(result, Err(RosterError::Empty)));
    }

    #[test]
    fn test_replay_too_many_rows() {
        let records = vec![RosterRecord::default(); 11];

        let result = RosterLoader::replay(&records, BatchPolicy::default());

        assert!(matches!(result, Err(RosterError::TooMany(11))));
    }

    #[test]
    fn test_replay_reports_row_and_field() {
        let data = csv(&[
            "Ana,ana@example.com,0501234567,yes,784-1990-1234567-1,,,,,60",
            "Bo,bo@example.com,0507654321,no,,,2030-01-01,GB,passport.pdf,40",
        ]);

        let err = RosterLoader::load(data.as_bytes(), BatchPolicy::default()).unwrap_err();

        let RosterError::Row { row, errors } = err else {
            panic!("Expected Row error, got: {:?}", err);
        };
        assert_eq!(row, 2);
        assert_eq!(errors.fields(), vec!["passport_number"]);
    }
}

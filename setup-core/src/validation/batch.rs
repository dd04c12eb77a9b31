use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Shareholder;
use crate::validation::BatchError;

/// How far the ownership total may drift from 100 and still count as full.
pub const OWNERSHIP_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Which optional batch rules are enforced when the shareholder list is
/// committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchPolicy {
    /// Shares must add up to 100%.
    pub require_full_ownership: bool,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// First value that appears twice once normalised. Blank values are ignored.
fn first_duplicate<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .find(|value| !seen.insert(normalize(value)))
}

/// True when no two names match after trimming and lowercasing. Blank names
/// are left to the required-field rule.
pub fn are_names_unique<S: AsRef<str>>(names: &[S]) -> bool {
    first_duplicate(names.iter().map(AsRef::as_ref)).is_none()
}

/// True when no Emirates ID repeats. Non-residents carry no ID and are
/// skipped.
pub fn are_emirates_ids_unique(ids: &[Option<&str>]) -> bool {
    first_duplicate(ids.iter().flatten().copied()).is_none()
}

pub fn is_ownership_complete(percentages: &[Decimal]) -> bool {
    let total: Decimal = percentages.iter().sum();
    (total - Decimal::ONE_HUNDRED).abs() < OWNERSHIP_TOLERANCE
}

/// Cross-shareholder rules, checked once every shareholder has been entered.
pub fn validate_shareholders(
    shareholders: &[Shareholder],
    policy: &BatchPolicy,
) -> Result<(), BatchError> {
    if let Some(name) = first_duplicate(shareholders.iter().map(|s| s.personal.name.as_str())) {
        warn!(name, "duplicate shareholder name");
        return Err(BatchError::DuplicateShareholderName {
            name: name.to_string(),
        });
    }

    if let Some(id) = first_duplicate(shareholders.iter().filter_map(|s| s.identity.emirates_id()))
    {
        warn!(emirates_id = id, "duplicate Emirates ID");
        return Err(BatchError::DuplicateEmiratesId {
            emirates_id: id.to_string(),
        });
    }

    if policy.require_full_ownership {
        let percentages: Vec<Decimal> = shareholders.iter().map(|s| s.share_percentage).collect();
        if !is_ownership_complete(&percentages) {
            let total: Decimal = percentages.iter().sum();
            warn!(%total, "shareholder percentages do not add up to 100");
            return Err(BatchError::OwnershipIncomplete { total });
        }
    }

    Ok(())
}

/// Suggested trade names must all differ.
pub fn validate_trade_names<S: AsRef<str>>(names: &[S]) -> Result<(), BatchError> {
    match first_duplicate(names.iter().map(AsRef::as_ref)) {
        Some(name) => Err(BatchError::DuplicateTradeName {
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{DocumentRef, ForeignIdentity, Identity, PersonalInfo, ResidentIdentity};

    fn resident(
        id: u32,
        name: &str,
        emirates_id: &str,
        share: Decimal,
    ) -> Shareholder {
        Shareholder {
            id,
            personal: PersonalInfo {
                name: name.into(),
                email: format!("{id}@example.com"),
                phone: "0501234567".into(),
            },
            identity: Identity::Resident(ResidentIdentity {
                emirates_id: emirates_id.into(),
            }),
            share_percentage: share,
        }
    }

    fn foreigner(
        id: u32,
        name: &str,
        share: Decimal,
    ) -> Shareholder {
        Shareholder {
            id,
            personal: PersonalInfo {
                name: name.into(),
                email: format!("{id}@example.com"),
                phone: "0501234567".into(),
            },
            identity: Identity::Foreign(ForeignIdentity {
                passport_number: format!("P{id}"),
                passport_expiry: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                country_code: "GB".into(),
                passport_copy: DocumentRef::new("passport.pdf"),
            }),
            share_percentage: share,
        }
    }

    // =========================================================================
    // name uniqueness
    // =========================================================================

    #[test]
    fn names_differing_only_by_case_and_whitespace_are_duplicates() {
        assert!(!are_names_unique(&["Ana", "ana "]));
    }

    #[test]
    fn blank_names_do_not_count_as_duplicates() {
        assert!(are_names_unique(&["Alpha", "", "  ", "Beta"]));
    }

    #[test]
    fn trade_names_report_the_repeated_entry() {
        let result = validate_trade_names(&["Falcon", "Oasis", " FALCON"]);

        assert_eq!(
            result,
            Err(BatchError::DuplicateTradeName {
                name: " FALCON".into()
            })
        );
    }

    // =========================================================================
    // Emirates ID uniqueness
    // =========================================================================

    #[test]
    fn emirates_ids_skip_missing_values() {
        assert!(are_emirates_ids_unique(&[Some("784-1234-1234567-1"), None, None]));
        assert!(!are_emirates_ids_unique(&[
            Some("784-1234-1234567-1"),
            Some("784-1234-1234567-1"),
        ]));
    }

    // =========================================================================
    // shareholder batch
    // =========================================================================

    #[test]
    fn validate_shareholders_rejects_duplicate_names() {
        let list = vec![
            resident(1, "Ana", "784-1234-1234567-1", dec!(50)),
            foreigner(2, "ana ", dec!(50)),
        ];

        let result = validate_shareholders(&list, &BatchPolicy::default());

        assert_eq!(
            result,
            Err(BatchError::DuplicateShareholderName { name: "ana ".into() })
        );
    }

    #[test]
    fn validate_shareholders_rejects_shared_emirates_id() {
        let list = vec![
            resident(1, "Ana", "784-1234-1234567-1", dec!(50)),
            resident(2, "Bo", "784-1234-1234567-1", dec!(50)),
        ];

        let result = validate_shareholders(&list, &BatchPolicy::default());

        assert_eq!(
            result,
            Err(BatchError::DuplicateEmiratesId {
                emirates_id: "784-1234-1234567-1".into()
            })
        );
    }

    #[test]
    fn foreigners_never_clash_on_emirates_id() {
        let list = vec![foreigner(1, "Ana", dec!(40)), foreigner(2, "Bo", dec!(60))];

        assert_eq!(validate_shareholders(&list, &BatchPolicy::default()), Ok(()));
    }

    #[test]
    fn ownership_total_is_ignored_by_default() {
        let list = vec![foreigner(1, "Ana", dec!(10)), foreigner(2, "Bo", dec!(10))];

        assert_eq!(validate_shareholders(&list, &BatchPolicy::default()), Ok(()));
    }

    #[test]
    fn ownership_total_enforced_when_policy_requires_it() {
        let policy = BatchPolicy {
            require_full_ownership: true,
        };
        let list = vec![foreigner(1, "Ana", dec!(10)), foreigner(2, "Bo", dec!(10))];

        let result = validate_shareholders(&list, &policy);

        assert_eq!(result, Err(BatchError::OwnershipIncomplete { total: dec!(20) }));
    }

    #[test]
    fn ownership_accepts_totals_within_tolerance() {
        assert!(is_ownership_complete(&[dec!(33.33333), dec!(33.33333), dec!(33.33334)]));
        assert!(is_ownership_complete(&[dec!(99.99995)]));
        assert!(!is_ownership_complete(&[dec!(99.9999)]));
    }
}

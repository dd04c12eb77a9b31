use rust_decimal::Decimal;

use crate::validation::{FieldValidator, ValidationErrors, fields};
use crate::wizard::SubStep;
use crate::{
    DocumentKind, DocumentRef, ForeignIdentity, Identity, PersonDraft, PersonalInfo,
    ResidentIdentity,
};

/// Raw values typed into the person form, shared by every sub-step of one
/// entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_uae_resident: Option<bool>,
    pub emirates_id: String,
    pub passport_number: String,
    pub passport_expiry: String,
    pub country_code: String,
    pub passport_copy: Option<DocumentRef>,
    pub share_percentage: String,
}

/// The typed result of committing one sub-step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubStepOutput {
    Personal(PersonalInfo),
    Residency(Identity),
    Share(Decimal),
}

impl PersonForm {
    /// Loads a draft back into editable values. A person with no residency
    /// answer yet starts as a UAE resident.
    pub fn from_draft(draft: &PersonDraft) -> Self {
        let mut form = Self {
            is_uae_resident: Some(true),
            ..Self::default()
        };

        if let Some(personal) = &draft.personal {
            form.name = personal.name.clone();
            form.email = personal.email.clone();
            form.phone = personal.phone.clone();
        }

        match &draft.identity {
            Some(Identity::Resident(resident)) => {
                form.is_uae_resident = Some(true);
                form.emirates_id = resident.emirates_id.clone();
            }
            Some(Identity::Foreign(foreign)) => {
                form.is_uae_resident = Some(false);
                form.passport_number = foreign.passport_number.clone();
                form.passport_expiry = foreign.passport_expiry.format("%Y-%m-%d").to_string();
                form.country_code = foreign.country_code.clone();
                form.passport_copy = Some(foreign.passport_copy.clone());
            }
            None => {}
        }

        if let Some(share) = draft.share_percentage {
            form.share_percentage = share.to_string();
        }

        form
    }

    /// Fields checked when `sub_step` is committed. The residency fields
    /// follow the current residency answer.
    pub fn required_fields(
        &self,
        sub_step: SubStep,
    ) -> &'static [&'static str] {
        match sub_step {
            SubStep::PersonalInfo => &[fields::NAME, fields::EMAIL, fields::PHONE],
            SubStep::ResidencyInfo => match self.is_uae_resident {
                Some(true) => &[fields::IS_UAE_RESIDENT, fields::EMIRATES_ID],
                Some(false) => &[
                    fields::IS_UAE_RESIDENT,
                    fields::PASSPORT_NUMBER,
                    fields::PASSPORT_EXPIRY,
                    fields::COUNTRY_CODE,
                    fields::PASSPORT_COPY,
                ],
                None => &[fields::IS_UAE_RESIDENT],
            },
            SubStep::ShareInfo => &[fields::SHARE_PERCENTAGE],
        }
    }

    pub fn validate(
        &self,
        sub_step: SubStep,
    ) -> Result<SubStepOutput, ValidationErrors> {
        match sub_step {
            SubStep::PersonalInfo => self.validate_personal(),
            SubStep::ResidencyInfo => self.validate_residency(),
            SubStep::ShareInfo => self.validate_share(),
        }
    }

    fn validate_personal(&self) -> Result<SubStepOutput, ValidationErrors> {
        let mut v = FieldValidator::new();
        let name = v.required(fields::NAME, &self.name, "Please enter name");
        let email = v.email(fields::EMAIL, &self.email);
        let phone = v.required(fields::PHONE, &self.phone, "Please enter phone number");

        v.finish(|| {
            Some(SubStepOutput::Personal(PersonalInfo {
                name: name?,
                email: email?,
                phone: phone?,
            }))
        })
    }

    fn validate_residency(&self) -> Result<SubStepOutput, ValidationErrors> {
        let mut v = FieldValidator::new();
        let resident = v.choice(
            fields::IS_UAE_RESIDENT,
            self.is_uae_resident,
            "Please select residency status",
        );

        match resident {
            Some(true) => {
                let emirates_id = v.emirates_id(fields::EMIRATES_ID, &self.emirates_id);
                v.finish(|| {
                    Some(SubStepOutput::Residency(Identity::Resident(
                        ResidentIdentity {
                            emirates_id: emirates_id?,
                        },
                    )))
                })
            }
            Some(false) => {
                let passport_number = v.required(
                    fields::PASSPORT_NUMBER,
                    &self.passport_number,
                    "Please enter passport number",
                );
                let passport_expiry = v.date(
                    fields::PASSPORT_EXPIRY,
                    &self.passport_expiry,
                    "Please select passport expiry date",
                );
                let country_code = v.required(
                    fields::COUNTRY_CODE,
                    &self.country_code,
                    "Please enter country code",
                );
                let passport_copy = v.document(
                    fields::PASSPORT_COPY,
                    self.passport_copy.as_ref(),
                    DocumentKind::PassportCopy,
                    "Please upload passport copy",
                );
                v.finish(|| {
                    Some(SubStepOutput::Residency(Identity::Foreign(ForeignIdentity {
                        passport_number: passport_number?,
                        passport_expiry: passport_expiry?,
                        country_code: country_code?,
                        passport_copy: passport_copy?,
                    })))
                })
            }
            None => v.finish(|| None),
        }
    }

    fn validate_share(&self) -> Result<SubStepOutput, ValidationErrors> {
        let mut v = FieldValidator::new();
        let share = v.percentage(fields::SHARE_PERCENTAGE, &self.share_percentage);

        v.finish(|| share.map(SubStepOutput::Share))
    }
}

impl PersonDraft {
    /// Replaces the section of the draft that `output` covers.
    pub fn apply(
        &mut self,
        output: SubStepOutput,
    ) {
        match output {
            SubStepOutput::Personal(personal) => self.personal = Some(personal),
            SubStepOutput::Residency(identity) => self.identity = Some(identity),
            SubStepOutput::Share(share) => self.share_percentage = Some(share),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn filled() -> PersonForm {
        PersonForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "0501234567".into(),
            is_uae_resident: Some(false),
            passport_number: "X1234567".into(),
            passport_expiry: "2031-05-01".into(),
            country_code: "PT".into(),
            passport_copy: Some(DocumentRef::new("passport.png")),
            share_percentage: "25".into(),
            ..PersonForm::default()
        }
    }

    #[test]
    fn personal_info_requires_all_three_fields() {
        let form = PersonForm::default();

        let err = form.validate(SubStep::PersonalInfo).unwrap_err();

        assert_eq!(err.fields(), vec!["name", "email", "phone"]);
    }

    #[test]
    fn personal_info_is_trimmed() {
        let form = PersonForm {
            name: "  Ana  ".into(),
            ..filled()
        };

        let output = form.validate(SubStep::PersonalInfo).unwrap();

        assert_eq!(
            output,
            SubStepOutput::Personal(PersonalInfo {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                phone: "0501234567".into(),
            })
        );
    }

    #[test]
    fn non_resident_without_passport_number_is_rejected() {
        let form = PersonForm {
            passport_number: String::new(),
            ..filled()
        };

        let err = form.validate(SubStep::ResidencyInfo).unwrap_err();

        assert_eq!(err.fields(), vec!["passport_number"]);
    }

    #[test]
    fn non_resident_needs_passport_copy() {
        let form = PersonForm {
            passport_copy: None,
            ..filled()
        };

        let err = form.validate(SubStep::ResidencyInfo).unwrap_err();

        assert_eq!(
            err.message_for("passport_copy"),
            Some("Please upload passport copy")
        );
    }

    #[test]
    fn resident_ignores_passport_fields() {
        let form = PersonForm {
            is_uae_resident: Some(true),
            emirates_id: "784-1990-1234567-1".into(),
            passport_number: String::new(),
            passport_copy: None,
            ..filled()
        };

        let output = form.validate(SubStep::ResidencyInfo).unwrap();

        assert_eq!(
            output,
            SubStepOutput::Residency(Identity::Resident(ResidentIdentity {
                emirates_id: "784-1990-1234567-1".into()
            }))
        );
    }

    #[test]
    fn switching_residency_changes_required_fields() {
        let mut form = filled();
        assert!(form.required_fields(SubStep::ResidencyInfo).contains(&"passport_number"));

        form.is_uae_resident = Some(true);

        assert_eq!(
            form.required_fields(SubStep::ResidencyInfo),
            &["is_uae_resident", "emirates_id"]
        );
        assert!(form.validate(SubStep::ResidencyInfo).is_err());
    }

    #[test]
    fn missing_residency_answer_is_reported() {
        let form = PersonForm {
            is_uae_resident: None,
            ..filled()
        };

        let err = form.validate(SubStep::ResidencyInfo).unwrap_err();

        assert_eq!(err.fields(), vec!["is_uae_resident"]);
    }

    #[test]
    fn share_must_be_between_zero_and_hundred() {
        let form = PersonForm {
            share_percentage: "120".into(),
            ..filled()
        };

        assert!(form.validate(SubStep::ShareInfo).is_err());
        assert_eq!(
            filled().validate(SubStep::ShareInfo),
            Ok(SubStepOutput::Share(dec!(25)))
        );
    }

    #[test]
    fn from_draft_restores_foreign_identity() {
        let draft = PersonDraft {
            personal: None,
            identity: Some(Identity::Foreign(ForeignIdentity {
                passport_number: "X1".into(),
                passport_expiry: NaiveDate::from_ymd_opt(2030, 2, 3).unwrap(),
                country_code: "IN".into(),
                passport_copy: DocumentRef::new("p.pdf"),
            })),
            share_percentage: Some(dec!(12.5)),
        };

        let form = PersonForm::from_draft(&draft);

        assert_eq!(form.is_uae_resident, Some(false));
        assert_eq!(form.passport_expiry, "2030-02-03");
        assert_eq!(form.share_percentage, "12.5");
    }

    #[test]
    fn from_blank_draft_defaults_to_resident() {
        let form = PersonForm::from_draft(&PersonDraft::default());

        assert_eq!(form.is_uae_resident, Some(true));
        assert_eq!(form.name, "");
    }
}

//! Form schema — which field of which form carries which part of a [`Claim`].
//!
//! The schema is frozen from configuration once and is read-only afterwards.
//! Lookups return `Option`: a field without a role is ignored, never
//! misrouted to a default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::FormConfig;
use crate::error::ConfigError;
use crate::normalizer::{digits_only, single_line};
use crate::plate::PlateExtractor;
use crate::types::{Claim, Submission};

/// Semantic role of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Activity,
    Title,
    Address,
    Inn,
    HeadFio,
    Phone,
    Email,
    Cars,
    Agreement,
    Reliability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone)]
struct FormTable {
    district: District,
    fields: HashMap<String, FieldRole>,
}

/// Immutable lookup keyed by form identifier, then field identifier.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    forms: HashMap<String, FormTable>,
}

impl FormSchema {
    /// Freeze configured forms. Duplicate form ids, or a field mapped twice
    /// within one form, are configuration errors.
    pub fn from_config(forms: &[FormConfig]) -> Result<Self, ConfigError> {
        let mut tables = HashMap::with_capacity(forms.len());

        for form in forms {
            let mut fields = HashMap::with_capacity(form.fields.len());
            for field in &form.fields {
                if fields.insert(field.id.clone(), field.role).is_some() {
                    return Err(ConfigError::DuplicateField {
                        form_id: form.id.clone(),
                        field_id: field.id.clone(),
                    });
                }
            }

            let table = FormTable {
                district: District {
                    id: form.district_id,
                    title: form.district.clone(),
                },
                fields,
            };
            if tables.insert(form.id.clone(), table).is_some() {
                return Err(ConfigError::DuplicateForm(form.id.clone()));
            }
        }

        Ok(Self { forms: tables })
    }

    pub fn district(&self, form_id: &str) -> Option<&District> {
        self.forms.get(form_id).map(|form| &form.district)
    }

    pub fn role(&self, form_id: &str, field_id: &str) -> Option<FieldRole> {
        self.forms.get(form_id)?.fields.get(field_id).copied()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Map one submission onto a claim. Each call is independent.
    pub fn to_claim(&self, submission: &Submission, plates: &PlateExtractor) -> Claim {
        let mut claim = Claim {
            code: submission.code.clone(),
            created: Some(submission.created),
            ..Claim::default()
        };

        match self.district(&submission.form_id) {
            Some(district) => {
                claim.district_id = district.id;
                claim.district = district.title.clone();
            }
            None => warn!(
                form_id = %submission.form_id,
                code = %submission.code,
                "unknown form, district left empty"
            ),
        }

        for (field_id, value) in submission.first_values() {
            match self.role(&submission.form_id, field_id) {
                Some(role) => apply_role(&mut claim, role, value, plates),
                None => debug!(form_id = %submission.form_id, field_id, "field has no role"),
            }
        }

        claim.require_head_fio();
        claim
    }
}

/// Store one raw value on the claim according to its role.
pub(crate) fn apply_role(claim: &mut Claim, role: FieldRole, value: &str, plates: &PlateExtractor) {
    match role {
        FieldRole::Activity => claim.company.activity = single_line(value),
        FieldRole::Title => claim.company.title = single_line(value),
        FieldRole::Address => claim.company.address = single_line(value),
        FieldRole::Inn => claim.company.inn = digits_only(value),
        FieldRole::HeadFio => claim.resolve_head_fio(value),
        FieldRole::Phone => claim.company.head.contact.phone = value.to_string(),
        FieldRole::Email => claim.company.head.contact.email = value.to_string(),
        FieldRole::Cars => {
            claim.source = value.to_string();
            claim.cars = plates.extract(value);
        }
        FieldRole::Agreement => claim.agreement = value.to_string(),
        FieldRole::Reliability => claim.reliability = value.to_string(),
    }
}

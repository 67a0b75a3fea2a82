//! Persistence-ready record shapes derived from a [`Claim`].
//!
//! Storage itself lives outside this crate; these types only fix the
//! field-by-field mapping a store receives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Car, Claim, Fio};

/// Processing state of an ingested file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    New,
    Processed,
    Failed,
}

/// One ingested file and its processing log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filepath: String,
    pub status: FileStatus,
    pub log: String,
    pub created_at: DateTime<Utc>,
    /// Parser that handled the file (`dump` or `sheet`).
    pub source: String,
}

impl FileRecord {
    pub fn new(filepath: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            status: FileStatus::New,
            log: String::new(),
            created_at: Utc::now(),
            source: source.into(),
        }
    }
}

/// Where a claim's records came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Origin {
    pub file_id: i64,
    pub pass_type: i32,
    pub created_by: i64,
}

/// One submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    pub file_id: i64,
    pub workflow_status: i32,
    pub code: String,
    pub district: i64,
    pub pass_type: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: i64,
    pub user_id: i64,
    pub source: String,
}

impl BidRecord {
    pub fn from_claim(claim: &Claim, origin: &Origin) -> Self {
        Self {
            file_id: origin.file_id,
            workflow_status: 0,
            code: claim.code.clone(),
            district: claim.district_id,
            pass_type: origin.pass_type,
            created_at: claim.created,
            created_by: origin.created_by,
            user_id: 0,
            source: claim.source.clone(),
        }
    }
}

/// Review state of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassStatus {
    /// Company head and driver are both complete.
    Pending,
    /// Some name data is missing; needs manual review.
    Incomplete,
}

/// One pass request: company, head, a single vehicle and its driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    pub company_branch: String,
    pub company_inn: String,
    pub company_name: String,
    pub company_address: String,
    pub company_ceo_phone: String,
    pub company_ceo_email: String,
    pub company_lastname: String,
    pub company_firstname: String,
    pub company_patrname: String,
    pub employee_lastname: String,
    pub employee_firstname: String,
    pub employee_patrname: String,
    pub employee_car: String,
    pub employee_agree: String,
    pub employee_confirm: String,
    pub source: String,
    pub district: i64,
    pub pass_type: i32,
    /// Issued pass number; empty until issued.
    pub number: Option<String>,
    pub status: PassStatus,
    pub file_id: i64,
    pub bid_id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

fn name_parts(fio: Option<&Fio>) -> (String, String, String) {
    fio.map(|f| (f.surname.clone(), f.name.clone(), f.patronymic.clone()))
        .unwrap_or_default()
}

impl PassRecord {
    /// One record per car, in list order.
    pub fn for_claim(claim: &Claim, bid_id: i64, origin: &Origin) -> Vec<Self> {
        claim
            .cars
            .iter()
            .map(|car| Self::for_car(claim, car, bid_id, origin))
            .collect()
    }

    fn for_car(claim: &Claim, car: &Car, bid_id: i64, origin: &Origin) -> Self {
        let company = &claim.company;
        let (ceo_last, ceo_first, ceo_patr) = name_parts(company.head.fio.as_ref());
        let (emp_last, emp_first, emp_patr) = name_parts(car.fio.as_ref());

        Self {
            company_branch: company.activity.clone(),
            company_inn: company.inn.clone(),
            company_name: company.title.clone(),
            company_address: company.address.clone(),
            company_ceo_phone: company.head.contact.phone.clone(),
            company_ceo_email: company.head.contact.email.clone(),
            company_lastname: ceo_last,
            company_firstname: ceo_first,
            company_patrname: ceo_patr,
            employee_lastname: emp_last,
            employee_firstname: emp_first,
            employee_patrname: emp_patr,
            employee_car: car.number.clone(),
            employee_agree: claim.agreement.clone(),
            employee_confirm: claim.reliability.clone(),
            source: claim.source.clone(),
            district: claim.district_id,
            pass_type: origin.pass_type,
            number: None,
            status: if claim.valid && car.valid {
                PassStatus::Pending
            } else {
                PassStatus::Incomplete
            },
            file_id: origin.file_id,
            bid_id,
            created_at: claim.created,
        }
    }
}

//! Core types for claim-core.
//!
//! This module defines the records produced by a single extraction pass: the
//! [`Claim`] for one company's application, its [`Company`] and head
//! [`Person`], and the list of [`Car`] entries with their drivers. Every value
//! is built once and never mutated after the pass that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reason recorded on a [`Claim`] whose head FIO is incomplete.
pub const HEAD_FIO_MISSING: &str = "Нет данных по ФИО руководителя";

/// Reason recorded on a [`Car`] whose driver FIO is incomplete.
pub const DRIVER_FIO_MISSING: &str = "Нет данных по ФИО водителя";

/// A complete three-part personal name.
///
/// There is no partial FIO: a value of this type only exists when surname,
/// name and patronymic are all known. Callers hold `Option<Fio>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fio {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl Fio {
    /// Build an FIO from the first three tokens. Returns `None` when fewer
    /// than three tokens are available; extra tokens are ignored.
    pub fn from_tokens<'a, I>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut it = tokens.into_iter();
        let surname = it.next()?;
        let name = it.next()?;
        let patronymic = it.next()?;
        Some(Self {
            surname: surname.to_string(),
            name: name.to_string(),
            patronymic: patronymic.to_string(),
        })
    }

    /// Parse the head-of-company FIO: surrounding whitespace is trimmed, then
    /// the value is split on single spaces. An empty part among the first
    /// three (a run of spaces) leaves the name incomplete.
    pub fn from_head_text(raw: &str) -> Option<Self> {
        let fio = Self::from_tokens(raw.trim().split(' '))?;
        let complete = [&fio.surname, &fio.name, &fio.patronymic]
            .iter()
            .all(|part| !part.is_empty());
        complete.then_some(fio)
    }
}

impl std::fmt::Display for Fio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.surname, self.name, self.patronymic)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

/// A responsible person: the company head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub fio: Option<Fio>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Kind of activity, single-line.
    pub activity: String,
    pub title: String,
    /// Postal address, single-line.
    pub address: String,
    /// Taxpayer number, digits only.
    pub inn: String,
    pub head: Person,
}

/// A vehicle and its driver.
///
/// A `Car` only exists when a plate matched its source line; `number` is
/// therefore never empty. `valid == false` means the driver FIO could not be
/// resolved, in which case `reason` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Normalised plate: no whitespace, uppercase.
    pub number: String,
    pub fio: Option<Fio>,
    pub valid: bool,
    pub reason: Option<String>,
}

impl Car {
    /// Build a car from a normalised plate and whatever name tokens followed it.
    pub fn new<'a, I>(number: String, name_tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        match Fio::from_tokens(name_tokens) {
            Some(fio) => Self {
                number,
                fio: Some(fio),
                valid: true,
                reason: None,
            },
            None => Self {
                number,
                fio: None,
                valid: false,
                reason: Some(DRIVER_FIO_MISSING.to_string()),
            },
        }
    }
}

/// The structured record produced for one company's pass application.
///
/// Invariant: `valid == false` exactly when the head FIO is unresolved, and
/// `reason` is set exactly when `valid == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub district: String,
    pub district_id: i64,
    /// Submission identifier; empty for spreadsheet claims.
    pub code: String,
    /// Submission timestamp; `None` for spreadsheet claims.
    pub created: Option<DateTime<Utc>>,
    pub company: Company,
    pub cars: Vec<Car>,
    pub agreement: String,
    pub reliability: String,
    pub valid: bool,
    pub reason: Option<String>,
    /// Raw car-list text the `cars` were extracted from.
    pub source: String,
}

impl Default for Claim {
    fn default() -> Self {
        Self {
            district: String::new(),
            district_id: 0,
            code: String::new(),
            created: None,
            company: Company::default(),
            cars: Vec::new(),
            agreement: String::new(),
            reliability: String::new(),
            valid: true,
            reason: None,
            source: String::new(),
        }
    }
}

impl Claim {
    /// Resolve the head FIO from its raw text. An incomplete value leaves the
    /// FIO unset and marks the claim invalid; a complete one clears any
    /// earlier head-FIO shortfall.
    pub fn resolve_head_fio(&mut self, raw: &str) {
        match Fio::from_head_text(raw) {
            Some(fio) => {
                self.company.head.fio = Some(fio);
                self.valid = true;
                self.reason = None;
            }
            None => {
                self.company.head.fio = None;
                self.invalidate(HEAD_FIO_MISSING);
            }
        }
    }

    /// Mark the claim invalid when no head FIO was ever resolved.
    pub fn require_head_fio(&mut self) {
        if self.company.head.fio.is_none() {
            self.invalidate(HEAD_FIO_MISSING);
        }
    }

    fn invalidate(&mut self, reason: &str) {
        self.valid = false;
        self.reason = Some(reason.to_string());
    }
}

/// One parsed, pre-mapping form record taken from a single dump block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The `_id` of the block; becomes [`Claim::code`].
    pub code: String,
    pub form_id: String,
    pub created: DateTime<Utc>,
    /// `(field id, values)` pairs in document order.
    pub fields: Vec<(String, Vec<String>)>,
}

impl Submission {
    /// The first value of every field, in document order. Fields without any
    /// value yield the empty string.
    pub fn first_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(id, values)| {
            (
                id.as_str(),
                values.first().map(String::as_str).unwrap_or_default(),
            )
        })
    }
}

//! Spreadsheet cell extraction for single-sheet application workbooks.
//!
//! The form lives on one worksheet with a fixed layout; every value sits at a
//! known address. Opening the workbook is the caller's job; this module only
//! needs cell lookup through [`Workbook`].

use phf::phf_map;

use crate::plate::PlateExtractor;
use crate::schema::{apply_role, FieldRole};
use crate::types::Claim;

/// Cell lookup by `(sheet, address)`. Missing sheets and empty cells are `None`.
pub trait Workbook {
    fn cell(&self, sheet: &str, address: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetCell {
    District,
    Field(FieldRole),
}

/// Fixed address → field layout of the application sheet.
pub static SHEET_CELLS: phf::Map<&'static str, SheetCell> = phf_map! {
    "A1" => SheetCell::District,
    "B5" => SheetCell::Field(FieldRole::Activity),
    "B6" => SheetCell::Field(FieldRole::Title),
    "B7" => SheetCell::Field(FieldRole::Address),
    "B8" => SheetCell::Field(FieldRole::Inn),
    "B9" => SheetCell::Field(FieldRole::HeadFio),
    "B10" => SheetCell::Field(FieldRole::Phone),
    "B11" => SheetCell::Field(FieldRole::Email),
    "B12" => SheetCell::Field(FieldRole::Cars),
    "B13" => SheetCell::Field(FieldRole::Agreement),
    "B14" => SheetCell::Field(FieldRole::Reliability),
};

/// Reads a [`Claim`] out of the fixed cell layout.
#[derive(Debug, Clone)]
pub struct SheetExtractor {
    sheet: String,
}

impl SheetExtractor {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self { sheet: sheet.into() }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Build one claim. Empty cells read as empty strings; an empty or short
    /// head FIO marks the claim invalid.
    pub fn extract<W: Workbook + ?Sized>(&self, book: &W, plates: &PlateExtractor) -> Claim {
        let mut claim = Claim::default();

        for (address, cell) in SHEET_CELLS.entries() {
            let value = book.cell(&self.sheet, address).unwrap_or_default();
            match *cell {
                SheetCell::District => claim.district = value,
                SheetCell::Field(role) => apply_role(&mut claim, role, &value, plates),
            }
        }

        claim
    }
}

//! Excel workbooks via `calamine`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use claim_core::sheet::Workbook;
use claim_core::{Claim, ParseError, Pipeline};
use tracing::{debug, info};

/// An opened workbook with every worksheet loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct XlsxWorkbook {
    sheets: HashMap<String, Range<Data>>,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let name = path.display().to_string();
        let mut workbook =
            open_workbook_auto(path).map_err(|e| ParseError::unreadable(&name, e.to_string()))?;
        let sheets: HashMap<_, _> = workbook.worksheets().into_iter().collect();
        debug!(path = %name, sheets = sheets.len(), "workbook opened");
        Ok(Self { sheets })
    }
}

impl Workbook for XlsxWorkbook {
    fn cell(&self, sheet: &str, address: &str) -> Option<String> {
        let position = cell_position(address)?;
        match self.sheets.get(sheet)?.get_value(position)? {
            Data::Empty => None,
            value => Some(value.to_string()).filter(|s| !s.is_empty()),
        }
    }
}

/// `"B12"` → zero-based `(row, column)` = `(11, 1)`.
pub fn cell_position(address: &str) -> Option<(u32, u32)> {
    let split = address.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = address.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let column = letters
        .chars()
        .try_fold(0u32, |acc, c| {
            let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
            acc.checked_mul(26)?.checked_add(digit)
        })?;
    let row: u32 = digits.parse().ok()?;

    Some((row.checked_sub(1)?, column - 1))
}

/// An application workbook on disk.
#[derive(Debug, Clone)]
pub struct SpreadsheetFile {
    path: PathBuf,
    name: String,
}

impl SpreadsheetFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl crate::ClaimSource for SpreadsheetFile {
    fn kind(&self) -> &'static str {
        "sheet"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn claims(&self, pipeline: &Pipeline) -> Result<Vec<Claim>, ParseError> {
        let book = XlsxWorkbook::open(&self.path)?;
        let claim = pipeline.claim_from_workbook(&book);
        info!(path = %self.name, valid = claim.valid, cars = claim.cars.len(), "workbook parsed");
        Ok(vec![claim])
    }
}

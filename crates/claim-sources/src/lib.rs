//! claim-sources — input adapters for claimparse.
//!
//! Each source reads one file from disk and runs it through a shared
//! [`Pipeline`], producing the claims it contains. Sources are independent;
//! the caller may run them in parallel.

pub mod file;
pub mod xlsx;

use std::path::Path;

use claim_core::{Claim, ParseError, Pipeline};

pub use file::DumpFile;
pub use xlsx::{SpreadsheetFile, XlsxWorkbook};

/// A single input file that yields claims.
pub trait ClaimSource: Send + Sync {
    /// Parser name recorded with the file (`dump` or `sheet`).
    fn kind(&self) -> &'static str;

    /// Source identity used in logs and errors.
    fn name(&self) -> &str;

    fn claims(&self, pipeline: &Pipeline) -> Result<Vec<Claim>, ParseError>;
}

/// Pick a source by file extension: `.xlsx`/`.xlsm` are workbooks,
/// everything else is read as a dump.
pub fn source_for_path(path: &Path) -> Result<Box<dyn ClaimSource>, ParseError> {
    if path.as_os_str().is_empty() {
        return Err(ParseError::missing("input path"));
    }

    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xlsm"));

    Ok(if is_workbook {
        Box::new(SpreadsheetFile::new(path))
    } else {
        Box::new(DumpFile::new(path))
    })
}

//! The assembled, immutable extraction pipeline.

use tracing::info;

use crate::config::Config;
use crate::dump::DumpReconstructor;
use crate::error::{ConfigError, Result};
use crate::plate::PlateExtractor;
use crate::schema::FormSchema;
use crate::sheet::{SheetExtractor, Workbook};
use crate::types::Claim;

/// Every matcher and lookup table, built once from [`Config`]. Holds no
/// mutable state, so one instance can serve concurrent parses behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub plates: PlateExtractor,
    pub dumps: DumpReconstructor,
    pub schema: FormSchema,
    pub sheet: SheetExtractor,
}

impl Pipeline {
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let schema = FormSchema::from_config(&config.forms)?;
        info!(forms = schema.len(), sheet = %config.sheet.name, "pipeline ready");
        Ok(Self {
            plates: PlateExtractor::new(config.extract.min_line_length),
            dumps: DumpReconstructor::new(),
            schema,
            sheet: SheetExtractor::new(config.sheet.name.clone()),
        })
    }

    /// All claims of one dump, or the first block error.
    pub fn claims_from_dump(&self, source_id: &str, content: &str) -> Result<Vec<Claim>> {
        let submissions = self.dumps.reconstruct(source_id, content)?;
        Ok(submissions
            .iter()
            .map(|submission| self.schema.to_claim(submission, &self.plates))
            .collect())
    }

    pub fn claim_from_workbook<W: Workbook + ?Sized>(&self, book: &W) -> Claim {
        self.sheet.extract(book, &self.plates)
    }
}

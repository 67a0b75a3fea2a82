//! Dump files on the local filesystem.

use std::path::{Path, PathBuf};

use claim_core::{Claim, ParseError, Pipeline};
use tracing::info;

use crate::ClaimSource;

#[derive(Debug, Clone)]
pub struct DumpFile {
    path: PathBuf,
    name: String,
}

impl DumpFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Full file content; invalid UTF-8 is replaced rather than rejected.
    pub fn read(&self) -> Result<String, ParseError> {
        let bytes = std::fs::read(&self.path).map_err(|e| ParseError::unreadable(&self.name, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl ClaimSource for DumpFile {
    fn kind(&self) -> &'static str {
        "dump"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn claims(&self, pipeline: &Pipeline) -> Result<Vec<Claim>, ParseError> {
        let content = self.read()?;
        let claims = pipeline.claims_from_dump(&self.name, &content)?;
        info!(path = %self.name, claims = claims.len(), "dump parsed");
        Ok(claims)
    }
}

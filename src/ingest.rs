//! Ingest orchestrator — runs independent files through the pipeline.
//!
//! Files are parsed in parallel on the blocking pool. A file that fails is
//! reported and skipped; it never stops the others.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use claim_core::records::{BidRecord, FileRecord, FileStatus, Origin, PassRecord};
use claim_core::store::Repository;
use claim_core::{Claim, ParseError, Pipeline, StoreError};
use claim_sources::source_for_path;
use serde::Serialize;
use tracing::{info, warn};

/// The result of processing one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: String,
    /// Parser that handled the file, when one could be chosen.
    pub kind: Option<&'static str>,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<Claim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_failed(&self) -> bool {
        self.status == FileStatus::Failed
    }

    fn failed(path: String, kind: Option<&'static str>, error: String) -> Self {
        Self {
            path,
            kind,
            status: FileStatus::Failed,
            claims: Vec::new(),
            error: Some(error),
        }
    }
}

/// Parse one file synchronously.
pub fn ingest_path(pipeline: &Pipeline, path: &Path) -> FileOutcome {
    let display = path.display().to_string();

    let source = match source_for_path(path) {
        Ok(source) => source,
        Err(e) => return FileOutcome::failed(display, None, error_chain(&e)),
    };

    match source.claims(pipeline) {
        Ok(claims) => FileOutcome {
            path: display,
            kind: Some(source.kind()),
            status: FileStatus::Processed,
            claims,
            error: None,
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "file skipped");
            FileOutcome::failed(display, Some(source.kind()), error_chain(&e))
        }
    }
}

/// Parse every path in parallel. Outcomes come back in input order.
pub async fn ingest_paths(pipeline: Arc<Pipeline>, paths: Vec<PathBuf>) -> Vec<FileOutcome> {
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let pipeline = Arc::clone(&pipeline);
            let display = path.display().to_string();
            let handle = tokio::task::spawn_blocking(move || ingest_path(&pipeline, &path));
            (display, handle)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (display, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => FileOutcome::failed(display, None, format!("worker failed: {e}")),
        };
        outcomes.push(outcome);
    }

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    info!(files = outcomes.len(), failed, "ingest finished");
    outcomes
}

/// Record each outcome as a file-tracking record; returns the assigned ids.
pub fn record_outcomes<R>(repo: &mut R, outcomes: &[FileOutcome]) -> Result<Vec<i64>, StoreError>
where
    R: Repository<FileRecord>,
{
    outcomes
        .iter()
        .map(|outcome| {
            repo.create(FileRecord {
                status: outcome.status,
                log: outcome
                    .error
                    .clone()
                    .unwrap_or_else(|| format!("{} claim(s)", outcome.claims.len())),
                ..FileRecord::new(outcome.path.clone(), outcome.kind.unwrap_or_default())
            })
        })
        .collect()
}

/// How many bid and pass records [`record_claims`] created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Recorded {
    pub bids: usize,
    pub passes: usize,
}

/// Record a bid per claim and a pass per car. `file_ids` are the ids
/// [`record_outcomes`] assigned, in outcome order; `origin` supplies the pass
/// type and author, its `file_id` is replaced per file.
pub fn record_claims<B, P>(
    bids: &mut B,
    passes: &mut P,
    outcomes: &[FileOutcome],
    file_ids: &[i64],
    origin: Origin,
) -> Result<Recorded, StoreError>
where
    B: Repository<BidRecord>,
    P: Repository<PassRecord>,
{
    let mut recorded = Recorded::default();

    for (outcome, &file_id) in outcomes.iter().zip(file_ids) {
        let origin = Origin { file_id, ..origin };
        for claim in &outcome.claims {
            let bid_id = bids.create(BidRecord::from_claim(claim, &origin))?;
            recorded.bids += 1;
            for pass in PassRecord::for_claim(claim, bid_id, &origin) {
                passes.create(pass)?;
                recorded.passes += 1;
            }
        }
    }

    info!(bids = recorded.bids, passes = recorded.passes, "claims recorded");
    Ok(recorded)
}

/// `error: cause: cause` on one line.
fn error_chain(err: &ParseError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

//! claimparse — claim-application ingestion.
//!
//! Normalises claim-application documents (export dumps and spreadsheets)
//! into structured [`Claim`] records. The engine lives in `claim-core`, file
//! adapters in `claim-sources`; this crate adds the orchestrator the binary
//! and integration tests drive.
//!
//! # Architecture
//!
//! ```text
//! paths ──► ingest ──► ClaimSource (dump | sheet) ──► Pipeline ──► Claim
//!              │
//!              └──► FileRecord per path
//! ```

pub mod ingest;

pub use claim_core::{Car, Claim, Company, Config, Fio, ParseError, Pipeline};
pub use claim_sources::{source_for_path, ClaimSource};

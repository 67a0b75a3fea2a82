//! claim-core — extraction engine for claimparse.
//!
//! Turns claim-application documents into structured [`Claim`] records. Two
//! input shapes are supported: a line-oriented export dump with near-JSON
//! bodies, and a spreadsheet with a fixed cell layout.
//!
//! # Architecture
//!
//! ```text
//! dump text ──► DumpReconstructor ──► Submission ──► FormSchema ──┐
//!                                                                 ├──► Claim
//! workbook ───► SheetExtractor ───────────────────────────────────┘
//!                      │                                  │
//!                      └──────── PlateExtractor ◄─────────┘  (car lists)
//! ```
//!
//! Everything is synchronous and holds no mutable state after construction;
//! [`Pipeline`] bundles the pieces for sharing across threads.

pub mod config;
pub mod dump;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod plate;
pub mod records;
pub mod schema;
pub mod sheet;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, ParseError, Result, StoreError};
pub use pipeline::Pipeline;
pub use types::{Car, Claim, Company, Contact, Fio, Person, Submission};

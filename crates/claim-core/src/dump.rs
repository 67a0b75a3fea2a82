//! Dump reconstruction — repairs a comment-delimited export into JSON blocks.
//!
//! The export looks like this:
//!
//! ```text
//! /* 1 createdAt:2020-04-15T09:54:13.503Z */
//! {
//! 	"_id" : ObjectId("5e96d7f5a1b2c3d4e5f60718"),
//! 	"formId" : "5e8b1f3a9c2d4e0017a1c001",
//! 	"data" : [ { "fid" : "2", "value" : [ "ООО Ромашка" ] } ]
//! },
//!
//! ```
//!
//! Each block opens with a header comment and closes with a blank line. Before
//! the body parses as JSON the `ObjectId(..)` line becomes a plain `"_id"`
//! string field, the header's `createdAt` is spliced in as the third line, and
//! the stray comma after the closing brace is removed.
//!
//! A file is all-or-nothing: the first block that cannot be repaired fails the
//! whole file and no submissions are returned for it.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::types::Submission;

const HEADER_PATTERN: &str = r"/\*\s*([0-9]+)\s+createdAt:\s*([^*]+?)\s*\*/";
const OBJECT_ID_PATTERN: &str = r#"ObjectId\(\s*"([^"]+)"\s*\)"#;

/// Lines a body needs before `createdAt` can go in as the third line:
/// opening brace, first field, closing brace.
const MIN_BODY_LINES: usize = 3;

/// One repaired block, ready to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 1-based position of the block in its file.
    pub index: usize,
    /// Sequence number from the header comment.
    pub sequence: u64,
    /// Raw `createdAt` value from the header comment.
    pub created_at: String,
    /// 1-based line number of the header.
    pub line: usize,
    /// Repaired JSON object text.
    pub text: String,
}

#[derive(Debug)]
struct OpenBlock {
    sequence: u64,
    created_at: String,
    line: usize,
    lines: Vec<String>,
}

/// Line scanner for export dumps. Holds compiled matchers only; build once and share.
#[derive(Debug, Clone)]
pub struct DumpReconstructor {
    header: Regex,
    object_id: Regex,
}

impl Default for DumpReconstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl DumpReconstructor {
    pub fn new() -> Self {
        Self {
            header: Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"),
            object_id: Regex::new(OBJECT_ID_PATTERN).expect("ObjectId pattern is a valid regex"),
        }
    }

    /// Repair and parse every block of a dump into submissions, in file order.
    pub fn reconstruct(&self, source_id: &str, content: &str) -> Result<Vec<Submission>> {
        self.blocks(source_id, content)?
            .iter()
            .map(|block| block.parse(source_id))
            .collect()
    }

    /// Repair every block without parsing it.
    pub fn blocks(&self, source_id: &str, content: &str) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        let mut open: Option<OpenBlock> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end();

            if let Some(caps) = self.header.captures(line) {
                if let Some(dropped) = open.take() {
                    warn!(
                        source_id,
                        line = dropped.line,
                        "block not terminated by a blank line, discarded"
                    );
                }
                let sequence = caps[1].parse::<u64>().map_err(|e| ParseError::MalformedBlock {
                    source_id: source_id.to_string(),
                    block: blocks.len() + 1,
                    line: idx + 1,
                    reason: format!("header sequence {:?}: {e}", &caps[1]),
                })?;
                open = Some(OpenBlock {
                    sequence,
                    created_at: caps[2].to_string(),
                    line: idx + 1,
                    lines: Vec::new(),
                });
                continue;
            }

            let Some(block) = open.as_mut() else {
                continue;
            };

            if line.is_empty() {
                if let Some(block) = open.take() {
                    blocks.push(splice(source_id, blocks.len() + 1, block)?);
                }
                continue;
            }

            match self.object_id.captures(line) {
                Some(caps) => {
                    let comma = if line.ends_with(',') { "," } else { "" };
                    block
                        .lines
                        .push(format!("\t\"_id\":{}{comma}", json_string(&caps[1])));
                }
                None => block.lines.push(line.to_string()),
            }
        }

        // End of input closes a final block the same way a blank line would.
        if let Some(block) = open.take() {
            blocks.push(splice(source_id, blocks.len() + 1, block)?);
        }

        debug!(source_id, blocks = blocks.len(), "dump reconstructed");
        Ok(blocks)
    }
}

/// Insert `createdAt` as the third line and drop the trailing comma after the
/// closing brace.
fn splice(source_id: &str, index: usize, block: OpenBlock) -> Result<Block> {
    let OpenBlock {
        sequence,
        created_at,
        line,
        mut lines,
    } = block;

    if lines.len() < MIN_BODY_LINES {
        return Err(ParseError::MalformedBlock {
            source_id: source_id.to_string(),
            block: index,
            line,
            reason: format!(
                "body has {} line(s), at least {MIN_BODY_LINES} are required",
                lines.len()
            ),
        });
    }

    lines.insert(2, format!("\t\"createdAt\":{},", json_string(&created_at)));

    if let Some(last) = lines.last_mut() {
        if let Some(stripped) = last.strip_suffix(',') {
            *last = stripped.to_string();
        }
    }

    Ok(Block {
        index,
        sequence,
        created_at,
        line,
        text: lines.join("\n"),
    })
}

fn json_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

// ---------------------------------------------------------------------------
// Block → Submission
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawSubmission {
    #[serde(rename = "_id")]
    id: Scalar,
    #[serde(rename = "formId", alias = "form_id", alias = "formID")]
    form_id: Scalar,
    #[serde(rename = "createdAt")]
    created_at: String,
    #[serde(default)]
    data: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(alias = "FID")]
    fid: Scalar,
    #[serde(default)]
    value: RawValues,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValues {
    Many(Vec<Value>),
    One(Value),
}

impl Default for RawValues {
    fn default() -> Self {
        RawValues::Many(Vec::new())
    }
}

impl RawValues {
    fn into_strings(self) -> Vec<String> {
        match self {
            RawValues::Many(values) => values.into_iter().map(value_text).collect(),
            RawValues::One(Value::Null) => Vec::new(),
            RawValues::One(value) => vec![value_text(value)],
        }
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Block {
    /// Parse the repaired text into a [`Submission`].
    pub fn parse(&self, source_id: &str) -> Result<Submission> {
        let malformed = |reason: String| ParseError::MalformedBlock {
            source_id: source_id.to_string(),
            block: self.index,
            line: self.line,
            reason,
        };

        // Through `Value` first so a repeated key keeps its last value instead
        // of failing the whole block.
        let value: Value = serde_json::from_str(&self.text).map_err(|e| malformed(e.to_string()))?;
        let raw: RawSubmission = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

        let created = parse_created(&raw.created_at)
            .ok_or_else(|| malformed(format!("unrecognised createdAt {:?}", raw.created_at)))?;

        Ok(Submission {
            code: raw.id.into_string(),
            form_id: raw.form_id.into_string(),
            created,
            fields: raw
                .data
                .into_iter()
                .map(|field| (field.fid.into_string(), field.value.into_strings()))
                .collect(),
        })
    }
}

/// RFC 3339, or a naive `YYYY-MM-DD[ T]HH:MM:SS[.fff]` read as UTC.
pub fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

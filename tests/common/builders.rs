//! Test builders — dumps and in-memory workbooks.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::collections::HashMap;

use claim_core::sheet::Workbook;
use claim_core::{Config, Pipeline};
use serde_json::Value;

/// Pipeline over the embedded default configuration.
pub fn default_pipeline() -> Pipeline {
    Pipeline::from_config(&Config::defaults()).expect("default config is valid")
}

// ---------------------------------------------------------------------------
// DumpBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for export dumps in the on-disk format.
///
/// # Example
///
/// ```rust
/// let dump = DumpBuilder::new()
///     .block("abc", CENTRAL_FORM, "2020-04-15T09:00:00Z")
///     .field("5", "Иванов Иван Иванович")
///     .field("8", "А123ВС77 Петров Пётр Петрович")
///     .build();
/// ```
#[derive(Default)]
pub struct DumpBuilder {
    blocks: Vec<BlockSpec>,
}

struct BlockSpec {
    id: String,
    form_id: String,
    created_at: String,
    fields: Vec<(String, String)>,
}

impl DumpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new block; following `field` calls attach to it.
    pub fn block(mut self, id: &str, form_id: &str, created_at: &str) -> Self {
        self.blocks.push(BlockSpec {
            id: id.to_string(),
            form_id: form_id.to_string(),
            created_at: created_at.to_string(),
            fields: Vec::new(),
        });
        self
    }

    pub fn field(mut self, fid: &str, value: &str) -> Self {
        self.blocks
            .last_mut()
            .expect("call block() before field()")
            .fields
            .push((fid.to_string(), value.to_string()));
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            let data: Vec<String> = block
                .fields
                .iter()
                .map(|(fid, value)| {
                    format!(
                        "\t\t{{ \"fid\" : {}, \"value\" : [ {} ] }}",
                        quote(fid),
                        quote(value)
                    )
                })
                .collect();

            out.push_str(&format!("/* {} createdAt:{} */\n", i + 1, block.created_at));
            out.push_str("{\n");
            out.push_str(&format!("\t\"_id\" : ObjectId({}),\n", quote(&block.id)));
            out.push_str(&format!("\t\"formId\" : {},\n", quote(&block.form_id)));
            if data.is_empty() {
                out.push_str("\t\"data\" : []\n");
            } else {
                out.push_str("\t\"data\" : [\n");
                out.push_str(&data.join(",\n"));
                out.push_str("\n\t]\n");
            }
            out.push_str("},\n\n");
        }
        out
    }
}

fn quote(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

// ---------------------------------------------------------------------------
// FakeWorkbook
// ---------------------------------------------------------------------------

/// In-memory [`Workbook`]: `(sheet, address) → value`.
#[derive(Debug, Clone, Default)]
pub struct FakeWorkbook {
    cells: HashMap<(String, String), String>,
}

impl FakeWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell on the default application sheet.
    pub fn with_cell(self, address: &str, value: &str) -> Self {
        self.with_sheet_cell("Лист1", address, value)
    }

    pub fn with_sheet_cell(mut self, sheet: &str, address: &str, value: &str) -> Self {
        self.cells
            .insert((sheet.to_string(), address.to_string()), value.to_string());
        self
    }

    /// A fully filled-in application on `Лист1`.
    pub fn complete() -> Self {
        Self::new()
            .with_cell("A1", "Центральный")
            .with_cell("B5", "Розничная торговля\nпродуктами")
            .with_cell("B6", "ООО Ромашка")
            .with_cell("B7", "г. Москва\nул. Ленина, д. 1")
            .with_cell("B8", "7701-234-567")
            .with_cell("B9", "Иванов Иван Иванович")
            .with_cell("B10", "+7 900 000-00-00")
            .with_cell("B11", "info@romashka.ru")
            .with_cell(
                "B12",
                "1. Петров Пётр Петрович - А123ВС77\n2. В 456 ОР 199 Сидоров Сидор",
            )
            .with_cell("B13", "Согласен")
            .with_cell("B14", "Подтверждаю")
    }
}

impl Workbook for FakeWorkbook {
    fn cell(&self, sheet: &str, address: &str) -> Option<String> {
        self.cells
            .get(&(sheet.to_string(), address.to_string()))
            .cloned()
    }
}

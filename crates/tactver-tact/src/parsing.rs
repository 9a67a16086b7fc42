//! BPSV parsing for TACT `/versions` responses.
//!
//! A response looks like:
//!
//! ```text
//! Region!STRING:0|BuildConfig!HEX:16|CDNConfig!HEX:16|BuildId!DEC:4|VersionsName!String:0|ProductConfig!HEX:16
//! ## seqn = 2241282
//! us|be2bb98dc28aee05bbee519393696cdb|...|56313|11.0.2.56313|53020d32e1a25648c8e1eafd5771935f
//! ```
//!
//! The first non-comment line is the header. Lines starting with `#` are
//! comments, except that `## seqn = N` also carries the sequence number.
//! Surrounding whitespace on a line is ignored; whitespace inside a cell is
//! kept.

use crate::error::{TactError, TactResult};
use crate::models::VersionRecord;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

const SEQN_PREFIX: &str = "## seqn";

// ============================================================================
// Columns
// ============================================================================

/// Declared type of a BPSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Hex,
    Dec,
}

impl ColumnType {
    fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "STRING" => Some(Self::String),
            "HEX" => Some(Self::Hex),
            "DEC" => Some(Self::Dec),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("STRING"),
            Self::Hex => f.write_str("HEX"),
            Self::Dec => f.write_str("DEC"),
        }
    }
}

/// One header cell: `Name!TYPE:size`, or a bare `Name` (read as `STRING:0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
    /// Declared width in bytes; 0 means unchecked
    pub size: u32,
}

impl FromStr for Column {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let Some((name, spec)) = raw.split_once('!') else {
            if raw.is_empty() {
                return Err("empty column name".to_string());
            }
            return Ok(Self {
                name: raw.to_string(),
                kind: ColumnType::String,
                size: 0,
            });
        };

        if name.is_empty() {
            return Err(format!("empty column name in {raw:?}"));
        }
        let (tag, size) = spec
            .split_once(':')
            .ok_or_else(|| format!("column {name:?} has no size in {spec:?}"))?;
        let kind =
            ColumnType::parse(tag).ok_or_else(|| format!("column {name:?} has unknown type {tag:?}"))?;
        let size = size
            .parse::<u32>()
            .map_err(|_| format!("column {name:?} has invalid size {size:?}"))?;

        Ok(Self {
            name: name.to_string(),
            kind,
            size,
        })
    }
}

impl Column {
    /// Check a cell against this column's declared type. Empty cells are allowed.
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Ok(());
        }
        match self.kind {
            ColumnType::String => Ok(()),
            ColumnType::Hex => self.validate_hex(value),
            ColumnType::Dec => self.validate_dec(value),
        }
    }

    fn validate_hex(&self, value: &str) -> Result<(), String> {
        if value.len() % 2 != 0 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("{}: {value:?} is not a hex string", self.name));
        }
        let bytes = value.len() / 2;
        if self.size != 0 && bytes != self.size as usize {
            return Err(format!(
                "{}: expected {} bytes, got {bytes}",
                self.name, self.size
            ));
        }
        Ok(())
    }

    fn validate_dec(&self, value: &str) -> Result<(), String> {
        let number = value
            .parse::<u64>()
            .map_err(|_| format!("{}: {value:?} is not a non-negative integer", self.name))?;
        let bits = u64::BITS - number.leading_zeros();
        if self.size != 0 && u64::from(bits) > u64::from(self.size) * 8 {
            return Err(format!(
                "{}: expected at most {} bits, got {bits}",
                self.name,
                self.size * 8
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Document
// ============================================================================

/// A data row with its position in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number
    pub line: usize,
    /// The line as received
    pub raw: String,
    /// Cells, one per column
    pub values: Vec<String>,
}

/// A parsed BPSV table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub columns: Vec<Column>,
    pub sequence_number: Option<u64>,
    pub rows: Vec<Row>,
}

impl Document {
    /// Column names in header order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Cell at `row` in column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let index = self.column_index(name)?;
        self.rows.get(row)?.values.get(index).map(String::as_str)
    }
}

/// Parse a BPSV body into header, sequence number and validated rows.
pub fn parse_document(body: &str) -> TactResult<Document> {
    let mut columns: Option<Vec<Column>> = None;
    let mut sequence_number = None;
    let mut rows = Vec::new();

    for (index, raw) in body.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if let Some(seqn) = parse_seqn(line) {
                let seqn = seqn.map_err(|reason| TactError::parse(line_number, line, reason))?;
                sequence_number = Some(seqn);
            }
            continue;
        }

        let Some(header) = columns.as_ref() else {
            columns = Some(parse_header(line_number, line)?);
            continue;
        };

        let values: Vec<String> = line.split('|').map(str::to_string).collect();
        if values.len() != header.len() {
            return Err(TactError::parse(
                line_number,
                line,
                format!(
                    "expected {} fields, found {}",
                    header.len(),
                    values.len()
                ),
            ));
        }
        for (column, value) in header.iter().zip(&values) {
            column
                .validate(value)
                .map_err(|reason| TactError::parse(line_number, line, reason))?;
        }

        rows.push(Row {
            line: line_number,
            raw: line.to_string(),
            values,
        });
    }

    let columns = columns.ok_or(TactError::MissingHeader)?;
    Ok(Document {
        columns,
        sequence_number,
        rows,
    })
}

/// `Some` when the comment is a sequence-number line.
fn parse_seqn(line: &str) -> Option<Result<u64, String>> {
    let rest = line.strip_prefix(SEQN_PREFIX)?;
    let value = rest.trim_start().strip_prefix('=')?.trim();
    Some(
        value
            .parse::<u64>()
            .map_err(|_| format!("invalid sequence number {value:?}")),
    )
}

fn parse_header(line_number: usize, line: &str) -> TactResult<Vec<Column>> {
    let columns = line
        .split('|')
        .map(str::parse::<Column>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| TactError::parse(line_number, line, reason))?;

    let mut seen = HashSet::new();
    if let Some(dup) = columns.iter().find(|c| !seen.insert(c.name.as_str())) {
        return Err(TactError::parse(
            line_number,
            line,
            format!("duplicate column {:?}", dup.name),
        ));
    }
    Ok(columns)
}

// ============================================================================
// Version Records
// ============================================================================

const REGION: &str = "Region";
const BUILD_CONFIG: &str = "BuildConfig";
const CDN_CONFIG: &str = "CDNConfig";
const BUILD_ID: &str = "BuildId";
const VERSIONS_NAME: &str = "VersionsName";
const PRODUCT_CONFIG: &str = "ProductConfig";

const REQUIRED_COLUMNS: [&str; 6] = [
    REGION,
    BUILD_CONFIG,
    CDN_CONFIG,
    BUILD_ID,
    VERSIONS_NAME,
    PRODUCT_CONFIG,
];

/// Parse a `/versions` body into its sequence number and records, in order.
pub fn parse_versions(body: &str) -> TactResult<(Option<u64>, Vec<VersionRecord>)> {
    let document = parse_document(body)?;
    let records = versions_from_document(&document, body)?;
    Ok((document.sequence_number, records))
}

fn versions_from_document(document: &Document, body: &str) -> TactResult<Vec<VersionRecord>> {
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = document.column_index(name).ok_or_else(|| {
            let (line, content) = header_line(body);
            TactError::parse(line, content, format!("missing column {name:?}"))
        })?;
    }
    let [region, build_config, cdn_config, build_id, versions_name, product_config] = indices;

    let mut seen_regions = HashSet::new();
    let mut records = Vec::with_capacity(document.rows.len());

    for row in &document.rows {
        let field = |index: usize| -> TactResult<String> {
            let value = &row.values[index];
            if value.is_empty() {
                return Err(TactError::parse(
                    row.line,
                    &row.raw,
                    format!("{} is empty", document.columns[index].name),
                ));
            }
            Ok(value.clone())
        };

        let build_id_value = field(build_id)?;
        let record = VersionRecord {
            region: field(region)?,
            build_config: field(build_config)?,
            cdn_config: field(cdn_config)?,
            build_id: build_id_value.parse::<u64>().map_err(|_| {
                TactError::parse(
                    row.line,
                    &row.raw,
                    format!("{BUILD_ID}: {build_id_value:?} is not a non-negative integer"),
                )
            })?,
            versions_name: field(versions_name)?,
            product_config: field(product_config)?,
        };

        if !seen_regions.insert(record.region.clone()) {
            return Err(TactError::parse(
                row.line,
                &row.raw,
                format!("duplicate region {:?}", record.region),
            ));
        }
        records.push(record);
    }

    Ok(records)
}

/// Locate the header line for diagnostics.
fn header_line(body: &str) -> (usize, &str) {
    body.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .find(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .unwrap_or((0, ""))
}

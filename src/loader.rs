use crate::constants::{INFO_FILE, RULES_FILE, STATIC_FILES, WORKSHEET_NAME};
use crate::error::{Error, Result};
use crate::models::{RuleSet, SubjectRow};
use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

// ============================================================================
// Configuration Loading
// ============================================================================

/// Static reference data passed through to the output verbatim. `info` is
/// the object the output document starts from; `extra` entries are inserted
/// under their top-level key.
pub struct StaticData {
    pub info: Map<String, Value>,
    pub extra: Vec<(&'static str, Value)>,
}

/// Load the classification and normalization rule tables from `rules.json`.
pub fn load_rules(dir: &Path) -> Result<RuleSet> {
    let path = dir.join(RULES_FILE);
    let value = read_json(&path)?;
    serde_json::from_value(value).map_err(|err| Error::BadConfig {
        file: path,
        reason: err.to_string(),
    })
}

/// Load the five static reference blobs. All of them are required; content
/// is owned by the dataset and never interpreted here.
pub fn load_static_data(dir: &Path) -> Result<StaticData> {
    let info_path = dir.join(INFO_FILE);
    let info = match read_json(&info_path)? {
        Value::Object(map) => map,
        _ => {
            return Err(Error::BadConfig {
                file: info_path,
                reason: "top-level value must be an object".to_string(),
            })
        }
    };

    let mut extra = Vec::with_capacity(STATIC_FILES.len());
    for &(key, file) in STATIC_FILES {
        extra.push((key, read_json(&dir.join(file))?));
    }

    Ok(StaticData { info, extra })
}

fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::MissingConfig(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|err| Error::BadConfig {
        file: path.to_path_buf(),
        reason: err.to_string(),
    })
}

// ============================================================================
// Row Extraction
// ============================================================================

/// Read every data row of the course-listing worksheet. The workbook handle
/// lives only for the duration of this function; the worksheet's first row
/// is the column header and is skipped.
pub fn load_subject_rows(path: &Path) -> Result<Vec<SubjectRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range(WORKSHEET_NAME)
        .map_err(|_| Error::MissingWorksheet(WORKSHEET_NAME))?;

    let mut rows = Vec::new();
    for (index, row) in range.rows().enumerate().skip(1) {
        if let Some(parsed) = parse_row(index + 1, row)? {
            rows.push(parsed);
        }
    }
    Ok(rows)
}

/// Parse one six-column row into a `SubjectRow`. Rows with a blank id cell
/// are padding from the worksheet's declared dimensions and yield `None`.
fn parse_row(number: usize, row: &[Data]) -> Result<Option<SubjectRow>> {
    match row.first() {
        None | Some(Data::Empty) => return Ok(None),
        _ => {}
    }
    if row.len() < 6 {
        return Err(Error::MalformedRow {
            row: number,
            reason: format!("expected 6 columns, found {}", row.len()),
        });
    }

    let credit = cell_number(&row[2]).ok_or_else(|| Error::MalformedRow {
        row: number,
        reason: format!("credit column is not a number: {:?}", row[2]),
    })?;

    Ok(Some(SubjectRow {
        id: cell_text(&row[0]),
        name: cell_text(&row[1]),
        credit,
        semester: cell_text(&row[3]),
        info: cell_text(&row[5]),
    }))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(value) => Some(*value),
        Data::Int(value) => Some(*value as f64),
        Data::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

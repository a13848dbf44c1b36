use crate::classifier::{is_intro, Classifier};
use crate::constants::base_subject_records;
use crate::error::Result;
use crate::loader::StaticData;
use crate::models::{SubjectRecord, SubjectRow};
use crate::normalizer::Normalizer;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Record Assembly
// ============================================================================

/// Classify and normalize one extracted row.
pub fn subject_record(
    row: &SubjectRow,
    classifier: &Classifier,
    normalizer: &Normalizer,
) -> SubjectRecord {
    SubjectRecord {
        name: row.name.clone(),
        credit: row.credit,
        fall_term: classifier.is_fall_term(&row.semester),
        flags: classifier.flags(&row.id, is_intro(&row.info)),
        aliases: normalizer.aliases(&row.id),
    }
}

/// Build the id → record map: base categories first, then the spreadsheet
/// rows, which override a base entry with the same id. A duplicated
/// spreadsheet id keeps its last occurrence.
pub fn build_subjects(
    rows: &[SubjectRow],
    classifier: &Classifier,
    normalizer: &Normalizer,
) -> BTreeMap<String, SubjectRecord> {
    let mut subjects: BTreeMap<String, SubjectRecord> =
        base_subject_records().into_iter().collect();
    for row in rows {
        subjects.insert(row.id.clone(), subject_record(row, classifier, normalizer));
    }
    subjects
}

// ============================================================================
// Document Assembly
// ============================================================================

/// Assemble the output document: the info blob is the base object, the
/// remaining static blobs and the subjects map go in under their own keys.
pub fn build_document(
    subjects: &BTreeMap<String, SubjectRecord>,
    statics: StaticData,
) -> Result<Value> {
    let mut document = statics.info;
    for (key, value) in statics.extra {
        document.insert(key.to_string(), value);
    }
    document.insert("subjects".to_string(), serde_json::to_value(subjects)?);
    Ok(Value::Object(document))
}

/// Serialize the document compactly and write it in one shot. serde_json
/// leaves non-ASCII text unescaped, so native-script subject names stay
/// readable in the output.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let serialized = serde_json::to_string(document)?;
    fs::write(path, serialized)?;
    Ok(())
}

use crate::models::SubjectRecord;

/// Worksheet holding the course listing (開設科目一覧)
pub const WORKSHEET_NAME: &str = "開設科目一覧";

/// Workbook file name looked up when the CLI argument is a dataset directory
pub const WORKBOOK_FILE: &str = "kdb.xlsx";

/// Output document, written into the dataset directory
pub const OUTPUT_FILE: &str = "data.json";

/// Rule tables consumed by the classifier and normalizer
pub const RULES_FILE: &str = "rules.json";

/// Base object the output document starts from; merged verbatim
pub const INFO_FILE: &str = "info.json";

/// Remaining static blobs, inserted under their top-level key without
/// interpretation
pub const STATIC_FILES: &[(&str, &str)] = &[
    ("table", "table.json"),
    ("mapping", "mapping.json"),
    ("flags", "flags.json"),
    ("partitions", "partitions.json"),
];

// ============================================================================
// Fixed Text Patterns
// ============================================================================

/// Semester descriptors that place an offering outside the default
/// spring/first-half slot: a fall term (秋A〜C, 秋学期), an intensive
/// quarter-C term, the spring-break term, or a year-long course.
pub const FALL_TERM_PATTERN: &str = r"秋(?:A?B?C|学期)|春季休業中|通年";

/// Free-text marker for introductory specialized subjects
pub const INTRO_PHRASE: &str = "専門導入科目";

/// Rule-table pattern sentinel matched against the intro marker instead of
/// the subject id
pub const INTRO_SENTINEL: &str = "intro";

// ============================================================================
// Base Category Records
// ============================================================================

/// Umbrella categories the requirement tables reference as pseudo-subjects.
/// The keys "0".."20" are fixed; a spreadsheet row with the same id (which
/// real course ids never have) would override the entry.
/// Layout: (key, name, credit, flags).
pub const BASE_SUBJECTS: &[(&str, &str, f64, u32)] = &[
    ("0", "全ての科目", 0.0, 1),
    ("1", "全ての科目 (初修外国語・体育を除く)", 0.0, 2),
    ("2", "専門基礎科目・専門科目", 0.0, 4),
    ("3", "専門導入科目", 0.0, 8),
    ("4", "専門導入科目・看護学類が指定する科目", 0.0, 16),
    ("5", "医学類開設科目", 0.0, 32),
    ("6", "体育 (春・秋)", 1.0, 64),
    ("7", "英語 (春)", 2.0, 128),
    ("8", "英語 (春・秋)", 4.0, 128 | 256),
    ("9", "情報", 4.0, 512),
    ("10", "ファーストイヤーセミナー", 1.0, 1024),
    ("11", "学問への誘い", 1.0, 2048),
    ("12", "体育 (春)", 0.5, 4096),
    ("13", "体育 (秋)", 0.5, 8192),
    ("14", "初修外国語", 0.0, 16384),
    ("15", "国語", 0.0, 32768),
    ("16", "芸術", 0.0, 65536),
    ("17", "教職に関する科目", 0.0, 131072),
    ("18", "博物館に関する科目", 0.0, 262144),
    ("19", "自由科目", 0.0, 524288),
    ("20", "哲学・倫理学・宗教学", 0.0, 1048576),
];

/// Materialize the base table as output records. Base entries carry no
/// semester or alias data: the fall indicator is 0 and the alias list empty.
pub fn base_subject_records() -> Vec<(String, SubjectRecord)> {
    BASE_SUBJECTS
        .iter()
        .map(|&(key, name, credit, flags)| {
            (
                key.to_string(),
                SubjectRecord {
                    name: name.to_string(),
                    credit,
                    fall_term: false,
                    flags,
                    aliases: Vec::new(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_keys_cover_zero_through_twenty() {
        let records = base_subject_records();
        assert_eq!(records.len(), 21);
        for i in 0..=20 {
            assert!(records.iter().any(|(key, _)| key == &i.to_string()));
        }
    }

    #[test]
    fn test_base_records_have_no_aliases_or_fall_term() {
        for (_, record) in base_subject_records() {
            assert!(!record.fall_term);
            assert!(record.aliases.is_empty());
        }
    }
}

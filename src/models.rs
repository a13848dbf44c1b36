use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;

// ============================================================================
// Spreadsheet Input
// ============================================================================

/// One data row of the course-listing worksheet, narrowed to the columns the
/// converter uses (the fifth worksheet column is dropped at parse time).
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRow {
    pub id: String,
    pub name: String,
    pub credit: f64,
    pub semester: String,
    pub info: String,
}

// ============================================================================
// Rule Configuration (rules.json)
// ============================================================================

/// Rule tables loaded from the dataset's `rules.json`
#[derive(Debug, Deserialize)]
pub struct RuleSet {
    pub classify: Vec<ClassifyRule>,
    pub normalize: Vec<NormalizeRule>,
}

/// `[pattern, bit]` pair. The pattern is matched prefix-anchored against the
/// subject id, except for the literal sentinel `"intro"`, which matches when
/// the row's info text marks an introductory specialized subject.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRule(pub String, pub u32);

/// `[pattern, replacement]` pair; the replacement template may reference
/// capture groups (`${1}` style).
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeRule(pub String, pub String);

// ============================================================================
// Output Records
// ============================================================================

/// Per-subject output unit, serialized in the client's array layout:
/// `[name, credit, fallTerm, flags, ...aliasIds]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRecord {
    pub name: String,
    pub credit: f64,
    /// 1 when the offering includes a fall, intensive, spring-break, or
    /// year-long term; independent of `flags`.
    pub fall_term: bool,
    pub flags: u32,
    pub aliases: Vec<String>,
}

impl Serialize for SubjectRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4 + self.aliases.len()))?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&Credit(self.credit))?;
        seq.serialize_element(&u8::from(self.fall_term))?;
        seq.serialize_element(&self.flags)?;
        for alias in &self.aliases {
            seq.serialize_element(alias)?;
        }
        seq.end()
    }
}

/// Credit value wrapper: whole-number credits serialize without a fractional
/// component (`2.0` → `2`), non-whole values keep their fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Credit(pub f64);

impl Serialize for Credit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

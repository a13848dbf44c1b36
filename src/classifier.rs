use crate::constants::{FALL_TERM_PATTERN, INTRO_PHRASE, INTRO_SENTINEL};
use crate::error::{Error, Result};
use crate::models::ClassifyRule;
use regex::Regex;

/// A compiled classification rule grants its flag bit when the matcher
/// accepts the subject.
enum Matcher {
    /// The `"intro"` sentinel: matches when the row's info text marks an
    /// introductory specialized subject.
    Intro,
    /// Prefix-anchored match against the subject id.
    Id(Regex),
}

/// Data-driven flag engine: an ordered list of (matcher, bit) rules whose
/// bits are OR'd together. Order never changes the result, only which
/// patterns exist does.
pub struct Classifier {
    rules: Vec<(Matcher, u32)>,
    fall_term: Regex,
}

impl Classifier {
    /// Compile the configured rule table. Id patterns are anchored at the
    /// start of the id; a pattern may anchor its own end.
    pub fn compile(rules: &[ClassifyRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for ClassifyRule(pattern, bit) in rules {
            let matcher = if pattern == INTRO_SENTINEL {
                Matcher::Intro
            } else {
                Matcher::Id(anchored(pattern)?)
            };
            compiled.push((matcher, *bit));
        }
        let fall_term = Regex::new(FALL_TERM_PATTERN).map_err(|source| Error::BadPattern {
            pattern: FALL_TERM_PATTERN.to_string(),
            source,
        })?;
        Ok(Self {
            rules: compiled,
            fall_term,
        })
    }

    /// OR together the bits of every rule that accepts the subject.
    pub fn flags(&self, id: &str, is_intro: bool) -> u32 {
        let mut flags = 0;
        for (matcher, bit) in &self.rules {
            let matched = match matcher {
                Matcher::Intro => is_intro,
                Matcher::Id(pattern) => pattern.is_match(id),
            };
            if matched {
                flags |= bit;
            }
        }
        flags
    }

    /// Whether the semester text places the offering in a fall, intensive,
    /// spring-break, or year-long slot.
    pub fn is_fall_term(&self, semester: &str) -> bool {
        self.fall_term.is_match(semester)
    }
}

/// Whether the free-text info column marks an introductory specialized
/// subject.
pub fn is_intro(info: &str) -> bool {
    info.contains(INTRO_PHRASE)
}

fn anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|source| Error::BadPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&str, u32)]) -> Vec<ClassifyRule> {
        pairs
            .iter()
            .map(|&(pattern, bit)| ClassifyRule(pattern.to_string(), bit))
            .collect()
    }

    #[test]
    fn test_flags_accumulate_over_matching_rules() {
        let classifier =
            Classifier::compile(&rules(&[("", 1), ("[A-Y]", 2), ("AB6", 4)])).unwrap();
        assert_eq!(classifier.flags("AB60001", false), 1 | 2 | 4);
        assert_eq!(classifier.flags("GA15111", false), 1 | 2);
    }

    #[test]
    fn test_unmatched_id_keeps_universal_bit_only() {
        let classifier =
            Classifier::compile(&rules(&[("", 1), ("[A-Y]", 2), ("AB6", 4)])).unwrap();
        assert_eq!(classifier.flags("21H1101", false), 1);
    }

    #[test]
    fn test_patterns_are_prefix_anchored() {
        let classifier = Classifier::compile(&rules(&[("B6", 2)])).unwrap();
        // "AB60001" contains "B6" but does not start with it.
        assert_eq!(classifier.flags("AB60001", false), 0);
        assert_eq!(classifier.flags("B600001", false), 2);
    }

    #[test]
    fn test_flags_invariant_under_rule_reordering() {
        let forward = Classifier::compile(&rules(&[("", 1), ("F", 2), ("intro", 8)])).unwrap();
        let backward = Classifier::compile(&rules(&[("intro", 8), ("F", 2), ("", 1)])).unwrap();
        for (id, intro) in [("FA01122", true), ("FA01122", false), ("GB10001", true)] {
            assert_eq!(forward.flags(id, intro), backward.flags(id, intro));
        }
    }

    #[test]
    fn test_intro_sentinel_matches_on_info_not_id() {
        let classifier = Classifier::compile(&rules(&[("intro", 8), ("intro", 16)])).unwrap();
        assert_eq!(classifier.flags("FA01122", true), 8 | 16);
        assert_eq!(classifier.flags("intro", false), 0);
    }

    #[test]
    fn test_intro_detection_from_info_text() {
        assert!(is_intro("専門導入科目として開設。"));
        assert!(!is_intro("オンライン(同時双方向型)"));
        assert!(!is_intro(""));
    }

    #[test]
    fn test_fall_term_detection() {
        let classifier = Classifier::compile(&[]).unwrap();
        assert!(classifier.is_fall_term("秋学期"));
        assert!(classifier.is_fall_term("秋C"));
        assert!(classifier.is_fall_term("秋BC"));
        assert!(classifier.is_fall_term("秋ABC"));
        assert!(classifier.is_fall_term("通年"));
        assert!(classifier.is_fall_term("春季休業中"));
        assert!(!classifier.is_fall_term("春"));
        assert!(!classifier.is_fall_term("春AB"));
        // Grades for 秋A/秋B alone are in before the fall-C cutoff.
        assert!(!classifier.is_fall_term("秋AB"));
        assert!(!classifier.is_fall_term("夏季休業中"));
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let result = Classifier::compile(&rules(&[("FA01(", 1)]));
        assert!(matches!(
            result,
            Err(Error::BadPattern { ref pattern, .. }) if pattern == "FA01("
        ));
    }
}

use crate::error::{Error, Result};
use crate::models::NormalizeRule;
use regex::Regex;

/// Rewrites near-duplicate course ids onto their canonical form.
///
/// First match wins and the rewrite is applied once: the produced alias is
/// never fed back through the rule table, so chained patterns do not cascade.
pub struct Normalizer {
    rules: Vec<(Regex, String)>,
}

impl Normalizer {
    pub fn compile(rules: &[NormalizeRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for NormalizeRule(pattern, replacement) in rules {
            let regex = Regex::new(pattern).map_err(|source| Error::BadPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push((regex, replacement.clone()));
        }
        Ok(Self { rules: compiled })
    }

    /// Apply the first rule whose substitution changes the id and yield that
    /// single result. Ids no rule touches yield nothing.
    pub fn aliases(&self, id: &str) -> Vec<String> {
        for (pattern, replacement) in &self.rules {
            let rewritten = pattern.replace_all(id, replacement.as_str());
            if rewritten != id {
                return vec![rewritten.into_owned()];
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(pairs: &[(&str, &str)]) -> Normalizer {
        let rules: Vec<NormalizeRule> = pairs
            .iter()
            .map(|&(pattern, replacement)| {
                NormalizeRule(pattern.to_string(), replacement.to_string())
            })
            .collect();
        Normalizer::compile(&rules).unwrap()
    }

    fn catalog_rules() -> Normalizer {
        normalizer(&[
            ("FCA1961|FE11431", "EB00001"),
            ("FA01([12])[2-9A-E]1", "FA01${1}11"),
            ("FA01([3-8])[2-6CD]1", "FA01${1}11"),
            ("GA182[23]2|FH604[7-9]4", "GA18212"),
            ("GA14121", "GA14111"),
        ])
    }

    #[test]
    fn test_literal_rewrite() {
        assert_eq!(catalog_rules().aliases("FCA1961"), vec!["EB00001"]);
        assert_eq!(catalog_rules().aliases("FE11431"), vec!["EB00001"]);
    }

    #[test]
    fn test_capture_group_substitution() {
        assert_eq!(catalog_rules().aliases("FA01122"), vec!["FA01111"]);
        assert_eq!(catalog_rules().aliases("FA01241"), vec!["FA01211"]);
        assert_eq!(catalog_rules().aliases("FA01321"), vec!["FA01311"]);
    }

    #[test]
    fn test_alternation_collapses_to_one_canonical_id() {
        assert_eq!(catalog_rules().aliases("GA18222"), vec!["GA18212"]);
        assert_eq!(catalog_rules().aliases("FH60474"), vec!["GA18212"]);
    }

    #[test]
    fn test_unmatched_id_yields_nothing() {
        assert!(catalog_rules().aliases("GB10001").is_empty());
        assert!(catalog_rules().aliases("21H1101").is_empty());
        // The canonical form itself matches no rule.
        assert!(catalog_rules().aliases("FA01111").is_empty());
    }

    #[test]
    fn test_first_changing_rule_wins() {
        let n = normalizer(&[("A1B2", "A1B9"), ("A1", "Z9")]);
        assert_eq!(n.aliases("A1B2"), vec!["A1B9"]);
    }

    #[test]
    fn test_rule_that_matches_without_changing_does_not_stop_iteration() {
        // Substituting an id with itself leaves it unchanged; the later rule
        // still gets its turn.
        let n = normalizer(&[("A1B2", "A1B2"), ("A1", "Z9")]);
        assert_eq!(n.aliases("A1B2"), vec!["Z9B2"]);
    }

    #[test]
    fn test_normalization_is_not_transitive() {
        let n = normalizer(&[("A1B2", "C3D4"), ("C3D4", "E5F6")]);
        // C3D4 would itself rewrite to E5F6, but the first result is final.
        assert_eq!(n.aliases("A1B2"), vec!["C3D4"]);
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let rules = vec![NormalizeRule("FCB1([23".to_string(), "x".to_string())];
        assert!(matches!(
            Normalizer::compile(&rules),
            Err(Error::BadPattern { .. })
        ));
    }
}

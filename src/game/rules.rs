//! Fixed clue classification rules.
//!
//! Each rule names a suspect and the keywords that incriminate them. Rules are
//! tried in table order and the first rule with a keyword occurring in the clue
//! wins; clues matching no rule go to the fallback suspect.

use crate::data_structures::keyword_matcher::KeywordMatcher;

/// Suspect assigned when no rule matches, unless configured otherwise.
pub const UNKNOWN_SUSPECT: &str = "Unknown";

/// Rule table in priority order.
const RULE_TABLE: &[(&str, &[&str])] = &[
    ("Alfredo", &["cigarro", "charuto", "vinho"]),
    ("Berta", &["cabelo loiro", "carta"]),
    ("Carlos", &["faca", "sapato sujo", "sapatos enlameados"]),
];

/// One suspect and the keywords pointing at them.
#[derive(Debug, Clone)]
pub struct SuspectRule {
    suspect: &'static str,
    keywords: Vec<KeywordMatcher>,
}

impl SuspectRule {
    /// The suspect this rule incriminates.
    pub fn suspect(&self) -> &'static str {
        self.suspect
    }

    /// Whether any keyword of the rule occurs in `clue`.
    pub fn matches(&self, clue: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword.is_match(clue))
    }
}

/// Ordered rule set used to classify clues.
#[derive(Debug, Clone)]
pub struct SuspectRules {
    rules: Vec<SuspectRule>,
    fallback: String,
}

impl SuspectRules {
    /// The built-in rules with [`UNKNOWN_SUSPECT`] as fallback.
    pub fn standard() -> Self {
        Self::with_fallback(UNKNOWN_SUSPECT)
    }

    /// The built-in rules with a custom fallback suspect.
    pub fn with_fallback<S: Into<String>>(fallback: S) -> Self {
        let rules = RULE_TABLE
            .iter()
            .map(|&(suspect, keywords)| SuspectRule {
                suspect,
                keywords: keywords.iter().map(KeywordMatcher::new).collect(),
            })
            .collect();

        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Names the suspect a clue points at.
    pub fn classify(&self, clue: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(clue))
            .map_or(self.fallback.as_str(), |rule| rule.suspect)
    }

    /// Suspects that can be accused, in rule order.
    pub fn suspects(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(|rule| rule.suspect)
    }

    /// The suspect given to unmatched clues.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for SuspectRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Restos de charuto de alta qualidade (aponta para Alfredo)." => "Alfredo"; "cigar")]
    #[test_case("Uma garrafa de vinho tinto de safra rara, quase vazia (aponta para Alfredo)." => "Alfredo"; "wine")]
    #[test_case("Um fio de cabelo loiro em cima da mesa (aponta para Berta)." => "Berta"; "blond hair")]
    #[test_case("Uma faca de cozinha usada e jogada na pia (aponta para Carlos)." => "Carlos"; "knife")]
    #[test_case("Um par de sapatos enlameados na entrada (aponta para Carlos)." => "Carlos"; "muddy shoes")]
    #[test_case("Um casaco de inverno molhado no chão." => "Unknown"; "wet coat")]
    #[test_case("Um frasco de perfume caro e vazio." => "Unknown"; "perfume")]
    fn test_classify_mansion_clues(clue: &str) -> String {
        SuspectRules::standard().classify(clue).to_string()
    }

    #[test]
    fn test_first_rule_wins() {
        // Mentions both a letter (Berta) and wine (Alfredo); Alfredo's rule comes first.
        let rules = SuspectRules::standard();
        assert_eq!(rules.classify("Uma carta manchada de vinho"), "Alfredo");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let rules = SuspectRules::standard();
        assert_eq!(rules.classify("FACA ENFERRUJADA"), "Unknown");
    }

    #[test]
    fn test_custom_fallback() {
        let rules = SuspectRules::with_fallback("Desconhecido");
        assert_eq!(rules.classify("Lata caída"), "Desconhecido");
        assert_eq!(rules.fallback(), "Desconhecido");
    }

    #[test]
    fn test_suspect_roster() {
        let rules = SuspectRules::standard();
        assert_eq!(rules.suspects().collect::<Vec<_>>(), vec!["Alfredo", "Berta", "Carlos"]);
    }
}

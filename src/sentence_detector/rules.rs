// WHY: rule table is data, not code; the default ships embedded and callers may load their own

use serde::Deserialize;
use tracing::debug;

use crate::error::SegmentationError;

const DEFAULT_RULES_TOML: &str = include_str!("rules.toml");

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentenceBoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// End punctuation that terminates a sentence with no following space ("。", "！")
    #[serde(default)]
    pub unspaced_end_punctuation: Vec<char>,
    /// Quotes and brackets that may close a sentence after its end punctuation
    pub closing_punctuation: Vec<char>,
    /// Quotes and brackets that may open a sentence
    pub opening_punctuation: Vec<char>,
    /// Abbreviations that never end a sentence ("Mr. Smith")
    pub title_abbreviations: Vec<String>,
    /// Abbreviations that end a sentence only before a sentence starter
    #[serde(default)]
    pub abbreviations: Vec<String>,
    /// Words that commonly open a sentence, checked after abbreviations and initialisms
    #[serde(default)]
    pub sentence_starters: Vec<String>,
}

impl SentenceBoundaryRules {
    /// Load the rule table bundled with the crate
    pub fn builtin() -> Result<Self, SegmentationError> {
        Self::from_toml_str(DEFAULT_RULES_TOML)
    }

    /// Parse and validate a rule table in TOML form
    pub fn from_toml_str(source: &str) -> Result<Self, SegmentationError> {
        let rules: Self = toml::from_str(source)?;
        rules.validate()?;

        debug!(
            "Loaded rule table: {} titles, {} abbreviations, {} starters",
            rules.title_abbreviations.len(),
            rules.abbreviations.len(),
            rules.sentence_starters.len()
        );
        Ok(rules)
    }

    fn validate(&self) -> Result<(), SegmentationError> {
        if self.end_punctuation.is_empty() && self.unspaced_end_punctuation.is_empty() {
            return Err(SegmentationError::InvalidRules(
                "end_punctuation or unspaced_end_punctuation must list at least one character"
                    .to_string(),
            ));
        }

        let all_end = self.end_punctuation.iter().chain(&self.unspaced_end_punctuation);
        if let Some(ch) = all_end.into_iter().find(|c| c.is_whitespace() || c.is_alphanumeric()) {
            return Err(SegmentationError::InvalidRules(format!(
                "end punctuation contains non-punctuation character {ch:?}"
            )));
        }

        let all_abbreviations = self.title_abbreviations.iter().chain(&self.abbreviations);
        if let Some(abbr) = all_abbreviations.into_iter().find(|a| !a.ends_with('.')) {
            return Err(SegmentationError::InvalidRules(format!(
                "abbreviation {abbr:?} must end with '.'"
            )));
        }

        Ok(())
    }
}

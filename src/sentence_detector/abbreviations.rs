// WHY: Centralized abbreviation handling for sentence boundary detection
// Decides whether a candidate boundary after a period is a false split

use std::collections::HashSet;

use super::rules::SentenceBoundaryRules;

/// Outcome of checking the word before a candidate boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationKind {
    /// "Mr.", "Dr." and kin, always followed by a name
    Title,
    /// Other listed abbreviation ("etc.", "no.")
    General,
    /// Dotted letters ("U.S.", "a.m.")
    Initialism,
    /// A single capital letter ("J. R. R. Tolkien")
    Initial,
}

/// Efficient abbreviation lookup using HashSet for O(1) performance
#[derive(Debug, Clone)]
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<String>,
    abbreviations: HashSet<String>,
    sentence_starters: HashSet<String>,
    quote_chars: Vec<char>,
    closing_chars: Vec<char>,
}

impl AbbreviationChecker {
    /// Build lookup tables from a rule set
    pub fn new(rules: &SentenceBoundaryRules) -> Self {
        let mut quote_chars = rules.opening_punctuation.clone();
        quote_chars.extend(&rules.closing_punctuation);

        Self {
            title_abbreviations: lowercase_set(&rules.title_abbreviations),
            abbreviations: lowercase_set(&rules.abbreviations),
            sentence_starters: rules.sentence_starters.iter().cloned().collect(),
            quote_chars,
            closing_chars: rules.closing_punctuation.clone(),
        }
    }

    /// Classify a single word (including its trailing period)
    ///
    /// Surrounding quotes are ignored, so `"Dr."` classifies like `Dr.`
    pub fn classify(&self, word: &str) -> Option<AbbreviationKind> {
        let word = word
            .trim_start_matches(|c: char| self.quote_chars.contains(&c))
            .trim_end_matches(|c: char| self.closing_chars.contains(&c));
        if !word.ends_with('.') {
            return None;
        }

        let lower = word.to_lowercase();
        if self.title_abbreviations.contains(&lower) {
            return Some(AbbreviationKind::Title);
        }
        if self.abbreviations.contains(&lower) {
            return Some(AbbreviationKind::General);
        }

        let stem = &word[..word.len() - 1];
        let mut letters = stem.split('.');
        let single_letters = letters.all(|part| {
            let mut chars = part.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        });

        match (single_letters, stem.contains('.')) {
            (true, true) => Some(AbbreviationKind::Initialism),
            (true, false) if stem.chars().all(char::is_uppercase) => {
                Some(AbbreviationKind::Initial)
            }
            _ => None,
        }
    }

    /// Check if a word commonly opens a sentence
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        let word = word
            .trim_start_matches(|c: char| self.quote_chars.contains(&c))
            .trim_end_matches(|c: char| !c.is_alphanumeric());
        self.sentence_starters.contains(word)
    }

    /// Decide whether a candidate boundary between `before` and `after` is a false split.
    ///
    /// Titles always suppress the split. Other abbreviations, initialisms and single
    /// initials suppress it unless the following word is a sentence starter.
    pub fn suppresses_boundary(&self, before: &str, after: &str) -> bool {
        let Some(last_word) = before.split_whitespace().next_back() else {
            return false;
        };

        match self.classify(last_word) {
            Some(AbbreviationKind::Title) => true,
            Some(_) => {
                let next_word = after.split_whitespace().next().unwrap_or("");
                !self.is_sentence_starter(next_word)
            }
            None => false,
        }
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

// WHY: bundled default engine for the Segmenter contract
// Candidate boundaries come from a compiled automaton, false splits are vetoed by the abbreviation checker

use tracing::{debug, info};

use crate::error::SegmentationError;
use crate::segmenter::Segmenter;

pub mod abbreviations;
pub mod boundary_scanner;
pub mod normalization;
pub mod rules;
pub mod unicode_detector;

// Re-export core types
pub use abbreviations::{AbbreviationChecker, AbbreviationKind};
pub use boundary_scanner::{BoundaryScanner, Candidate};
pub use normalization::{normalize_sentence, normalize_sentence_into};
pub use rules::SentenceBoundaryRules;
pub use unicode_detector::UnicodeSegmenter;

/// A detected sentence borrowed from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSentence<'a> {
    pub index: usize,
    /// Byte offset of the first non-whitespace character
    pub start_byte: usize,
    /// Byte offset just past the last non-whitespace character
    pub end_byte: usize,
    raw_content: &'a str,
}

impl<'a> DetectedSentence<'a> {
    /// Get raw content without normalization
    pub fn raw(&self) -> &'a str {
        self.raw_content
    }

    /// Normalize content with new allocation
    pub fn normalize(&self) -> String {
        normalize_sentence(self.raw_content)
    }
}

/// Rule-table sentence detector
#[derive(Debug)]
pub struct SentenceDetector {
    scanner: BoundaryScanner,
    abbreviations: AbbreviationChecker,
}

impl SentenceDetector {
    /// Create new sentence detector with custom rules
    pub fn new(rules: SentenceBoundaryRules) -> Result<Self, SegmentationError> {
        info!("Compiling sentence boundary rules");

        Ok(Self {
            scanner: BoundaryScanner::compile(&rules)?,
            abbreviations: AbbreviationChecker::new(&rules),
        })
    }

    /// Create sentence detector with the bundled rule table
    pub fn with_default_rules() -> Result<Self, SegmentationError> {
        Self::new(SentenceBoundaryRules::builtin()?)
    }

    /// Detect sentences as slices of `text`, in document order
    pub fn detect_sentences<'a>(&self, text: &'a str) -> Vec<DetectedSentence<'a>> {
        debug!("Starting sentence detection on {} bytes", text.len());

        let mut sentences = Vec::new();
        let mut sentence_start = 0;
        let mut search_from = 0;
        let mut vetoed = 0usize;

        while let Some(candidate) = self.scanner.next_candidate(text, search_from) {
            let before = &text[sentence_start..candidate.gap_start];
            let after = &text[candidate.next_start..];

            if candidate.paragraph_break || !self.abbreviations.suppresses_boundary(before, after) {
                push_sentence(&mut sentences, text, sentence_start, candidate.gap_start);
                sentence_start = candidate.next_start;
            } else {
                vetoed += 1;
            }

            search_from = candidate.next_start;
        }

        // Handle remaining text as final sentence if non-empty
        push_sentence(&mut sentences, text, sentence_start, text.len());

        debug!("Detected {} sentences, {} candidates vetoed", sentences.len(), vetoed);
        sentences
    }
}

fn push_sentence<'a>(
    sentences: &mut Vec<DetectedSentence<'a>>,
    text: &'a str,
    start: usize,
    end: usize,
) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    let start_byte = start + (raw.len() - raw.trim_start().len());
    sentences.push(DetectedSentence {
        index: sentences.len(),
        start_byte,
        end_byte: start_byte + trimmed.len(),
        raw_content: trimmed,
    });
}

impl Segmenter for SentenceDetector {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationError> {
        Ok(self
            .detect_sentences(text)
            .iter()
            .map(DetectedSentence::normalize)
            .collect())
    }
}

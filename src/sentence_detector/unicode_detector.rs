// WHY: UAX #29 segmentation as a drop-in alternative engine; no abbreviation handling

use unicode_segmentation::UnicodeSegmentation;

use super::normalization::normalize_sentence;
use crate::error::SegmentationError;
use crate::segmenter::Segmenter;

/// Segmenter using Unicode default sentence boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationError> {
        Ok(text
            .unicode_sentences()
            .map(normalize_sentence)
            .filter(|sentence| !sentence.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_sentences() {
        let sentences = UnicodeSegmenter
            .segment("Hello world. This is a test. How are you?")
            .unwrap();
        assert_eq!(sentences, vec!["Hello world.", "This is a test.", "How are you?"]);
    }

    #[test]
    fn test_unicode_splits_after_titles() {
        // UAX #29 has no abbreviation list, unlike the rule-table detector
        let sentences = UnicodeSegmenter.segment("My name is Mr. Smith.").unwrap();
        assert_eq!(sentences, vec!["My name is Mr.", "Smith."]);
    }

    #[test]
    fn test_unicode_empty() {
        assert!(UnicodeSegmenter.segment("").unwrap().is_empty());
        assert!(UnicodeSegmenter.segment(" \n ").unwrap().is_empty());
    }
}

// WHY: one compiled automaton proposes every candidate boundary in a single forward pass;
// the abbreviation veto runs only where the automaton fires

use regex_automata::{meta::Regex, Input};
use tracing::debug;

use super::rules::SentenceBoundaryRules;
use crate::error::SegmentationError;

/// Uppercase letters and digits may open a sentence
const SENTENCE_START_CLASS: &str = r"[\p{Lu}\p{Nd}]";

/// A blank line: two line feeds with only whitespace between them
const PARAGRAPH_BREAK: &str = r"\r?\n\s*\n";

/// A candidate sentence boundary found by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Byte offset just past the end punctuation and any closing quotes
    pub gap_start: usize,
    /// Byte offset where the following sentence begins
    pub next_start: usize,
    /// The whitespace gap contains a blank line
    pub paragraph_break: bool,
}

/// Compiled boundary automaton for one rule set
#[derive(Debug)]
pub struct BoundaryScanner {
    pattern: Regex,
    paragraph: Regex,
    terminators: Vec<char>,
    closing: Vec<char>,
}

impl BoundaryScanner {
    /// Compile the rule set into a boundary pattern
    ///
    /// Pattern: `[end]+[close]*\s+([A-Z0-9]|[open])`, `[unspaced]+[close]*`, or a paragraph break
    pub fn compile(rules: &SentenceBoundaryRules) -> Result<Self, SegmentationError> {
        let closing = if rules.closing_punctuation.is_empty() {
            String::new()
        } else {
            format!("{}*", char_class(&rules.closing_punctuation))
        };

        let start = if rules.opening_punctuation.is_empty() {
            SENTENCE_START_CLASS.to_string()
        } else {
            format!("(?:{SENTENCE_START_CLASS}|{})", char_class(&rules.opening_punctuation))
        };

        let mut branches = Vec::with_capacity(3);
        if !rules.end_punctuation.is_empty() {
            let end = char_class(&rules.end_punctuation);
            branches.push(format!(r"(?:{end}+{closing}\s+{start})"));
        }
        // Scripts written without spaces end a sentence on the mark itself: "晴れです。明日"
        if !rules.unspaced_end_punctuation.is_empty() {
            let unspaced = char_class(&rules.unspaced_end_punctuation);
            branches.push(format!("(?:{unspaced}+{closing})"));
        }
        branches.push(format!("(?:{PARAGRAPH_BREAK})"));

        let pattern = branches.join("|");
        let compiled = Regex::new(&pattern)?;
        let paragraph = Regex::new(PARAGRAPH_BREAK)?;

        let mut terminators = rules.end_punctuation.clone();
        terminators.extend(&rules.unspaced_end_punctuation);
        terminators.extend(&rules.closing_punctuation);

        debug!("Compiled boundary pattern: {}", pattern);
        Ok(Self {
            pattern: compiled,
            paragraph,
            terminators,
            closing: rules.closing_punctuation.clone(),
        })
    }

    /// Find the first candidate boundary at or after byte offset `from`
    pub fn next_candidate(&self, text: &str, from: usize) -> Option<Candidate> {
        let mut from = from;
        loop {
            let found = self.pattern.find(Input::new(text).range(from..))?;
            let matched = &text[found.start()..found.end()];

            let gap_start = found.start() + leading_len(matched, |c| self.terminators.contains(&c));
            let next_start = gap_start + leading_len(&text[gap_start..], char::is_whitespace);

            if self.is_quoted_continuation(text, gap_start, next_start) {
                from = found.end();
                continue;
            }

            let paragraph_break = self.paragraph.is_match(&text[gap_start..next_start]);

            return Some(Candidate {
                gap_start,
                next_start,
                paragraph_break,
            });
        }
    }

    /// A closed quote running straight into more text continues the sentence: "「行くよ。」と彼は"
    fn is_quoted_continuation(&self, text: &str, gap_start: usize, next_start: usize) -> bool {
        if gap_start != next_start {
            return false;
        }

        let closed = text[..gap_start]
            .chars()
            .next_back()
            .is_some_and(|c| self.closing.contains(&c));
        closed && text[next_start..].chars().next().is_some_and(char::is_alphabetic)
    }
}

/// Byte length of the leading run of characters accepted by `accept`
fn leading_len(s: &str, accept: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !accept(c)).unwrap_or(s.len())
}

/// Build a character class with every member escaped as a code point
fn char_class(chars: &[char]) -> String {
    let mut class = String::from("[");
    for ch in chars {
        class.push_str(&format!(r"\x{{{:X}}}", u32::from(*ch)));
    }
    class.push(']');
    class
}

// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sentseg::{SegmentationError, Segmenter};

/// Test fixture helper for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a text file with given content
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Path inside the fixture that is never created
    pub fn missing_path(&self) -> PathBuf {
        self.root_path.join("does-not-exist.txt")
    }
}

/// Segmenter that splits on a marker and counts how often it is called
pub struct RecordingSegmenter {
    marker: &'static str,
    calls: Cell<usize>,
}

impl RecordingSegmenter {
    pub fn splitting_on(marker: &'static str) -> Self {
        Self {
            marker,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Segmenter for RecordingSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationError> {
        self.calls.set(self.calls.get() + 1);
        Ok(text
            .split(self.marker)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Segmenter that always fails
pub struct FailingSegmenter;

impl Segmenter for FailingSegmenter {
    fn segment(&self, _text: &str) -> Result<Vec<String>, SegmentationError> {
        Err(SegmentationError::Engine("engine unavailable".to_string()))
    }
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_lines(actual: &str, expected: &[&str], context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();

    if actual_lines.len() != expected.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\n{}",
            context,
            expected.len(),
            actual_lines.len(),
            actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context,
                i + 1,
                expected_line,
                actual_line
            );
        }
    }
}

pub mod driver;
pub mod error;
pub mod reader;
pub mod segmenter;
pub mod sentence_detector;

// Re-export main types for convenient access
pub use error::{DriverError, SegmentationError};
pub use segmenter::Segmenter;
pub use sentence_detector::{
    DetectedSentence,
    SentenceBoundaryRules,
    SentenceDetector,
    UnicodeSegmenter,
};

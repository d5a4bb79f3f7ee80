// WHY: the driver only ever sees this contract, so any engine can be swapped in
// without touching file handling or output

use crate::error::SegmentationError;

/// A sentence segmentation engine.
///
/// `segment` returns sentences in document order. Each returned string must be
/// free of line breaks so that printing one sentence per line is lossless.
/// Empty or whitespace-only text yields an empty vector.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationError>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationError> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationError> {
        (**self).segment(text)
    }
}

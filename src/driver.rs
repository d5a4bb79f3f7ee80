// WHY: read -> segment -> print as one linear pass; segmentation finishes before the first
// write so a failed run never leaves partial output behind

use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DriverError, Result};
use crate::reader;
use crate::segmenter::Segmenter;

/// Segment the file at `path` and write one sentence per line to `out`.
///
/// The segmenter is called exactly once. Returns the number of sentences written.
pub fn run<S, W>(path: &Path, segmenter: &S, out: W) -> Result<usize>
where
    S: Segmenter + ?Sized,
    W: Write,
{
    let text = reader::read_text(path)?;

    let sentences = segmenter.segment(&text)?;
    info!("Detected {} sentences in {}", sentences.len(), path.display());

    write_sentences(&sentences, out)
}

/// Write each sentence followed by a newline, preserving order.
///
/// A closed pipe on the reading side stops output early and is not an error.
pub fn write_sentences<S, W>(sentences: &[S], mut out: W) -> Result<usize>
where
    S: AsRef<str>,
    W: Write,
{
    let mut written = 0;

    for sentence in sentences {
        if let Err(e) = writeln!(out, "{}", sentence.as_ref()) {
            return broken_pipe_or(e, written);
        }
        written += 1;
    }

    if let Err(e) = out.flush() {
        return broken_pipe_or(e, written);
    }

    debug!("Wrote {} sentences", written);
    Ok(written)
}

fn broken_pipe_or(error: io::Error, written: usize) -> Result<usize> {
    if error.kind() == io::ErrorKind::BrokenPipe {
        debug!("Output closed after {} sentences", written);
        Ok(written)
    } else {
        Err(DriverError::Output(error))
    }
}

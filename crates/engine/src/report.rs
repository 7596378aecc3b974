use crate::error::EngineError;
use crate::ranking::RankedEntry;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one full run over a submitted path.
///
/// `errors` holds the files that were skipped (open or read failure);
/// their absence from the counts is the documented skip-and-continue
/// policy, not a failure of the run itself.
#[derive(Debug)]
pub struct RunReport {
    pub ranking: Vec<RankedEntry>,
    pub files: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    pub errors: Vec<(PathBuf, EngineError)>,
    pub elapsed: Duration,
}

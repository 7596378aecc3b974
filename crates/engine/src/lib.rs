// crates/engine/src/lib.rs
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod queue;
pub mod ranking;
pub mod report;

use crate::config::Config;
use crate::counter::FrequencyTable;
use crate::error::{EngineError, Result};
use crate::filesystem::PathSource;
use crate::report::RunReport;

/// Run the word-frequency engine over a submitted path.
///
/// Expands `root` into its `.txt` files, streams them through the bounded
/// line queue with `config.producers` readers and `config.consumers`
/// counters, and returns the ranked top-K together with any files that
/// had to be skipped.
///
/// # Errors
///
/// Returns an error for an invalid path or configuration. Individual file
/// failures are collected in `RunReport::errors` and never abort the run.
pub fn run(root: &Path, config: &Config) -> Result<RunReport> {
    config.validate()?;
    let started = Instant::now();
    let paths = filesystem::discover(root)?;
    Ok(count_files(paths, config, started))
}

/// Run the engine over an explicit file list, skipping discovery.
///
/// # Errors
///
/// Returns an error only for an invalid configuration; unreadable paths
/// in the list are skipped and reported like any other file failure.
pub fn run_paths(paths: Vec<PathBuf>, config: &Config) -> Result<RunReport> {
    config.validate()?;
    Ok(count_files(paths, config, Instant::now()))
}

fn count_files(paths: Vec<PathBuf>, config: &Config, started: Instant) -> RunReport {
    let files = paths.len();
    log::debug!(
        "counting {files} files with {} producers / {} consumers, queue capacity {}",
        config.producers,
        config.consumers,
        config.queue_capacity
    );

    let source = PathSource::new(paths);
    let table = FrequencyTable::new();
    let (line_tx, line_rx) = queue::bounded(config.queue_capacity);
    let (err_tx, err_rx) = mpsc::channel();

    std::thread::scope(|s| {
        for id in 0..config.producers {
            let source = source.clone();
            let lines = line_tx.clone();
            let errors = err_tx.clone();
            s.spawn(move || producer_loop(id, &source, lines, &errors));
        }
        // The orchestrator's own handle must not count as a live producer,
        // or the consumers would never see the queue close.
        drop(line_tx);

        for id in 0..config.consumers {
            let lines = line_rx.clone();
            let table = &table;
            s.spawn(move || consumer_loop(id, &lines, table));
        }
    });
    // Scope exit is the barrier: every worker has joined, the table is final.
    drop(err_tx);
    let errors: Vec<(PathBuf, EngineError)> = err_rx.into_iter().collect();

    let entries = table.into_entries();
    let distinct_words = entries.len();
    let total_words = entries.iter().map(|(_, count)| count).sum();
    let ranking = ranking::rank_top(entries, config.top_k);

    RunReport {
        ranking,
        files,
        distinct_words,
        total_words,
        errors,
        elapsed: started.elapsed(),
    }
}

/// Producer: claim paths until the source is exhausted, streaming each
/// file's lines into the queue under backpressure. Dropping the sender on
/// exit is what signals this producer's termination.
fn producer_loop(
    id: usize,
    source: &PathSource,
    lines: queue::LineSender,
    errors: &mpsc::Sender<(PathBuf, EngineError)>,
) {
    while let Some(path) = source.take_next() {
        if !stream_file(&path, &lines, errors) {
            return;
        }
    }
    log::debug!("producer {id}: path source exhausted");
}

/// Push one file line by line. Returns `false` only when the consumer
/// side is gone and producing has become pointless.
fn stream_file(
    path: &Path,
    lines: &queue::LineSender,
    errors: &mpsc::Sender<(PathBuf, EngineError)>,
) -> bool {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(source) => {
            log::warn!("skipping {}: {source}", path.display());
            let _ = errors.send((
                path.to_path_buf(),
                EngineError::FileRead {
                    path: path.to_path_buf(),
                    source,
                },
            ));
            return true;
        }
    };

    let mut reader = std::io::BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return true,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
                // Lossy conversion keeps mostly-text files countable.
                let line = String::from_utf8_lossy(&buf).into_owned();
                if lines.push(line).is_err() {
                    return false;
                }
            }
            Err(source) => {
                log::warn!("read error in {}, skipping rest: {source}", path.display());
                let _ = errors.send((
                    path.to_path_buf(),
                    EngineError::FileRead {
                        path: path.to_path_buf(),
                        source,
                    },
                ));
                return true;
            }
        }
    }
}

/// Consumer: block on the queue while work may still arrive, tokenize
/// each line, and fold the words into the shared table. Exits only once
/// the queue is drained and every producer has finished.
fn consumer_loop(id: usize, lines: &queue::LineReceiver, table: &FrequencyTable) {
    while let Some(line) = lines.pop() {
        for word in counter::tokenize(&line) {
            table.increment(word);
        }
    }
    log::debug!("consumer {id}: queue drained");
}

//! Discovery of candidate `.txt` files and their distribution to the
//! producer pool.

use crate::error::{EngineError, Result};
use crossbeam_channel::Receiver;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Only files with this extension are counted.
pub const TEXT_EXT: &str = "txt";

/// Expand a submitted path into the list of files to count.
///
/// A directory is walked recursively (sequentially — the concurrency lives
/// in the worker pool, not here), keeping `.txt` files and skipping hidden
/// entries. A single `.txt` file is accepted as-is. Anything else is an
/// invalid path. The result is path-sorted so runs over the same tree are
/// deterministic; an empty list is valid and simply yields an empty table.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(root).map_err(|_| EngineError::InvalidPath {
        path: root.to_path_buf(),
    })?;

    if meta.is_file() {
        if is_text_path(root) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Err(EngineError::InvalidPath {
            path: root.to_path_buf(),
        });
    }

    if !meta.is_dir() {
        return Err(EngineError::InvalidPath {
            path: root.to_path_buf(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b));

    let mut paths = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Unreadable subtree entries are skipped like unreadable files.
                log::warn!("walk: {err}");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_file()) && is_text_path(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

fn is_text_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == TEXT_EXT)
}

/// Head-of-list dispenser for the producer pool.
///
/// Backed by a pre-loaded channel whose sender is already gone, so
/// `take_next` is a non-blocking pop with an explicit exhaustion signal
/// and every path is handed to exactly one producer.
#[derive(Debug, Clone)]
pub struct PathSource {
    rx: Receiver<PathBuf>,
}

impl PathSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        for path in paths {
            let _ = tx.send(path);
        }
        Self { rx }
    }

    /// Remove and return the next path, or `None` once the source is
    /// exhausted. Safe to call from every producer concurrently.
    pub fn take_next(&self) -> Option<PathBuf> {
        self.rx.try_recv().ok()
    }

    pub fn remaining(&self) -> usize {
        self.rx.len()
    }
}

//! Cyclic sequence padding.
//!
//! Short animations are extended to a minimum frame count by repeating the
//! original sequence end-to-end and truncating to the target. The policy is
//! kept as a pure function here so it can be tested without touching disk.

use std::path::{Path, PathBuf};

use crate::error::FramecatError;

/// Pad `paths` to at least `target` entries by cyclic repetition.
///
/// Sequences of `target` or more entries are returned unmodified — a
/// 45-entry sequence with a target of 30 stays 45 entries long. Shorter
/// sequences are repeated whole (`target / n + 1` times) and truncated to
/// exactly `target`, so padded entry `k` equals original entry `k mod n`.
/// A target of 0 disables padding entirely.
///
/// # Errors
///
/// Returns [`FramecatError::EmptyAnimation`] when `paths` is empty and
/// `target` is non-zero; there is nothing to repeat.
pub fn pad_cyclic(
    paths: Vec<PathBuf>,
    target: u64,
    source: &Path,
) -> Result<Vec<PathBuf>, FramecatError> {
    let target = target as usize;
    if paths.len() >= target {
        return Ok(paths);
    }

    if paths.is_empty() {
        return Err(FramecatError::EmptyAnimation {
            path: source.to_path_buf(),
        });
    }

    let repetitions = target / paths.len() + 1;
    let mut padded = Vec::with_capacity(repetitions * paths.len());
    for _ in 0..repetitions {
        padded.extend(paths.iter().cloned());
    }
    padded.truncate(target);
    Ok(padded)
}

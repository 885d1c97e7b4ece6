//! Folder-level driver.
//!
//! [`process_folder`] walks one directory of GIF files and flattens them
//! all into a single shared output directory with globally sequential
//! frame names. The running index is threaded explicitly from one
//! extraction's return value into the next call's starting index; there is
//! no shared counter.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::FramecatError,
    extract::extract_gif,
    options::ExtractOptions,
    progress::{OperationType, ProgressTracker},
};

/// Summary of one completed folder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// How many GIF files were processed.
    pub gifs_processed: u64,
    /// Total frames written (padding repeats included); equals the next
    /// unused sequential index.
    pub frames_written: u64,
    /// The output directory frames were written to.
    pub output_dir: PathBuf,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "All frames processed and saved to {} ({} frame(s) from {} GIF(s))",
            self.output_dir.display(),
            self.frames_written,
            self.gifs_processed,
        )
    }
}

/// Process every GIF directly under `input_dir` into `output_dir`.
///
/// Creates `output_dir` (and missing parents) if needed, then matches
/// entries whose name ends with the literal suffix `.gif` — the match is
/// case-sensitive, so `Animation.GIF` is skipped. Subdirectories are not
/// recursed into, and a directory named `foo.gif` is matched like any
/// other entry (it fails at decode time, aborting the run).
///
/// Files are processed in platform listing order unless
/// [`with_sorted`](ExtractOptions::with_sorted) is set. The global frame
/// index starts at 0 on every run: re-running over a populated output
/// directory overwrites the files at colliding indices.
///
/// # Errors
///
/// The first failing GIF aborts the whole run; there is no per-file
/// isolation. See [`extract_gif`] for per-file failure modes. Listing a
/// missing or unreadable `input_dir` fails with [`FramecatError::Io`].
pub fn process_folder<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    options: &ExtractOptions,
) -> Result<RunSummary, FramecatError> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir)?;

    let mut gif_paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if entry.file_name().as_encoded_bytes().ends_with(b".gif") {
            gif_paths.push(entry.path());
        }
    }

    if options.sorted {
        gif_paths.sort();
    }

    log::info!(
        "Processing {} GIF(s) from {:?} into {:?}",
        gif_paths.len(),
        input_dir,
        output_dir,
    );

    let mut tracker = ProgressTracker::new(
        options.progress.clone(),
        OperationType::FolderProcessing,
        Some(gif_paths.len() as u64),
        options.batch_size,
    );

    let mut next_index = 0_u64;
    let mut gifs_processed = 0_u64;
    for gif_path in &gif_paths {
        if options.is_cancelled() {
            return Err(FramecatError::Cancelled);
        }

        next_index = extract_gif(gif_path, output_dir, next_index, options)?;
        gifs_processed += 1;
        tracker.advance(None);
    }
    tracker.finish();

    Ok(RunSummary {
        gifs_processed,
        frames_written: next_index,
        output_dir: output_dir.to_path_buf(),
    })
}

//! Per-GIF frame extraction and renumbering.
//!
//! [`extract_gif`] turns one animated GIF into a run of sequentially named
//! JPEG files inside a shared output directory: decode every frame, convert
//! to RGB, resize, write to a `temp` scratch subdirectory, pad the sequence
//! to the configured minimum by cyclic repetition, then copy the padded
//! sequence into place under the caller's running index.
//!
//! # Example
//!
//! ```no_run
//! use framecat::{ExtractOptions, extract_gif};
//!
//! let options = ExtractOptions::new();
//! let next = extract_gif("a.gif", "output_frames", 0, &options)?;
//! // `next` is the first index the following GIF should use.
//! let next = extract_gif("b.gif", "output_frames", next, &options)?;
//! # Ok::<(), framecat::FramecatError>(())
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{DynamicImage, imageops};

use crate::{
    error::FramecatError,
    gif::GifFile,
    options::ExtractOptions,
    padding::pad_cyclic,
    progress::{OperationType, ProgressTracker},
};

/// Name of the scratch subdirectory created under the output directory.
///
/// The path is fixed, which is safe only because GIFs are processed
/// strictly sequentially. Parallel processing would need per-GIF scratch
/// paths.
pub(crate) const TEMP_DIR_NAME: &str = "temp";

/// Extract, pad, and renumber one GIF into `output_dir`.
///
/// Frames are written as `frame_{j:05}.jpg` where `j` starts at
/// `start_index` and increments once per emitted frame. Returns the next
/// unused index, to be threaded into the following call.
///
/// The `temp` scratch subdirectory is removed once the copy phase
/// completes. If an earlier step fails, the scratch directory and its
/// partial contents are left behind.
///
/// # Errors
///
/// Returns [`FramecatError::FileOpen`] / [`FramecatError::FrameDecode`] if
/// the file cannot be read as an animated GIF,
/// [`FramecatError::EmptyAnimation`] if it decodes to zero frames while
/// padding is enabled, [`FramecatError::Cancelled`] on cooperative
/// cancellation, and [`FramecatError::Io`] / [`FramecatError::Image`] for
/// disk and encode failures.
pub fn extract_gif<P: AsRef<Path>, Q: AsRef<Path>>(
    gif_path: P,
    output_dir: Q,
    start_index: u64,
    options: &ExtractOptions,
) -> Result<u64, FramecatError> {
    let gif_path = gif_path.as_ref().to_path_buf();
    let output_dir = output_dir.as_ref();

    let temp_dir = output_dir.join(TEMP_DIR_NAME);
    fs::create_dir_all(&temp_dir)?;

    let gif = GifFile::open(&gif_path)?;
    log::info!(
        "Extracting {} frame(s) from {:?} starting at index {}",
        gif.frame_count(),
        gif_path,
        start_index,
    );

    let frame_paths = write_scratch_frames(gif, &temp_dir, options)?;
    let padded = pad_cyclic(frame_paths, options.min_frames, &gif_path)?;

    let mut tracker = ProgressTracker::new(
        options.progress.clone(),
        OperationType::SequenceAssembly,
        Some(padded.len() as u64),
        options.batch_size,
    );

    for (offset, scratch_path) in padded.iter().enumerate() {
        if options.is_cancelled() {
            return Err(FramecatError::Cancelled);
        }

        let index = start_index + offset as u64;
        let final_path = output_dir.join(format!("frame_{index:05}.jpg"));
        fs::copy(scratch_path, &final_path)?;
        tracker.advance(Some(index));
    }
    tracker.finish();

    fs::remove_dir_all(&temp_dir)?;

    Ok(start_index + padded.len() as u64)
}

/// Decode, convert, resize, and write every frame into the scratch
/// directory. Returns the written paths in frame order.
fn write_scratch_frames(
    gif: GifFile,
    temp_dir: &Path,
    options: &ExtractOptions,
) -> Result<Vec<PathBuf>, FramecatError> {
    let frame_count = gif.frame_count() as u64;
    let mut tracker = ProgressTracker::new(
        options.progress.clone(),
        OperationType::FrameExtraction,
        Some(frame_count),
        options.batch_size,
    );

    let mut frame_paths = Vec::with_capacity(gif.frame_count());
    for (position, frame) in gif.into_frames().into_iter().enumerate() {
        if options.is_cancelled() {
            return Err(FramecatError::Cancelled);
        }

        // GIF frames decode as RGBA; drop the alpha channel before JPEG.
        let rgb = DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8();
        let resized = imageops::resize(
            &rgb,
            options.frame_width,
            options.frame_height,
            options.filter,
        );

        let frame_path = temp_dir.join(format!("frame_{position:05}.jpg"));
        resized.save(&frame_path)?;
        frame_paths.push(frame_path);
        tracker.advance(Some(position as u64));
    }
    tracker.finish();

    Ok(frame_paths)
}

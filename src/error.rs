//! Error types for the `framecat` crate.
//!
//! This module defines [`FramecatError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry enough context to
//! diagnose the problem, including file paths and upstream error messages.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framecat` operations.
///
/// Every public method that can fail returns `Result<T, FramecatError>`.
/// Any failure aborts the whole run: there is no per-file isolation and no
/// retry. A run interrupted mid-way leaves the output directory partially
/// populated, and may leave a `temp` scratch directory behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramecatError {
    /// The GIF file could not be opened.
    #[error("Failed to open GIF file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::GifFile::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file could not be decoded as an animated GIF.
    #[error("Failed to decode frames from {path}: {reason}")]
    FrameDecode {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying decoder error message.
        reason: String,
    },

    /// The GIF decoded to zero frames.
    ///
    /// Padding a zero-length sequence is undefined, so the run aborts with
    /// this error instead. The path names the offending file so it can be
    /// removed or repaired.
    #[error("GIF at {path} contains no frames")]
    EmptyAnimation {
        /// Path of the frameless file.
        path: PathBuf,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate during decode, resize, or encode.
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    /// The operation was cancelled via a [`CancellationToken`](crate::CancellationToken).
    #[error("Operation cancelled")]
    Cancelled,
}

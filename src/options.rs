//! Conversion configuration.
//!
//! [`ExtractOptions`] is a builder that threads frame output settings,
//! progress callbacks, and cancellation tokens through the extraction and
//! folder-processing functions without polluting every signature.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use framecat::{CancellationToken, ExtractOptions, ProgressCallback, ProgressInfo};
//!
//! struct LogProgress;
//! impl ProgressCallback for LogProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         println!("{:?}: {} done", info.operation, info.current);
//!     }
//! }
//!
//! let token = CancellationToken::new();
//! let options = ExtractOptions::new()
//!     .with_progress(Arc::new(LogProgress))
//!     .with_cancellation(token.clone())
//!     .with_frame_size(64, 64)
//!     .with_min_frames(60);
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use image::imageops::FilterType;

use crate::progress::{CancellationToken, NoOpProgress, ProgressCallback};

/// Default output frame edge length, in pixels.
pub const DEFAULT_FRAME_SIZE: u32 = 128;

/// Default minimum frame count a sequence is padded up to.
pub const DEFAULT_MIN_FRAMES: u64 = 30;

/// Configuration for GIF-to-frame conversion.
///
/// Carries frame output settings (resolution, resampling filter, padding
/// target), folder-listing behaviour, and optional progress and
/// cancellation hooks. A default-constructed value reproduces the
/// original tool's behaviour: 128×128 output, pad to 30 frames, directory
/// listing order.
#[derive(Clone)]
pub struct ExtractOptions {
    /// Output frame width in pixels.
    pub(crate) frame_width: u32,
    /// Output frame height in pixels.
    pub(crate) frame_height: u32,
    /// Sequences shorter than this are padded by cyclic repetition.
    /// Zero disables padding.
    pub(crate) min_frames: u64,
    /// Resampling filter used when resizing frames.
    pub(crate) filter: FilterType,
    /// When `true`, matched GIF names are sorted lexicographically before
    /// processing. Defaults to `false` (platform listing order).
    pub(crate) sorted: bool,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
    /// Cancellation token. `None` means never cancelled.
    pub(crate) cancellation: Option<CancellationToken>,
    /// How often to fire the progress callback (every N items).
    /// Defaults to 1 (every item).
    pub(crate) batch_size: u64,
}

impl Debug for ExtractOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ExtractOptions")
            .field("frame_width", &self.frame_width)
            .field("frame_height", &self.frame_height)
            .field("min_frames", &self.min_frames)
            .field("sorted", &self.sorted)
            .field("has_cancellation", &self.cancellation.is_some())
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractOptions {
    /// Create a new configuration with default settings.
    ///
    /// Defaults: 128×128 output, pad to 30 frames, bicubic resampling,
    /// unsorted listing, no progress callback, no cancellation,
    /// batch size 1.
    pub fn new() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_SIZE,
            frame_height: DEFAULT_FRAME_SIZE,
            min_frames: DEFAULT_MIN_FRAMES,
            filter: FilterType::CatmullRom,
            sorted: false,
            progress: Arc::new(NoOpProgress),
            cancellation: None,
            batch_size: 1,
        }
    }

    /// Set the output frame dimensions.
    ///
    /// Every frame is resized to exactly this size; aspect ratio is not
    /// preserved. Both dimensions are clamped to a minimum of 1.
    #[must_use]
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width.max(1);
        self.frame_height = height.max(1);
        self
    }

    /// Set the minimum frame count sequences are padded up to.
    ///
    /// Sequences with fewer decoded frames are extended by repeating the
    /// original frames cyclically and truncating to exactly this count.
    /// Longer sequences pass through unmodified. Zero disables padding.
    #[must_use]
    pub fn with_min_frames(mut self, min_frames: u64) -> Self {
        self.min_frames = min_frames;
        self
    }

    /// Set the resampling filter used for resizing.
    ///
    /// Defaults to [`FilterType::CatmullRom`] (bicubic).
    #[must_use]
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Sort matched GIF names lexicographically before processing.
    ///
    /// Off by default, in which case files are processed in whatever order
    /// the platform's directory listing returns. Turn this on when
    /// deterministic output ordering across machines is required.
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Attach a progress callback.
    ///
    /// The callback is invoked every
    /// [`batch_size`](ExtractOptions::with_batch_size) items during
    /// conversion.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }

    /// Attach a cancellation token.
    ///
    /// When the token is cancelled, the conversion loop will stop and
    /// return [`FramecatError::Cancelled`](crate::FramecatError::Cancelled).
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Set how often the progress callback fires.
    ///
    /// A value of 1 means every item; 10 means every 10th item.
    /// Clamped to a minimum of 1.
    #[must_use]
    pub fn with_batch_size(mut self, size: u64) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Returns `true` if cancellation has been requested.
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}

//! Lightweight GIF probing.
//!
//! [`GifProbe`] inspects a GIF file without writing anything to disk. This
//! is useful for checking a folder's contents (frame counts, dimensions)
//! before committing to a conversion run.
//!
//! For the actual conversion, use
//! [`process_folder`](crate::process_folder) or
//! [`extract_gif`](crate::extract_gif).

use std::{fs, path::Path};

use crate::{error::FramecatError, gif::GifFile};

/// Metadata describing one probed GIF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifMetadata {
    /// Number of frames in the animation.
    pub frame_count: u64,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Size of the file on disk, in bytes.
    pub file_size: u64,
}

/// Lightweight GIF file probe.
///
/// Decodes the file, extracts metadata, and drops the frames immediately.
///
/// # Example
///
/// ```no_run
/// use framecat::GifProbe;
///
/// let metadata = GifProbe::probe("input.gif")?;
/// println!(
///     "{} frames at {}x{}",
///     metadata.frame_count, metadata.width, metadata.height,
/// );
/// # Ok::<(), framecat::FramecatError>(())
/// ```
pub struct GifProbe;

impl GifProbe {
    /// Probe a GIF file and return its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FramecatError::FileOpen`] or
    /// [`FramecatError::FrameDecode`] if the file cannot be read as a GIF.
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<GifMetadata, FramecatError> {
        let path = path.as_ref();
        let gif = GifFile::open(path)?;
        let (width, height) = gif.dimensions();
        let file_size = fs::metadata(path)?.len();

        Ok(GifMetadata {
            frame_count: gif.frame_count() as u64,
            width,
            height,
            file_size,
        })
    }

    /// Probe multiple GIF files and return their metadata.
    ///
    /// Files that cannot be probed produce an `Err` entry in the result
    /// vector rather than aborting the entire batch.
    pub fn probe_many<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<GifMetadata, FramecatError>> {
        paths.iter().map(Self::probe).collect()
    }
}

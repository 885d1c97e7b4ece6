//! Animated GIF decoding.
//!
//! [`GifFile`] is the entry point for reading a single GIF from disk. It
//! decodes every frame eagerly via the `image` crate's
//! [`GifDecoder`](image::codecs::gif::GifDecoder) and holds the result in
//! memory, so downstream code can iterate the animation in encoded order
//! without keeping the file open.
//!
//! # Example
//!
//! ```no_run
//! use framecat::GifFile;
//!
//! let gif = GifFile::open("input.gif")?;
//! println!("{} frames at {:?}", gif.frame_count(), gif.dimensions());
//! # Ok::<(), framecat::FramecatError>(())
//! ```

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use image::{AnimationDecoder, Frame, ImageDecoder, codecs::gif::GifDecoder};

use crate::error::FramecatError;

/// An animated GIF decoded into its constituent frames.
///
/// All frames are decoded at open time, in their encoded order. Frames are
/// RGBA as delivered by the decoder; colour conversion and resizing happen
/// later, during extraction.
pub struct GifFile {
    path: PathBuf,
    dimensions: (u32, u32),
    frames: Vec<Frame>,
}

impl GifFile {
    /// Open and fully decode an animated GIF.
    ///
    /// # Errors
    ///
    /// Returns [`FramecatError::FileOpen`] if the file cannot be opened and
    /// [`FramecatError::FrameDecode`] if it cannot be decoded as a GIF or
    /// any frame in it is corrupt.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FramecatError> {
        let path = path.as_ref().to_path_buf();

        let file = File::open(&path).map_err(|error| FramecatError::FileOpen {
            path: path.clone(),
            reason: error.to_string(),
        })?;

        let decoder =
            GifDecoder::new(BufReader::new(file)).map_err(|error| FramecatError::FrameDecode {
                path: path.clone(),
                reason: error.to_string(),
            })?;
        let dimensions = decoder.dimensions();

        let frames =
            decoder
                .into_frames()
                .collect_frames()
                .map_err(|error| FramecatError::FrameDecode {
                    path: path.clone(),
                    reason: error.to_string(),
                })?;

        log::debug!(
            "Decoded {} frame(s) from {:?} ({}x{})",
            frames.len(),
            path,
            dimensions.0,
            dimensions.1,
        );

        Ok(Self {
            path,
            dimensions,
            frames,
        })
    }

    /// The path this GIF was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canvas dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Number of decoded frames. May be zero for degenerate files.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The decoded frames, in encoded order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Consume the handle and return the decoded frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

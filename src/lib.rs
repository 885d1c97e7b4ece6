//! # framecat
//!
//! Flatten folders of animated GIFs into globally numbered JPEG frame
//! sequences.
//!
//! `framecat` decodes every frame of every GIF in a folder, converts each
//! to 3-channel colour, resizes it to a fixed resolution (128×128 by
//! default), pads short animations to a minimum frame count by looping,
//! and writes the lot into one output directory as `frame_00000.jpg`,
//! `frame_00001.jpg`, … with a single contiguous index across all inputs.
//!
//! ## Quick Start
//!
//! ### Convert a Folder
//!
//! ```no_run
//! use framecat::{ExtractOptions, process_folder};
//!
//! let summary = process_folder("gifs", "output_frames", &ExtractOptions::new()).unwrap();
//! println!("{summary}");
//! ```
//!
//! ### Convert One GIF with a Threaded Index
//!
//! ```no_run
//! use framecat::{ExtractOptions, extract_gif};
//!
//! let options = ExtractOptions::new();
//! let next = extract_gif("a.gif", "output_frames", 0, &options).unwrap();
//! extract_gif("b.gif", "output_frames", next, &options).unwrap();
//! ```
//!
//! ### Inspect Before Converting
//!
//! ```no_run
//! use framecat::GifProbe;
//!
//! let metadata = GifProbe::probe("input.gif").unwrap();
//! println!("{} frames", metadata.frame_count);
//! ```
//!
//! ## Behaviour
//!
//! - **Padding** — animations shorter than the minimum (default 30) are
//!   repeated cyclically and truncated to exactly the minimum; longer
//!   animations pass through at full length.
//! - **Ordering** — inputs are taken in platform directory-listing order
//!   unless sorting is enabled; output indices run contiguously across the
//!   whole folder, in that order.
//! - **Matching** — only names ending in the literal, case-sensitive
//!   suffix `.gif` are picked up; subdirectories are not recursed into.
//! - **Overwrite** — the index restarts at 0 every run, so re-running over
//!   a populated output directory overwrites colliding frame files.
//! - **Failure** — the first error aborts the run. A zero-frame GIF is an
//!   explicit [`FramecatError::EmptyAnimation`]; an interrupted run may
//!   leave a `temp` scratch directory behind in the output folder.
//! - **Progress & cancellation** — cooperative callbacks and
//!   [`CancellationToken`] hooks for long runs.

pub mod error;
pub mod extract;
pub mod folder;
pub mod gif;
pub mod options;
pub mod padding;
pub mod probe;
pub mod progress;

pub use error::FramecatError;
pub use extract::extract_gif;
pub use folder::{RunSummary, process_folder};
pub use gif::GifFile;
pub use options::{DEFAULT_FRAME_SIZE, DEFAULT_MIN_FRAMES, ExtractOptions};
pub use padding::pad_cyclic;
pub use probe::{GifMetadata, GifProbe};
pub use progress::{CancellationToken, OperationType, ProgressCallback, ProgressInfo};

//! ExtractOptions builder tests.

use framecat::{DEFAULT_FRAME_SIZE, DEFAULT_MIN_FRAMES, ExtractOptions};

#[test]
fn defaults_match_the_original_tool() {
    assert_eq!(DEFAULT_FRAME_SIZE, 128);
    assert_eq!(DEFAULT_MIN_FRAMES, 30);

    let options = ExtractOptions::new();
    let debug = format!("{options:?}");
    assert!(debug.contains("ExtractOptions"));
    assert!(debug.contains("frame_width: 128"));
    assert!(debug.contains("frame_height: 128"));
    assert!(debug.contains("min_frames: 30"));
    assert!(debug.contains("sorted: false"));
    assert!(debug.contains("has_cancellation: false"));
    assert!(debug.contains("batch_size: 1"));
}

#[test]
fn with_frame_size_clamps_zero_dimensions() {
    let options = ExtractOptions::new().with_frame_size(0, 0);
    let debug = format!("{options:?}");
    assert!(debug.contains("frame_width: 1"));
    assert!(debug.contains("frame_height: 1"));
}

#[test]
fn with_batch_size_clamps_zero() {
    let options = ExtractOptions::new().with_batch_size(0);
    let debug = format!("{options:?}");
    // Clamped to 1.
    assert!(debug.contains("batch_size: 1"));
}

#[test]
fn with_min_frames_allows_zero() {
    let options = ExtractOptions::new().with_min_frames(0);
    let debug = format!("{options:?}");
    assert!(debug.contains("min_frames: 0"));
}

#[test]
fn with_cancellation_is_reflected_in_debug() {
    let token = framecat::CancellationToken::new();
    let options = ExtractOptions::new().with_cancellation(token);
    let debug = format!("{options:?}");
    assert!(debug.contains("has_cancellation: true"));
}

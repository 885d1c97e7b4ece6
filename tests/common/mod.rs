//! Shared fixture helpers for integration tests.
//!
//! Fixtures are generated on the fly with the `image` crate's GIF encoder,
//! so no binary files need to be checked in. Solid-colour frames survive
//! both GIF palette quantization and JPEG re-encoding closely enough for
//! tolerance-based content checks.

#![allow(dead_code)]

use std::{fs::File, path::Path};

use image::{Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

/// Write an animated GIF whose frames are solid colours, in order.
pub fn write_gif(path: &Path, colors: &[[u8; 3]]) {
    let file = File::create(path).expect("create fixture GIF");
    let mut encoder = GifEncoder::new(file);
    for color in colors {
        let buffer = RgbaImage::from_pixel(16, 16, Rgba([color[0], color[1], color[2], 255]));
        encoder.encode_frame(Frame::new(buffer)).expect("encode fixture frame");
    }
}

/// A 31-frame gradient of distinct gray levels (0, 8, 16, …).
pub fn gray_gradient(frames: usize) -> Vec<[u8; 3]> {
    (0..frames)
        .map(|i| {
            let level = (i * 8) as u8;
            [level, level, level]
        })
        .collect()
}

/// Average colour of an image file, as `[r, g, b]`.
pub fn mean_color(path: &Path) -> [u8; 3] {
    let rgb = image::open(path).expect("open output frame").to_rgb8();
    let pixel_count = (rgb.width() * rgb.height()) as u64;
    let mut sums = [0_u64; 3];
    for pixel in rgb.pixels() {
        for channel in 0..3 {
            sums[channel] += pixel.0[channel] as u64;
        }
    }
    [
        (sums[0] / pixel_count) as u8,
        (sums[1] / pixel_count) as u8,
        (sums[2] / pixel_count) as u8,
    ]
}

/// Channel-wise closeness check with a tolerance for JPEG loss.
pub fn close_to(actual: [u8; 3], expected: [u8; 3], tolerance: u8) -> bool {
    actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a.abs_diff(*e) <= tolerance)
}

pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

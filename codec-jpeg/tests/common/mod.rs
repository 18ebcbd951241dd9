//! Shared helpers for exercising the JPEG adapter.
#![allow(dead_code)]

use std::path::Path;

use arrio_codec_jpeg::JpegAdapter;
use arrio_core::{ArrayContainer, TagList};
use arrio_format::{FormatAdapter, WriteMode};

/// Build a grayscale array from a function of (row, column).
pub fn gray_array(rows: u32, cols: u32, f: impl Fn(u32, u32) -> u8) -> ArrayContainer {
    let mut samples = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            samples.push(f(row, col));
        }
    }
    ArrayContainer::from_samples(samples, &[rows, cols], 1).unwrap()
}

/// Build an RGB array from a function of (row, column).
pub fn rgb_array(rows: u32, cols: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> ArrayContainer {
    let mut samples = Vec::with_capacity((rows * cols * 3) as usize);
    for row in 0..rows {
        for col in 0..cols {
            samples.extend_from_slice(&f(row, col));
        }
    }
    ArrayContainer::from_samples(samples, &[rows, cols], 3).unwrap()
}

/// Encode `array` into a new JPEG file at `path` through the adapter.
pub fn encode_to_file(path: &Path, array: &ArrayContainer) {
    let mut adapter = JpegAdapter::new();
    adapter
        .open_write(path, WriteMode::Truncate, &TagList::new())
        .unwrap();
    adapter.write_array(array).unwrap();
    adapter.close().unwrap();
}

/// Decode the first array of the JPEG file at `path` through the adapter.
pub fn decode_from_file(path: &Path) -> ArrayContainer {
    let mut adapter = JpegAdapter::new();
    adapter.open_read(path, &TagList::new()).unwrap();
    let array = adapter.read_array(0).unwrap();
    adapter.close().unwrap();
    array
}

/// Assert that two sample slices agree within a per-sample margin.
pub fn assert_samples_approx(got: &[u8], want: &[u8], margin: u8) {
    assert_eq!(got.len(), want.len(), "sample count mismatch");
    for (i, (g, w)) in got.iter().zip(want).enumerate() {
        assert!(
            g.abs_diff(*w) <= margin,
            "sample mismatch at #{}: {} vs {}",
            i,
            g,
            w
        );
    }
}

//! Arrays the JPEG format cannot represent are rejected up front,
//! before anything reaches the output file.

mod common;

use std::fs;

use arrio_codec_jpeg::JpegAdapter;
use arrio_core::{ArrayContainer, TagList};
use arrio_format::{ErrorKind, FormatAdapter, WriteMode};
use common::*;
use rstest::rstest;

#[rstest]
#[case::one_dimensional(ArrayContainer::from_samples(vec![0_u8; 4], &[4], 1).unwrap())]
#[case::three_dimensional(ArrayContainer::from_samples(vec![0_u8; 8], &[2, 2, 2], 1).unwrap())]
#[case::zero_rows(ArrayContainer::from_samples(Vec::<u8>::new(), &[0, 4], 1).unwrap())]
#[case::two_components(ArrayContainer::from_samples(vec![0_u8; 8], &[2, 2], 2).unwrap())]
#[case::four_components(ArrayContainer::from_samples(vec![0_u8; 16], &[2, 2], 4).unwrap())]
#[case::sixteen_bit_samples(ArrayContainer::from_samples(vec![0_u16; 4], &[2, 2], 1).unwrap())]
#[case::float_samples(ArrayContainer::from_samples(vec![0_f32; 4], &[2, 2], 1).unwrap())]
#[case::oversized_width(ArrayContainer::from_samples(vec![0_u8; 70_000], &[1, 70_000], 1).unwrap())]
fn unsupported_arrays_write_nothing(#[case] array: ArrayContainer) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpg");

    let mut adapter = JpegAdapter::new();
    adapter
        .open_write(&path, WriteMode::Truncate, &TagList::new())
        .unwrap();
    let err = adapter.write_array(&array).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    adapter.close().unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[rstest]
fn supported_component_counts_encode_fine(#[values(1, 3)] components: u32) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.jpg");
    let array = ArrayContainer::from_samples(
        vec![128_u8; (4 * 4 * components) as usize],
        &[4, 4],
        components,
    )
    .unwrap();

    let mut adapter = JpegAdapter::new();
    adapter
        .open_write(&path, WriteMode::Truncate, &TagList::new())
        .unwrap();
    adapter.write_array(&array).unwrap();
    adapter.close().unwrap();

    let decoded = decode_from_file(&path);
    assert_eq!(decoded.components(), components);
    assert_eq!(decoded.dims(), &[4, 4]);
}

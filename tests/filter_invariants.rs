//! Cross-filter checks run against the public API.
//!
//! Per-kernel values live next to each kernel; this file covers properties
//! every filter shares and the paths that combine them.

use ndarray::Array3;
use pixelfx::filters::core::rgba_slice_mut;
use pixelfx::pipeline::apply_batch;
use pixelfx::{apply_by_name, Filter, FilterError, FilterKind, FilterSettings, RgbaBuffer};

/// 256 pixels covering every byte value in each channel, alpha = index.
fn sweep() -> Vec<u8> {
    (0..=255u8)
        .flat_map(|v| [v, v.wrapping_mul(31), 255 - v, v])
        .collect()
}

const EXTREMES: [f64; 10] = [
    f64::NEG_INFINITY,
    -1.0e9,
    -1.0,
    0.0,
    0.5,
    1.0,
    2.0,
    1.0e9,
    f64::INFINITY,
    f64::NAN,
];

// ============================================================================
// Shared Properties
// ============================================================================

#[test]
fn alpha_survives_every_filter_and_parameter() {
    for kind in FilterKind::ALL {
        for value in EXTREMES {
            let filter = Filter::from_values(kind, &[value; 3]).unwrap();
            let mut data = sweep();
            filter.apply(&mut data).unwrap();
            for (i, px) in data.chunks_exact(4).enumerate() {
                assert_eq!(px[3], i as u8, "{} changed alpha", filter);
            }
        }
    }
}

#[test]
fn empty_buffer_is_accepted_by_every_filter() {
    for kind in FilterKind::ALL {
        let mut data: Vec<u8> = Vec::new();
        Filter::default_for(kind).apply(&mut data).unwrap();
        Filter::from_values(kind, &[1.0; 3]).unwrap().apply(&mut data).unwrap();
        assert!(data.is_empty());
    }
}

#[test]
fn pixels_are_independent() {
    // Filtering a buffer equals filtering each pixel on its own.
    for kind in FilterKind::ALL {
        let filter = Filter::from_values(kind, &[0.7; 3]).unwrap();
        let mut whole = sweep();
        filter.apply(&mut whole).unwrap();

        let mut single = sweep();
        for px in single.chunks_exact_mut(4) {
            filter.apply(px).unwrap();
        }
        assert_eq!(whole, single, "{}", filter);
    }
}

#[test]
fn partial_pixel_is_rejected_before_any_write() {
    for kind in FilterKind::ALL {
        let mut data = sweep();
        data.pop();
        let before = data.clone();
        let err = Filter::from_values(kind, &[1.0; 3])
            .unwrap()
            .apply(&mut data)
            .unwrap_err();
        assert_eq!(err, FilterError::InvalidBufferLength { len: before.len() });
        assert_eq!(data, before);
    }
}

// ============================================================================
// Entry Points
// ============================================================================

#[test]
fn name_dispatch_matches_direct_call() {
    let mut by_name = sweep();
    let mut direct = sweep();
    apply_by_name(&mut by_name, "_saturation", &[1.5]).unwrap();
    pixelfx::filters::saturation(&mut direct, 1.5);
    assert_eq!(by_name, direct);

    let mut by_name = sweep();
    let mut direct = sweep();
    apply_by_name(&mut by_name, "Tint", &[12.0, -7.9, 300.0]).unwrap();
    pixelfx::filters::tint(&mut direct, 12, -7, 300);
    assert_eq!(by_name, direct);
}

#[test]
fn ndarray_view_matches_flat_buffer() {
    let flat = sweep();
    let mut image = Array3::from_shape_vec((16, 16, 4), flat.clone()).unwrap();

    let data = rgba_slice_mut(image.view_mut()).unwrap();
    pixelfx::filters::sepia(data, 0.8);

    let mut expected = flat;
    pixelfx::filters::sepia(&mut expected, 0.8);
    assert_eq!(image.into_raw_vec_and_offset().0, expected);
}

#[test]
fn host_heap_region_with_byte_length() {
    // A larger region where only the first two pixels belong to the image.
    let mut heap = vec![100u8; 16];
    let mut buffer = RgbaBuffer::with_len(&mut heap, 8).unwrap();
    assert_eq!(buffer.pixel_count(), 2);
    Filter::Brightness(50).apply_to(&mut buffer);
    assert_eq!(&heap[..8], &[150, 150, 150, 100, 150, 150, 150, 100]);
    assert_eq!(&heap[8..], &[100; 8]);

    let err = RgbaBuffer::with_len(&mut heap, 20).unwrap_err();
    assert_eq!(err, FilterError::OutOfBounds { len: 20, available: 16 });
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn settings_document_end_to_end() {
    let json = r#"{
        "grayscale": 1.0,
        "brightness": 10,
        "fade": 0.5
    }"#;
    let settings = FilterSettings::from_json(json).unwrap();

    let base = vec![90u8, 90, 93, 200, 0, 0, 0, 0];
    let out = settings.render(&base).unwrap();
    // gray 91 -> +10 -> 101 -> fade: 101 * 0.5 + 127.5 = 178
    // black 0 -> +10 -> 10 -> fade: 5 + 127.5 = 132
    assert_eq!(out, vec![178, 178, 178, 200, 132, 132, 132, 0]);
    assert_eq!(base, vec![90, 90, 93, 200, 0, 0, 0, 0]);
}

#[test]
fn settings_match_sequential_filters() {
    let mut settings = FilterSettings::default();
    settings.sepia = 0.6;
    settings.contrast = 1.4;
    settings.temperature = -0.5;
    settings.solarize = 0.9;

    let mut piped = sweep();
    settings.apply(&mut piped).unwrap();

    let mut manual = sweep();
    pixelfx::filters::contrast(&mut manual, 1.4);
    pixelfx::filters::sepia(&mut manual, 0.6);
    pixelfx::filters::temperature(&mut manual, -0.5);
    pixelfx::filters::solarize(&mut manual, 0.9);
    assert_eq!(piped, manual);
}

#[test]
fn batch_matches_one_at_a_time() {
    let mut settings = FilterSettings::default();
    settings.invert = 0.3;
    settings.saturation = 1.8;
    settings.tint = [20, -20, 5];

    let mut batch: Vec<Vec<u8>> = (0..8)
        .map(|i| sweep().into_iter().map(|b| b.wrapping_add(i)).collect())
        .collect();
    let mut expected = batch.clone();
    for buf in &mut expected {
        settings.apply(buf).unwrap();
    }

    apply_batch(&mut batch, &settings).unwrap();
    assert_eq!(batch, expected);
}

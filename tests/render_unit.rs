//! Unit tests for the rendering pipeline stages.
//!
//! These tests verify the core algorithms through the public API:
//! - sRGB transfer functions
//! - Resampling filters
//! - Quality stages
//! - Cell sampling and frame shape

use pic_to_ansi::render::*;

fn gradient(width: u32, height: u32) -> PixelGrid {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Rgb::new(
                    (x * 255 / width.max(1)) as u8,
                    (y * 255 / height.max(1)) as u8,
                    ((x + y) % 256) as u8,
                )
            })
        })
        .collect();
    PixelGrid::new(width, height, pixels).unwrap()
}

// ==================== Color Space Tests ====================

#[test]
fn test_color_round_trip_all_values() {
    for v in 0..=255u8 {
        let c = Rgb::new(v, 255 - v, v / 2);
        let back = color_space::encode_rgb(color_space::decode_rgb(c));
        for (a, b) in back.channels().iter().zip(c.channels()) {
            assert!((*a as i16 - b as i16).abs() <= 1, "{:?} -> {:?}", c, back);
        }
    }
}

#[test]
fn test_decode_range() {
    assert_eq!(color_space::decode(0), 0.0);
    let top = color_space::decode(255);
    assert!((top - 1.0).abs() < 1e-6);
}

// ==================== Resize Tests ====================

#[test]
fn test_resize_every_method_hits_target_size() {
    for method in [
        ResizeMethod::Lanczos,
        ResizeMethod::Bicubic,
        ResizeMethod::LinearLanczos,
        ResizeMethod::LinearBicubic,
    ] {
        for (w, h) in [(1, 1), (3, 7), (50, 2), (120, 90)] {
            let out = resize(gradient(64, 48), w, h, method).unwrap();
            assert_eq!((out.width(), out.height()), (w, h), "{:?}", method);
        }
    }
}

#[test]
fn test_resize_methods_differ_on_high_contrast() {
    let pixels = (0..16u32)
        .flat_map(|y| (0..16u32).map(move |x| if (x / 2 + y / 2) % 2 == 0 { Rgb::BLACK } else { Rgb::WHITE }))
        .collect();
    let grid = PixelGrid::new(16, 16, pixels).unwrap();
    let display = resize(grid.clone(), 3, 3, ResizeMethod::Lanczos).unwrap();
    let linear = resize(grid, 3, 3, ResizeMethod::LinearLanczos).unwrap();
    assert_ne!(display, linear);
}

#[test]
fn test_resize_rejects_zero() {
    assert!(resize(gradient(4, 4), 0, 1, ResizeMethod::Bicubic).is_err());
}

// ==================== Quality Tests ====================

#[test]
fn test_neutral_quality_is_bit_identical() {
    let grid = gradient(31, 17);
    let out = quality::apply(grid.clone(), &QualitySettings::NEUTRAL);
    assert_eq!(out, grid);
}

#[test]
fn test_default_quality_sharpens() {
    // Default settings include light sharpening, which changes an edge
    let pixels = (0..10u32)
        .flat_map(|_| (0..10u32).map(|x| if x < 5 { Rgb::new(60, 60, 60) } else { Rgb::new(190, 190, 190) }))
        .collect();
    let grid = PixelGrid::new(10, 10, pixels).unwrap();
    let out = quality::apply(grid.clone(), &QualitySettings::default());
    assert_ne!(out, grid);
}

#[test]
fn test_quality_stage_order_denoise_before_sharpen() {
    // A single bright speck is removed by denoise before sharpen could amplify it
    let mut pixels = vec![Rgb::new(100, 100, 100); 49];
    pixels[24] = Rgb::WHITE;
    let grid = PixelGrid::new(7, 7, pixels).unwrap();
    let settings = QualitySettings {
        denoise: 1,
        sharpen: Sharpen::Strong,
        saturation: 1.0,
        contrast: 1.0,
    };
    let out = quality::apply(grid, &settings);
    assert!(out.pixels().iter().all(|&p| p == Rgb::new(100, 100, 100)));
}

#[test]
fn test_quality_output_stays_in_range_under_extremes() {
    let settings = QualitySettings {
        denoise: 3,
        sharpen: Sharpen::Strong,
        saturation: 4.0,
        contrast: 4.0,
    };
    let out = quality::apply(gradient(20, 20), &settings);
    assert_eq!((out.width(), out.height()), (20, 20));
}

// ==================== Sampling Tests ====================

#[test]
fn test_frame_shape_matches_config() {
    for (src_w, src_h) in [(1, 1), (640, 480), (480, 640), (1000, 10), (3, 300)] {
        for width in [1, 7, 60] {
            for cell_mode in [
                CellMode::HalfBlock(HalfBlock::Upper),
                CellMode::HalfBlock(HalfBlock::Lower),
                CellMode::FullBlock('#'),
            ] {
                let config = RenderConfig {
                    width,
                    cell_mode,
                    resize_method: ResizeMethod::Bicubic,
                    quality: QualitySettings::NEUTRAL,
                    ..RenderConfig::default()
                };
                let grid = PixelGrid::filled(src_w, src_h, Rgb::new(1, 2, 3)).unwrap();
                let (cols, rows) = char_dimensions(src_w, src_h, &config).unwrap();
                let frame = render_frame(grid, &config).unwrap();
                assert_eq!(frame.height(), rows as usize);
                assert_eq!(frame.width(), cols as usize);
                assert!(frame.rows().iter().all(|r| r.len() == width as usize));
            }
        }
    }
}

#[test]
fn test_frame_cells_match_mode() {
    let grid = gradient(8, 8);
    let full = RenderConfig {
        width: 4,
        cell_mode: CellMode::FullBlock('@'),
        ..RenderConfig::default()
    };
    let frame = render_frame(grid.clone(), &full).unwrap();
    assert!(frame
        .rows()
        .iter()
        .flatten()
        .all(|c| matches!(c, Cell::FullBlock { .. })));

    let half = RenderConfig {
        width: 4,
        ..RenderConfig::default()
    };
    let frame = render_frame(grid, &half).unwrap();
    assert!(frame
        .rows()
        .iter()
        .flatten()
        .all(|c| matches!(c, Cell::HalfBlock { .. })));
}

#[test]
fn test_half_block_top_sample_is_foreground() {
    // Top half white, bottom half black: at one character row the fg is bright
    let pixels = (0..20u32)
        .flat_map(|y| (0..10u32).map(move |_| if y < 10 { Rgb::WHITE } else { Rgb::BLACK }))
        .collect();
    let grid = PixelGrid::new(10, 20, pixels).unwrap();
    let config = RenderConfig {
        width: 10,
        cell_aspect: 4.0,
        quality: QualitySettings::NEUTRAL,
        ..RenderConfig::default()
    };
    let frame = render_frame(grid, &config).unwrap();
    assert_eq!(frame.height(), 5);
    match frame.rows()[0][5] {
        Cell::HalfBlock { fg, bg } => {
            assert_eq!(fg, Rgb::WHITE);
            assert_eq!(bg, Rgb::WHITE);
        }
        other => panic!("unexpected cell {:?}", other),
    }
    match frame.rows()[4][5] {
        Cell::HalfBlock { fg, bg } => {
            assert_eq!(fg, Rgb::BLACK);
            assert_eq!(bg, Rgb::BLACK);
        }
        other => panic!("unexpected cell {:?}", other),
    }
}

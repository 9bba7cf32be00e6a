use super::*;
use crate::paint::CellPaint;

fn widget() -> WidgetCore {
    WidgetCore::new(WidgetSettings::default())
}

fn widget_with_size(size: u32) -> WidgetCore {
    let mut core = widget();
    core.resize(&size.to_string()).expect("size should be valid");
    core
}

#[test]
fn create_yields_size_squared_cells() {
    for size in [0u32, 1, 4, 7, 99] {
        let core = widget_with_size(size);
        assert_eq!(core.size(), size);
        assert_eq!(core.cell_count(), (size * size) as usize);
    }
}

#[test]
fn cells_are_row_major_with_zero_darkness() {
    let core = widget_with_size(3);
    let cells = core.grid().cells();

    for (idx, cell) in cells.iter().enumerate() {
        let (row, col) = core.grid().coords(idx);
        assert_eq!((cell.row, cell.col), (row, col));
        assert_eq!(cell.darkness, 0.0);
    }
}

#[test]
fn validate_rejects_out_of_range_and_garbage() {
    assert_eq!(validate_size("-1"), Err(SizeError::Negative));
    assert_eq!(validate_size("-50"), Err(SizeError::Negative));
    assert_eq!(validate_size("100"), Err(SizeError::TooLarge));
    assert_eq!(validate_size("1000"), Err(SizeError::TooLarge));
    assert_eq!(validate_size("abc"), Err(SizeError::NotANumber));
    assert_eq!(validate_size(""), Err(SizeError::NotANumber));
    assert_eq!(validate_size("4.5"), Err(SizeError::NotANumber));

    assert_eq!(validate_size("0"), Ok(0));
    assert_eq!(validate_size("99"), Ok(99));
    assert_eq!(validate_size(" 16 "), Ok(16));
}

#[test]
fn failed_resize_leaves_grid_unchanged() {
    let mut core = widget_with_size(5);
    core.set_mode(crate::paint::PaintMode::Darken);
    core.paint(2, 2);

    for raw in ["-1", "100", "banana"] {
        assert!(core.resize(raw).is_err());
        assert_eq!(core.size(), 5);
        assert!((core.darkness(2, 2) - 0.1).abs() < 1e-6);
    }
}

#[test]
fn size_error_messages_are_user_facing() {
    assert_eq!(
        SizeError::Negative.message(),
        "Value of the grid size cannot be negative"
    );
    assert_eq!(
        SizeError::TooLarge.message(),
        "Value of the grid size cannot be larger than 99"
    );
    assert_eq!(
        SizeError::NotANumber.message(),
        "Value of the grid size must be a number"
    );
}

#[test]
fn reset_is_idempotent() {
    let mut core = widget_with_size(4);
    core.set_mode(crate::paint::PaintMode::Darken);
    core.paint(1, 1);
    core.paint(1, 1);

    core.reset();
    let after_once: Vec<f32> = core.grid().cells().iter().map(|c| c.darkness).collect();
    core.reset();
    let after_twice: Vec<f32> = core.grid().cells().iter().map(|c| c.darkness).collect();

    assert_eq!(after_once, after_twice);
    assert!(after_once.iter().all(|&d| d == 0.0));
}

#[test]
fn darken_is_monotone_and_saturates_at_one() {
    let mut core = widget_with_size(4);
    core.set_mode(crate::paint::PaintMode::Darken);

    let mut last = 0.0f32;
    for _ in 0..25 {
        let paint = core.paint(0, 0).expect("in bounds");
        let darkness = core.darkness(0, 0);
        assert!(darkness >= last);
        assert!(darkness <= 1.0);
        assert_eq!(paint, CellPaint::BlackAlpha(darkness));
        last = darkness;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn mode_selection_is_exclusive() {
    use crate::paint::PaintMode;

    let mut core = widget();
    // Nothing explicitly selected behaves as Default.
    assert!(core.is_mode_active(PaintMode::Default));

    for mode in [PaintMode::Darken, PaintMode::Rgb, PaintMode::Default, PaintMode::Rgb] {
        core.set_mode(mode);
        let active: Vec<PaintMode> = [PaintMode::Default, PaintMode::Darken, PaintMode::Rgb]
            .into_iter()
            .filter(|m| core.is_mode_active(*m))
            .collect();
        assert_eq!(active, vec![mode]);
    }
}

#[test]
fn paint_dispatches_to_the_active_mode_only() {
    use crate::paint::PaintMode;

    let mut core = widget_with_size(4);

    assert_eq!(core.paint(0, 0), Some(CellPaint::Black));

    core.set_mode(PaintMode::Darken);
    assert!(matches!(core.paint(0, 0), Some(CellPaint::BlackAlpha(_))));

    core.set_mode(PaintMode::Rgb);
    assert!(matches!(core.paint(0, 0), Some(CellPaint::Rgb(..))));

    core.set_mode(PaintMode::Default);
    assert_eq!(core.paint(0, 0), Some(CellPaint::Black));
}

#[test]
fn default_mode_does_not_track_darkness() {
    let mut core = widget_with_size(4);
    core.paint(2, 1);
    core.paint(2, 1);
    assert_eq!(core.darkness(2, 1), 0.0);
}

#[test]
fn rgb_channels_are_in_range_and_seed_deterministic() {
    use crate::paint::PaintMode;

    let mut a = widget_with_size(4);
    let mut b = widget_with_size(4);
    a.set_rng_seed(7);
    b.set_rng_seed(7);
    a.set_mode(PaintMode::Rgb);
    b.set_mode(PaintMode::Rgb);

    for _ in 0..64 {
        let pa = a.paint(0, 0).expect("in bounds");
        let pb = b.paint(0, 0).expect("in bounds");
        assert_eq!(pa, pb);
        match pa {
            CellPaint::Rgb(r, g, bl) => {
                assert!(r < 255 && g < 255 && bl < 255);
            }
            other => panic!("expected Rgb paint, got {:?}", other),
        }
    }
}

#[test]
fn rgb_mode_ignores_darkness() {
    use crate::paint::PaintMode;

    let mut core = widget_with_size(4);
    core.set_mode(PaintMode::Darken);
    core.paint(1, 1);

    core.set_mode(PaintMode::Rgb);
    core.paint(1, 1);
    // Rgb paints a fresh color but leaves the accumulator alone.
    assert!((core.darkness(1, 1) - 0.1).abs() < 1e-6);
}

#[test]
fn resize_discards_prior_paint_state() {
    let mut core = widget_with_size(4);
    core.set_mode(crate::paint::PaintMode::Darken);
    core.paint(0, 0);
    assert!(core.darkness(0, 0) > 0.0);

    core.resize("6").expect("valid size");
    assert_eq!(core.size(), 6);
    assert!(core.grid().cells().iter().all(|c| c.darkness == 0.0));
}

#[test]
fn mode_survives_resize() {
    use crate::paint::PaintMode;

    let mut core = widget_with_size(4);
    core.set_mode(PaintMode::Rgb);
    core.resize("8").expect("valid size");
    assert!(core.is_mode_active(PaintMode::Rgb));
}

#[test]
fn darkness_out_of_bounds_never_reads_a_neighbor() {
    let mut core = widget_with_size(4);
    core.set_mode(crate::paint::PaintMode::Darken);
    core.paint(1, 1);

    // col 5 on a 4-wide grid must not wrap row-major into cell (1,1).
    assert_eq!(core.darkness(0, 5), 0.0);
    assert_eq!(core.darkness(5, 0), 0.0);
    assert!(core.grid().cell(0, 5).is_none());
    assert!((core.darkness(1, 1) - 0.1).abs() < 1e-6);
}

#[test]
fn empty_grid_accessors_are_total() {
    let core = widget_with_size(0);
    // No cells to address or size; nothing here may panic or go infinite.
    assert_eq!(core.grid().coords(0), (0, 0));
    assert_eq!(core.cell_edge(), 0.0);
    assert_eq!(core.darkness(0, 0), 0.0);
}

#[test]
fn paint_out_of_bounds_is_none() {
    let mut core = widget_with_size(4);
    assert_eq!(core.paint(4, 0), None);
    assert_eq!(core.paint(0, 4), None);

    let mut empty = widget_with_size(0);
    assert_eq!(empty.paint(0, 0), None);
}

#[test]
fn cell_edge_splits_the_pixel_budget() {
    let core = widget_with_size(4);
    assert_eq!(core.cell_edge(), 200.0);

    // Fractional per-cell sizes are allowed, no rounding.
    let core = widget_with_size(3);
    assert!((core.cell_edge() - 800.0 / 3.0).abs() < 1e-9);
}

#[test]
fn end_to_end_default_scenario() {
    use crate::paint::PaintMode;

    // Startup: default size 4 -> 16 cells in 4 columns.
    let mut core = widget();
    assert_eq!(core.size(), 4);
    assert_eq!(core.cell_count(), 16);

    // Hover (2,1) under Default: opaque black, others unchanged.
    assert_eq!(core.paint(2, 1), Some(CellPaint::Black));
    assert!(core.grid().cells().iter().all(|c| c.darkness == 0.0));

    // Switch to Darken, hover the same cell 3 times.
    core.set_mode(PaintMode::Darken);
    let mut paint = None;
    for _ in 0..3 {
        paint = core.paint(2, 1);
    }
    let darkness = core.darkness(2, 1);
    assert!((darkness - 0.3).abs() < 1e-6);
    assert_eq!(paint, Some(CellPaint::BlackAlpha(darkness)));

    // Size "-1": exact message, grid stays 4x4.
    let err = core.resize("-1").unwrap_err();
    assert_eq!(err.message(), "Value of the grid size cannot be negative");
    assert_eq!(core.size(), 4);
    assert_eq!(core.cell_count(), 16);

    // Reset: every cell back to darkness 0.
    core.reset();
    assert!(core.grid().cells().iter().all(|c| c.darkness == 0.0));
}

#[test]
fn settings_json_roundtrip_and_defaults() {
    let settings = WidgetSettings::from_json(r#"{"pixel_budget": 640.0, "default_size": 8}"#)
        .expect("should parse");
    assert_eq!(settings.pixel_budget, 640.0);
    assert_eq!(settings.default_size, 8);
    assert_eq!(settings.error_display_ms, 3000);

    let mut core = widget();
    core.load_settings_json(&settings.to_json()).expect("should apply");
    assert_eq!(core.size(), 8);
    assert_eq!(core.cell_edge(), 80.0);
}

#[test]
fn load_settings_rejects_malformed_json() {
    let mut core = widget();
    assert!(core.load_settings_json("not json").is_err());
    // State untouched on error.
    assert_eq!(core.size(), 4);
}

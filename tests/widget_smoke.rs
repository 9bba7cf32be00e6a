use sketchgrid_engine::{CellPaint, PaintMode, WidgetCore, WidgetSettings};

#[test]
fn widget_smoke_paint_resize_reset() {
    let mut core = WidgetCore::new(WidgetSettings::default());
    assert_eq!(core.size(), 4);
    assert_eq!(core.cell_count(), 16);

    assert_eq!(core.paint(0, 0), Some(CellPaint::Black));

    core.set_mode(PaintMode::Darken);
    core.paint(3, 3);
    assert!(core.darkness(3, 3) > 0.0);

    core.resize("10").expect("10 is a valid size");
    assert_eq!(core.cell_count(), 100);
    assert!(core.is_mode_active(PaintMode::Darken));
    assert_eq!(core.darkness(3, 3), 0.0);

    core.reset();
    assert!(core.grid().cells().iter().all(|c| c.darkness == 0.0));
}

#[test]
fn widget_smoke_rejects_bad_sizes() {
    let mut core = WidgetCore::new(WidgetSettings::default());

    for raw in ["-3", "105", "wide"] {
        let err = core.resize(raw).unwrap_err();
        assert!(!err.message().is_empty());
        assert_eq!(core.size(), 4);
    }
}

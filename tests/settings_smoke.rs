use sketchgrid_engine::{WidgetCore, WidgetSettings};

#[test]
fn settings_smoke_parses_and_has_core_invariants() {
    let json = r#"{
        "pixel_budget": 600.0,
        "default_size": 6,
        "error_display_ms": 1500
    }"#;

    let settings = WidgetSettings::from_json(json).expect("settings json should parse");
    assert_eq!(settings.pixel_budget, 600.0);
    assert_eq!(settings.default_size, 6);
    assert_eq!(settings.error_display_ms, 1500);

    let core = WidgetCore::new(settings);
    assert_eq!(core.size(), 6);
    assert_eq!(core.cell_count(), 36);
    assert_eq!(core.cell_edge(), 100.0);
}

#[test]
fn settings_smoke_missing_fields_fall_back_to_defaults() {
    let settings = WidgetSettings::from_json("{}").expect("empty object should parse");
    assert_eq!(settings.pixel_budget, 800.0);
    assert_eq!(settings.default_size, 4);
    assert_eq!(settings.error_display_ms, 3000);
}

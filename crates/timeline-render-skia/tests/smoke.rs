// File: crates/timeline-render-skia/tests/smoke.rs
// Purpose: End-to-end render of the sample dataset to a PNG file and in-memory bytes.

use std::path::PathBuf;

use timeline_core::{load_csv, AppState, TimelineConfig};
use timeline_render_skia::{render_to_png, render_to_png_bytes};

#[test]
fn render_sample_png() {
    let csv = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/disaster_costs.csv");
    let records = load_csv(&csv).expect("sample csv loads");
    let app = AppState::new(TimelineConfig::default(), records);
    let frame = app.frame();

    let out = PathBuf::from("target/test_out/timeline.png");
    render_to_png(&frame, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&frame).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 900));
}

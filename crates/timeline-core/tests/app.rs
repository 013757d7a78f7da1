// File: crates/timeline-core/tests/app.rs
// Purpose: Legend filtering, click/hover event handling and frame composition.

mod common;

use common::{mixed, sample_csv_path};
use timeline_core::app::{LEGEND_LAYER, TOOLTIP_LAYER};
use timeline_core::{
    filter_records, load_csv, AppState, Category, Event, Point, Primitive, Redraw, TimelineConfig, Tooltip,
};

fn center(r: timeline_core::RectF32) -> Point {
    Point::new((r.left + r.right) * 0.5, (r.top + r.bottom) * 0.5)
}

#[test]
fn filtering_keeps_only_active_categories() {
    let all = mixed();
    let picked = filter_records(&all, &[Category::TropicalCyclone, Category::Flooding]);
    assert_eq!(picked.len(), 3);
    assert!(picked
        .iter()
        .all(|r| matches!(r.category, Category::TropicalCyclone | Category::Flooding)));
    // Input order preserved.
    let names: Vec<&str> = picked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Hurricane A", "River Floods", "Hurricane B"]);
}

#[test]
fn filtering_is_idempotent_and_order_independent() {
    let all = mixed();
    let ab = filter_records(&all, &[Category::SevereStorm, Category::DroughtWildfire]);
    let ba = filter_records(&all, &[Category::DroughtWildfire, Category::SevereStorm]);
    assert_eq!(ab, ba);
    let again = filter_records(&ab, &[Category::SevereStorm, Category::DroughtWildfire]);
    assert_eq!(again, ab);
    assert!(filter_records(&all, &[]).is_empty());
}

#[test]
fn toggling_twice_restores_the_rendered_dataset() {
    let all = load_csv(sample_csv_path()).expect("sample");
    let mut app = AppState::new(TimelineConfig::default(), all.clone());
    let original = app.view().scene().clone();

    app.toggle(Category::TropicalCyclone);
    assert!(!app.legend().is_active(Category::TropicalCyclone));
    assert!(app.view().data().iter().all(|r| r.category != Category::TropicalCyclone));
    assert!(app.view().scene().glyphs.len() < original.glyphs.len());

    app.toggle(Category::TropicalCyclone);
    assert_eq!(app.view().data(), all.as_slice());
    assert_eq!(app.view().scene(), &original);
}

#[test]
fn hiding_everything_renders_no_glyphs() {
    let mut app = AppState::new(TimelineConfig::default(), mixed());
    app.hide(&Category::ALL);
    assert!(app.legend().active_categories().is_empty());
    assert!(app.view().data().is_empty());
    assert!(app.view().scene().glyphs.is_empty());
    // Axes are still drawn.
    assert_eq!(app.view().year_axis().ticks.len(), 38);
}

#[test]
fn clicking_a_legend_entry_toggles_its_category() {
    let mut app = AppState::new(TimelineConfig::default(), mixed());
    let flooding = app.legend().entries()[Category::Flooding.index()].bounds;

    assert_eq!(app.handle(Event::Click(center(flooding))), Redraw::Needed);
    assert!(!app.legend().is_active(Category::Flooding));
    assert_eq!(app.view().data().len(), 5);

    assert_eq!(app.handle(Event::Click(Point::new(400.0, 500.0))), Redraw::Idle);
    assert_eq!(app.view().data().len(), 5);

    assert_eq!(app.handle(Event::Click(center(flooding))), Redraw::Needed);
    assert_eq!(app.view().data().len(), 6);
}

#[test]
fn clicks_are_ignored_without_a_legend() {
    let mut app = AppState::new(TimelineConfig::default().with_legend(false), mixed());
    let target = center(app.legend().entries()[0].bounds);
    assert_eq!(app.handle(Event::Click(target)), Redraw::Idle);
    assert!(app.frame().layer(LEGEND_LAYER).is_none());
}

#[test]
fn hover_shows_and_hides_the_tooltip() {
    let mut app = AppState::new(TimelineConfig::default(), mixed());
    let glyph = app.view().scene().glyphs[0].clone();
    let over = glyph.shape.center.offset(0.0, -glyph.shape.radius * 0.5);

    let expected = app.view().scene().glyph_at(over).expect("glyph under pointer").name.clone();

    assert_eq!(app.handle(Event::PointerMove(over)), Redraw::Needed);
    let tip = app.tooltip().expect("tooltip shown").clone();
    assert_eq!(tip.title, expected);
    assert_eq!(app.handle(Event::PointerMove(over)), Redraw::Idle);

    let frame = app.frame();
    assert!(frame.layer(TOOLTIP_LAYER).is_some());
    assert!(frame.layer(LEGEND_LAYER).is_some());

    assert_eq!(app.handle(Event::PointerLeave), Redraw::Needed);
    assert!(app.tooltip().is_none());
    assert_eq!(app.handle(Event::PointerLeave), Redraw::Idle);
    assert!(app.frame().layer(TOOLTIP_LAYER).is_none());
}

#[test]
fn toggling_clears_a_stale_tooltip() {
    let mut app = AppState::new(TimelineConfig::default(), mixed());
    let glyph = app.view().scene().glyphs[0].clone();
    let _ = app.handle(Event::PointerMove(glyph.shape.center.offset(0.0, -1.0)));
    assert!(app.tooltip().is_some());
    let _ = app.handle(Event::ToggleCategory(Category::SevereStorm));
    assert!(app.tooltip().is_none());
}

#[test]
fn inactive_legend_entries_are_dimmed() {
    let mut app = AppState::new(TimelineConfig::default(), mixed());
    app.toggle(Category::Flooding);
    let theme = app.view().config().theme;
    let items = app.legend().primitives(&theme, app.view().colors());
    assert_eq!(items.len(), Category::ALL.len() * 2);

    for (i, category) in Category::ALL.into_iter().enumerate() {
        let base = app.view().colors().color(category);
        let (swatch, text) = match (&items[i * 2], &items[i * 2 + 1]) {
            (Primitive::Rect { fill: Some(fill), .. }, Primitive::Text(label)) => (*fill, label.fill),
            other => panic!("unexpected legend items {other:?}"),
        };
        if category == Category::Flooding {
            assert_eq!(swatch, base.with_opacity(0.25));
            assert_eq!(text, theme.legend_inactive);
        } else {
            assert_eq!(swatch, base);
            assert_eq!(text, theme.text);
        }
    }
}

#[test]
fn tooltip_is_kept_inside_the_canvas() {
    let config = TimelineConfig::default();
    let tip = Tooltip {
        anchor: Point::new(790.0, 890.0),
        title: "Hurricane Harvey".to_string(),
        body: "$125 billion".to_string(),
    };
    let (w, h) = tip.size();
    let items = tip.primitives(&config);
    let Primitive::Rect { rect, .. } = &items[0] else { panic!("tooltip box first") };
    assert!((rect.right - config.container_width as f32).abs() < 1e-3);
    assert!((rect.bottom - config.container_height as f32).abs() < 1e-3);
    assert!((rect.width() - w).abs() < 1e-4 && (rect.height() - h).abs() < 1e-4);

    let near_origin = Tooltip { anchor: Point::new(-40.0, -10.0), ..tip };
    let Primitive::Rect { rect, .. } = &near_origin.primitives(&config)[0] else { panic!("tooltip box first") };
    assert_eq!((rect.left, rect.top), (0.0, 0.0));
}

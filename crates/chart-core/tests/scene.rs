// File: crates/chart-core/tests/scene.rs
// Purpose: Layout derivation: drawable width, grid, gutter labels and time ticks.

use chart_core::axis::StatusLevel;
use chart_core::ticks::INVALID_TIME_LABEL;
use chart_core::{ChartError, ChartSize, Reading, Scene};

fn series(n: usize) -> Vec<Reading> {
    (0..n)
        .map(|i| Reading::from_raw(format!("2024-03-01T14:{:02}:{:02}.000Z", i / 30, (i * 2) % 60), "medium"))
        .collect()
}

#[test]
fn total_width_is_max_of_config_and_slots() {
    let size = ChartSize::new(900, 200).unwrap();
    assert_eq!(Scene::build(&[], size).total_width, 900.0);
    assert_eq!(Scene::build(&series(7), size).total_width, 900.0);
    assert_eq!(Scene::build(&series(10), size).total_width, 1200.0);
    assert_eq!(Scene::build(&series(13), size).total_width, 1560.0);
}

#[test]
fn grid_spans_drawable_width_at_status_offsets() {
    let scene = Scene::build(&series(12), ChartSize::new(900, 200).unwrap());
    let ys: Vec<f64> = scene.grid.iter().map(|g| g.segment.from.y).collect();
    assert_eq!(ys, vec![20.0, 100.0, 180.0]);
    for g in &scene.grid {
        assert_eq!(g.segment.from.x, 0.0);
        assert_eq!(g.segment.to.x, 1440.0);
        assert_eq!(g.segment.from.y, g.segment.to.y);
    }
}

#[test]
fn gutter_lists_levels_top_down() {
    let scene = Scene::empty(ChartSize::new(900, 300).unwrap());
    let texts: Vec<&str> = scene.gutter.iter().map(|l| l.text()).collect();
    assert_eq!(texts, vec!["High", "Medium", "Low"]);
    assert_eq!(scene.gutter[0].level, StatusLevel::High);
    assert_eq!(scene.gutter[2].y, 270.0);
    assert!(scene.gutter.iter().all(|l| l.x == 10.0));
}

#[test]
fn one_tick_per_reading_even_when_not_plotted() {
    let data = vec![
        Reading::from_raw("2024-03-01T14:05:09Z", "high"),
        Reading::from_raw("2024-03-01T14:05:11Z", "bogus"),
        Reading::from_raw("2024-03-01T14:05:13Z", ""),
        Reading::from_raw("not a time", "low"),
    ];
    let scene = Scene::build(&data, ChartSize::new(900, 200).unwrap());
    assert_eq!(scene.ticks.len(), 4);
    let xs: Vec<f64> = scene.ticks.iter().map(|t| t.x).collect();
    assert_eq!(xs, vec![20.0, 140.0, 260.0, 380.0]);
    assert!(scene.ticks.iter().all(|t| t.y == 220.0));
    assert_eq!(scene.ticks[3].label, INVALID_TIME_LABEL);
    // "", is skipped by the path; three labelled readings remain
    assert_eq!(scene.path.segment_count(), 2);
}

#[test]
fn svg_height_leaves_room_for_time_labels() {
    let scene = Scene::empty(ChartSize::new(900, 200).unwrap());
    assert_eq!(scene.svg_height, 225.0);
    assert_eq!(scene.size.widget_height(), 240.0);
    assert_eq!(scene.size.client_width(), 820.0);
}

#[test]
fn size_rejects_degenerate_dimensions() {
    assert!(matches!(ChartSize::new(0, 200), Err(ChartError::InvalidSize { .. })));
    assert!(matches!(ChartSize::new(900, 0), Err(ChartError::InvalidSize { .. })));
    assert!(matches!(ChartSize::new(80, 200), Err(ChartError::InvalidSize { .. })));
    assert!(ChartSize::new(81, 1).is_ok());
}

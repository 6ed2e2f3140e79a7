use scrollpager_core::geometry::{Point, Rect, Size};
use scrollpager_core::{
    can_scroll, can_scroll_toward, plan_page, Axis, ChildSnapshot, ContainerSnapshot,
    ContainerStyle, DirectionToken, PagingConfig, ScrollRequest, Sign,
};

/// Horizontal snapping strip: viewport 300, four 300-wide start-aligned children
fn strip(total: f64) -> ContainerSnapshot {
    ContainerSnapshot {
        scroll: Point::ZERO,
        viewport: Size::new(300.0, 100.0),
        content: Size::new(total, 100.0),
        style: ContainerStyle {
            snap_type: "x mandatory".to_string(),
            ..Default::default()
        },
        children: [0.0, 300.0, 600.0, 900.0]
            .into_iter()
            .map(|x| ChildSnapshot::new("start", Rect::from_xywh(x, 0.0, 300.0, 100.0)))
            .collect(),
    }
}

fn destination(request: ScrollRequest) -> Option<f64> {
    match request {
        ScrollRequest::To { axis: Axis::X, offset, .. } => Some(offset),
        _ => None,
    }
}

#[test]
fn pages_through_every_snap_point_then_stops() {
    let config = PagingConfig::default();
    let mut container = strip(1200.0);

    let mut visited = Vec::new();
    while let Some(offset) = destination(plan_page(Some(&container), DirectionToken::Right, &config)) {
        visited.push(offset);
        container.scroll = Point::new(offset, 0.0);
    }

    assert_eq!(visited, vec![300.0, 600.0, 900.0]);
    assert_eq!(container.scroll.x, 900.0);
    assert!(plan_page(Some(&container), DirectionToken::Right, &config).is_none());

    // Flush with the end: 900 + 300 == 1200
    assert!(!can_scroll(Some(&container), Axis::X, Sign::Positive));
    assert!(!can_scroll_toward(Some(&container), DirectionToken::Right));
    assert!(can_scroll_toward(Some(&container), DirectionToken::Left));
}

#[test]
fn pages_back_to_the_start() {
    let config = PagingConfig::default();
    let mut container = strip(1200.0);
    container.scroll = Point::new(900.0, 0.0);

    let mut visited = Vec::new();
    while let Some(offset) = destination(plan_page(Some(&container), DirectionToken::Left, &config)) {
        visited.push(offset);
        container.scroll = Point::new(offset, 0.0);
    }

    assert_eq!(visited, vec![600.0, 300.0, 0.0]);
    assert!(!can_scroll_toward(Some(&container), DirectionToken::Left));
}

#[test]
fn unclamped_snap_points_past_the_end_stay_reachable() {
    let config = PagingConfig {
        clamp_candidates: false,
        ..Default::default()
    };
    let mut container = strip(1000.0);
    container.scroll = Point::new(600.0, 0.0);

    let request = plan_page(Some(&container), DirectionToken::Right, &config);
    assert_eq!(destination(request), Some(900.0));
    // Can still scroll: 600 + 300 < 1000
    assert!(can_scroll_toward(Some(&container), DirectionToken::Right));
}

#[test]
fn clamped_snap_points_stop_at_max_offset() {
    let config = PagingConfig::default();
    let mut container = strip(1000.0);
    container.scroll = Point::new(600.0, 0.0);

    let request = plan_page(Some(&container), DirectionToken::Right, &config);
    assert_eq!(destination(request), Some(700.0));
}

#[test]
fn wide_items_never_stall() {
    let config = PagingConfig::default();
    let container = ContainerSnapshot {
        viewport: Size::new(300.0, 100.0),
        content: Size::new(3000.0, 100.0),
        style: ContainerStyle {
            snap_type: "both mandatory".to_string(),
            ..Default::default()
        },
        children: vec![
            ChildSnapshot::new("start", Rect::from_xywh(0.0, 0.0, 1000.0, 100.0)),
            ChildSnapshot::new("start", Rect::from_xywh(1000.0, 0.0, 1000.0, 100.0)),
            ChildSnapshot::new("start", Rect::from_xywh(2000.0, 0.0, 1000.0, 100.0)),
        ],
        ..Default::default()
    };

    let request = plan_page(Some(&container), DirectionToken::Right, &config);
    assert_eq!(destination(request), Some(1000.0));
}

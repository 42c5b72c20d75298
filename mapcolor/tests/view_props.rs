use mapcolor::geometry::polygon::BBox;
use mapcolor::{Vec2, ViewConfig, ViewTransform, Viewport};
use proptest::prelude::*;

fn wide_limits() -> ViewConfig {
    ViewConfig {
        min_zoom: 1e-3,
        max_zoom: 1e3,
        ..ViewConfig::desktop()
    }
}

fn close(a: Vec2, b: Vec2, scale: f64) -> bool {
    let tol = 1e-9 * scale.max(1.0);
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
}

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4f64
}

fn point() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

// Reaches an arbitrary zoom/pan through the public operations.
fn transform(zoom: f64, pan: Vec2) -> ViewTransform {
    let mut v = ViewTransform::new(&wide_limits());
    assert!(v.zoom_by(zoom, None));
    assert!(v.pan_by(pan));
    v
}

proptest! {
    #[test]
    fn world_screen_round_trip(zoom in 0.01f64..100.0, pan in point(), p in point()) {
        let v = transform(zoom, pan);
        let back = v.screen_to_world(v.world_to_screen(p));
        prop_assert!(close(back, p, 1e6), "{:?} -> {:?}", p, back);
        let fwd = v.world_to_screen(v.screen_to_world(p));
        prop_assert!(close(fwd, p, 1e6));
    }

    #[test]
    fn zoom_preserves_world_under_anchor(
        zoom in 0.01f64..100.0,
        pan in point(),
        factor in 0.05f64..20.0,
        anchor in point(),
    ) {
        let mut v = transform(zoom, pan);
        let before = v.screen_to_world(anchor);
        prop_assert!(v.zoom_by(factor, Some(anchor)));
        let after = v.screen_to_world(anchor);
        prop_assert!(close(before, after, 1e8), "{:?} vs {:?}", before, after);
        let (lo, hi) = v.zoom_limits();
        prop_assert!(v.zoom() >= lo && v.zoom() <= hi);
    }

    #[test]
    fn non_positive_factor_is_a_no_op(factor in -10.0f64..=0.0, anchor in point()) {
        let mut v = transform(2.0, Vec2::new(5.0, 5.0));
        let before = v.clone();
        prop_assert!(!v.zoom_by(factor, Some(anchor)));
        prop_assert_eq!(v, before);
    }

    #[test]
    fn fit_centers_any_box(
        x in coord(), y in coord(),
        w in 0.0f64..5.0e3, h in 0.0f64..5.0e3,
        vw in 1.0f64..4000.0, vh in 1.0f64..4000.0,
    ) {
        let mut v = ViewTransform::new(&wide_limits());
        let b = BBox { min_x: x, min_y: y, max_x: x + w, max_y: y + h };
        v.fit_to_content(Some(b), Viewport::new(vw, vh), 0.2);
        let c = v.world_to_screen(b.center());
        prop_assert!((c.x - vw * 0.5).abs() < 1e-6 * (1.0 + v.zoom() * 1e4));
        prop_assert!((c.y - vh * 0.5).abs() < 1e-6 * (1.0 + v.zoom() * 1e4));
        let (lo, hi) = v.zoom_limits();
        prop_assert!(v.zoom() >= lo && v.zoom() <= hi);
    }
}

#[test]
fn zoom_by_two_at_fifty() {
    let mut v = ViewTransform::new(&ViewConfig::desktop());
    assert_eq!(v.zoom(), 1.0);
    assert_eq!(v.pan(), Vec2::ZERO);
    let anchor = Vec2::new(50.0, 50.0);
    let before = v.screen_to_world(anchor);
    v.zoom_by(2.0, Some(anchor));
    assert_eq!(v.zoom(), 2.0);
    assert!(close(v.screen_to_world(anchor), before, 1.0));
}

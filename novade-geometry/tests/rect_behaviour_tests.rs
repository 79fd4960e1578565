// novade-geometry/tests/rect_behaviour_tests.rs

use novade_geometry::{rect_equal, zero_rect, Point, Rectangle, Size};
use rstest::rstest;

// A mix of normalized, flipped and fractional rectangles.
fn sample_rects() -> Vec<Rectangle> {
    vec![
        Rectangle::new(0.0, 0.0, 10.0, 10.0),
        Rectangle::new(10.0, 10.0, -10.0, -10.0),
        Rectangle::new(-3.5, 2.25, 7.0, -4.5),
        Rectangle::new(0.5, 1.9, 9.3, 8.7),
        Rectangle::new(100.0, -50.0, 0.0, 25.0),
    ]
}

fn sample_points() -> Vec<Point> {
    vec![
        Point::new(-10.0, -10.0),
        Point::new(150.0, 150.0),
        Point::new(50.0, 150.0),
        Point::new(3.0, 4.0),
        Point::new(-200.0, 7.5),
    ]
}

#[test]
fn initialization_keeps_values_verbatim() {
    let r = Rectangle::new(10.0, 10.0, -10.0, -10.0);
    assert_eq!(r.origin, Point::new(10.0, 10.0));
    assert_eq!(r.size, Size::new(-10.0, -10.0));
    assert_eq!(r.size.width, -10.0);

    let s = Rectangle::from_rect(&r);
    assert!(rect_equal(Some(&s), Some(&r)));
}

#[test]
fn normalization_is_idempotent() {
    for r in sample_rects() {
        let n = r.normalize();
        assert!(n.is_normalized());
        assert_eq!(n.normalize().origin, n.origin);
        assert_eq!(n.normalize().size, n.size);
        assert_eq!(n, r);
    }
}

#[test]
fn equality_against_absent_rectangles() {
    for r in sample_rects() {
        assert!(rect_equal(Some(&r), Some(&r)));
        assert!(!rect_equal(Some(&r), None));
        assert!(!rect_equal(None, Some(&r)));
    }
    assert!(!rect_equal(Some(&Rectangle::new(0.0, 0.0, 10.0, 10.0)), Some(&Rectangle::new(1.0, 1.0, 9.0, 9.0))));
}

#[test]
fn rectangles_contain_their_corners_and_center() {
    for r in sample_rects() {
        for p in [r.top_left(), r.top_right(), r.bottom_left(), r.bottom_right(), r.center()] {
            assert!(r.contains_point(&p), "{} should contain {}", r, p);
        }
        assert!(r.contains_rect(&r));
    }
}

#[rstest]
#[case(Point::new(-1.0, 11.0))]
#[case(Point::new(-0.5, 5.0))]
#[case(Point::new(5.0, 10.5))]
fn points_outside_are_not_contained(#[case] p: Point) {
    assert!(!Rectangle::new(0.0, 0.0, 10.0, 10.0).contains_point(&p));
}

#[test]
fn intersection_and_failure() {
    let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let s = Rectangle::new(5.0, 5.0, 15.0, 15.0);
    let q = Rectangle::new(11.0, 11.0, 2.0, 2.0);

    let (i, hit) = r.intersect(&s);
    assert!(hit);
    assert_eq!(i.origin, Point::new(5.0, 5.0));
    assert_eq!(i.size, Size::new(5.0, 5.0));

    let (j, hit) = i.intersect(&q);
    assert!(!hit);
    assert!(rect_equal(Some(&j), Some(zero_rect())));
}

#[test]
fn intersection_flag_matches_option_form() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            let (_, hit) = a.intersect(b);
            assert_eq!(a.intersection(b).is_some(), hit);
            assert_eq!(a.intersection(b), b.intersection(a));
            if let Some(i) = a.intersection(b) {
                assert!(a.contains_rect(&i) && b.contains_rect(&i));
            }
        }
    }
}

#[test]
fn union_contains_both_inputs() {
    let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let s = Rectangle::new(5.0, 5.0, 15.0, 15.0);
    let u = r.union(&s);
    assert_eq!(u.origin, r.origin);
    assert_eq!(u.size, Size::new(20.0, 20.0));

    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            let u = a.union(b);
            assert!(u.contains_rect(a) && u.contains_rect(b));
        }
    }
}

#[test]
fn offsets_move_origin_and_keep_size() {
    for mut r in sample_rects() {
        let before = r;
        r.offset_in_place(5.0, -2.5);
        assert_eq!(r.origin, Point::new(before.origin.x + 5.0, before.origin.y - 2.5));
        assert_eq!(r.size.width, before.size.width);
        assert_eq!(r.size.height, before.size.height);
    }
}

#[test]
fn insets() {
    let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    r.inset_in_place(2.0, 2.0);
    assert_eq!(r.origin, Point::new(2.0, 2.0));
    assert_eq!(r.size, Size::new(6.0, 6.0));

    r.inset_in_place(2.0, -2.0);
    assert!((r.origin.y - 0.0).abs() < 0.0001);
    assert!((r.size.width - 2.0).abs() < 0.0001);
    assert!((r.size.height - 10.0).abs() < 0.0001);
}

#[test]
fn rounds_to_nearest_integer() {
    let mut r = Rectangle::new(0.5, 1.9, 9.3, 8.7);
    let s = Rectangle::new(0.0, 1.0, 10.0, 9.0);

    r.round_to_pixel_in_place();
    assert!(s.contains_rect(&r));
    assert_eq!(r, s);
    assert_eq!(r.round_to_pixel(), s);
}

#[test]
fn round_extents_always_contains_input() {
    for r in sample_rects() {
        let e = r.round_extents();
        assert!(e.contains_rect(&r), "{} should contain {}", e, r);
        assert_eq!(e.round_extents(), e);
    }
}

#[test]
fn expands() {
    let r = Rectangle::new(0.0, 0.0, 100.0, 100.0);

    let p = Point::new(-10.0, -10.0);
    let check = r.expand(&p);
    assert_eq!(check.origin, p);
    assert_eq!(check.size, Size::new(110.0, 110.0));
    assert!(check.contains_rect(&r));

    let check = r.expand(&Point::new(150.0, 150.0));
    assert_eq!(check.origin, r.origin);
    assert_eq!(check.size, Size::new(150.0, 150.0));
    assert!(check.contains_rect(&r));

    let p = Point::new(50.0, 150.0);
    let check = r.expand(&p);
    assert_eq!(check.origin, r.origin);
    assert!((check.size.width - r.size.width).abs() < 0.0001);
    assert!((check.size.height - p.y).abs() < 0.0001);
    assert!(check.contains_rect(&r));
}

#[test]
fn expand_contains_rect_and_point() {
    for r in sample_rects() {
        for p in sample_points() {
            let e = r.expand(&p);
            assert!(e.contains_rect(&r), "{} should contain {}", e, r);
            assert!(e.contains_point(&p), "{} should contain {}", e, p);
        }
    }
}

#[test]
fn interpolates() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let b = Rectangle::new(10.0, 5.0, 30.0, 20.0);

    assert!(rect_equal(Some(&a), Some(&a.interpolate(&b, 0.0))));
    assert!(rect_equal(Some(&b), Some(&a.interpolate(&b, 1.0))));

    let t = 0.25f32;
    let c = Rectangle::new(
        a.origin.x + (b.origin.x - a.origin.x) * t,
        a.origin.y + (b.origin.y - a.origin.y) * t,
        a.size.width + (b.size.width - a.size.width) * t,
        a.size.height + (b.size.height - a.size.height) * t,
    );
    assert!(rect_equal(Some(&c), Some(&a.interpolate(&b, t))));
}

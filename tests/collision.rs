use dragons_vs_warden::systems::collision::{clamp_to_arena, collide, in_arena, Rect};
use glam::Vec2;
use speculoos::prelude::*;

#[test]
fn test_collide_when_closer_than_radii_sum() {
    assert_that(&collide(Vec2::new(0.0, 0.0), 5.0, Vec2::new(9.0, 0.0), 5.0)).is_true();
}

#[test]
fn test_collide_false_when_touching_exactly() {
    assert_that(&collide(Vec2::new(0.0, 0.0), 5.0, Vec2::new(10.0, 0.0), 5.0)).is_false();
    assert_that(&collide(Vec2::new(0.0, 0.0), 3.0, Vec2::new(3.0, 4.0), 2.0)).is_false();
}

#[test]
fn test_collide_false_when_apart() {
    assert_that(&collide(Vec2::new(100.0, 100.0), 8.0, Vec2::new(200.0, 50.0), 25.0)).is_false();
}

#[test]
fn test_collide_is_symmetric() {
    let cases = [
        (Vec2::new(0.0, 0.0), 8.0, Vec2::new(20.0, 15.0), 25.0),
        (Vec2::new(-3.0, 7.5), 1.0, Vec2::new(40.0, -2.0), 4.0),
        (Vec2::new(500.0, 350.0), 15.0, Vec2::new(510.0, 360.0), 60.0),
        (Vec2::new(1.0, 1.0), 0.5, Vec2::new(2.0, 1.0), 0.5),
    ];

    for (a, ra, b, rb) in cases {
        assert_eq!(collide(a, ra, b, rb), collide(b, rb, a, ra), "asymmetric for {a} / {b}");
    }
}

#[test]
fn test_rect_overlap_is_strict() {
    let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    let touching = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
    let overlapping = Rect::new(Vec2::new(9.0, 9.0), Vec2::new(10.0, 10.0));

    assert_that(&a.overlaps(&touching)).is_false();
    assert_that(&a.overlaps(&overlapping)).is_true();
    assert_that(&overlapping.overlaps(&a)).is_true();
}

#[test]
fn test_rect_centered() {
    let rect = Rect::centered(Vec2::new(500.0, 350.0), Vec2::new(80.0, 120.0));
    assert_that(&rect.pos).is_equal_to(Vec2::new(460.0, 290.0));
    assert_that(&rect.center()).is_equal_to(Vec2::new(500.0, 350.0));
}

#[test]
fn test_in_arena_includes_edges() {
    assert_that(&in_arena(Vec2::new(0.0, 0.0))).is_true();
    assert_that(&in_arena(Vec2::new(1000.0, 700.0))).is_true();
    assert_that(&in_arena(Vec2::new(-0.1, 10.0))).is_false();
    assert_that(&in_arena(Vec2::new(10.0, 700.5))).is_false();
}

#[test]
fn test_clamp_to_arena_keeps_rect_inside() {
    let size = Vec2::new(80.0, 70.0);
    assert_that(&clamp_to_arena(Vec2::new(-20.0, 900.0), size)).is_equal_to(Vec2::new(0.0, 630.0));
    assert_that(&clamp_to_arena(Vec2::new(950.0, -5.0), size)).is_equal_to(Vec2::new(920.0, 0.0));
}

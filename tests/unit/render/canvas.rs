use super::*;
use crate::render::quality::RenderHints;
use kurbo::{Rect, Shape};

fn rect_path(r: Rect) -> BezPath {
    r.to_path(0.1)
}

#[test]
fn zero_sized_canvas_is_internal_error() {
    let err = Canvas::allocate(0, 10, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::UNSET)
        .err()
        .unwrap();
    assert!(matches!(err, CageError::Internal(_)));
}

#[test]
fn oversized_canvas_is_internal_error() {
    let err = Canvas::allocate(70_000, 10, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::UNSET)
        .err()
        .unwrap();
    assert!(matches!(err, CageError::Internal(_)));
}

#[test]
fn untouched_canvas_is_background() {
    let bg = Rgba8::rgb(10, 200, 30);
    let canvas = Canvas::allocate(8, 4, bg, Rgba8::BLACK, &RenderHints::BEST).unwrap();
    let out = canvas.finish().unwrap();
    assert_eq!(out.dimensions(), (8, 4));
    assert!(out.pixels().all(|p| p.0 == [10, 200, 30]));
}

#[test]
fn filled_rect_paints_foreground_inside() {
    let mut canvas =
        Canvas::allocate(16, 16, Rgba8::WHITE, Rgba8::rgb(200, 0, 0), &RenderHints::BEST)
            .unwrap();
    canvas.fill_path(&rect_path(Rect::new(4.0, 4.0, 12.0, 12.0)), Affine::IDENTITY);
    let out = canvas.finish().unwrap();
    assert_eq!(out.get_pixel(8, 8).0, [200, 0, 0]);
    assert_eq!(out.get_pixel(1, 1).0, [255, 255, 255]);
}

#[test]
fn transform_moves_the_fill() {
    let mut canvas =
        Canvas::allocate(16, 16, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::UNSET).unwrap();
    canvas.fill_path(
        &rect_path(Rect::new(0.0, 0.0, 2.0, 2.0)),
        Affine::translate((10.0, 10.0)),
    );
    let out = canvas.finish().unwrap();
    assert_eq!(out.get_pixel(11, 11).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(1, 1).0, [255, 255, 255]);
}

#[test]
fn aliased_canvas_has_no_partial_coverage() {
    let path = rect_path(Rect::new(2.5, 2.5, 9.5, 9.5));

    let mut smooth =
        Canvas::allocate(12, 12, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::BEST).unwrap();
    smooth.fill_path(&path, Affine::IDENTITY);
    let smooth = smooth.finish().unwrap();
    assert!(smooth.pixels().any(|p| p.0[0] != 0 && p.0[0] != 255));

    let mut aliased =
        Canvas::allocate(12, 12, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::FASTEST).unwrap();
    aliased.fill_path(&path, Affine::IDENTITY);
    let aliased = aliased.finish().unwrap();
    assert!(aliased.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    assert_eq!(aliased.get_pixel(6, 6).0, [0, 0, 0]);
}

#[test]
fn stroke_leaves_interior_untouched() {
    let mut canvas =
        Canvas::allocate(20, 20, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::UNSET).unwrap();
    canvas.stroke_path(&rect_path(Rect::new(3.0, 3.0, 17.0, 17.0)), Affine::IDENTITY);
    let out = canvas.finish().unwrap();
    assert_eq!(out.get_pixel(10, 10).0, [255, 255, 255]);
    assert_ne!(out.get_pixel(3, 10).0, [255, 255, 255]);
}

#[test]
fn over_opaque_respects_alpha() {
    assert_eq!(over_opaque([1, 2, 3], [0, 0, 0, 0]), [1, 2, 3]);
    assert_eq!(over_opaque([1, 2, 3], [9, 8, 7, 255]), [9, 8, 7]);
    assert_eq!(over_opaque([255, 255, 255], [0, 0, 0, 128]), [127, 127, 127]);
}

#[test]
fn snap_coverage_thresholds_at_half_foreground_alpha() {
    let fg = Rgba8::rgba(200, 100, 0, 200).to_premul();
    assert_eq!(snap_coverage([0, 0, 0, 0], fg), [0, 0, 0, 0]);
    assert_eq!(snap_coverage([10, 5, 0, 99], fg), [0, 0, 0, 0]);
    assert_eq!(snap_coverage([80, 40, 0, 100], fg), fg);
}

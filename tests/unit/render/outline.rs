use super::*;
use crate::foundation::core::Rgba8;
use crate::render::quality::RenderHints;
use kurbo::{Rect, Shape};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn jitter_is_one_unit_at_reference_size() {
    for seed in 0..16 {
        let j = OutlineJitter::random(&mut StdRng::seed_from_u64(seed), 200, 70);
        assert!(j.offset.x.abs() <= 1.0 && j.offset.y.abs() <= 1.0);
        assert!(j.offset.x.abs() == 1.0 || j.offset.x == 0.0);
    }
}

#[test]
fn jitter_scales_with_canvas() {
    for seed in 0..16 {
        let j = OutlineJitter::random(&mut StdRng::seed_from_u64(seed), 400, 210);
        assert!(j.offset.x.abs() == 2.0 || j.offset.x == 0.0);
        assert!(j.offset.y.abs() == 3.0 || j.offset.y == 0.0);
    }
}

#[test]
fn outline_is_drawn_at_the_jittered_offset() {
    let mut canvas =
        Canvas::allocate(40, 40, Rgba8::WHITE, Rgba8::BLACK, &RenderHints::UNSET).unwrap();
    let path = Rect::new(10.0, 10.0, 30.0, 30.0).to_path(0.1);
    let jitter = OutlineJitter {
        offset: Vec2::new(5.0, 0.0),
    };
    draw_outline(&mut canvas, &path, Affine::IDENTITY, jitter);
    let out = canvas.finish().unwrap();

    assert_ne!(out.get_pixel(15, 20).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(10, 20).0, [255, 255, 255]);
}

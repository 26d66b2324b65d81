use super::*;
use rand::{SeedableRng, rngs::StdRng};

const BG: Rgb<u8> = Rgb([255, 255, 255]);

fn gradient(w: u32, h: u32) -> Raster {
    Raster::from_fn(w, h, |x, y| Rgb([(x * 10 % 256) as u8, (y * 7 % 256) as u8, 40]))
}

#[test]
fn random_params_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..64 {
        let p = RippleParams::random(&mut rng, 70);
        assert!((0.0..2.0 * PI).contains(&p.phase));
        assert!((PI..4.0 * PI).contains(&p.period));
        assert_eq!(p.amplitude, 7.0);
    }
}

#[test]
fn zero_amplitude_is_identity() {
    let src = gradient(24, 12);
    let p = RippleParams {
        phase: 1.3,
        period: 2.0 * PI,
        amplitude: 0.0,
    };
    for interp in [
        Interpolation::NearestNeighbor,
        Interpolation::Bilinear,
        Interpolation::Bicubic,
    ] {
        assert_eq!(p.apply(&src, BG, interp), src);
    }
}

#[test]
fn displacement_is_constant_per_row() {
    let p = RippleParams {
        phase: 0.0,
        period: PI,
        amplitude: 5.0,
    };
    assert_eq!(p.displacement(0, 10), 0.0);
    assert!((p.displacement(5, 10) - 5.0).abs() < 1e-9);
}

#[test]
fn whole_pixel_shift_moves_columns_and_leaves_background() {
    let src = gradient(20, 4);
    // Zero period: every row is displaced by amplitude * sin(π/2).
    let p = RippleParams {
        phase: PI / 2.0,
        period: 0.0,
        amplitude: 3.0,
    };
    let out = p.apply(&src, BG, Interpolation::NearestNeighbor);
    for y in 0..4 {
        for x in 0..17 {
            assert_eq!(out.get_pixel(x, y), src.get_pixel(x + 3, y));
        }
        for x in 17..20 {
            assert_eq!(*out.get_pixel(x, y), BG);
        }
    }
}

#[test]
fn bilinear_blends_neighbouring_columns() {
    let src = Raster::from_fn(4, 1, |x, _| {
        if x < 2 {
            Rgb([0, 0, 0])
        } else {
            Rgb([200, 200, 200])
        }
    });
    let p = RippleParams {
        phase: PI / 2.0,
        period: 0.0,
        amplitude: 0.5,
    };
    let out = p.apply(&src, BG, Interpolation::Bilinear);
    assert_eq!(*out.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*out.get_pixel(1, 0), Rgb([100, 100, 100]));
    assert_eq!(*out.get_pixel(2, 0), Rgb([200, 200, 200]));
    // 3.5 lies past the last column.
    assert_eq!(*out.get_pixel(3, 0), BG);
}

#[test]
fn bicubic_is_exact_on_flat_rows() {
    let src = Raster::from_pixel(8, 3, Rgb([90, 20, 160]));
    let p = RippleParams {
        phase: 0.4,
        period: 3.0,
        amplitude: 1.7,
    };
    let out = p.apply(&src, BG, Interpolation::Bicubic);
    for (x, y, px) in out.enumerate_pixels() {
        let sx = f64::from(x) + p.displacement(y, 3);
        if (0.0..=7.0).contains(&sx) {
            assert_eq!(*px, Rgb([90, 20, 160]));
        } else {
            assert_eq!(*px, BG);
        }
    }
}

#[test]
fn catmull_rom_weights_sum_to_one() {
    for t in [0.0, 0.25, 0.5, 0.9] {
        let s: f64 = catmull_rom_weights(t).iter().sum();
        assert!((s - 1.0).abs() < 1e-12);
    }
}

//! Integration tests for [`mandelpool::Palette`]: preset construction plus
//! sampling/blending behavior exercised the way [`mandelpool::kernel`] uses it.

use mandelpool::Palette;
use mandelpool::palette::{blend, pack_rgba, Rgb};

#[test]
fn all_presets_construct_successfully() {
    assert!(Palette::classic().len() >= 2);
    assert!(Palette::grayscale().len() >= 2);
    assert!(Palette::fire().len() >= 2);
}

#[test]
fn sample_always_returns_opaque_pixels() {
    for palette in [Palette::classic(), Palette::grayscale(), Palette::fire()] {
        for i in 0..200 {
            let v = i as f64 / 37.0;
            let color = palette.sample(v);
            assert_eq!(color >> 24, 255);
        }
    }
}

#[test]
fn custom_palette_round_trips_through_set() {
    let mut palette = mandelpool::Palette::new(3).unwrap();
    palette.set(0, Rgb::new(10, 20, 30));
    palette.set(1, Rgb::new(40, 50, 60));
    palette.set(2, Rgb::new(70, 80, 90));

    let c = palette.sample(0.0);
    assert_eq!(c, pack_rgba(10, 20, 30));
}

#[test]
fn blend_of_identical_colors_is_that_color() {
    let c = pack_rgba(12, 34, 56);
    assert_eq!(blend(&[c, c, c, c]), c);
}

#[test]
fn palette_with_wrap_factor_one_is_monotone_over_one_cycle() {
    let palette = mandelpool::palette::Palette::with_wrap_factor(2, 1.0).unwrap();
    let c0 = palette.sample(0.0);
    let c_mid = palette.sample(0.5);
    assert_ne!(c0, c_mid);
}

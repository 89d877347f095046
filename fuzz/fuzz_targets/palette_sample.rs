#![no_main]
use libfuzzer_sys::fuzz_target;
use mandelpool::Palette;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    v: f64,
    wrap_factor: f64,
}

fuzz_target!(|input: Input| {
    if !input.wrap_factor.is_finite() || input.wrap_factor == 0.0 {
        return;
    }
    if !input.v.is_finite() {
        return;
    }

    let palette = match Palette::with_wrap_factor(8, input.wrap_factor) {
        Ok(p) => p,
        Err(_) => return,
    };

    let color = palette.sample(input.v);
    assert_eq!(color >> 24, 255, "sample must always be opaque");
});

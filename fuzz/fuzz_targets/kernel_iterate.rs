#![no_main]
use libfuzzer_sys::fuzz_target;
use mandelpool::kernel::iterate;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    x0: f64,
    y0: f64,
    n_max: u16,
}

fuzz_target!(|input: Input| {
    if !input.x0.is_finite() || !input.y0.is_finite() {
        return;
    }

    let result = iterate(input.x0, input.y0, input.n_max as u32);
    assert!(result.n <= input.n_max as u32, "iterate must never exceed n_max");
});

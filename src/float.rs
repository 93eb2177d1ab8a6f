//! Float helpers backed by `libm` on every build, so `std` and `no_std`
//! builds produce bit-identical results.

pub fn round(x: f64) -> f64 {
    libm::round(x)
}

pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

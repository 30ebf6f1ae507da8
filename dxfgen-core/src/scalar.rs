//! Numeric scalar abstraction shared by coordinates and measurements.

use std::fmt::Display;
use std::ops::Add;

/// Numeric representation used for coordinates, radii, angles and widths.
///
/// A document is generic over this type, fixed for the session's lifetime,
/// so callers can pick the precision they need (`f32` for compact plots,
/// `f64` for survey-grade coordinates). Values are written in the type's
/// default `Display` form; the format itself imposes no precision policy.
pub trait Scalar: Copy + PartialOrd + Add<Output = Self> + Display {
    /// Additive identity, emitted for the synthesized Z coordinates.
    const ZERO: Self;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Scalar>(value: T) -> String {
        format!("{}", value)
    }

    #[test]
    fn test_zero_renders_without_decimal_point() {
        assert_eq!(render(f32::ZERO), "0");
        assert_eq!(render(f64::ZERO), "0");
    }

    #[test]
    fn test_integral_values_render_without_decimal_point() {
        assert_eq!(render(100.0_f64), "100");
        assert_eq!(render(100.0_f32), "100");
    }

    #[test]
    fn test_fractional_values_keep_their_digits() {
        assert_eq!(render(57.5_f64), "57.5");
        assert_eq!(render(-0.25_f64), "-0.25");
    }
}

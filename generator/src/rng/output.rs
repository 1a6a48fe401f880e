//! Integer-to-double mapping

/// 2^-53, the spacing of doubles in [0.5, 1.0)
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Map a raw 64-bit output to a double in [0.0, 1.0)
///
/// Keeps the top 53 bits, which exactly fill a double's significand.
///
/// # Example
/// ```
/// use xoshiro_rng_core_rs::to_double;
///
/// assert_eq!(to_double(0), 0.0);
/// assert!(to_double(u64::MAX) < 1.0);
/// ```
pub fn to_double(x: u64) -> f64 {
    (x >> 11) as f64 * F64_UNIT
}

//! splitmix64 seed expansion
//!
//! Expands a single 64-bit seed into the four xoshiro lanes. Consecutive
//! seeds land on unrelated lane sets.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

/// Advance the accumulator and return its next mixed value
pub(crate) fn splitmix64_next(acc: &mut u64) -> u64 {
    *acc = acc.wrapping_add(GOLDEN_GAMMA);
    let mut z = *acc;
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}

/// Expand `seed` into four lanes, in order
///
/// The accumulator carries over between lanes; it is never reset.
pub(crate) fn expand_seed(seed: u64) -> [u64; 4] {
    let mut acc = seed;
    [
        splitmix64_next(&mut acc),
        splitmix64_next(&mut acc),
        splitmix64_next(&mut acc),
        splitmix64_next(&mut acc),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix_reference_value_for_zero() {
        let mut acc = 0;
        assert_eq!(splitmix64_next(&mut acc), 0xE220_A839_7B1D_CDAF);
        assert_eq!(acc, GOLDEN_GAMMA);
    }

    #[test]
    fn test_accumulator_not_reset_between_lanes() {
        let lanes = expand_seed(0);

        // Lane 1 of seed 0 is lane 0 of a walk already advanced once
        let mut acc = GOLDEN_GAMMA;
        assert_eq!(lanes[1], splitmix64_next(&mut acc));
    }

    #[test]
    fn test_accumulator_wraps_on_overflow() {
        let mut acc = u64::MAX;
        splitmix64_next(&mut acc);
        assert_eq!(acc, GOLDEN_GAMMA - 1);
    }
}

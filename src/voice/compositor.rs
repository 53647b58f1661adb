//! Rate/pitch composition: character base × user multiplier, clamped to the
//! platform limits.

use std::ops::RangeInclusive;

use crate::character::CharacterProfile;

/// Speaking-rate limits accepted by the synthesis platform.
pub const RATE_RANGE: RangeInclusive<f32> = 0.5..=2.0;

/// Pitch limits accepted by the synthesis platform.
pub const PITCH_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Final rate and pitch for one synthesis request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParams {
    pub rate: f32,
    pub pitch: f32,
}

/// Clamp `value` into `range`.  Non-finite values map to the lower bound.
pub fn clamp(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

/// Combine a character's base rate/pitch with the user's multipliers.
///
/// The result is clamped even when the multipliers are already in range,
/// since the base values can push the product past the limits.
///
/// ```rust
/// use voice_characterizer::character::find;
/// use voice_characterizer::voice::compose;
///
/// let alien = find("alien").unwrap(); // base pitch 1.8
/// let p = compose(alien, 1.0, 2.0);
/// assert_eq!(p.pitch, 2.0);
/// ```
pub fn compose(
    character: &CharacterProfile,
    rate_multiplier: f32,
    pitch_multiplier: f32,
) -> SynthesisParams {
    SynthesisParams {
        rate: clamp(character.base_rate * rate_multiplier, &RATE_RANGE),
        pitch: clamp(character.base_pitch * pitch_multiplier, &PITCH_RANGE),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{catalog, find};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn multiplies_base_values() {
        let hulk = find("hulk").unwrap();
        let p = compose(hulk, 1.0, 1.0);
        assert!(approx(p.rate, 0.9));
        assert!(approx(p.pitch, 0.7));

        let p = compose(hulk, 2.0, 2.0);
        assert!(approx(p.rate, 1.8));
        assert!(approx(p.pitch, 1.4));
    }

    #[test]
    fn rate_is_clamped_to_platform_limits() {
        let giant = find("giant").unwrap(); // base 0.8
        assert_eq!(compose(giant, 0.5, 1.0).rate, 0.5);
        let child = find("child").unwrap(); // base 1.2
        assert_eq!(compose(child, 2.0, 1.0).rate, 2.0);
    }

    #[test]
    fn pitch_is_clamped_to_platform_limits() {
        let alien = find("alien").unwrap();
        assert_eq!(compose(alien, 1.0, 2.0).pitch, 2.0);
        assert_eq!(compose(alien, 1.0, 0.0).pitch, 0.0);
    }

    #[test]
    fn out_of_range_multipliers_are_still_clamped() {
        let robot = find("robot").unwrap();
        let p = compose(robot, 50.0, -3.0);
        assert_eq!(p.rate, 2.0);
        assert_eq!(p.pitch, 0.0);
    }

    #[test]
    fn nan_maps_to_lower_bound() {
        assert_eq!(clamp(f32::NAN, &RATE_RANGE), 0.5);
        assert_eq!(clamp(f32::NAN, &PITCH_RANGE), 0.0);
        assert_eq!(clamp(f32::INFINITY, &RATE_RANGE), 2.0);
    }

    #[test]
    fn rate_is_monotonic_in_multiplier() {
        for c in catalog() {
            let mut prev = compose(c, 0.5, 1.0).rate;
            let mut m = 0.5;
            while m <= 2.0 {
                let r = compose(c, m, 1.0).rate;
                assert!(r >= prev, "{}: {} < {} at multiplier {}", c.id, r, prev, m);
                assert!(RATE_RANGE.contains(&r));
                prev = r;
                m += 0.05;
            }
        }
    }
}

//! Classification of an accumulated face rotation into a legal turn
//!
//! A commit reduces the accumulated angle to its principal value, picks one of
//! four outcomes and describes the outcome as a permutation of the 9 raster
//! slots of the face. The permutation tables are expressed purely in canonical
//! raster indices, so they are shared by all faces.

use crate::face::SLOTS_PER_FACE;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Result of snapping a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Rotation too small; snap back
    None,
    /// Quarter turn, -90 degrees about the face axis
    Clockwise,
    /// Quarter turn, +90 degrees about the face axis
    CounterClockwise,
    /// Half turn
    Half,
}

/// Destination slot of the voxel at each raster index, clockwise quarter
const CLOCKWISE_DEST: [usize; SLOTS_PER_FACE] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Destination slot of the voxel at each raster index, counter-clockwise quarter
const COUNTER_CLOCKWISE_DEST: [usize; SLOTS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Destination slot of the voxel at each raster index, half turn
const HALF_DEST: [usize; SLOTS_PER_FACE] = [8, 7, 6, 5, 4, 3, 2, 1, 0];

const IDENTITY_DEST: [usize; SLOTS_PER_FACE] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

const HALF_MIN_DEGREES: f32 = 135.0;
const QUARTER_MIN_DEGREES: f32 = 45.0;

impl Outcome {
    /// All outcomes
    pub const ALL: [Outcome; 4] = [
        Outcome::None,
        Outcome::Clockwise,
        Outcome::CounterClockwise,
        Outcome::Half,
    ];

    /// Classify a principal angle in `[-π, π]`
    ///
    /// Thresholds in degrees, checked in order: `|a| >= 135` is a half turn,
    /// `a >= 45` counter-clockwise, `a <= -45` clockwise, else none.
    pub fn classify(principal: f32) -> Self {
        let half_min = HALF_MIN_DEGREES.to_radians();
        let quarter_min = QUARTER_MIN_DEGREES.to_radians();
        if principal.abs() >= half_min {
            Outcome::Half
        } else if principal >= quarter_min {
            Outcome::CounterClockwise
        } else if principal <= -quarter_min {
            Outcome::Clockwise
        } else {
            Outcome::None
        }
    }

    /// Where the voxel in raster slot `i` ends up: `destinations()[i]`
    pub fn destinations(self) -> &'static [usize; SLOTS_PER_FACE] {
        match self {
            Outcome::None => &IDENTITY_DEST,
            Outcome::Clockwise => &CLOCKWISE_DEST,
            Outcome::CounterClockwise => &COUNTER_CLOCKWISE_DEST,
            Outcome::Half => &HALF_DEST,
        }
    }

    /// Quantized angle (radians) this outcome snaps to
    ///
    /// A half turn keeps the sign of `principal` so the correction folded into
    /// the voxel orientation stays small.
    pub fn target_angle(self, principal: f32) -> f32 {
        match self {
            Outcome::None => 0.0,
            Outcome::Clockwise => -FRAC_PI_2,
            Outcome::CounterClockwise => FRAC_PI_2,
            Outcome::Half => {
                if principal < 0.0 {
                    -PI
                } else {
                    PI
                }
            }
        }
    }

}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::None => "none",
            Outcome::Clockwise => "clockwise",
            Outcome::CounterClockwise => "counter-clockwise",
            Outcome::Half => "half",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::CENTER_SLOT;

    fn classify_deg(d: f32) -> Outcome {
        Outcome::classify(d.to_radians())
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify_deg(0.0), Outcome::None);
        assert_eq!(classify_deg(44.0), Outcome::None);
        assert_eq!(classify_deg(-44.0), Outcome::None);
        assert_eq!(classify_deg(45.0), Outcome::CounterClockwise);
        assert_eq!(classify_deg(90.0), Outcome::CounterClockwise);
        assert_eq!(classify_deg(134.0), Outcome::CounterClockwise);
        assert_eq!(classify_deg(-45.0), Outcome::Clockwise);
        assert_eq!(classify_deg(-134.0), Outcome::Clockwise);
        assert_eq!(classify_deg(135.0), Outcome::Half);
        assert_eq!(classify_deg(-135.0), Outcome::Half);
        assert_eq!(classify_deg(180.0), Outcome::Half);
    }

    #[test]
    fn test_destinations_are_permutations_fixing_center() {
        for outcome in Outcome::ALL {
            let dest = outcome.destinations();
            let mut hit = [false; SLOTS_PER_FACE];
            for &d in dest {
                assert!(!hit[d], "{} sends two slots to {}", outcome, d);
                hit[d] = true;
            }
            assert_eq!(dest[CENTER_SLOT], CENTER_SLOT);
        }
    }

    #[test]
    fn test_clockwise_cycles() {
        let dest = Outcome::Clockwise.destinations();
        // corners 0 -> 2 -> 8 -> 6 -> 0
        assert_eq!((dest[0], dest[2], dest[8], dest[6]), (2, 8, 6, 0));
        // edges 1 -> 5 -> 7 -> 3 -> 1
        assert_eq!((dest[1], dest[5], dest[7], dest[3]), (5, 7, 3, 1));
    }

    #[test]
    fn test_counter_clockwise_inverts_clockwise() {
        let cw = Outcome::Clockwise.destinations();
        let ccw = Outcome::CounterClockwise.destinations();
        for i in 0..SLOTS_PER_FACE {
            assert_eq!(ccw[cw[i]], i);
        }
    }

    #[test]
    fn test_half_is_clockwise_twice() {
        let cw = Outcome::Clockwise.destinations();
        let half = Outcome::Half.destinations();
        for i in 0..SLOTS_PER_FACE {
            assert_eq!(half[i], cw[cw[i]]);
            assert_eq!(half[half[i]], i);
        }
    }

    #[test]
    fn test_half_target_keeps_sign() {
        assert_eq!(Outcome::Half.target_angle(PI), PI);
        assert_eq!(Outcome::Half.target_angle(-3.0), -PI);
        assert_eq!(Outcome::Half.target_angle(2.5), PI);
        assert_eq!(Outcome::None.target_angle(0.3), 0.0);
    }
}

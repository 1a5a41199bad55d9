use std::f32::consts::{PI, TAU};

/// Reduce an unbounded angle (radians) to its principal value in `[-π, π]`.
///
/// A value landing exactly on the half-turn edge keeps the sign of the input,
/// so `-π` stays `-π` and a clockwise half turn is still reported as one.
///
/// ```
/// use rubik::principal_angle;
///
/// let a = principal_angle(450f32.to_radians());
/// assert!((a - 90f32.to_radians()).abs() < 1e-5);
/// ```
pub fn principal_angle(radians: f32) -> f32 {
    let r = radians.rem_euclid(TAU);
    if r > PI || (r == PI && radians < 0.0) {
        r - TAU
    } else {
        r
    }
}

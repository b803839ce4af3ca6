//! # Game Mathematics
//!
//! Small numeric helpers for stepping and heading calculations.

use macroquad::math::{vec2, Vec2};

/// Moves `current` toward `target` by at most `max_step`.
///
/// Lands exactly on `target` when it is within reach, so repeated calls
/// never overshoot or oscillate.
///
/// # Examples
///
/// ```
/// use sidestep::step_toward;
///
/// assert_eq!(step_toward(0.0, 10.0, 4.0), 4.0);
/// assert_eq!(step_toward(8.0, 10.0, 4.0), 10.0);
/// assert_eq!(step_toward(10.0, 0.0, 4.0), 6.0);
/// ```
pub fn step_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(diff)
    }
}

/// Unit vector pointing along a heading given in degrees.
///
/// 0 degrees points along +x; positive angles turn toward +y (down the screen).
pub fn heading_vector(angle_degrees: f32) -> Vec2 {
    let radians = angle_degrees.to_radians();
    vec2(radians.cos(), radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward_moves_by_max_step() {
        assert_eq!(step_toward(0.0, 100.0, 2.0), 2.0);
        assert_eq!(step_toward(100.0, 0.0, 2.0), 98.0);
    }

    #[test]
    fn test_step_toward_clamps_to_target() {
        assert_eq!(step_toward(99.5, 100.0, 2.0), 100.0);
        assert_eq!(step_toward(100.5, 100.0, 2.0), 100.0);
        assert_eq!(step_toward(100.0, 100.0, 2.0), 100.0);
    }

    #[test]
    fn test_heading_vector_cardinals() {
        let east = heading_vector(0.0);
        assert!((east.x - 1.0).abs() < 1e-6 && east.y.abs() < 1e-6);

        let south = heading_vector(90.0);
        assert!(south.x.abs() < 1e-6 && (south.y - 1.0).abs() < 1e-6);

        // Unnormalized angles wrap naturally
        let wrapped = heading_vector(450.0);
        assert!((wrapped - south).length() < 1e-5);
    }
}

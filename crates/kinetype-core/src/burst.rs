//! Per-letter burst trajectories.
//!
//! Vectors are computed once per scene; `letter_pose` evaluates one letter's
//! staggered flight for a given combined burst motion.

use serde::Serialize;

use crate::easing::{clamp, ease_out_quint};
use crate::sampler::Viewport;

/// How strongly a letter's delay holds it back, in units of combined motion
pub const DELAY_WEIGHT: f64 = 0.18;

/// Where a letter flies to during the burst
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterBurstVector {
    pub dx: f64,
    pub dy: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub delay: f64,
}

impl LetterBurstVector {
    /// Vector for letter `index` (counted across both words). `direction` is
    /// -1 for the first word and +1 for the second.
    pub fn for_letter(index: usize, direction: f64) -> Self {
        let i = index as f64;
        let angle = (-65.0 + i * 18.0).to_radians();
        let distance = 150.0 + (index % 5) as f64 * 42.0 + i * 16.0;
        let parity_twist = if index % 2 == 0 { -14.0 } else { 18.0 };

        Self {
            dx: angle.cos() * distance + direction * (110.0 + (index % 3) as f64 * 45.0),
            dy: -(angle.sin() * distance).abs() - 120.0 - (index % 4) as f64 * 32.0,
            rotate_deg: direction * (42.0 + i * 16.0) + parity_twist,
            scale: 1.28 + (index % 6) as f64 * 0.17,
            delay: (index % 3) as f64 * 0.045 + (index / 3) as f64 * 0.02,
        }
    }

    /// Motion level at which this letter leaves its resting pose
    pub fn launch_threshold(&self) -> f64 {
        self.delay * DELAY_WEIGHT
    }
}

/// One vector per letter of `first` then `last`, counted in chars
pub fn burst_vectors(first: &str, last: &str) -> Vec<LetterBurstVector> {
    let first_len = first.chars().count();
    let total = first_len + last.chars().count();
    (0..total)
        .map(|index| {
            let direction = if index < first_len { -1.0 } else { 1.0 };
            LetterBurstVector::for_letter(index, direction)
        })
        .collect()
}

/// A letter's transform relative to its resting place in the word
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterPose {
    pub dx: f64,
    pub dy: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
}

impl LetterPose {
    pub const REST: LetterPose = LetterPose {
        dx: 0.0,
        dy: 0.0,
        rotate_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
    };
}

/// Evaluate one letter for the given combined burst motion and fade.
///
/// The pose converges to `LetterPose::REST` (apart from fade opacity) as the
/// motion approaches the letter's launch threshold.
pub fn letter_pose(
    vector: &LetterBurstVector,
    combined_motion: f64,
    fade_eased: f64,
    viewport: Viewport,
) -> LetterPose {
    let staged = clamp(combined_motion - vector.launch_threshold(), 0.0, 1.0);
    if staged <= 0.0 {
        return LetterPose::REST;
    }

    let mix = ease_out_quint(staged);
    let throw_x = 0.72 + viewport.width / 3600.0;
    let throw_y = 0.8 + viewport.height / 3200.0;

    LetterPose {
        dx: vector.dx * throw_x * mix,
        dy: vector.dy * throw_y * mix,
        rotate_deg: vector.rotate_deg * mix,
        scale: 1.0 + (vector.scale - 1.0) * mix,
        opacity: clamp(1.0 - fade_eased, 0.0, 1.0),
        blur: mix * 2.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1440.0,
        height: 900.0,
    };

    #[test]
    fn test_one_vector_per_letter_with_word_direction() {
        let vectors = burst_vectors("Bryan", "Xu");
        assert_eq!(vectors.len(), 7);

        // First letter: angle -65deg, distance 150, direction -1
        let v0 = vectors[0];
        let expected_dx = (-65.0_f64).to_radians().cos() * 150.0 - 110.0;
        assert!((v0.dx - expected_dx).abs() < 1e-9);
        assert!((v0.rotate_deg - (-42.0 - 14.0)).abs() < 1e-9);
        assert_eq!(v0.delay, 0.0);

        // Sixth letter belongs to the second word and rotates the other way
        let v5 = vectors[5];
        assert!((v5.rotate_deg - (42.0 + 80.0 + 18.0)).abs() < 1e-9);
        assert!((v5.delay - (2.0 * 0.045 + 0.02)).abs() < 1e-12);
    }

    #[test]
    fn test_vectors_always_throw_upward() {
        for v in burst_vectors("Bryan", "Xu") {
            assert!(v.dy < 0.0);
            assert!(v.scale >= 1.28);
        }
    }

    #[test]
    fn test_rest_pose_before_launch() {
        let vector = LetterBurstVector::for_letter(5, 1.0);
        let pose = letter_pose(&vector, vector.launch_threshold(), 0.0, VIEWPORT);
        assert_eq!(pose, LetterPose::REST);
    }

    #[test]
    fn test_pose_is_continuous_at_launch() {
        let vector = LetterBurstVector::for_letter(4, 1.0);
        let pose = letter_pose(&vector, vector.launch_threshold() + 1e-7, 0.0, VIEWPORT);
        assert!(pose.dx.abs() < 1e-2);
        assert!(pose.dy.abs() < 1e-2);
        assert!(pose.rotate_deg.abs() < 1e-2);
        assert!((pose.scale - 1.0).abs() < 1e-4);
        assert_eq!(pose.opacity, 1.0);
    }

    #[test]
    fn test_full_motion_reaches_scaled_vector() {
        let vector = LetterBurstVector::for_letter(0, -1.0);
        let pose = letter_pose(&vector, 1.0, 1.0, VIEWPORT);
        assert!((pose.dx - vector.dx * (0.72 + 0.4)).abs() < 1e-9);
        assert!((pose.scale - vector.scale).abs() < 1e-9);
        assert_eq!(pose.opacity, 0.0);
        assert!((pose.blur - 2.4).abs() < 1e-12);
    }
}

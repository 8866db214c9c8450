//! Pure easing functions and progress ramps.
//!
//! Every function here is total over finite input. Callers clamp progress to
//! [0, 1] before easing; `ramp` does that clamping for phase windows.

use serde::{Deserialize, Serialize};

/// Windows shorter than this are treated as instantaneous.
pub const WINDOW_EPSILON: f64 = 1e-9;

#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
pub fn ease_out_quint(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Power ease-in: f(t) = t^p
#[inline]
pub fn ease_in_power(t: f64, power: f64) -> f64 {
    t.powf(power)
}

/// Local progress of `value` through the window `[start, end]`, clamped to [0, 1].
///
/// A collapsed window (`end - start <= WINDOW_EPSILON`) is a step: 0 before
/// `end`, 1 at or past it.
#[inline]
pub fn ramp(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= WINDOW_EPSILON {
        return if value >= end { 1.0 } else { 0.0 };
    }
    clamp((value - start) / span, 0.0, 1.0)
}

/// Normalize an externally supplied progress value into [0, 1].
#[inline]
pub fn normalize_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        clamp(progress, 0.0, 1.0)
    }
}

/// Easing curve used for smooth page scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump straight to the target
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

impl EasingType {
    /// Apply the curve to a progress value; input is clamped to [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = clamp(t, 0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_cubic(t),
            EasingType::Quintic => ease_out_quint(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        assert!(ease_out_cubic(0.0).abs() < 1e-12);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-12);
        assert!(ease_out_quint(0.0).abs() < 1e-12);
        assert!((ease_out_quint(1.0) - 1.0).abs() < 1e-12);
        assert!((ease_in_power(0.5, 2.0) - 0.25).abs() < 1e-12);
        assert!((ease_in_power(1.0, 2.2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_easing_type_boundaries() {
        for easing in [
            EasingType::None,
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ramp_window() {
        assert_eq!(ramp(0.1, 0.2, 0.4), 0.0);
        assert!((ramp(0.3, 0.2, 0.4) - 0.5).abs() < 1e-12);
        assert_eq!(ramp(0.9, 0.2, 0.4), 1.0);
    }

    #[test]
    fn test_ramp_collapsed_window_is_a_step() {
        assert_eq!(ramp(0.49, 0.5, 0.5), 0.0);
        assert_eq!(ramp(0.5, 0.5, 0.5), 1.0);
        // Inverted windows never divide by a negative span
        assert_eq!(ramp(0.45, 0.6, 0.5), 0.0);
        assert_eq!(ramp(0.55, 0.6, 0.5), 1.0);
    }

    #[test]
    fn test_normalize_progress() {
        assert_eq!(normalize_progress(f64::NAN), 0.0);
        assert_eq!(normalize_progress(-0.3), 0.0);
        assert_eq!(normalize_progress(1.7), 1.0);
        assert_eq!(normalize_progress(f64::INFINITY), 1.0);
        assert_eq!(normalize_progress(0.25), 0.25);
    }
}

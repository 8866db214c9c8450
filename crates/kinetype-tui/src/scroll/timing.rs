//! Elapsed-time helpers for scroll animations.

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] from start time and duration
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    progress_at(start.elapsed(), duration)
}

/// Progress for an explicit elapsed time
#[inline]
pub fn progress_at(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

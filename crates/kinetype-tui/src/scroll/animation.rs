//! Scroll animation controller.

use std::time::{Duration, Instant};

use kinetype_core::easing::lerp;

use super::config::{EasingType, ScrollConfig, ScrollConfigExt};
use super::timing::{is_complete, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Smooth page scroll in virtual pixels.
///
/// Call `scroll_by()` for input, then `update()` once per loop iteration to
/// get the current interpolated position.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: f64,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: f64,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether an animation or a batched delta still needs processing.
    /// Use this to pick the fast tick rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Final position once the running animation ends
    pub fn target_scroll(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> f64 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: f64) {
        self.animation = None;
        self.current_scroll = scroll.max(0.0);
        self.pending_delta = 0.0;
    }

    /// Glide to `target`, or jump there when smooth scrolling is off
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64) {
        let target = target.clamp(0.0, max_scroll.max(0.0));
        self.pending_delta = 0.0;

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        if self.current_scroll == target {
            self.animation = None;
            return;
        }

        self.start_animation(target);
    }

    /// Scroll by a delta (positive = down). Deltas are batched until the next
    /// `update()` when smooth scrolling is on.
    pub fn scroll_by(&mut self, delta: f64, max_scroll: f64) {
        if !self.config.is_smooth() {
            self.current_scroll = (self.current_scroll + delta).clamp(0.0, max_scroll.max(0.0));
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Advance the animation and return the current position
    pub fn update(&mut self, max_scroll: f64) -> f64 {
        let max_scroll = max_scroll.max(0.0);

        if self.pending_delta != 0.0 {
            let new_target = (self.target_scroll() + self.pending_delta).clamp(0.0, max_scroll);
            self.pending_delta = 0.0;

            if new_target != self.current_scroll {
                self.start_animation(new_target);
            }
        }

        if let Some(anim) = &self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration));
                self.current_scroll = lerp(anim.from, anim.to, t).min(max_scroll);
            }
        } else if self.current_scroll > max_scroll {
            // Page shrank under us
            self.current_scroll = max_scroll;
        }

        self.current_scroll
    }

    fn start_animation(&mut self, target: f64) {
        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current_scroll,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth() -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 10_000,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });

        animator.scroll_to(100.0, 200.0);
        assert_eq!(animator.current_scroll(), 100.0);
        assert!(!animator.is_animating());

        animator.scroll_by(500.0, 200.0);
        assert_eq!(animator.current_scroll(), 200.0);
        animator.scroll_by(-500.0, 200.0);
        assert_eq!(animator.current_scroll(), 0.0);
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = smooth();
        animator.scroll_to(100.0, 200.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100.0);
        assert_eq!(animator.current_scroll(), 0.0);
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = smooth();

        animator.scroll_by(10.0, 200.0);
        animator.scroll_by(10.0, 200.0);
        animator.scroll_by(10.0, 200.0);
        assert!(animator.needs_update());

        animator.update(200.0);
        assert_eq!(animator.target_scroll(), 30.0);
        assert!(animator.current_scroll() < 30.0);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = smooth();
        animator.set_scroll(50.0);
        animator.scroll_to(300.0, 100.0);
        animator.update(100.0);
        assert_eq!(animator.target_scroll(), 100.0);
    }

    #[test]
    fn test_zero_duration_completes_on_update() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 0,
            ..Default::default()
        });
        animator.scroll_by(64.0, 1000.0);
        assert_eq!(animator.update(1000.0), 64.0);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_shrinking_page_clamps_position() {
        let mut animator = smooth();
        animator.set_scroll(900.0);
        assert_eq!(animator.update(400.0), 400.0);
    }
}

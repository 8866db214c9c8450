//! Scroll configuration helpers.

use std::time::Duration;

pub use kinetype_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Tick duration while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0 && self.easing != EasingType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 150);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.scroll_lines, 2);
        assert_eq!(config.animation_fps, 60);
    }

    #[test]
    fn test_animation_tick_duration() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
        config.animation_fps = 0;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
        config.animation_fps = 5000;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());

        config.animation_duration_ms = 150;
        config.easing = EasingType::None;
        assert!(!config.is_smooth());
    }
}

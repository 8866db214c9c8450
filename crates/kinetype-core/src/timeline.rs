//! Phase boundaries for the hero title.
//!
//! The timeline is derived once from `TimelineConfig` and is immutable
//! afterwards. Its six fractions must be ordered; construction rejects any
//! config that breaks the ordering, so consumers never re-check it.

use serde::Serialize;
use tracing::debug;

use crate::config::TimelineConfig;
use crate::easing::clamp;
use crate::{Error, Result};

/// End of the window the hold span was originally measured against
const BASE_HOLD_WINDOW_END: f64 = 0.8;
/// Share of the base hold that preceded the original burst
const BASE_BURST_OFFSET: f64 = 0.25;
/// Where the fade originally started
const BASE_FADE_START: f64 = 0.925;
/// Burst and fade each keep half of their original window
const BASE_DURATION_SHARE: f64 = 0.5;
/// The fly-in baseline stops this far ahead of the burst
const FLY_IN_LEAD: f64 = 0.03;
const FLY_IN_BASELINE_FLOOR: f64 = 0.2;
const FLY_IN_MIN: f64 = 0.12;
const FLY_IN_MAX: f64 = 0.95;

/// Which part of the hero animation a progress value falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    FlyIn,
    StyleCycle,
    FinalHold,
    Burst,
    Fade,
    Done,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::FlyIn => "fly-in",
            Phase::StyleCycle => "style cycle",
            Phase::FinalHold => "final hold",
            Phase::Burst => "burst",
            Phase::Fade => "fade",
            Phase::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseTimeline {
    pub fly_in_end: f64,
    pub final_hold_start: f64,
    pub burst_start: f64,
    pub fade_start: f64,
    pub fade_end: f64,
    /// Length of the final hold, as a fraction of hero progress
    pub hold_span: f64,
}

impl PhaseTimeline {
    /// Derive the timeline from its ratios and validate the ordering
    pub fn from_config(config: &TimelineConfig) -> Result<Self> {
        let settle = config.original_font_phase_end * config.font_phase_length_factor;
        let base_hold = BASE_HOLD_WINDOW_END - settle;
        let nominal_burst = settle + base_hold * BASE_BURST_OFFSET;

        let base_fade_duration = (1.0 - BASE_FADE_START) * BASE_DURATION_SHARE;
        let base_burst_duration = (BASE_FADE_START - nominal_burst) * BASE_DURATION_SHARE;
        let base_hold_duration = (nominal_burst - settle).max(0.0);

        let hold_span = base_hold_duration
            * config.span_scale
            * config.base_hold_span_factor
            * config.hold_scroll_multiplier
            * config.final_hold_length_multiplier;
        let burst_duration = base_burst_duration * config.span_scale;
        let fade_duration = base_fade_duration * config.span_scale;

        let fade_end = config.fade_end;
        let fade_start = fade_end - fade_duration;
        let burst_start = fade_start - burst_duration;
        let final_hold_start = burst_start - hold_span;

        let baseline_fly_in = (burst_start - FLY_IN_LEAD).max(FLY_IN_BASELINE_FLOOR);
        let fly_in_end = clamp(
            baseline_fly_in * config.fly_in_length_multiplier,
            FLY_IN_MIN,
            FLY_IN_MAX,
        );

        let timeline = Self {
            fly_in_end,
            final_hold_start,
            burst_start,
            fade_start,
            fade_end,
            hold_span,
        };
        timeline.validate()?;
        debug!(?timeline, "derived phase timeline");
        Ok(timeline)
    }

    /// Build from explicit fractions (validated)
    pub fn new(
        fly_in_end: f64,
        final_hold_start: f64,
        burst_start: f64,
        fade_start: f64,
        fade_end: f64,
    ) -> Result<Self> {
        let timeline = Self {
            fly_in_end,
            final_hold_start,
            burst_start,
            fade_start,
            fade_end,
            hold_span: burst_start - final_hold_start,
        };
        timeline.validate()?;
        Ok(timeline)
    }

    fn validate(&self) -> Result<()> {
        let bounds = [
            ("start", 0.0),
            ("fly_in_end", self.fly_in_end),
            ("final_hold_start", self.final_hold_start),
            ("burst_start", self.burst_start),
            ("fade_start", self.fade_start),
            ("fade_end", self.fade_end),
            ("end", 1.0),
        ];

        if let Some((name, value)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidTimeline(format!("{} is not finite ({})", name, value)));
        }

        for pair in bounds.windows(2) {
            let (prev_name, prev) = pair[0];
            let (name, value) = pair[1];
            if value < prev {
                return Err(Error::InvalidTimeline(format!(
                    "{} ({:.5}) precedes {} ({:.5})",
                    name, value, prev_name, prev
                )));
            }
        }

        if self.hold_span < 0.0 || !self.hold_span.is_finite() {
            return Err(Error::InvalidTimeline(format!(
                "hold_span must be a non-negative fraction ({})",
                self.hold_span
            )));
        }
        Ok(())
    }

    /// Progress at which the title locks to the final style
    pub fn final_style_start(&self, switch_fraction: f64) -> f64 {
        clamp(
            self.fly_in_end * switch_fraction,
            0.0,
            (self.burst_start - 0.001).max(0.0),
        )
    }

    /// Classify a progress value
    pub fn phase_at(&self, progress: f64) -> Phase {
        if progress < self.fly_in_end {
            Phase::FlyIn
        } else if progress < self.final_hold_start {
            Phase::StyleCycle
        } else if progress < self.burst_start {
            Phase::FinalHold
        } else if progress < self.fade_start {
            Phase::Burst
        } else if progress < self.fade_end {
            Phase::Fade
        } else {
            Phase::Done
        }
    }

    /// The boundaries in order, useful for sampling
    pub fn boundaries(&self) -> [f64; 5] {
        [
            self.fly_in_end,
            self.final_hold_start,
            self.burst_start,
            self.fade_start,
            self.fade_end,
        ]
    }
}

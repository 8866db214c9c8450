//! The two-word hero title: fly-in, style cycle, final hold, burst and fade.
//!
//! `HeroAnimator::frame` is a pure function of progress, viewport and the
//! measurer. Nothing is cached between calls.

use serde::Serialize;
use tracing::{debug, trace};

use crate::burst::{burst_vectors, letter_pose, LetterBurstVector, LetterPose};
use crate::config::HoldConfig;
use crate::easing::{clamp, ease_in_power, ease_out_cubic, lerp, normalize_progress, ramp};
use crate::host::TextMeasure;
use crate::sampler::Viewport;
use crate::style::{CaseMode, StylePool, StyleVariant};
use crate::timeline::{Phase, PhaseTimeline};

const MAX_SKEW_DEG: f64 = 9.0;
const BURST_POWER: f64 = 1.85;
const FADE_POWER: f64 = 2.2;
const THROW_POWER: f64 = 1.8;
const BURST_WEIGHT: f64 = 0.35;
const THROW_WEIGHT: f64 = 0.65;
const BURST_SCALE_GROWTH: f64 = 0.46;
const SLOW_RISE_PX: f64 = 7.0;
const BURST_RISE_SHARE: f64 = 0.4;
const GROUP_BLUR: f64 = 3.2;
const OPTICAL_GAP_BOOST: f64 = 0.14;
/// Half the gap between the words in the reduced-motion pose
const STATIC_HALF_GAP: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSlot {
    First,
    Last,
}

/// Transform of one title word, x relative to the viewport's horizontal center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordPose {
    pub text: String,
    pub x: f64,
    pub width: f64,
    pub skew_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
}

/// Transform applied to the whole title
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupPose {
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
}

impl GroupPose {
    pub const REST: GroupPose = GroupPose {
        translate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterFrame {
    /// Index across both words
    pub index: usize,
    pub word: WordSlot,
    /// Cased glyph; empty when casing changed the word length
    pub glyph: String,
    #[serde(flatten)]
    pub pose: LetterPose,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroFrame {
    pub progress: f64,
    pub phase: Phase,
    /// Pool index of the active variant; `None` once locked to the final style
    pub style_index: Option<usize>,
    pub style: StyleVariant,
    pub case_mode: CaseMode,
    pub gap: f64,
    pub group: GroupPose,
    pub first: WordPose,
    pub last: WordPose,
    pub letters: Vec<LetterFrame>,
}

impl HeroFrame {
    pub fn is_final_style(&self) -> bool {
        self.style_index.is_none()
    }
}

/// Immutable hero data: words, timeline, style pool and burst vectors
#[derive(Debug, Clone)]
pub struct HeroAnimator {
    first_word: String,
    last_word: String,
    first_len: usize,
    timeline: PhaseTimeline,
    styles: StylePool,
    bursts: Vec<LetterBurstVector>,
    hold: HoldConfig,
    final_switch_fraction: f64,
}

impl HeroAnimator {
    pub fn new(
        first_word: &str,
        last_word: &str,
        timeline: PhaseTimeline,
        styles: StylePool,
        hold: HoldConfig,
        final_switch_fraction: f64,
    ) -> Self {
        let bursts = burst_vectors(first_word, last_word);
        debug!(letters = bursts.len(), pool = styles.len(), "built hero animator");
        Self {
            first_word: first_word.to_string(),
            last_word: last_word.to_string(),
            first_len: first_word.chars().count(),
            timeline,
            styles,
            bursts,
            hold,
            final_switch_fraction,
        }
    }

    pub fn timeline(&self) -> &PhaseTimeline {
        &self.timeline
    }

    pub fn styles(&self) -> &StylePool {
        &self.styles
    }

    pub fn bursts(&self) -> &[LetterBurstVector] {
        &self.bursts
    }

    pub fn words(&self) -> (&str, &str) {
        (&self.first_word, &self.last_word)
    }

    /// Progress at which the style locks to the final variant
    pub fn final_style_start(&self) -> f64 {
        self.timeline.final_style_start(self.final_switch_fraction)
    }

    /// Compute the title for `progress` through the hero region
    pub fn frame<M: TextMeasure + ?Sized>(
        &self,
        progress: f64,
        viewport: Viewport,
        measure: &M,
    ) -> HeroFrame {
        let p = normalize_progress(progress);
        let t = &self.timeline;

        let fly = ease_out_cubic(ramp(p, 0.0, t.fly_in_end));
        let style_local = ramp(p, 0.0, t.final_hold_start);
        let hold_local = ramp(p, t.final_hold_start, t.burst_start);
        let pre_burst_local = ramp(p, 0.0, t.burst_start);
        let burst = ease_in_power(ramp(p, t.burst_start, t.fade_start), BURST_POWER);
        let fade = ease_in_power(ramp(p, t.fade_start, t.fade_end), FADE_POWER);
        let throw = ease_in_power(ramp(p, t.burst_start, t.fade_end), THROW_POWER);

        let locked = p >= self.final_style_start();
        let active = if locked {
            None
        } else {
            self.styles
                .index_at(style_local)
                .and_then(|i| self.styles.get(i).map(|style| (i, style)))
        };
        let (style_index, style, case_mode) = match active {
            Some((i, style)) => (Some(i), style, CaseMode::for_style_index(i)),
            None => (None, self.styles.final_style(), CaseMode::Title),
        };

        let first_text = case_mode.apply(&self.first_word);
        let last_text = case_mode.apply(&self.last_word);

        let start_gap = clamp(viewport.width * 0.042, 26.0, 56.0);
        let natural_gap = measure.pair_gap(&first_text, &last_text, style.left())
            + measure.font_size() * OPTICAL_GAP_BOOST;
        let gap = if p < t.final_hold_start {
            lerp(start_gap, natural_gap, ease_out_cubic(style_local))
        } else {
            (natural_gap + (1.0 - hold_local) * self.hold.spacing_drift())
                * (1.0 + hold_local * self.hold.gap_scale_delta)
        };

        let first_width = measure.text_width(&first_text, style.left());
        let last_width = measure.text_width(&last_text, style.right());
        let margin = clamp(viewport.width * 0.16, 140.0, 340.0);
        let half_viewport = viewport.width * 0.5;
        let centered_left = -(first_width + gap + last_width) * 0.5;

        let first_x = lerp(-(half_viewport + first_width + margin), centered_left, fly);
        let last_x = lerp(half_viewport + margin, centered_left + first_width + gap, fly);
        let skew = MAX_SKEW_DEG * (1.0 - fly);
        let word_scale = 1.0 + hold_local * self.hold.word_scale_delta;
        let word_blur = clamp((1.0 - fly) * 4.6 + fade * 1.8, 0.0, 8.0);

        let combined_motion = clamp(BURST_WEIGHT * burst + THROW_WEIGHT * throw, 0.0, 1.0);
        let settle_opacity = 0.2 + 0.8 * fly;
        let group = GroupPose {
            translate_y: -pre_burst_local * SLOW_RISE_PX
                - combined_motion * viewport.height * BURST_RISE_SHARE,
            scale: 1.0
                + hold_local * self.hold.group_scale_delta
                + combined_motion * BURST_SCALE_GROWTH,
            opacity: clamp(settle_opacity * (1.0 - fade), 0.0, 1.0),
            blur: combined_motion * GROUP_BLUR,
        };

        let letters = self.letters(&first_text, &last_text, |vector| {
            letter_pose(vector, combined_motion, fade, viewport)
        });

        trace!(progress = p, ?style_index, combined_motion, "hero frame");

        HeroFrame {
            progress: p,
            phase: t.phase_at(p),
            style_index,
            style: style.clone(),
            case_mode,
            gap,
            group,
            first: WordPose {
                text: first_text,
                x: first_x,
                width: first_width,
                skew_deg: -skew,
                scale: word_scale,
                opacity: 1.0,
                blur: word_blur,
            },
            last: WordPose {
                text: last_text,
                x: last_x,
                width: last_width,
                skew_deg: skew,
                scale: word_scale,
                opacity: 1.0,
                blur: word_blur,
            },
            letters,
        }
    }

    /// The fully settled title used when motion is reduced
    pub fn settled_frame<M: TextMeasure + ?Sized>(&self, measure: &M) -> HeroFrame {
        let style = self.styles.final_style();
        let first_text = CaseMode::Title.apply(&self.first_word);
        let last_text = CaseMode::Title.apply(&self.last_word);
        let first_width = measure.text_width(&first_text, style.left());
        let last_width = measure.text_width(&last_text, style.right());
        let letters = self.letters(&first_text, &last_text, |_| LetterPose::REST);
        let rest = |text: String, x: f64, width: f64| WordPose {
            text,
            x,
            width,
            skew_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            blur: 0.0,
        };

        HeroFrame {
            progress: self.timeline.final_hold_start,
            phase: Phase::FinalHold,
            style_index: None,
            style: style.clone(),
            case_mode: CaseMode::Title,
            gap: STATIC_HALF_GAP * 2.0,
            group: GroupPose::REST,
            first: rest(first_text, -first_width - STATIC_HALF_GAP, first_width),
            last: rest(last_text, STATIC_HALF_GAP, last_width),
            letters,
        }
    }

    fn letters<F>(&self, first_text: &str, last_text: &str, pose: F) -> Vec<LetterFrame>
    where
        F: Fn(&LetterBurstVector) -> LetterPose,
    {
        let first_glyphs: Vec<char> = first_text.chars().collect();
        let last_glyphs: Vec<char> = last_text.chars().collect();

        self.bursts
            .iter()
            .enumerate()
            .map(|(index, vector)| {
                let (word, glyph) = if index < self.first_len {
                    (WordSlot::First, first_glyphs.get(index))
                } else {
                    (WordSlot::Last, last_glyphs.get(index - self.first_len))
                };
                LetterFrame {
                    index,
                    word,
                    glyph: glyph.map(|c| c.to_string()).unwrap_or_default(),
                    pose: pose(vector),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeroConfig, StyleCycleConfig, TimelineConfig};
    use crate::host::FixedAdvanceMeasure;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEWPORT: Viewport = Viewport {
        width: 1440.0,
        height: 900.0,
    };

    fn animator() -> HeroAnimator {
        let hero = HeroConfig::default();
        let styles = StylePool::with_rng(
            &hero,
            &StyleCycleConfig::default(),
            &mut StdRng::seed_from_u64(3),
        );
        HeroAnimator::new(
            &hero.first_word,
            &hero.last_word,
            PhaseTimeline::from_config(&TimelineConfig::default()).unwrap(),
            styles,
            HoldConfig::default(),
            0.92,
        )
    }

    #[test]
    fn test_starts_off_screen_and_faint() {
        let hero = animator();
        let frame = hero.frame(0.0, VIEWPORT, &FixedAdvanceMeasure::new(160.0));
        assert!(frame.first.x + frame.first.width < -VIEWPORT.width * 0.5);
        assert!(frame.last.x > VIEWPORT.width * 0.5);
        assert!((frame.group.opacity - 0.2).abs() < 1e-12);
        assert!((frame.last.skew_deg - 9.0).abs() < 1e-12);
        assert!((frame.first.skew_deg + 9.0).abs() < 1e-12);
        assert_eq!(frame.phase, Phase::FlyIn);
        assert_eq!(frame.style_index, Some(0));
        assert_eq!(frame.case_mode, CaseMode::Title);
    }

    #[test]
    fn test_words_centered_after_fly_in() {
        let hero = animator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let p = hero.timeline().fly_in_end;
        let frame = hero.frame(p, VIEWPORT, &measure);
        let total = frame.first.width + frame.gap + frame.last.width;
        assert!((frame.first.x + total * 0.5).abs() < 1e-9);
        assert!((frame.last.x - (frame.first.x + frame.first.width + frame.gap)).abs() < 1e-9);
        assert_eq!(frame.first.skew_deg, 0.0);
    }

    #[test]
    fn test_gap_starts_viewport_relative() {
        let hero = animator();
        let frame = hero.frame(0.0, VIEWPORT, &FixedAdvanceMeasure::new(160.0));
        assert!((frame.gap - 56.0).abs() < 1e-12);
        let narrow = hero.frame(0.0, Viewport::new(400.0, 800.0), &FixedAdvanceMeasure::new(160.0));
        assert!((narrow.gap - 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_gap_drifts_during_final_hold() {
        let hero = animator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let t = *hero.timeline();
        let frame = hero.frame(t.final_hold_start, VIEWPORT, &measure);
        let natural = measure.pair_gap(&frame.first.text, &frame.last.text, frame.style.left())
            + 160.0 * OPTICAL_GAP_BOOST;
        assert!((frame.gap - (natural + 0.45)).abs() < 1e-9);

        let end = hero.frame(t.burst_start, VIEWPORT, &measure);
        assert!((end.gap - natural * 1.012).abs() < 1e-9);
    }

    #[test]
    fn test_style_locks_and_stays_locked() {
        let hero = animator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let lock = hero.final_style_start();
        assert!(!hero.frame(lock - 1e-6, VIEWPORT, &measure).is_final_style());

        for step in 0..=100 {
            let p = lock + (1.0 - lock) * step as f64 / 100.0;
            let frame = hero.frame(p, VIEWPORT, &measure);
            assert!(frame.is_final_style(), "unlocked at {}", p);
            assert_eq!(&frame.style, hero.styles().final_style());
            assert_eq!(frame.case_mode, CaseMode::Title);
            assert_eq!(frame.first.text, "Bryan");
            assert_eq!(frame.last.text, "Xu");
        }
    }

    #[test]
    fn test_casing_follows_style_index() {
        let hero = animator();
        let measure = FixedAdvanceMeasure::new(160.0);
        for step in 0..50 {
            let p = hero.final_style_start() * step as f64 / 50.0;
            let frame = hero.frame(p, VIEWPORT, &measure);
            let index = frame.style_index.unwrap();
            assert_eq!(frame.case_mode, CaseMode::for_style_index(index));
            assert_eq!(&frame.style, hero.styles().get(index).unwrap());
        }
    }

    #[test]
    fn test_letters_carry_cased_glyphs() {
        let hero = animator();
        let frame = hero.frame(0.9, VIEWPORT, &FixedAdvanceMeasure::new(160.0));
        let glyphs: String = frame.letters.iter().map(|l| l.glyph.as_str()).collect();
        assert_eq!(glyphs, "BryanXu");
        assert_eq!(frame.letters[4].word, WordSlot::First);
        assert_eq!(frame.letters[5].word, WordSlot::Last);
    }

    #[test]
    fn test_letters_rest_until_burst() {
        let hero = animator();
        let frame = hero.frame(hero.timeline().burst_start, VIEWPORT, &FixedAdvanceMeasure::new(160.0));
        assert!(frame.letters.iter().all(|l| l.pose == LetterPose::REST));
        assert_eq!(frame.group.blur, 0.0);
    }

    #[test]
    fn test_fully_faded_at_end() {
        let hero = animator();
        let frame = hero.frame(1.0, VIEWPORT, &FixedAdvanceMeasure::new(160.0));
        assert_eq!(frame.group.opacity, 0.0);
        assert!(frame.letters.iter().all(|l| l.pose.opacity == 0.0));
        assert!((frame.group.scale - 1.46).abs() < 1e-9);
        assert_eq!(frame.phase, Phase::Done);
    }

    #[test]
    fn test_settled_frame() {
        let hero = animator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let frame = hero.settled_frame(&measure);
        assert!(frame.is_final_style());
        assert_eq!(frame.group, GroupPose::REST);
        assert_eq!(frame.last.x, 32.0);
        assert!((frame.first.x + frame.first.width + 32.0).abs() < 1e-9);
        assert!(frame.letters.iter().all(|l| l.pose == LetterPose::REST));
    }
}

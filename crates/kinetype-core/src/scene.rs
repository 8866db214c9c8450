//! The immutable scene and the per-frame entry point that drives both animators.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::AppConfig;
use crate::hero::{HeroAnimator, HeroFrame};
use crate::host::{ProgressSource, TextMeasure};
use crate::sampler::{section_progress, RegionBox, Viewport};
use crate::style::StylePool;
use crate::timeline::PhaseTimeline;
use crate::typewriter::{ParagraphFrame, ParagraphTypewriter};
use crate::Result;

/// Raw geometry read from the host once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameInputs {
    pub viewport: Viewport,
    pub hero_region: RegionBox,
    pub movement_region: RegionBox,
}

impl FrameInputs {
    pub fn sample<S: ProgressSource + ?Sized>(source: &S) -> Self {
        Self {
            viewport: source.viewport(),
            hero_region: source.hero_region(),
            movement_region: source.movement_region(),
        }
    }

    /// Geometry of a page whose hero and movement sections span the given
    /// number of viewport heights, scrolled so the hero sits at `hero_progress`
    /// and the movement section at `movement_progress`.
    pub fn at_progress(
        viewport: Viewport,
        hero_screens: f64,
        movement_screens: f64,
        hero_progress: f64,
        movement_progress: f64,
    ) -> Self {
        let region = |screens: f64, progress: f64| {
            let height = viewport.height * screens.max(0.0);
            let excess = (height - viewport.height).max(0.0);
            RegionBox::new(-progress * excess, height)
        };
        Self {
            viewport,
            hero_region: region(hero_screens, hero_progress),
            movement_region: region(movement_screens, movement_progress),
        }
    }

    pub fn hero_progress(&self) -> f64 {
        section_progress(self.hero_region, self.viewport.height)
    }

    pub fn movement_progress(&self) -> f64 {
        section_progress(self.movement_region, self.viewport.height)
    }
}

/// Everything presented for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub hero: HeroFrame,
    pub paragraphs: ParagraphFrame,
}

impl SceneFrame {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scene data built once at startup and shared read-only by every frame
#[derive(Debug, Clone)]
pub struct Scene {
    hero: HeroAnimator,
    paragraphs: ParagraphTypewriter,
}

impl Scene {
    pub fn new(hero: HeroAnimator, paragraphs: ParagraphTypewriter) -> Self {
        Self { hero, paragraphs }
    }

    /// Build the scene with a fresh style order
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::from_config_with_rng(config, &mut rand::thread_rng())
    }

    /// Build the scene with a caller-supplied RNG for the style shuffle
    pub fn from_config_with_rng<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Result<Self> {
        let timeline = PhaseTimeline::from_config(&config.timeline)?;
        let styles = StylePool::with_rng(&config.hero, &config.style, rng);
        let hero = HeroAnimator::new(
            &config.hero.first_word,
            &config.hero.last_word,
            timeline,
            styles,
            config.hold.clone(),
            config.style.final_switch_fraction,
        );
        let paragraphs = ParagraphTypewriter::from_config(&config.paragraph);
        debug!(lines = paragraphs.lines().len(), "scene ready");
        Ok(Self::new(hero, paragraphs))
    }

    pub fn hero(&self) -> &HeroAnimator {
        &self.hero
    }

    pub fn paragraphs(&self) -> &ParagraphTypewriter {
        &self.paragraphs
    }

    /// Compute a full frame from sampled geometry
    pub fn render<M: TextMeasure + ?Sized>(&self, inputs: &FrameInputs, measure: &M) -> SceneFrame {
        let hero_progress = inputs.hero_progress();
        let movement_progress = inputs.movement_progress();
        let hold_span = self.paragraphs.hold_span_absolute(
            self.hero.timeline().hold_span,
            inputs.hero_region.height,
            inputs.movement_region.height,
        );
        trace!(hero_progress, movement_progress, hold_span, "rendering scene");

        SceneFrame {
            viewport: inputs.viewport,
            hero: self.hero.frame(hero_progress, inputs.viewport, measure),
            paragraphs: self
                .paragraphs
                .frame(movement_progress, hold_span, inputs.viewport.width),
        }
    }

    /// The static pose shown when motion is reduced
    pub fn settled<M: TextMeasure + ?Sized>(&self, viewport: Viewport, measure: &M) -> SceneFrame {
        SceneFrame {
            viewport,
            hero: self.hero.settled_frame(measure),
            paragraphs: self.paragraphs.settled_frame(),
        }
    }
}

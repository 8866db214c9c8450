use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::easing::EasingType;
use crate::style::{FontSlant, StyleVariant};
use crate::typewriter::Side;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub style: StyleCycleConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub hold: HoldConfig,
    #[serde(default)]
    pub paragraph: ParagraphConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// The two title words and the typographic pools the style cycle draws from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_first_word")]
    pub first_word: String,
    #[serde(default = "default_last_word")]
    pub last_word: String,
    /// Title font size in pixels (drives the optical gap boost)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Font family stacks, one per variant family
    #[serde(default = "default_families")]
    pub families: Vec<String>,
    /// (left word, right word) slants
    #[serde(default = "default_slant_pairs")]
    pub slant_pairs: Vec<[FontSlant; 2]>,
    /// (left word, right word) weights
    #[serde(default = "default_weight_pairs")]
    pub weight_pairs: Vec<[u16; 2]>,
    /// Letter spacing values in em
    #[serde(default = "default_spacing_pool")]
    pub spacing_pool_em: Vec<f64>,
    /// Style the title converges to before the burst
    #[serde(default = "default_final_style")]
    pub final_style: StyleVariant,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            first_word: default_first_word(),
            last_word: default_last_word(),
            font_size: default_font_size(),
            families: default_families(),
            slant_pairs: default_slant_pairs(),
            weight_pairs: default_weight_pairs(),
            spacing_pool_em: default_spacing_pool(),
            final_style: default_final_style(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleCycleConfig {
    /// Approximate number of style changes across the cycling phase
    #[serde(default = "default_target_steps")]
    pub target_steps: u32,
    /// How many times the pool is walked per cycling phase
    #[serde(default = "default_rate_multiplier")]
    pub rate_multiplier: f64,
    /// Fraction of the fly-in after which the final style locks in
    #[serde(default = "default_final_switch_fraction")]
    pub final_switch_fraction: f64,
}

impl Default for StyleCycleConfig {
    fn default() -> Self {
        Self {
            target_steps: default_target_steps(),
            rate_multiplier: default_rate_multiplier(),
            final_switch_fraction: default_final_switch_fraction(),
        }
    }
}

/// Ratios the phase timeline is derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_original_font_phase_end")]
    pub original_font_phase_end: f64,
    #[serde(default = "default_font_phase_length_factor")]
    pub font_phase_length_factor: f64,
    #[serde(default = "default_base_hold_span_factor")]
    pub base_hold_span_factor: f64,
    #[serde(default = "default_hold_scroll_multiplier")]
    pub hold_scroll_multiplier: f64,
    #[serde(default = "default_final_hold_length_multiplier")]
    pub final_hold_length_multiplier: f64,
    /// Common shrink factor for hold, burst and fade durations
    #[serde(default = "default_span_scale")]
    pub span_scale: f64,
    /// Progress at which the title is fully faded
    #[serde(default = "default_fade_end")]
    pub fade_end: f64,
    #[serde(default = "default_fly_in_length_multiplier")]
    pub fly_in_length_multiplier: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            original_font_phase_end: default_original_font_phase_end(),
            font_phase_length_factor: default_font_phase_length_factor(),
            base_hold_span_factor: default_base_hold_span_factor(),
            hold_scroll_multiplier: default_hold_scroll_multiplier(),
            final_hold_length_multiplier: default_final_hold_length_multiplier(),
            span_scale: default_span_scale(),
            fade_end: default_fade_end(),
            fly_in_length_multiplier: default_fly_in_length_multiplier(),
        }
    }
}

/// Knobs for the final-hold drift. The scale deltas are tiny by default and
/// the group delta is off; they stay configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldConfig {
    #[serde(default = "default_spacing_drift_base")]
    pub spacing_drift_base: f64,
    #[serde(default = "default_spacing_drift_multiplier")]
    pub spacing_drift_multiplier: f64,
    #[serde(default = "default_hold_scale_delta")]
    pub word_scale_delta: f64,
    #[serde(default = "default_hold_scale_delta")]
    pub gap_scale_delta: f64,
    #[serde(default)]
    pub group_scale_delta: f64,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            spacing_drift_base: default_spacing_drift_base(),
            spacing_drift_multiplier: default_spacing_drift_multiplier(),
            word_scale_delta: default_hold_scale_delta(),
            gap_scale_delta: default_hold_scale_delta(),
            group_scale_delta: 0.0,
        }
    }
}

impl HoldConfig {
    /// Extra gap (px) added at the start of the final hold, decaying to zero
    pub fn spacing_drift(&self) -> f64 {
        self.spacing_drift_base * self.spacing_drift_multiplier
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    pub text: String,
    #[serde(default)]
    pub from: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphConfig {
    /// Lower clamp for the hero hold span mapped into the paragraph region
    #[serde(default = "default_min_center_hold")]
    pub min_center_hold: f64,
    /// Upper clamp for the same
    #[serde(default = "default_max_center_hold")]
    pub max_center_hold: f64,
    #[serde(default = "default_lines")]
    pub lines: Vec<LineConfig>,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            min_center_hold: default_min_center_hold(),
            max_center_hold: default_max_center_hold(),
            lines: default_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Present the settled pose and never animate
    #[serde(default)]
    pub reduced_motion: bool,
    /// Hero section height in viewport heights
    #[serde(default = "default_hero_screens")]
    pub hero_screens: f64,
    /// Paragraph section height in viewport heights
    #[serde(default = "default_movement_screens")]
    pub movement_screens: f64,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            reduced_motion: false,
            hero_screens: default_hero_screens(),
            movement_screens: default_movement_screens(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Smooth page scrolling in the preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinetype")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_first_word() -> String {
    "Bryan".to_string()
}

fn default_last_word() -> String {
    "Xu".to_string()
}

fn default_font_size() -> f64 {
    160.0
}

fn default_families() -> Vec<String> {
    vec![
        r#""Voyage", "Instrument Serif", serif"#.to_string(),
        r#""Parabolica", "Instrument Serif", serif"#.to_string(),
        r#""Redaction 50", "Redaction", "Instrument Serif", serif"#.to_string(),
    ]
}

fn default_slant_pairs() -> Vec<[FontSlant; 2]> {
    use FontSlant::{Italic, Normal};
    vec![
        [Normal, Normal],
        [Italic, Normal],
        [Normal, Italic],
        [Italic, Italic],
    ]
}

fn default_weight_pairs() -> Vec<[u16; 2]> {
    vec![
        [200, 900],
        [300, 800],
        [400, 700],
        [500, 600],
        [700, 400],
        [800, 300],
        [900, 200],
        [600, 500],
    ]
}

fn default_spacing_pool() -> Vec<f64> {
    vec![-0.033, -0.028, -0.024, -0.02, -0.015, -0.01]
}

fn default_final_style() -> StyleVariant {
    StyleVariant {
        family: r#""Instrument Serif", serif"#.to_string(),
        left_slant: FontSlant::Normal,
        right_slant: FontSlant::Normal,
        left_weight: 400,
        right_weight: 400,
        letter_spacing_em: -0.022,
    }
}

fn default_target_steps() -> u32 {
    30
}

fn default_rate_multiplier() -> f64 {
    3.6
}

fn default_final_switch_fraction() -> f64 {
    0.92
}

fn default_original_font_phase_end() -> f64 {
    0.72
}

fn default_font_phase_length_factor() -> f64 {
    0.45
}

fn default_base_hold_span_factor() -> f64 {
    0.1
}

fn default_hold_scroll_multiplier() -> f64 {
    2.5
}

fn default_final_hold_length_multiplier() -> f64 {
    0.8
}

fn default_span_scale() -> f64 {
    0.3
}

fn default_fade_end() -> f64 {
    0.985
}

fn default_fly_in_length_multiplier() -> f64 {
    0.6
}

fn default_spacing_drift_base() -> f64 {
    0.9
}

fn default_spacing_drift_multiplier() -> f64 {
    0.5
}

fn default_hold_scale_delta() -> f64 {
    0.012
}

fn default_lines() -> Vec<LineConfig> {
    [
        ("I design systems that move with intent.", Side::Left),
        ("Every frame is computed, never stored.", Side::Right),
        ("Scroll is the only clock this page needs.", Side::Left),
        ("Type settles, holds, then lets go.", Side::Right),
    ]
    .into_iter()
    .map(|(text, from)| LineConfig {
        text: text.to_string(),
        from,
    })
    .collect()
}

fn default_min_center_hold() -> f64 {
    0.12
}

fn default_max_center_hold() -> f64 {
    0.85
}

fn default_tick_rate() -> u64 {
    100
}

fn default_hero_screens() -> f64 {
    5.0
}

fn default_movement_screens() -> f64 {
    3.0
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    2
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/kinetype/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("kinetype")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal preview owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("kinetype.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

//! Typographic style variants and the shuffled cycle the title walks through.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{HeroConfig, StyleCycleConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Letter casing applied to both title words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Title,
    Lower,
    Upper,
}

impl CaseMode {
    /// Casing used while cycling: title, lower and upper in a two-step pattern
    pub fn for_style_index(index: usize) -> Self {
        match (index * 2) % 3 {
            0 => CaseMode::Title,
            1 => CaseMode::Lower,
            _ => CaseMode::Upper,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Title => {
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out: String = first.to_uppercase().collect();
                        out.push_str(&chars.as_str().to_lowercase());
                        out
                    }
                    None => String::new(),
                }
            }
        }
    }
}

/// How both title words are rendered at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleVariant {
    pub family: String,
    pub left_slant: FontSlant,
    pub right_slant: FontSlant,
    pub left_weight: u16,
    pub right_weight: u16,
    pub letter_spacing_em: f64,
}

impl StyleVariant {
    pub fn left(&self) -> WordStyle<'_> {
        WordStyle {
            family: &self.family,
            slant: self.left_slant,
            weight: self.left_weight,
            letter_spacing_em: self.letter_spacing_em,
        }
    }

    pub fn right(&self) -> WordStyle<'_> {
        WordStyle {
            family: &self.family,
            slant: self.right_slant,
            weight: self.right_weight,
            letter_spacing_em: self.letter_spacing_em,
        }
    }
}

/// The style of a single word, as handed to text measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStyle<'a> {
    pub family: &'a str,
    pub slant: FontSlant,
    pub weight: u16,
    pub letter_spacing_em: f64,
}

/// Number of variants needed to cover `target_steps` at `rate_multiplier`
pub fn pool_length(target_steps: u32, rate_multiplier: f64) -> usize {
    let rate = if rate_multiplier.is_finite() && rate_multiplier > 0.0 {
        rate_multiplier
    } else {
        1.0
    };
    (target_steps as f64 / rate).ceil() as usize + 2
}

/// Shuffled style variants plus the final style. Read-only after construction.
#[derive(Debug, Clone)]
pub struct StylePool {
    variants: Vec<StyleVariant>,
    final_style: StyleVariant,
    rate_multiplier: f64,
}

impl StylePool {
    /// Build the pool with a thread-local RNG; the order differs per session
    pub fn new(hero: &HeroConfig, cycle: &StyleCycleConfig) -> Self {
        Self::with_rng(hero, cycle, &mut rand::thread_rng())
    }

    /// Build the pool with a caller-supplied RNG (reproducible orders)
    pub fn with_rng<R: Rng + ?Sized>(hero: &HeroConfig, cycle: &StyleCycleConfig, rng: &mut R) -> Self {
        let len = pool_length(cycle.target_steps, cycle.rate_multiplier);
        let mut seeds: Vec<usize> = (0..len).collect();
        seeds.shuffle(rng);

        if hero.families.is_empty()
            || hero.slant_pairs.is_empty()
            || hero.weight_pairs.is_empty()
            || hero.spacing_pool_em.is_empty()
        {
            warn!("style pools partially empty, falling back to final style values");
        }

        let variants = seeds
            .into_iter()
            .map(|seed| variant_for_seed(seed, hero))
            .collect::<Vec<_>>();
        debug!(len = variants.len(), "built style pool");

        Self {
            variants,
            final_style: hero.final_style.clone(),
            rate_multiplier: cycle.rate_multiplier,
        }
    }

    pub fn variants(&self) -> &[StyleVariant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn final_style(&self) -> &StyleVariant {
        &self.final_style
    }

    pub fn get(&self, index: usize) -> Option<&StyleVariant> {
        self.variants.get(index)
    }

    /// Total step count across the cycling phase, never below 1
    pub fn total_steps(&self) -> usize {
        let steps = (self.variants.len() as f64 * self.rate_multiplier).floor();
        if steps.is_finite() && steps >= 1.0 {
            steps as usize
        } else {
            1
        }
    }

    /// Index of the variant active at `local` progress through the cycling phase
    pub fn index_at(&self, local: f64) -> Option<usize> {
        if self.variants.is_empty() {
            return None;
        }
        let step = (local * self.total_steps() as f64).floor().max(0.0) as usize;
        Some(step % self.variants.len())
    }
}

/// Map one seed to a variant. The `*3+1` and `*2+3` offsets decorrelate the
/// weight and spacing picks from the family and slant picks.
fn variant_for_seed(seed: usize, hero: &HeroConfig) -> StyleVariant {
    let fallback = &hero.final_style;
    let family = pick(&hero.families, seed)
        .cloned()
        .unwrap_or_else(|| fallback.family.clone());
    let [left_slant, right_slant] = pick(&hero.slant_pairs, seed)
        .copied()
        .unwrap_or([fallback.left_slant, fallback.right_slant]);
    let [left_weight, right_weight] = pick(&hero.weight_pairs, seed * 3 + 1)
        .copied()
        .unwrap_or([fallback.left_weight, fallback.right_weight]);
    let letter_spacing_em = pick(&hero.spacing_pool_em, seed * 2 + 3)
        .copied()
        .unwrap_or(fallback.letter_spacing_em);

    StyleVariant {
        family,
        left_slant,
        right_slant,
        left_weight,
        right_weight,
        letter_spacing_em,
    }
}

fn pick<T>(pool: &[T], index: usize) -> Option<&T> {
    if pool.is_empty() {
        None
    } else {
        pool.get(index % pool.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(seed: u64) -> StylePool {
        StylePool::with_rng(
            &HeroConfig::default(),
            &StyleCycleConfig::default(),
            &mut StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_pool_length() {
        assert_eq!(pool_length(30, 3.6), 11);
        assert_eq!(pool_length(30, 3.0), 12);
        assert_eq!(pool_length(0, 3.6), 2);
        // Degenerate rate falls back to one step per variant
        assert_eq!(pool_length(4, 0.0), 6);
    }

    #[test]
    fn test_pool_is_a_permutation_of_all_seeds() {
        let hero = HeroConfig::default();
        let pool = pool(7);
        assert_eq!(pool.len(), 11);

        let mut expected: Vec<StyleVariant> = (0..11).map(|s| variant_for_seed(s, &hero)).collect();
        let mut actual = pool.variants().to_vec();
        let key = |v: &StyleVariant| {
            format!("{}|{:?}|{:?}|{}|{}|{}", v.family, v.left_slant, v.right_slant, v.left_weight, v.right_weight, v.letter_spacing_em)
        };
        expected.sort_by_key(key);
        actual.sort_by_key(key);
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_same_rng_seed_same_order() {
        assert_eq!(pool(42).variants(), pool(42).variants());
    }

    #[test]
    fn test_seed_mapping_decorrelates_pools() {
        let hero = HeroConfig::default();
        let zero = variant_for_seed(0, &hero);
        assert_eq!(zero.family, hero.families[0]);
        assert_eq!([zero.left_slant, zero.right_slant], hero.slant_pairs[0]);
        assert_eq!([zero.left_weight, zero.right_weight], hero.weight_pairs[1]);
        assert_eq!(zero.letter_spacing_em, hero.spacing_pool_em[3]);

        let five = variant_for_seed(5, &hero);
        assert_eq!(five.family, hero.families[2]);
        assert_eq!([five.left_weight, five.right_weight], hero.weight_pairs[0]);
        assert_eq!(five.letter_spacing_em, hero.spacing_pool_em[1]);
    }

    #[test]
    fn test_empty_pools_fall_back_to_final_style() {
        let hero = HeroConfig {
            families: Vec::new(),
            weight_pairs: Vec::new(),
            ..HeroConfig::default()
        };
        let variant = variant_for_seed(3, &hero);
        assert_eq!(variant.family, hero.final_style.family);
        assert_eq!(variant.left_weight, 400);
        assert_eq!(variant.right_weight, 400);
    }

    #[test]
    fn test_index_at_walks_the_pool() {
        let pool = pool(1);
        // 11 variants * 3.6 = 39 steps
        assert_eq!(pool.total_steps(), 39);
        assert_eq!(pool.index_at(0.0), Some(0));
        assert_eq!(pool.index_at(12.0 / 39.0 + 1e-9), Some(1));
        assert_eq!(pool.index_at(1.0), Some(39 % 11));
    }

    #[test]
    fn test_case_modes() {
        assert_eq!(CaseMode::Title.apply("bRYAN"), "Bryan");
        assert_eq!(CaseMode::Lower.apply("Bryan"), "bryan");
        assert_eq!(CaseMode::Upper.apply("Xu"), "XU");
        assert_eq!(CaseMode::Title.apply(""), "");
        assert_eq!(CaseMode::for_style_index(0), CaseMode::Title);
        assert_eq!(CaseMode::for_style_index(1), CaseMode::Upper);
        assert_eq!(CaseMode::for_style_index(2), CaseMode::Lower);
        assert_eq!(CaseMode::for_style_index(3), CaseMode::Title);
    }
}

//! Pseudo-random streams for the lead calendar.
//!
//! The calendar only needs "looks random" values in `[0, 1)`. Two seeded
//! streams make a given week render identically on every run:
//!
//! - [`SplitMix64`] - the default, a proper 64-bit mixing generator.
//! - [`SineStream`] - `fract(sin(seed) * 10000)`, kept so pages can match
//!   the numbers the first version of the site produced.
//!
//! [`Entropy`] wraps `rand`'s thread-local generator for runs where
//! reproducibility does not matter.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use crate::error::LeadeaError;

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn below(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len - 1)
    }

    /// Uniform integer in `min..=max`.
    fn between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = usize::try_from(u64::from(max - min) + 1).unwrap_or(usize::MAX);
        min + self.below(span) as u32
    }
}

/// Sine-hash stream: `fract(sin(seed * K) * M)`, seed advanced per draw.
///
/// Not a real PRNG. Values cluster and the period is poor; it only has to
/// be stable for a given seed on the same float semantics.
#[derive(Debug, Clone)]
pub struct SineStream {
    seed: f64,
}

impl SineStream {
    const K: f64 = 1.0;
    const M: f64 = 10_000.0;

    pub fn new(seed: i64) -> Self {
        Self { seed: seed as f64 }
    }
}

impl RandomSource for SineStream {
    fn next_unit(&mut self) -> f64 {
        let x = (self.seed * Self::K).sin() * Self::M;
        self.seed += 1.0;
        let frac = x - x.floor();
        // x slightly below zero can round up to exactly 1.0
        if frac >= 1.0 { 0.0 } else { frac }
    }
}

/// splitmix64 (Steele, Lea, Flood 2014).
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_unit(&mut self) -> f64 {
        // top 53 bits -> exact f64 mantissa
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Non-reproducible stream backed by the thread-local generator.
#[derive(Debug, Clone)]
pub struct Entropy(ThreadRng);

impl Default for Entropy {
    fn default() -> Self {
        Self(rand::rng())
    }
}

impl RandomSource for Entropy {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Which stream backs a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomMode {
    #[default]
    SplitMix,
    Sine,
    Entropy,
}

impl RandomMode {
    pub fn as_label(&self) -> &'static str {
        match self {
            RandomMode::SplitMix => "splitmix",
            RandomMode::Sine => "sine",
            RandomMode::Entropy => "entropy",
        }
    }

    /// True when the same seed yields the same stream.
    pub fn is_seeded(&self) -> bool {
        !matches!(self, RandomMode::Entropy)
    }

    /// Build the stream for a window seed. The seed is ignored for `Entropy`.
    pub fn stream(&self, seed: i64) -> LeadRng {
        match self {
            RandomMode::SplitMix => LeadRng::SplitMix(SplitMix64::new(seed as u64)),
            RandomMode::Sine => LeadRng::Sine(SineStream::new(seed)),
            RandomMode::Entropy => LeadRng::Entropy(Entropy::default()),
        }
    }
}

impl fmt::Display for RandomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for RandomMode {
    type Err = LeadeaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "splitmix" | "splitmix64" => Ok(RandomMode::SplitMix),
            "sine" => Ok(RandomMode::Sine),
            "entropy" | "random" => Ok(RandomMode::Entropy),
            other => Err(LeadeaError::UnknownVariant {
                kind: "random mode",
                value: other.to_string(),
            }),
        }
    }
}

/// The concrete stream picked by [`RandomMode::stream`].
#[derive(Debug, Clone)]
pub enum LeadRng {
    SplitMix(SplitMix64),
    Sine(SineStream),
    Entropy(Entropy),
}

impl RandomSource for LeadRng {
    fn next_unit(&mut self) -> f64 {
        match self {
            LeadRng::SplitMix(rng) => rng.next_unit(),
            LeadRng::Sine(rng) => rng.next_unit(),
            LeadRng::Entropy(rng) => rng.next_unit(),
        }
    }
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Days between 1970-01-01 and `date` (negative before the epoch).
pub fn epoch_day(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}

/// Seed for a week window: the epoch week number of its first day.
///
/// Any two week starts on the same weekday are seven days apart, so they
/// always land on different week numbers.
pub fn week_seed(week_start: NaiveDate) -> i64 {
    epoch_day(week_start).div_euclid(7)
}

/// Seed for a month window: the epoch day of the first of the month.
pub fn month_seed(month_start: NaiveDate) -> i64 {
    epoch_day(month_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sine_stream_is_reproducible() {
        let mut a = SineStream::new(2817);
        let mut b = SineStream::new(2817);
        let xs: Vec<f64> = (0..32).map(|_| a.next_unit()).collect();
        let ys: Vec<f64> = (0..32).map(|_| b.next_unit()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn sine_stream_stays_in_unit_interval() {
        for seed in [-5000_i64, -1, 0, 1, 42, 2817, 1_000_000] {
            let mut rng = SineStream::new(seed);
            for _ in 0..500 {
                let v = rng.next_unit();
                assert!((0.0..1.0).contains(&v), "seed {seed} produced {v}");
            }
        }
    }

    #[test]
    fn sine_stream_matches_formula() {
        let mut rng = SineStream::new(3);
        let x = 3.0_f64.sin() * 10_000.0;
        assert_eq!(rng.next_unit(), x - x.floor());
    }

    #[test]
    fn splitmix_known_sequence() {
        // Reference values for seed 0 from the published splitmix64 code.
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 0xE220_A839_7B1D_CDAF);
        assert_eq!(rng.next_u64(), 0x6E78_9E6A_A1B9_65F4);
        assert_eq!(rng.next_u64(), 0x06C4_5D18_8009_454F);
    }

    #[test]
    fn splitmix_unit_values_in_range() {
        let mut rng = SplitMix64::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn between_covers_inclusive_bounds() {
        let mut rng = SplitMix64::new(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let n = rng.between(2, 5);
            assert!((2..=5).contains(&n));
            seen[(n - 2) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));

        rng.between(0, u32::MAX);
        assert!(rng.between(u32::MAX - 1, u32::MAX) >= u32::MAX - 1);
    }

    #[test]
    fn below_handles_empty_and_single() {
        let mut rng = SplitMix64::new(1);
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn entropy_values_in_range() {
        let mut rng = Entropy::default();
        for _ in 0..1_000 {
            assert!((0.0..1.0).contains(&rng.next_unit()));
        }
    }

    #[test]
    fn week_seed_differs_between_consecutive_weeks() {
        let sunday = date(2023, 12, 31);
        let next = date(2024, 1, 7);
        assert_ne!(week_seed(sunday), week_seed(next));
        assert_eq!(week_seed(next) - week_seed(sunday), 1);
    }

    #[test]
    fn epoch_day_handles_dates_before_epoch() {
        assert_eq!(epoch_day(date(1970, 1, 1)), 0);
        assert_eq!(epoch_day(date(1969, 12, 31)), -1);
        assert_eq!(week_seed(date(1969, 12, 31)), -1);
    }

    #[test]
    fn random_mode_parses_labels() {
        assert_eq!("splitmix".parse::<RandomMode>().unwrap(), RandomMode::SplitMix);
        assert_eq!("SINE".parse::<RandomMode>().unwrap(), RandomMode::Sine);
        assert_eq!("entropy".parse::<RandomMode>().unwrap(), RandomMode::Entropy);
        assert!("dice".parse::<RandomMode>().is_err());
        assert!(RandomMode::Sine.is_seeded());
        assert!(!RandomMode::Entropy.is_seeded());
    }
}

//! Weighted category selection.

use serde::{Deserialize, Serialize};

use crate::error::{LeadeaError, Result};
use crate::event::LeadCategory;
use crate::random::RandomSource;

/// Weights always add up to this.
pub const TOTAL_WEIGHT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub category: LeadCategory,
    pub weight: u32,
}

impl CategoryWeight {
    pub const fn new(category: LeadCategory, weight: u32) -> Self {
        Self { category, weight }
    }
}

/// 78 / 13 / 6 / 3, the split shown on the live dashboard.
pub const DEFAULT_WEIGHTS: [CategoryWeight; 4] = [
    CategoryWeight::new(LeadCategory::QualifiedLead, 78),
    CategoryWeight::new(LeadCategory::Referral, 13),
    CategoryWeight::new(LeadCategory::OrganicSearch, 6),
    CategoryWeight::new(LeadCategory::SocialMedia, 3),
];

/// A validated, ordered weight table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWeights {
    entries: Vec<CategoryWeight>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            entries: DEFAULT_WEIGHTS.to_vec(),
        }
    }
}

impl CategoryWeights {
    /// Build a table; entries must be non-empty, non-zero and sum to 100.
    pub fn new(entries: Vec<CategoryWeight>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LeadeaError::EmptyWeights);
        }
        if let Some(zero) = entries.iter().find(|e| e.weight == 0) {
            return Err(LeadeaError::ZeroWeight {
                category: zero.category.to_string(),
            });
        }
        let sum: u64 = entries.iter().map(|e| u64::from(e.weight)).sum();
        if sum != u64::from(TOTAL_WEIGHT) {
            return Err(LeadeaError::WeightSum { sum });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CategoryWeight] {
        &self.entries
    }

    pub fn weight_of(&self, category: LeadCategory) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.weight)
            .sum()
    }

    /// Pick with an explicit draw in `[0, 100)`.
    ///
    /// Returns the first category whose running total reaches the draw, or
    /// the first category if float error lets the draw fall past the end.
    pub fn select_with_draw(&self, draw: f64) -> LeadCategory {
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += f64::from(entry.weight);
            if cumulative >= draw {
                return entry.category;
            }
        }
        self.entries[0].category
    }

    pub fn select<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LeadCategory {
        self.select_with_draw(rng.next_unit() * f64::from(TOTAL_WEIGHT))
    }
}

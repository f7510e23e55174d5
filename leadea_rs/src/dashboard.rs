//! Figures for the "Lead Generation Dashboard" panel next to the calendar.

use serde::Serialize;

use crate::event::LeadCategory;
use crate::random::RandomSource;
use crate::weights::{CategoryWeights, TOTAL_WEIGHT};

/// Shown as-is; it is marketing copy, not a computed value.
pub const CONVERSION_RATE: &str = "94.7%";

/// Leads a single "Generate New Lead" click can add.
pub const NEW_LEADS_MIN: u32 = 1;
pub const NEW_LEADS_MAX: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub category: LeadCategory,
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub leads_this_week: u32,
    pub from_last_week: u32,
    pub sources: Vec<SourceCount>,
    pub conversion_rate: &'static str,
}

/// Split `count` by source weight, rounding each share down.
pub fn source_breakdown(count: u32, weights: &CategoryWeights) -> Vec<SourceCount> {
    weights
        .entries()
        .iter()
        .map(|entry| SourceCount {
            category: entry.category,
            label: entry.category.source_label(),
            count: share(count, entry.weight, TOTAL_WEIGHT),
        })
        .collect()
}

/// Growth over last week, 15% rounded down.
pub fn week_over_week(count: u32) -> u32 {
    share(count, 15, 100)
}

/// `count * part / whole` rounded down, computed wide so it never overflows.
fn share(count: u32, part: u32, whole: u32) -> u32 {
    let wide = u64::from(count) * u64::from(part) / u64::from(whole);
    u32::try_from(wide).unwrap_or(u32::MAX)
}

pub fn dashboard_stats(count: u32, weights: &CategoryWeights) -> DashboardStats {
    DashboardStats {
        leads_this_week: count,
        from_last_week: week_over_week(count),
        sources: source_breakdown(count, weights),
        conversion_rate: CONVERSION_RATE,
    }
}

/// Live counter behind the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadCounter {
    count: u32,
}

impl LeadCounter {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Book 1..=3 new leads and return how many were added.
    pub fn generate_new_leads<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let added = rng.between(NEW_LEADS_MIN, NEW_LEADS_MAX);
        self.count = self.count.saturating_add(added);
        added
    }

    pub fn stats(&self, weights: &CategoryWeights) -> DashboardStats {
        dashboard_stats(self.count, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SplitMix64;

    #[test]
    fn breakdown_for_default_target() {
        let sources = source_breakdown(23, &CategoryWeights::default());
        let counts: Vec<(&str, u32)> = sources.iter().map(|s| (s.label, s.count)).collect();
        // floor(23 * .78) = 17, floor(23 * .13) = 2, floor(23 * .06) = 1, floor(23 * .03) = 0
        assert_eq!(
            counts,
            vec![
                ("Leadea Platform", 17),
                ("Referrals", 2),
                ("Organic Search", 1),
                ("Social Media", 0),
            ]
        );
    }

    #[test]
    fn week_over_week_rounds_down() {
        assert_eq!(week_over_week(23), 3);
        assert_eq!(week_over_week(6), 0);
        assert_eq!(week_over_week(100), 15);
    }

    #[test]
    fn breakdown_never_exceeds_total() {
        let weights = CategoryWeights::default();
        for count in 0..500 {
            let sum: u32 = source_breakdown(count, &weights).iter().map(|s| s.count).sum();
            assert!(sum <= count);
        }
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let weights = CategoryWeights::default();
        let sources = source_breakdown(u32::MAX, &weights);
        assert_eq!(sources[0].count, (u64::from(u32::MAX) * 78 / 100) as u32);
        assert!(sources.iter().map(|s| u64::from(s.count)).sum::<u64>() <= u64::from(u32::MAX));
        assert_eq!(week_over_week(300_000_000), 45_000_000);
        assert_eq!(week_over_week(u32::MAX), (u64::from(u32::MAX) * 15 / 100) as u32);

        let stats = LeadCounter::new(u32::MAX).stats(&weights);
        assert_eq!(stats.leads_this_week, u32::MAX);
    }

    #[test]
    fn new_leads_add_one_to_three() {
        let mut counter = LeadCounter::new(23);
        let mut rng = SplitMix64::new(11);
        for _ in 0..100 {
            let before = counter.count();
            let added = counter.generate_new_leads(&mut rng);
            assert!((1..=3).contains(&added));
            assert_eq!(counter.count(), before + added);
        }
    }

    #[test]
    fn stats_follow_counter() {
        let counter = LeadCounter::new(40);
        let stats = counter.stats(&CategoryWeights::default());
        assert_eq!(stats.leads_this_week, 40);
        assert_eq!(stats.from_last_week, 6);
        assert_eq!(stats.conversion_rate, "94.7%");
        assert_eq!(stats.sources[0].count, 31);
    }
}

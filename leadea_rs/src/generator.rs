//! Mock lead event generation.
//!
//! For every weekday on screen the generator draws a number of events,
//! gives each a time slot that is still free that day, a weighted
//! category and some flavor text. Slot collisions are retried a bounded
//! number of times; an event that never finds a free slot is dropped.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{CalendarConfig, Layout};
use crate::event::{COMPANIES, CalendarEvent, LOCATIONS, TimeSlot, event_id, sort_events};
use crate::navigation::{CalendarWindow, ViewMode, is_weekend, week_start};
use crate::random::{RandomSource, month_seed, week_seed};

pub struct EventGenerator<'a> {
    config: &'a CalendarConfig,
}

impl<'a> EventGenerator<'a> {
    pub fn new(config: &'a CalendarConfig) -> Self {
        Self { config }
    }

    /// Weekdays shown for `reference` in the given layout.
    ///
    /// Desktop: the weekdays of the week containing `reference`, capped at
    /// `days_to_show`. Mobile: `mobile_days_to_show` weekdays starting at
    /// `reference` itself (rolled forward past a weekend).
    pub fn visible_days(&self, reference: NaiveDate, layout: Layout) -> Vec<NaiveDate> {
        let wanted = self.config.weekdays_for(layout) as usize;
        match layout {
            Layout::Desktop => week_start(reference, self.config.week_start)
                .iter_days()
                .take(7)
                .filter(|d| !is_weekend(*d))
                .take(wanted)
                .collect(),
            Layout::Mobile => reference
                .iter_days()
                .filter(|d| !is_weekend(*d))
                .take(wanted)
                .collect(),
        }
    }

    /// Events for the days visible around `reference`, sorted.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        reference: NaiveDate,
        layout: Layout,
        rng: &mut R,
    ) -> Vec<CalendarEvent> {
        let days = self.visible_days(reference, layout);
        self.generate_for_days(&days, rng)
    }

    /// Events for an explicit list of days. Weekend days are skipped.
    pub fn generate_for_days<R: RandomSource + ?Sized>(
        &self,
        days: &[NaiveDate],
        rng: &mut R,
    ) -> Vec<CalendarEvent> {
        let mut events: Vec<CalendarEvent> = days
            .iter()
            .filter(|d| !is_weekend(**d))
            .flat_map(|day| self.events_for_day(*day, rng))
            .collect();
        sort_events(&mut events);
        events
    }

    fn events_for_day<R: RandomSource + ?Sized>(
        &self,
        day: NaiveDate,
        rng: &mut R,
    ) -> Vec<CalendarEvent> {
        let cfg = self.config;
        let wanted = rng.between(cfg.events_min, cfg.events_max) as usize;
        let slots = cfg.slot_count() as usize;
        let mut taken: HashSet<TimeSlot> = HashSet::with_capacity(wanted.min(slots));
        let mut events = Vec::with_capacity(wanted.min(slots));

        for index in 0..wanted {
            if taken.len() >= slots {
                debug!(%day, dropped = wanted - index, "every slot taken, dropping remaining events");
                break;
            }
            let Some(slot) = self.free_slot(&taken, rng) else {
                debug!(%day, index, "no free slot after retries, dropping event");
                continue;
            };
            taken.insert(slot);

            let category = cfg.weights.select(rng);
            let descriptions = category.descriptions();
            let description = descriptions[rng.below(descriptions.len())];
            let company = COMPANIES[rng.below(COMPANIES.len())];
            let location = LOCATIONS[rng.below(LOCATIONS.len())];

            events.push(CalendarEvent {
                id: event_id(day, index),
                title: category.title().to_string(),
                category,
                date: day,
                time: slot.to_string(),
                description: Some(description.to_string()),
                company: Some(company.to_string()),
                location: Some(location.to_string()),
            });
        }
        events
    }

    fn free_slot<R: RandomSource + ?Sized>(
        &self,
        taken: &HashSet<TimeSlot>,
        rng: &mut R,
    ) -> Option<TimeSlot> {
        (0..self.config.max_slot_retries)
            .filter_map(|_| self.draw_slot(rng))
            .find(|slot| !taken.contains(slot))
    }

    fn draw_slot<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<TimeSlot> {
        let cfg = self.config;
        let idx = rng.below(cfg.slot_count() as usize) as u32;
        if cfg.half_hour_slots {
            TimeSlot::new(cfg.first_hour + idx / 2, (idx % 2) * 30)
        } else {
            TimeSlot::new(cfg.first_hour + idx, 0)
        }
    }
}

/// Seed for a window: epoch week number for weeks, epoch day of the first
/// of the month for months.
pub fn window_seed(window: &CalendarWindow) -> i64 {
    match window.view {
        ViewMode::Week => week_seed(window.start()),
        ViewMode::Month => month_seed(window.start()),
    }
}

/// Generate the events of a window with the configured random mode.
///
/// With a seeded mode the same window always produces the same events.
pub fn events_for_window(
    config: &CalendarConfig,
    window: &CalendarWindow,
    layout: Layout,
) -> Vec<CalendarEvent> {
    let seed = window_seed(window);
    let mut rng = config.random.stream(seed);
    let generator = EventGenerator::new(config);
    let events = match window.view {
        ViewMode::Week => generator.generate(window.anchor, layout, &mut rng),
        ViewMode::Month => generator.generate_for_days(&window.days(), &mut rng),
    };
    debug!(
        view = %window.view,
        start = %window.start(),
        seed,
        random = %config.random,
        count = events.len(),
        "generated window events"
    );
    events
}

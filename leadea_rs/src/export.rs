//! Static export: core calendar data into `site-leptos` view types, and a
//! run of consecutive windows written out as linked HTML pages.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use site_leptos::render_page;
use site_leptos::types::{
    CalendarView, DashboardView, DayCell, EventCard, NavLink, SitePage, SourceStat,
};
use tracing::{debug, info};

use crate::config::ResolvedSettings;
use crate::dashboard::{DashboardStats, dashboard_stats};
use crate::error::{LeadeaError, Result};
use crate::event::CalendarEvent;
use crate::generator::{EventGenerator, events_for_window};
use crate::navigation::{CalendarWindow, ViewMode, is_today, month_grid};
use crate::theme::ThemeStore;

const NAV: [(&str, &str); 3] = [
    ("Features", "#features"),
    ("Pricing", "#pricing"),
    ("FAQ", "#faq"),
];

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Any date inside the first window.
    pub reference: NaiveDate,
    /// Number of consecutive windows to render (at least 1).
    pub pages: usize,
    pub today: NaiveDate,
}

/// One written page.
#[derive(Debug, Clone)]
pub struct ExportedPage {
    pub window: CalendarWindow,
    pub path: PathBuf,
    pub events: usize,
}

/// `week-2023-12-31.html`, `month-2024-01.html`.
pub fn page_file_name(window: &CalendarWindow) -> String {
    format!("{}.html", window.slug())
}

pub fn event_card(event: &CalendarEvent) -> EventCard {
    EventCard {
        id: event.id.clone(),
        title: event.title.clone(),
        time: event.time.clone(),
        category: event.category.as_label().to_string(),
        description: event.description.clone(),
        company: event.company.clone(),
        location: event.location.clone(),
    }
}

pub fn dashboard_view(stats: &DashboardStats) -> DashboardView {
    DashboardView {
        leads_this_week: stats.leads_this_week,
        from_last_week: stats.from_last_week,
        sources: stats
            .sources
            .iter()
            .map(|s| SourceStat {
                label: s.label.to_string(),
                count: s.count,
                category: s.category.as_label().to_string(),
            })
            .collect(),
        conversion_rate: stats.conversion_rate.to_string(),
    }
}

/// Grid cells for a window with its (already sorted) events attached.
///
/// Week windows get one cell per visible weekday for `layout`. Month
/// windows get the full month grid, leading blanks included.
pub fn calendar_view(
    settings: &ResolvedSettings,
    window: &CalendarWindow,
    events: &[CalendarEvent],
    today: NaiveDate,
) -> CalendarView {
    let mut by_day: BTreeMap<NaiveDate, Vec<EventCard>> = BTreeMap::new();
    for event in events {
        by_day.entry(event.date).or_default().push(event_card(event));
    }

    let mut cell = |date: NaiveDate, label: String| DayCell {
        iso_date: Some(date.format("%Y-%m-%d").to_string()),
        day_label: label,
        is_today: is_today(date, today),
        events: by_day.remove(&date).unwrap_or_default(),
    };

    let (weekday_labels, cells) = match window.view {
        ViewMode::Week => {
            let days = EventGenerator::new(&settings.calendar)
                .visible_days(window.anchor, settings.layout);
            let cells = days
                .into_iter()
                .map(|d| cell(d, d.format("%a %-d").to_string()))
                .collect();
            (Vec::new(), cells)
        }
        ViewMode::Month => {
            let labels = window
                .week_start
                .weekday_labels()
                .iter()
                .map(|s| s.to_string())
                .collect();
            let cells = month_grid(window.anchor, window.week_start)
                .into_iter()
                .map(|slot| match slot {
                    Some(d) => cell(d, d.format("%-d").to_string()),
                    None => DayCell::blank(),
                })
                .collect();
            (labels, cells)
        }
    };

    CalendarView {
        title: window.title(),
        mode: window.view.as_label().to_string(),
        weekday_labels,
        cells,
        prev_href: None,
        next_href: None,
    }
}

/// Assemble a full page for one window.
pub fn build_page(
    settings: &ResolvedSettings,
    theme: &ThemeStore,
    window: &CalendarWindow,
    events: &[CalendarEvent],
    today: NaiveDate,
) -> SitePage {
    let stats = dashboard_stats(settings.dashboard_target, &settings.calendar.weights);
    SitePage {
        brand: settings.brand.clone(),
        theme: theme.get().as_label().to_string(),
        nav: NAV
            .iter()
            .map(|(label, href)| NavLink {
                label: label.to_string(),
                href: href.to_string(),
            })
            .collect(),
        dashboard: dashboard_view(&stats),
        calendar: calendar_view(settings, window, events, today),
    }
}

/// The windows an export covers, starting at the one containing `reference`.
pub fn export_windows(
    settings: &ResolvedSettings,
    reference: NaiveDate,
    pages: usize,
) -> Vec<CalendarWindow> {
    let first = CalendarWindow::new(settings.view, reference, settings.calendar.week_start);
    std::iter::successors(Some(first), |w| Some(w.next()))
        .take(pages)
        .collect()
}

/// Render and write every window plus `index.html` (a copy of the first).
///
/// Prev/next links only point at pages inside this export.
pub fn write_site(
    settings: &ResolvedSettings,
    theme: &ThemeStore,
    options: &ExportOptions,
) -> Result<Vec<ExportedPage>> {
    if options.pages == 0 {
        return Err(LeadeaError::MustBePositive { field: "pages" });
    }
    fs::create_dir_all(&options.out_dir).map_err(|source| LeadeaError::Write {
        path: options.out_dir.clone(),
        source,
    })?;

    let windows = export_windows(settings, options.reference, options.pages);
    let names: Vec<String> = windows.iter().map(page_file_name).collect();
    let mut written = Vec::with_capacity(windows.len());

    for (i, window) in windows.iter().enumerate() {
        let events = events_for_window(&settings.calendar, window, settings.layout);
        let mut page = build_page(settings, theme, window, &events, options.today);
        page.calendar.prev_href = i.checked_sub(1).map(|p| names[p].clone());
        page.calendar.next_href = names.get(i + 1).cloned();

        let html = render_page(&page);
        let path = options.out_dir.join(&names[i]);
        write_file(&path, &html)?;
        if i == 0 {
            write_file(&options.out_dir.join("index.html"), &html)?;
        }
        debug!(path = %path.display(), events = events.len(), "wrote page");

        written.push(ExportedPage {
            window: *window,
            path,
            events: events.len(),
        });
    }

    info!(
        out_dir = %options.out_dir.display(),
        pages = written.len(),
        view = %settings.view,
        layout = %settings.layout,
        "site exported"
    );
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| LeadeaError::Write {
        path: path.to_path_buf(),
        source,
    })
}

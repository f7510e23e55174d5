//! View data for the landing page.
//!
//! These types hold exactly what the components print: labels are already
//! formatted, links already resolved. They're designed to be:
//!
//! - **Serializable** - a page can be dumped or loaded as JSON
//! - **Clone-friendly** - components take owned values
//! - **Default-able** - build partial pages with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use site_leptos::types::{CalendarView, DayCell, EventCard, SitePage};
//!
//! let page = SitePage {
//!     calendar: CalendarView {
//!         title: "Jan 1 - Jan 5, 2024".into(),
//!         cells: vec![DayCell {
//!             iso_date: Some("2024-01-01".into()),
//!             day_label: "Mon 1".into(),
//!             events: vec![EventCard {
//!                 id: "1704067200-0".into(),
//!                 title: "Qualified Lead Call".into(),
//!                 time: "9:00 AM".into(),
//!                 category: "qualified-lead".into(),
//!                 ..Default::default()
//!             }],
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Whole page: chrome plus the calendar dashboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SitePage {
    /// Product name in the header, title and footer
    pub brand: String,
    /// `"light"` or `"dark"`, emitted as `data-theme` on `<html>`
    pub theme: String,
    /// Header anchor links
    #[serde(default)]
    pub nav: Vec<NavLink>,
    pub dashboard: DashboardView,
    pub calendar: CalendarView,
}

impl Default for SitePage {
    fn default() -> Self {
        Self {
            brand: "Leadea".into(),
            theme: "light".into(),
            nav: Vec::new(),
            dashboard: DashboardView::default(),
            calendar: CalendarView::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Lead counter and source breakdown.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DashboardView {
    pub leads_this_week: u32,
    pub from_last_week: u32,
    #[serde(default)]
    pub sources: Vec<SourceStat>,
    pub conversion_rate: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceStat {
    pub label: String,
    pub count: u32,
    /// CSS modifier, e.g. `"referral"`
    pub category: String,
}

/// One calendar window (a week or a month).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalendarView {
    /// `"Jan 1 - Jan 5, 2024"` or `"January 2024"`
    pub title: String,
    /// `"week"` or `"month"`
    pub mode: String,
    /// Column headers; empty for the week view, which labels each cell
    #[serde(default)]
    pub weekday_labels: Vec<String>,
    #[serde(default)]
    pub cells: Vec<DayCell>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Default for CalendarView {
    fn default() -> Self {
        Self {
            title: String::new(),
            mode: "week".into(),
            weekday_labels: Vec::new(),
            cells: Vec::new(),
            prev_href: None,
            next_href: None,
        }
    }
}

impl CalendarView {
    pub fn event_count(&self) -> usize {
        self.cells.iter().map(|c| c.events.len()).sum()
    }
}

/// A single grid cell. `iso_date == None` marks a leading blank.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DayCell {
    pub iso_date: Option<String>,
    pub day_label: String,
    #[serde(default)]
    pub is_today: bool,
    #[serde(default)]
    pub events: Vec<EventCard>,
}

impl DayCell {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.iso_date.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub time: String,
    /// CSS modifier, e.g. `"qualified-lead"`
    pub category: String,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

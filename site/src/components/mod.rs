//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Header
//! ├── Hero
//! │   ├── DashboardPanel
//! │   └── CalendarPanel
//! │       ├── NavButton (prev / next)
//! │       └── DayCellView
//! │           └── EventItem
//! └── Footer
//! ```
//!
//! Components are normally used via [`crate::render_page`].

mod calendar;
mod dashboard;
mod document;
mod footer;
mod header;
mod hero;
mod icons;

pub use calendar::CalendarPanel;
pub use dashboard::DashboardPanel;
pub use document::SiteDocument;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::*;

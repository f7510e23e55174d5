//! # leadea
//!
//! Mock lead calendar for the Leadea landing page.
//!
//! The library produces a week or month of plausible booked lead calls:
//! a weighted category per event, a free time slot inside business hours,
//! and some flavor text. With a seeded random mode the same window always
//! yields the same events, so pre-rendered pages are stable between
//! builds.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use leadea::config::{CalendarConfig, Layout};
//! use leadea::generator::events_for_window;
//! use leadea::navigation::{CalendarWindow, ViewMode, WeekStart};
//!
//! let config = CalendarConfig::default();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let window = CalendarWindow::new(ViewMode::Week, day, WeekStart::Sunday);
//!
//! let events = events_for_window(&config, &window, Layout::Desktop);
//! assert!(events.iter().all(|e| window.contains(e.date)));
//! ```
//!
//! ## Modules
//!
//! - [`random`] - Pluggable random streams (seeded and entropy)
//! - [`weights`] - Category weight table and weighted selection
//! - [`event`] - Lead categories, time slots and the event record
//! - [`generator`] - Per-day event generation with slot collision retries
//! - [`navigation`] - Week and month windows
//! - [`dashboard`] - Lead counter and source breakdown
//! - [`theme`] - Observable light/dark theme store
//! - [`config`] - Config file loading and CLI resolution
//! - [`export`] - Static HTML export through `site-leptos`

pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod export;
pub mod generator;
pub mod navigation;
pub mod random;
pub mod theme;
pub mod weights;

pub use error::{LeadeaError, Result};

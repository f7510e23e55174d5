//! # site-leptos
//!
//! Leptos SSR renderer for the Leadea landing page.
//!
//! Each call renders one self-contained HTML page: header, hero with the
//! lead dashboard, and a week or month calendar. There is no hydration
//! and no JavaScript; calendar navigation is plain links between
//! pre-rendered pages and event details open through `<details>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use site_leptos::{render_page, types::SitePage};
//!
//! let html = render_page(&SitePage::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - View data, already formatted for display
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::SitePage;

/// Render a complete HTML page, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use site_leptos::{render_page, types::{CalendarView, SitePage}};
///
/// let page = SitePage {
///     calendar: CalendarView {
///         title: "January 2024".into(),
///         mode: "month".into(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// let html = render_page(&page);
/// assert!(html.contains("January 2024"));
/// ```
pub fn render_page(page: &SitePage) -> String {
    let doc = view! { <SiteDocument page=page.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

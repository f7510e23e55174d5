//! CSS for the landing page.
//!
//! Everything is inlined into the document so a rendered page is a single
//! self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use site_leptos::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```
//!
//! # Themes
//!
//! Light is the default. `<html data-theme="dark">` switches the palette;
//! only the custom properties change, never the layout.

/// Complete stylesheet for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-card: #f8faf9;
    --bg-muted: #eef2f0;
    --text: #0f172a;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --primary: #16a34a;
    --primary-soft: rgba(22, 163, 74, 0.12);
    --primary-line: rgba(22, 163, 74, 0.3);
    --referral: #2563eb;
    --organic: #9333ea;
    --social: #ea580c;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --container-max: 1200px;
}

[data-theme="dark"] {
    --bg: #0b0f0d;
    --bg-card: #111714;
    --bg-muted: #18201c;
    --text: #e5e7eb;
    --text-muted: #94a3b8;
    --border: #1f2a24;
    --primary-soft: rgba(22, 163, 74, 0.2);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

a {
    color: inherit;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Header */
.site-header {
    border-bottom: 1px solid var(--border);
    background: var(--bg);
    position: sticky;
    top: 0;
    z-index: 50;
}

.site-header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 600;
    font-size: 18px;
    text-decoration: none;
}

.brand-mark {
    width: 28px;
    height: 28px;
    border-radius: 8px;
    background: var(--primary);
}

.nav-links {
    display: flex;
    gap: 20px;
}

.nav-link {
    color: var(--text-muted);
    text-decoration: none;
    font-size: 14px;
}

.nav-link:hover {
    color: var(--text);
}

.theme-badge {
    font-size: 12px;
    color: var(--text-muted);
    border: 1px solid var(--border);
    border-radius: 999px;
    padding: 2px 10px;
}

/* Hero */
.hero {
    padding: 64px 0 48px;
    text-align: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 12px;
    font-weight: 500;
    padding: 4px 12px;
    border-radius: 999px;
    background: var(--primary-soft);
    color: var(--primary);
    border: 1px solid var(--primary-line);
}

.hero-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--primary);
}

.hero-title {
    font-size: 56px;
    font-weight: 500;
    letter-spacing: -0.03em;
    margin: 24px auto 16px;
    max-width: 900px;
}

.hero-title-accent {
    color: var(--primary);
}

.hero-description {
    font-size: 18px;
    color: var(--text-muted);
    max-width: 640px;
    margin: 0 auto;
}

.hero-actions {
    display: flex;
    gap: 16px;
    justify-content: center;
    margin-top: 32px;
}

.btn {
    display: inline-flex;
    align-items: center;
    height: 48px;
    padding: 0 32px;
    border-radius: 8px;
    font-weight: 500;
    text-decoration: none;
}

.btn-primary {
    background: var(--primary);
    color: #ffffff;
}

.btn-secondary {
    border: 1px solid var(--border);
}

.hero-footnote {
    margin-top: 24px;
    font-size: 14px;
    color: var(--text-muted);
}

/* Dashboard shell */
.dashboard {
    margin-top: 48px;
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--bg-card);
    overflow: hidden;
    text-align: left;
}

.dashboard-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px;
    border-bottom: 1px solid var(--border);
}

.dashboard-title {
    display: flex;
    align-items: center;
    gap: 12px;
    font-weight: 500;
}

.status-pill {
    font-size: 13px;
    color: var(--primary);
    background: var(--primary-soft);
    border: 1px solid var(--primary-line);
    border-radius: 6px;
    padding: 4px 12px;
}

.dashboard-body {
    display: flex;
}

.dashboard-sidebar {
    width: 300px;
    flex-shrink: 0;
    border-right: 1px solid var(--border);
    padding: 24px;
}

.stat-caption {
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: var(--text-muted);
}

.lead-count {
    font-size: 64px;
    font-weight: 700;
    color: var(--primary);
    text-align: center;
    line-height: 1.1;
    margin: 12px 0 4px;
}

.lead-delta {
    text-align: center;
    font-size: 12px;
    color: var(--text-muted);
}

.source-list {
    list-style: none;
    margin: 12px 0 24px;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.source-item {
    display: flex;
    justify-content: space-between;
    padding: 8px 12px;
    border-radius: 6px;
    font-size: 14px;
    background: var(--primary-soft);
    color: var(--primary);
}

.source-item.referral { color: var(--referral); background: rgba(37, 99, 235, 0.1); }
.source-item.organic-search { color: var(--organic); background: rgba(147, 51, 234, 0.1); }
.source-item.social-media { color: var(--social); background: rgba(234, 88, 12, 0.1); }

.conversion {
    padding: 16px;
    border-radius: 8px;
    border: 1px solid var(--primary-line);
}

.conversion-rate {
    font-size: 24px;
    font-weight: 700;
    color: var(--primary);
}

/* Calendar */
.calendar {
    flex: 1;
    padding: 24px;
    min-width: 0;
}

.calendar-toolbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 16px;
}

.calendar-title {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 18px;
    font-weight: 500;
    margin: 0;
}

.calendar-nav {
    display: flex;
    gap: 8px;
}

.calendar-nav-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 6px;
    border: 1px solid var(--border);
    text-decoration: none;
}

.calendar-nav-btn.disabled {
    opacity: 0.35;
}

.calendar-grid {
    display: grid;
    gap: 1px;
    background: var(--border);
    border: 1px solid var(--border);
    border-radius: 8px;
    overflow: hidden;
}

.calendar-grid.week {
    grid-template-columns: repeat(var(--columns, 5), minmax(0, 1fr));
}

.calendar-grid.month {
    grid-template-columns: repeat(7, minmax(0, 1fr));
}

.weekday-header {
    background: var(--bg-muted);
    padding: 10px;
    text-align: center;
    font-size: 13px;
    font-weight: 500;
    color: var(--text-muted);
}

.day-cell {
    background: var(--bg);
    min-height: 120px;
    padding: 8px;
}

.day-cell.blank {
    background: var(--bg-muted);
}

.day-cell.today .day-label {
    color: #ffffff;
    background: var(--primary);
    border-radius: 999px;
    padding: 0 8px;
}

.day-label {
    display: inline-block;
    font-size: 13px;
    font-weight: 500;
    margin-bottom: 8px;
}

.event-list {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.event {
    border-radius: 4px;
    border: 1px solid var(--primary-line);
    background: var(--primary-soft);
    font-size: 11px;
}

.event summary {
    list-style: none;
    cursor: pointer;
    padding: 4px 8px;
}

.event summary::-webkit-details-marker {
    display: none;
}

.event[open] {
    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12);
}

.event.referral { border-color: rgba(37, 99, 235, 0.3); background: rgba(37, 99, 235, 0.1); }
.event.organic-search { border-color: rgba(147, 51, 234, 0.3); background: rgba(147, 51, 234, 0.1); }
.event.social-media { border-color: rgba(234, 88, 12, 0.3); background: rgba(234, 88, 12, 0.1); }

.event-title {
    display: block;
    font-weight: 500;
}

.event-time {
    display: block;
    color: var(--text-muted);
    font-size: 10px;
}

.event-detail {
    padding: 4px 8px 8px;
    color: var(--text-muted);
}

.event-detail p {
    margin: 2px 0;
}

.calendar-empty {
    padding: 48px;
    text-align: center;
    color: var(--text-muted);
}

/* Footer */
.site-footer {
    margin-top: auto;
    border-top: 1px solid var(--border);
    padding: 32px 0;
    font-size: 14px;
    color: var(--text-muted);
}

.site-footer-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.footer-links {
    display: flex;
    gap: 16px;
}

.footer-link {
    text-decoration: none;
}
"#;

/// Content Security Policy for rendered pages (no scripts at all).
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; font-src 'self' data:;";

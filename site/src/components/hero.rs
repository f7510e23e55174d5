//! Hero section: headline plus the live dashboard shell.

use super::{CalendarPanel, DashboardPanel, Icon, ICON_BELL, ICON_TREND_UP};
use crate::types::{CalendarView, DashboardView};
use leptos::prelude::*;

#[component]
pub fn Hero(dashboard: DashboardView, calendar: CalendarView) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <span class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "Qualified leads, booked for you"
                </span>
                <h1 class="hero-title">
                    "Generate 20+ "
                    <span class="hero-title-accent">"Qualified Leads"</span>
                    " Every Week"
                </h1>
                <div class="dashboard">
                    <div class="dashboard-header">
                        <div class="dashboard-title">
                            <Icon path=ICON_TREND_UP size="18" />
                            "Lead Generation Dashboard"
                        </div>
                        <span class="status-pill">
                            <Icon path=ICON_BELL size="14" />
                            " Live Updates"
                        </span>
                    </div>
                    <div class="dashboard-body">
                        <DashboardPanel dashboard=dashboard />
                        <CalendarPanel calendar=calendar />
                    </div>
                </div>
            </div>
        </section>
    }
}

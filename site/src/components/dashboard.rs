use crate::types::DashboardView;
use leptos::prelude::*;

/// Sidebar with the weekly lead counter, source split and conversion rate.
#[component]
pub fn DashboardPanel(dashboard: DashboardView) -> impl IntoView {
    let delta = format!("+{} from last week", dashboard.from_last_week);

    view! {
        <aside class="dashboard-sidebar">
            <div class="stat-caption">"Leads this week"</div>
            <div class="lead-count">{dashboard.leads_this_week}</div>
            <div class="lead-delta">{delta}</div>

            <div class="stat-caption">"Lead sources"</div>
            <ul class="source-list">
                {dashboard.sources.into_iter().map(|source| view! {
                    <li class=format!("source-item {}", source.category)>
                        <span class="source-label">{source.label}</span>
                        <span class="source-count">{source.count}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>

            <div class="conversion">
                <div class="stat-caption">"Conversion rate"</div>
                <div class="conversion-rate">{dashboard.conversion_rate}</div>
            </div>
        </aside>
    }
}

//! Calendar panel: toolbar, weekday headers and the day grid.
//!
//! Navigation is plain links between pre-rendered pages. A missing
//! neighbour renders as a disabled span so the toolbar keeps its shape.

use super::{Icon, ICON_CALENDAR, ICON_CARET_LEFT, ICON_CARET_RIGHT};
use crate::types::{CalendarView, DayCell, EventCard};
use leptos::prelude::*;

#[component]
pub fn CalendarPanel(calendar: CalendarView) -> impl IntoView {
    let CalendarView {
        title,
        mode,
        weekday_labels,
        cells,
        prev_href,
        next_href,
    } = calendar;

    let grid_class = format!("calendar-grid {}", mode);
    let grid_style = if mode == "week" {
        format!("--columns: {}", cells.len().max(1))
    } else {
        String::new()
    };

    let body = if cells.is_empty() {
        view! { <div class="calendar-empty">"No days to show"</div> }.into_any()
    } else {
        view! {
            <div class=grid_class style=grid_style>
                {weekday_labels.into_iter().map(|label| view! {
                    <div class="weekday-header">{label}</div>
                }).collect::<Vec<_>>()}
                {cells.into_iter().map(|cell| view! { <DayCellView cell=cell /> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="calendar">
            <div class="calendar-toolbar">
                <h2 class="calendar-title">
                    <Icon path=ICON_CALENDAR size="18" />
                    {title}
                </h2>
                <div class="calendar-nav">
                    <NavButton href=prev_href label="Previous" icon=ICON_CARET_LEFT />
                    <NavButton href=next_href label="Next" icon=ICON_CARET_RIGHT />
                </div>
            </div>
            {body}
        </section>
    }
}

#[component]
fn NavButton(href: Option<String>, label: &'static str, icon: &'static str) -> impl IntoView {
    match href {
        Some(href) => view! {
            <a class="calendar-nav-btn" href=href aria-label=label title=label>
                <Icon path=icon size="16" />
            </a>
        }
        .into_any(),
        None => view! {
            <span class="calendar-nav-btn disabled" aria-disabled="true" aria-label=label>
                <Icon path=icon size="16" />
            </span>
        }
        .into_any(),
    }
}

#[component]
fn DayCellView(cell: DayCell) -> impl IntoView {
    let Some(iso_date) = cell.iso_date else {
        return view! { <div class="day-cell blank"></div> }.into_any();
    };

    let class = if cell.is_today {
        "day-cell today"
    } else {
        "day-cell"
    };

    view! {
        <div class=class data-date=iso_date>
            <span class="day-label">{cell.day_label}</span>
            <div class="event-list">
                {cell.events.into_iter().map(|event| view! { <EventItem event=event /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}

/// One booked slot. Details expand natively via `<details>`.
#[component]
fn EventItem(event: EventCard) -> impl IntoView {
    let EventCard {
        id,
        title,
        time,
        category,
        description,
        company,
        location,
    } = event;

    view! {
        <details class=format!("event {}", category) id=format!("event-{}", id)>
            <summary>
                <span class="event-title">{title}</span>
                <span class="event-time">{time}</span>
            </summary>
            <div class="event-detail">
                {description.map(|d| view! { <p class="event-description">{d}</p> })}
                {company.map(|c| view! { <p class="event-company">{c}</p> })}
                {location.map(|l| view! { <p class="event-location">{l}</p> })}
            </div>
        </details>
    }
}

//! Lead events shown on the calendar.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LeadeaError;

/// The closed set of lead categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadCategory {
    QualifiedLead,
    Referral,
    OrganicSearch,
    SocialMedia,
}

impl LeadCategory {
    pub const ALL: [LeadCategory; 4] = [
        LeadCategory::QualifiedLead,
        LeadCategory::Referral,
        LeadCategory::OrganicSearch,
        LeadCategory::SocialMedia,
    ];

    /// Kebab-case label, also used as the CSS modifier.
    pub fn as_label(&self) -> &'static str {
        match self {
            LeadCategory::QualifiedLead => "qualified-lead",
            LeadCategory::Referral => "referral",
            LeadCategory::OrganicSearch => "organic-search",
            LeadCategory::SocialMedia => "social-media",
        }
    }

    /// Event title shown on the calendar card.
    pub fn title(&self) -> &'static str {
        match self {
            LeadCategory::QualifiedLead => "Qualified Lead Call",
            LeadCategory::Referral => "Referral Meeting",
            LeadCategory::OrganicSearch => "Organic Search Inquiry",
            LeadCategory::SocialMedia => "Social Media Lead",
        }
    }

    /// Name of the lead source in the dashboard breakdown.
    pub fn source_label(&self) -> &'static str {
        match self {
            LeadCategory::QualifiedLead => "Leadea Platform",
            LeadCategory::Referral => "Referrals",
            LeadCategory::OrganicSearch => "Organic Search",
            LeadCategory::SocialMedia => "Social Media",
        }
    }

    pub fn descriptions(&self) -> &'static [&'static str] {
        match self {
            LeadCategory::QualifiedLead => &[
                "Decision maker ready to discuss budget",
                "Pre-qualified prospect with a 30-day buying window",
                "Inbound demo request from a target account",
                "Follow-up call with a warm prospect",
                "Discovery call booked through Leadea outreach",
            ],
            LeadCategory::Referral => &[
                "Introduced by an existing client",
                "Partner referral looking for a quick start",
                "Referred by a closed-won customer",
            ],
            LeadCategory::OrganicSearch => &[
                "Found us searching for outbound automation",
                "Read the case study and booked a call",
                "Signed up after comparing lead providers",
            ],
            LeadCategory::SocialMedia => &[
                "Replied to a LinkedIn post",
                "Came in through a webinar promotion",
                "Messaged after seeing a client testimonial",
            ],
        }
    }
}

impl fmt::Display for LeadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for LeadCategory {
    type Err = LeadeaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadCategory::ALL
            .into_iter()
            .find(|c| c.as_label() == s.trim())
            .ok_or_else(|| LeadeaError::UnknownVariant {
                kind: "lead category",
                value: s.to_string(),
            })
    }
}

pub const COMPANIES: &[&str] = &[
    "Northwind Analytics",
    "Brightline Logistics",
    "Summit Health Partners",
    "Kestrel Software",
    "Oakridge Manufacturing",
    "Bluewave Marketing",
    "Harbor Financial",
    "Pinecrest Realty",
    "Vantage Security",
    "Atlas Consulting Group",
];

pub const LOCATIONS: &[&str] = &[
    "Zoom",
    "Google Meet",
    "Microsoft Teams",
    "Phone call",
    "On-site",
];

/// A time of day on the calendar grid, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Parse a 12-hour display string such as `"9:00 AM"` or `"12:30 PM"`.
    pub fn parse_12h(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (clock, meridiem) = raw.rsplit_once(' ')?;
        let (h, m) = clock.split_once(':')?;
        let h: u32 = h.trim().parse().ok()?;
        let m: u32 = m.trim().parse().ok()?;
        if !(1..=12).contains(&h) {
            return None;
        }
        let hour = match meridiem.trim().to_ascii_uppercase().as_str() {
            "AM" => h % 12,
            "PM" => h % 12 + 12,
            _ => return None,
        };
        Self::new(hour, m)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour >= 12 { "PM" } else { "AM" };
        let h12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", h12, self.minute, meridiem)
    }
}

/// A generated lead event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub category: LeadCategory,
    pub date: NaiveDate,
    /// 12-hour display string, e.g. `"2:00 PM"`.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Minutes since midnight parsed back from `time`; unparsable times sort last.
    pub fn sort_minutes(&self) -> u32 {
        TimeSlot::parse_12h(&self.time)
            .map(|slot| slot.minutes_since_midnight())
            .unwrap_or(u32::MAX)
    }
}

/// Sort ascending by date, then by time of day.
pub fn sort_events(events: &mut [CalendarEvent]) {
    events.sort_by_key(|e| (e.date, e.sort_minutes()));
}

/// `"{day_timestamp}-{index}"`, the day timestamp being midnight in seconds.
pub fn event_id(date: NaiveDate, index: usize) -> String {
    let ts = date
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default();
    format!("{ts}-{index}")
}

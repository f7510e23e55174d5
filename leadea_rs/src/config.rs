//! Configuration types and loading.
//!
//! A config file is optional. When present it is parsed by extension
//! (`.toml`, anything else as JSON) and every field may be omitted.
//! Command-line options override the file through [`CliOptions`], so the
//! library stays free of clap types.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LeadeaError, Result};
use crate::navigation::{ViewMode, WeekStart};
use crate::random::RandomMode;
use crate::theme::Theme;
use crate::weights::{CategoryWeight, CategoryWeights};

/// Full calendar layout, or the compact one used on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    pub fn as_label(&self) -> &'static str {
        match self {
            Layout::Desktop => "desktop",
            Layout::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Layout {
    type Err = LeadeaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" | "full" => Ok(Layout::Desktop),
            "mobile" | "compact" => Ok(Layout::Mobile),
            other => Err(LeadeaError::UnknownVariant {
                kind: "layout",
                value: other.to_string(),
            }),
        }
    }
}

/// Everything the event generator needs, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Weekdays shown in the desktop week view.
    pub days_to_show: u32,
    /// Weekdays shown in the mobile week view.
    pub mobile_days_to_show: u32,
    pub week_start: WeekStart,
    pub events_min: u32,
    pub events_max: u32,
    /// First bookable hour, inclusive.
    pub first_hour: u32,
    /// Last bookable hour, exclusive.
    pub last_hour: u32,
    /// Allow :30 slots as well as full hours.
    pub half_hour_slots: bool,
    pub max_slot_retries: u32,
    pub weights: CategoryWeights,
    pub random: RandomMode,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_to_show: 5,
            mobile_days_to_show: 3,
            week_start: WeekStart::Sunday,
            events_min: 2,
            events_max: 5,
            first_hour: 9,
            last_hour: 17,
            half_hour_slots: false,
            max_slot_retries: 10,
            weights: CategoryWeights::default(),
            random: RandomMode::SplitMix,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<()> {
        if self.first_hour >= self.last_hour || self.last_hour > 24 {
            return Err(LeadeaError::HourRange {
                first: self.first_hour,
                last: self.last_hour,
            });
        }
        if self.events_min > self.events_max {
            return Err(LeadeaError::EventsRange {
                min: self.events_min,
                max: self.events_max,
            });
        }
        if self.events_max > self.slot_count() {
            return Err(LeadeaError::TooManyEvents {
                max: self.events_max,
                slots: self.slot_count(),
            });
        }
        if self.days_to_show == 0 {
            return Err(LeadeaError::MustBePositive {
                field: "days_to_show",
            });
        }
        if self.mobile_days_to_show == 0 {
            return Err(LeadeaError::MustBePositive {
                field: "mobile_days_to_show",
            });
        }
        if self.max_slot_retries == 0 {
            return Err(LeadeaError::MustBePositive {
                field: "max_slot_retries",
            });
        }
        Ok(())
    }

    pub fn weekdays_for(&self, layout: Layout) -> u32 {
        match layout {
            Layout::Desktop => self.days_to_show,
            Layout::Mobile => self.mobile_days_to_show,
        }
    }

    /// Number of distinct slots per day.
    pub fn slot_count(&self) -> u32 {
        let hours = self.last_hour.saturating_sub(self.first_hour);
        if self.half_hour_slots { hours * 2 } else { hours }
    }
}

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub days_to_show: Option<u32>,
    pub mobile_days_to_show: Option<u32>,
    pub week_start: Option<WeekStart>,
    pub events_min: Option<u32>,
    pub events_max: Option<u32>,
    pub first_hour: Option<u32>,
    pub last_hour: Option<u32>,
    pub half_hour_slots: Option<bool>,
    pub max_slot_retries: Option<u32>,
    pub weights: Option<Vec<CategoryWeight>>,
    pub random: Option<RandomMode>,
    pub view: Option<ViewMode>,
    pub layout: Option<Layout>,
    pub theme: Option<Theme>,
    pub dashboard_target: Option<u32>,
    pub brand: Option<String>,
}

/// Load a config file. A missing file is `Ok(None)`.
pub fn load_config(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(None);
    }
    let data = fs::read_to_string(path).map_err(|source| LeadeaError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &data).map(Some)
}

/// Parse config text, choosing the format from `path`'s extension.
pub fn parse_config(path: &Path, data: &str) -> Result<ConfigFile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parse_err = |message: String| LeadeaError::ConfigParse {
        path: path.to_path_buf(),
        message,
    };

    match ext.as_str() {
        "toml" => toml::from_str(data).map_err(|e| parse_err(e.to_string())),
        _ => serde_json::from_str(data).map_err(|e| parse_err(e.to_string())),
    }
}

/// CLI options that can override config file settings.
pub trait CliOptions {
    fn config_path(&self) -> Option<PathBuf>;
    fn random(&self) -> Option<RandomMode>;
    fn view(&self) -> Option<ViewMode>;
    fn layout(&self) -> Option<Layout>;
    fn theme(&self) -> Option<Theme>;
    fn week_start(&self) -> Option<WeekStart>;
}

/// Settings after merging defaults, the config file and the command line.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub calendar: CalendarConfig,
    pub view: ViewMode,
    pub layout: Layout,
    pub theme: Theme,
    pub dashboard_target: u32,
    pub brand: String,
}

pub const DEFAULT_DASHBOARD_TARGET: u32 = 23;
pub const DEFAULT_BRAND: &str = "Leadea";

/// Resolve settings. CLI options take precedence over the config file.
pub fn resolve_settings<C: CliOptions>(cli: &C, file: Option<&ConfigFile>) -> Result<ResolvedSettings> {
    let file = file.cloned().unwrap_or_default();
    let defaults = CalendarConfig::default();

    let weights = match file.weights {
        Some(entries) => CategoryWeights::new(entries)?,
        None => defaults.weights.clone(),
    };

    let calendar = CalendarConfig {
        days_to_show: file.days_to_show.unwrap_or(defaults.days_to_show),
        mobile_days_to_show: file
            .mobile_days_to_show
            .unwrap_or(defaults.mobile_days_to_show),
        week_start: cli
            .week_start()
            .or(file.week_start)
            .unwrap_or(defaults.week_start),
        events_min: file.events_min.unwrap_or(defaults.events_min),
        events_max: file.events_max.unwrap_or(defaults.events_max),
        first_hour: file.first_hour.unwrap_or(defaults.first_hour),
        last_hour: file.last_hour.unwrap_or(defaults.last_hour),
        half_hour_slots: file.half_hour_slots.unwrap_or(defaults.half_hour_slots),
        max_slot_retries: file.max_slot_retries.unwrap_or(defaults.max_slot_retries),
        weights,
        random: cli.random().or(file.random).unwrap_or(defaults.random),
    };
    calendar.validate()?;

    Ok(ResolvedSettings {
        calendar,
        view: cli.view().or(file.view).unwrap_or_default(),
        layout: cli.layout().or(file.layout).unwrap_or_default(),
        theme: cli.theme().or(file.theme).unwrap_or_default(),
        dashboard_target: file.dashboard_target.unwrap_or(DEFAULT_DASHBOARD_TARGET),
        brand: file.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
    })
}

//! # leadea
//!
//! Command line front end for the lead calendar.
//!
//! ## Usage
//!
//! ```bash
//! # This week's events, one per line
//! leadea week
//!
//! # A month as JSON
//! leadea month --date 2024-02-01 --json
//!
//! # Dashboard figures after three "Generate New Lead" clicks
//! leadea dashboard --generate 3
//!
//! # Four linked week pages as static HTML
//! leadea render --out dist --pages 4 --theme dark
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};

use leadea::config::{
    CliOptions, ConfigFile, Layout, ResolvedSettings, load_config, resolve_settings,
};
use leadea::dashboard::{DashboardStats, LeadCounter};
use leadea::event::CalendarEvent;
use leadea::export::{ExportOptions, write_site};
use leadea::generator::events_for_window;
use leadea::navigation::{CalendarWindow, ViewMode, WeekStart, parse_date};
use leadea::random::{RandomMode, epoch_day};
use leadea::theme::{Theme, ThemeStore};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "leadea")]
#[command(about = "Mock lead calendar generator for the Leadea landing page")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Config file (TOML or JSON, chosen by extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random stream: splitmix, sine or entropy
    #[arg(long, global = true)]
    rng: Option<RandomMode>,

    /// First column of the calendar: sunday or monday
    #[arg(long, global = true)]
    week_start: Option<WeekStart>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Events of the week containing --date
    Week {
        /// Any day of the week (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// desktop (full week) or mobile (a few days from --date)
        #[arg(long)]
        layout: Option<Layout>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Events of the month containing --date
    Month {
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Lead counter, source breakdown and conversion rate
    Dashboard {
        /// Leads this week (default: config or 23)
        #[arg(long)]
        count: Option<u32>,
        /// Simulate this many "Generate New Lead" clicks
        #[arg(long, default_value_t = 0)]
        generate: u32,
        #[arg(long)]
        json: bool,
    },
    /// Write linked static HTML pages
    Render {
        /// Output directory (created if missing)
        #[arg(long)]
        out: PathBuf,
        /// Any day of the first window (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// week or month
        #[arg(long)]
        view: Option<ViewMode>,
        /// Number of consecutive windows
        #[arg(long, default_value_t = 1)]
        pages: usize,
        #[arg(long)]
        layout: Option<Layout>,
        /// light or dark
        #[arg(long)]
        theme: Option<Theme>,
    },
}

/// Global flags plus whatever the subcommand overrides.
struct Overrides<'a> {
    global: &'a GlobalArgs,
    view: Option<ViewMode>,
    layout: Option<Layout>,
    theme: Option<Theme>,
}

impl CliOptions for Overrides<'_> {
    fn config_path(&self) -> Option<PathBuf> {
        self.global.config.clone()
    }

    fn random(&self) -> Option<RandomMode> {
        self.global.rng
    }

    fn view(&self) -> Option<ViewMode> {
        self.view
    }

    fn layout(&self) -> Option<Layout> {
        self.layout
    }

    fn theme(&self) -> Option<Theme> {
        self.theme
    }

    fn week_start(&self) -> Option<WeekStart> {
        self.global.week_start
    }
}

// ============================================================================
// Output
// ============================================================================

#[derive(Serialize)]
struct WindowOutput<'a> {
    title: String,
    view: ViewMode,
    start: NaiveDate,
    random: RandomMode,
    events: &'a [CalendarEvent],
}

fn print_window(
    window: &CalendarWindow,
    settings: &ResolvedSettings,
    events: &[CalendarEvent],
    json: bool,
) -> Result<()> {
    if json {
        let out = WindowOutput {
            title: window.title(),
            view: window.view,
            start: window.start(),
            random: settings.calendar.random,
            events,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", window.title());
    if events.is_empty() {
        println!("(no events)");
    }
    for event in events {
        println!(
            "{}  {:>8}  {:<22}  {}",
            event.date.format("%a %Y-%m-%d"),
            event.time,
            event.title,
            event.company.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

fn print_dashboard(stats: &DashboardStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Leads this week: {}", stats.leads_this_week);
    println!("From last week:  +{}", stats.from_last_week);
    for source in &stats.sources {
        println!("  {:<16} {}", source.label, source.count);
    }
    println!("Conversion rate: {}", stats.conversion_rate);
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

fn settings_for(overrides: &Overrides<'_>) -> Result<ResolvedSettings> {
    let file: Option<ConfigFile> = match overrides.config_path() {
        Some(path) => {
            let loaded = load_config(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            if loaded.is_none() {
                warn!(path = %path.display(), "config file not found, using defaults");
            }
            loaded
        }
        None => None,
    };
    resolve_settings(overrides, file.as_ref()).context("Invalid configuration")
}

fn theme_store(initial: Theme) -> ThemeStore {
    let mut store = ThemeStore::default();
    store.subscribe(|theme| debug!(%theme, "theme changed"));
    store.set(initial);
    store
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.global.log_level.parse().unwrap_or_default()),
        )
        .init();

    let today = Local::now().date_naive();
    let mut overrides = Overrides {
        global: &cli.global,
        view: None,
        layout: None,
        theme: None,
    };

    match cli.command {
        Command::Week { date, layout, json } => {
            overrides.layout = layout;
            let settings = settings_for(&overrides)?;
            let window = CalendarWindow::new(
                ViewMode::Week,
                date.unwrap_or(today),
                settings.calendar.week_start,
            );
            let events = events_for_window(&settings.calendar, &window, settings.layout);
            print_window(&window, &settings, &events, json)?;
        }
        Command::Month { date, json } => {
            let settings = settings_for(&overrides)?;
            let window = CalendarWindow::new(
                ViewMode::Month,
                date.unwrap_or(today),
                settings.calendar.week_start,
            );
            let events = events_for_window(&settings.calendar, &window, settings.layout);
            print_window(&window, &settings, &events, json)?;
        }
        Command::Dashboard {
            count,
            generate,
            json,
        } => {
            let settings = settings_for(&overrides)?;
            let mut counter = LeadCounter::new(count.unwrap_or(settings.dashboard_target));
            let mut rng = settings.calendar.random.stream(epoch_day(today));
            for _ in 0..generate {
                let added = counter.generate_new_leads(&mut rng);
                debug!(added, total = counter.count(), "generated new leads");
            }
            print_dashboard(&counter.stats(&settings.calendar.weights), json)?;
        }
        Command::Render {
            out,
            date,
            view,
            pages,
            layout,
            theme,
        } => {
            overrides.view = view;
            overrides.layout = layout;
            overrides.theme = theme;
            let settings = settings_for(&overrides)?;
            let store = theme_store(settings.theme);
            let options = ExportOptions {
                out_dir: out,
                reference: date.unwrap_or(today),
                pages,
                today,
            };
            let written = write_site(&settings, &store, &options).with_context(|| {
                format!("Failed to render site into {}", options.out_dir.display())
            })?;
            for page in &written {
                println!("{}", page.path.display());
            }
            info!(pages = written.len(), "done");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[leadea] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

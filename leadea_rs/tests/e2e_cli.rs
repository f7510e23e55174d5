//! End-to-End CLI Tests for leadea

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/leadea.toml")
}

fn leadea() -> Command {
    let mut cmd = cargo_bin_cmd!("leadea");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn week_json(args: &[&str]) -> Value {
    let output = leadea()
        .args(["week", "--json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        leadea()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("week"))
            .stdout(predicate::str::contains("month"))
            .stdout(predicate::str::contains("render"));
    }

    #[test]
    fn shows_version() {
        leadea()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_bad_date() {
        leadea()
            .args(["week", "--date", "2024-13-01"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid date"));
    }

    #[test]
    fn rejects_unknown_rng() {
        leadea()
            .args(["--rng", "dice", "week"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("dice"));
    }
}

// ============================================
// Calendar Output
// ============================================

mod calendar_output {
    use super::*;

    #[test]
    fn week_text_lists_events() {
        leadea()
            .args(["week", "--date", "2024-01-01"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Jan 1 - Jan 5, 2024"))
            .stdout(predicate::str::contains("Mon 2024-01-01"))
            .stdout(predicate::str::contains("Sat").not());
    }

    #[test]
    fn week_json_covers_weekdays() {
        let json = week_json(&["--date", "2024-01-01"]);

        assert_eq!(json["title"], "Jan 1 - Jan 5, 2024");
        assert_eq!(json["view"], "week");
        assert_eq!(json["random"], "splitmix");
        let events = json["events"].as_array().unwrap();
        assert!((10..=25).contains(&events.len()));
        for event in events {
            let date = event["date"].as_str().unwrap();
            assert!(("2024-01-01"..="2024-01-05").contains(&date));
            assert!(event["time"].as_str().unwrap().ends_with('M'));
        }
    }

    #[test]
    fn seeded_week_is_stable_within_the_week() {
        let monday = week_json(&["--date", "2024-01-01"]);
        let friday = week_json(&["--date", "2024-01-05"]);
        assert_eq!(monday["events"], friday["events"]);
    }

    #[test]
    fn sine_stream_is_selectable() {
        let a = week_json(&["--date", "2024-01-01", "--rng", "sine"]);
        let b = week_json(&["--date", "2024-01-01", "--rng", "sine"]);
        assert_eq!(a["random"], "sine");
        assert_eq!(a["events"], b["events"]);
    }

    #[test]
    fn mobile_layout_starts_at_date() {
        let json = week_json(&["--date", "2024-01-03", "--layout", "mobile"]);
        let events = json["events"].as_array().unwrap();
        assert!(!events.is_empty());
        for event in events {
            let date = event["date"].as_str().unwrap();
            assert!(("2024-01-03"..="2024-01-05").contains(&date));
        }
    }

    #[test]
    fn month_json_skips_weekends() {
        let output = leadea()
            .args(["month", "--date", "2024-02-14", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();

        assert_eq!(json["title"], "February 2024");
        assert_eq!(json["start"], "2024-02-01");
        let events = json["events"].as_array().unwrap();
        // 21 weekdays, 2..=5 events each
        assert!((42..=105).contains(&events.len()));
        assert!(
            events
                .iter()
                .all(|e| e["date"].as_str().unwrap().starts_with("2024-02"))
        );
    }
}

// ============================================
// Dashboard
// ============================================

mod dashboard {
    use super::*;

    #[test]
    fn default_dashboard_figures() {
        leadea()
            .arg("dashboard")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leads this week: 23"))
            .stdout(predicate::str::contains("+3"))
            .stdout(predicate::str::contains("Leadea Platform"))
            .stdout(predicate::str::contains("94.7%"));
    }

    #[test]
    fn generate_adds_one_to_three_per_click() {
        let output = leadea()
            .args(["dashboard", "--count", "10", "--generate", "4", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        let leads = json["leads_this_week"].as_u64().unwrap();
        assert!((14..=22).contains(&leads));
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let output = leadea()
            .args(["dashboard", "--count", "100000000", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["leads_this_week"], 100_000_000);
        assert_eq!(json["from_last_week"], 15_000_000);
        assert_eq!(json["sources"][0]["count"], 78_000_000);
    }

    #[test]
    fn config_file_overrides_defaults() {
        leadea()
            .args(["--config"])
            .arg(fixture_config())
            .arg("dashboard")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leads this week: 40"))
            .stdout(predicate::str::contains("+6"));
    }
}

// ============================================
// Configuration
// ============================================

mod configuration {
    use super::*;

    #[test]
    fn config_week_start_and_event_range() {
        let config = fixture_config();
        let json = week_json(&["--date", "2024-01-03", "--config", config.to_str().unwrap()]);

        assert_eq!(json["start"], "2024-01-01");
        let events = json["events"].as_array().unwrap();
        assert!((5..=15).contains(&events.len()));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        leadea()
            .args(["dashboard", "--config"])
            .arg(tmp.path().join("absent.toml"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Leads this week: 23"));
    }

    #[test]
    fn invalid_weights_fail() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(
            &path,
            r#"{"weights": [{"category": "referral", "weight": 50}]}"#,
        )
        .unwrap();

        leadea()
            .args(["week", "--config"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("sum to 100"));
    }

    #[test]
    fn events_beyond_slot_count_fail() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("crowded.toml");
        fs::write(&path, "events_max = 4000000000\n").unwrap();

        leadea()
            .args(["week", "--date", "2024-01-01", "--config"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("exceeds the 8 time slots"));
    }
}

// ============================================
// Static Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_linked_week_pages() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        leadea()
            .args(["render", "--date", "2024-01-03", "--pages", "2", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("week-2023-12-31.html"))
            .stdout(predicate::str::contains("week-2024-01-07.html"));

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains("Jan 1 - Jan 5, 2024"));
        assert!(index.contains(r#"href="week-2024-01-07.html""#));
        assert!(out.join("week-2024-01-07.html").exists());
    }

    #[test]
    fn month_pages_use_config_theme_and_brand() {
        let tmp = TempDir::new().unwrap();

        leadea()
            .arg("--config")
            .arg(fixture_config())
            .args(["render", "--view", "month", "--date", "2024-02-10", "--out"])
            .arg(tmp.path())
            .assert()
            .success();

        let html = fs::read_to_string(tmp.path().join("month-2024-02.html")).unwrap();
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains("Acme Leads"));
        assert!(html.contains("February 2024"));
        assert!(html.contains(r#"data-date="2024-02-29""#));
    }

    #[test]
    fn theme_flag_beats_config() {
        let tmp = TempDir::new().unwrap();

        leadea()
            .arg("--config")
            .arg(fixture_config())
            .args(["render", "--theme", "light", "--date", "2024-01-01", "--out"])
            .arg(tmp.path())
            .assert()
            .success();

        let html = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(html.contains(r#"data-theme="light""#));
    }

    #[test]
    fn zero_pages_fails() {
        let tmp = TempDir::new().unwrap();

        leadea()
            .args(["render", "--pages", "0", "--out"])
            .arg(tmp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("pages must be at least 1"));
    }
}

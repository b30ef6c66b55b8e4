use crate::models::Entry;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

// Helper

pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let folder_path = dirs::data_dir()
        .ok_or("Could not determine data directory")?
        .join("work");
    Ok(folder_path)
}

pub fn config_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let folder_path = dirs::config_dir()
        .ok_or("Could not determine config directory")?
        .join("work");
    Ok(folder_path)
}

pub fn create_parent_dir_if_not_exists(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn get_current_time(tz: Tz) -> DateTime<Tz> {
    let now_utc: DateTime<Utc> = Utc::now();
    now_utc.with_timezone(&tz)
}

pub fn format_time(time: &DateTime<Tz>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// ISO year and week number. The ISO year can differ from the calendar year around new year.
pub fn week_of(time: &DateTime<Tz>) -> (i32, u32) {
    let week = time.iso_week();
    (week.year(), week.week())
}

// Table print

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub fn format_entry(entry: &Entry) -> String {
    format!(
        "| {:<4} | {:<7} | {:<5} | {:<5} | {:<5} | {:<12} | {:<25} |",
        entry.id,
        entry.kind,
        cell(&entry.day),
        cell(&entry.start),
        cell(&entry.end),
        cell(&entry.name),
        entry.recorded_at,
    )
}

pub fn print_entries((year, week): (i32, u32), entries: &[Entry]) {
    println!();
    println!("{}", format!("Week {} of {}", week, year).bold());

    if entries.is_empty() {
        println!("{}", "Nothing recorded this week yet.".bright_black());
        return;
    }

    println!();
    println!(
        " {:<5}  {:<8}  {:<6}  {:<6}  {:<6}  {:<13}  {:<25} ",
        "ID", "Kind", "Day", "Start", "End", "Project", "Recorded"
    );
    println!("{}", "-".repeat(88));
    for entry in entries {
        let message = format_entry(entry);

        match entry.kind.as_str() {
            "start" | "end" => {
                println!("{}", message.green());
            }
            "project" => {
                println!("{}", message.cyan());
            }
            _ => {
                println!("{}", message.bright_black());
            }
        }
        println!("{}", "-".repeat(88));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Berlin;

    #[test]
    fn test_format_time_uses_timezone_offset() {
        let time = Berlin.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap();
        assert_eq!(format_time(&time), "2024-07-01 09:30:00 +0200");
        assert_eq!(week_of(&time), (2024, 27));
    }

    #[test]
    fn test_week_of_uses_iso_year() {
        // 2024-12-30 is a Monday in the first ISO week of 2025.
        let time = Berlin.with_ymd_and_hms(2024, 12, 30, 9, 0, 0).unwrap();
        assert_eq!(week_of(&time), (2025, 1));
    }

    #[test]
    fn test_format_entry_fills_missing_cells() {
        let entry = Entry {
            id: 3,
            kind: "break".to_string(),
            day: None,
            start: Some("12:00".to_string()),
            end: None,
            name: None,
            recorded_at: "2024-07-01 12:00:00 +0200".to_string(),
            year: 2024,
            week: 27,
        };
        let row = format_entry(&entry);
        assert!(row.starts_with("| 3    | break   | -     | 12:00 | -     |"));
        assert!(row.contains("2024-07-01 12:00:00 +0200"));
    }

    #[test]
    fn test_create_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("work.db");
        create_parent_dir_if_not_exists(&path).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}

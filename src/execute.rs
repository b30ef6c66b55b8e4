use crate::config::Config;
use crate::database::Store;
use crate::errors::Error as CommandError;
use crate::models::{Command, NewEntry};
use crate::utils::{format_time, get_current_time, print_entries, week_of};
use chrono::DateTime;
use chrono_tz::Tz;
use colored::*;
use std::error::Error;

/// Collaborators a command runs against.
pub struct Context<'a> {
    pub config: &'a Config,
    pub store: &'a dyn Store,
}

/// The row a command writes, if it writes one.
pub fn entry_for(command: &Command, now: &DateTime<Tz>) -> Option<NewEntry> {
    let (year, week) = week_of(now);
    let base = NewEntry {
        recorded_at: format_time(now),
        year,
        week,
        ..NewEntry::default()
    };

    let entry = match command {
        Command::Start { time, date } => NewEntry {
            kind: "start".to_string(),
            day: date.map(|d| d.day.as_str().to_string()),
            start: Some(time.to_string()),
            ..base
        },
        Command::End { time } => NewEntry {
            kind: "end".to_string(),
            end: Some(time.to_string()),
            ..base
        },
        Command::AddBreak { time } => NewEntry {
            kind: "break".to_string(),
            start: Some(time.to_string()),
            ..base
        },
        Command::SetBreak { start, end } => NewEntry {
            kind: "break".to_string(),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            ..base
        },
        Command::Project { name, duration } => NewEntry {
            kind: "project".to_string(),
            name: Some(name.clone()),
            end: Some(duration.to_string()),
            ..base
        },
        Command::Show | Command::None => return None,
    };
    Some(entry)
}

pub fn execute(command: Command, ctx: &Context) -> Result<(), Box<dyn Error>> {
    let now = get_current_time(ctx.config.tz()?);

    match &command {
        Command::None => Err(CommandError::invalid_command("Nothing to execute.").into()),
        Command::Show => {
            let (year, week) = week_of(&now);
            let entries = ctx.store.entries_in_week(year, week)?;
            print_entries((year, week), &entries);
            Ok(())
        }
        _ => {
            let entry = entry_for(&command, &now)
                .ok_or_else(|| CommandError::invalid_command("Nothing to record."))?;
            ctx.store.record(&entry)?;
            println!("{}", confirmation(&command).green());
            Ok(())
        }
    }
}

fn confirmation(command: &Command) -> String {
    match command {
        Command::Start {
            time,
            date: Some(date),
        } => format!("Started working on {} at {}.", date.day.as_str(), time),
        Command::Start { time, date: None } => format!("Started working at {}.", time),
        Command::End { time } => format!("Stopped working at {}.", time),
        Command::AddBreak { time } => format!("Break started at {}.", time),
        Command::SetBreak { start, end } => format!("Break logged from {} to {}.", start, end),
        Command::Project { name, duration } => {
            format!("Logged {} on project '{}'.", duration, name)
        }
        Command::Show | Command::None => String::new(),
    }
}

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "work")]
#[command(about = "A CLI tool to track working time", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Database file to use instead of the configured one
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// start | end | break | project | show, followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// Rebuilds the raw argument list (program name, verb, rest) the command parser expects.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once("work".to_string())
            .chain(self.words.iter().cloned())
            .collect()
    }
}

/// A recordable time of day or duration.
///
/// Hours and minutes are taken as written and never range-checked, so `99:99`
/// is a valid value. Consumers must not assume `hour < 24` or `minute < 60`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
}

impl Time {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    #[default]
    None,
    Mon,
    Tue,
    Wed,
    Thurs,
    Fri,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::None => "",
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thurs => "thurs",
            Day::Fri => "fri",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    // Week derivation is not implemented, always 0.
    pub weekno: u32,
    pub day: Day,
}

/// The closed vocabulary of verbs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    #[default]
    None,
    Start,
    End,
    Break,
    Project,
    Show,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Start,
        CommandKind::End,
        CommandKind::Break,
        CommandKind::Project,
        CommandKind::Show,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::None => "",
            CommandKind::Start => "start",
            CommandKind::End => "end",
            CommandKind::Break => "break",
            CommandKind::Project => "project",
            CommandKind::Show => "show",
        }
    }
}

/// A fully assembled command, holding only what its verb needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Start { time: Time, date: Option<Date> },
    End { time: Time },
    AddBreak { time: Time },
    SetBreak { start: Time, end: Time },
    Project { name: String, duration: Time },
    Show,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::None => CommandKind::None,
            Command::Start { .. } => CommandKind::Start,
            Command::End { .. } => CommandKind::End,
            Command::AddBreak { .. } | Command::SetBreak { .. } => CommandKind::Break,
            Command::Project { .. } => CommandKind::Project,
            Command::Show => CommandKind::Show,
        }
    }
}

/// A row about to be written to the store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub kind: String,
    pub day: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub name: Option<String>,
    pub recorded_at: String,
    pub year: i32,
    pub week: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub kind: String,
    pub day: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub name: Option<String>,
    pub recorded_at: String,
    pub year: i32,
    pub week: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_argv_keeps_hyphen_tokens_after_verb() {
        let cli = Cli::parse_from(["work", "-v", "start", "-v", "fri", "-x", "10:20"]);
        assert_eq!(cli.verbose, 1);
        assert_eq!(
            cli.argv(),
            vec!["work", "start", "-v", "fri", "-x", "10:20"]
        );
    }

    #[test]
    fn test_cli_argv_without_verb() {
        let cli = Cli::parse_from(["work"]);
        assert!(cli.words.is_empty());
        assert_eq!(cli.argv(), vec!["work"]);
    }

    #[test]
    fn test_time_display_pads() {
        assert_eq!(Time::new(9, 5).to_string(), "09:05");
        assert_eq!(Time::new(99, 99).to_string(), "99:99");
    }

    #[test]
    fn test_command_kind_of_breaks() {
        let add = Command::AddBreak {
            time: Time::new(12, 0),
        };
        let set = Command::SetBreak {
            start: Time::new(12, 0),
            end: Time::new(12, 30),
        };
        assert_eq!(add.kind(), CommandKind::Break);
        assert_eq!(set.kind(), CommandKind::Break);
        assert_eq!(Command::None.kind(), CommandKind::None);
    }
}

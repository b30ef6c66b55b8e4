use crate::errors::Error;
use crate::models::{Command, CommandKind};
use crate::parse::{date_from_string, time_from_string};

pub const HELP: &str = "Usage: work <command>

Commands:
  start   <?day> <time>       Starts the clocking
  end     <time>              Stops the clocking
  break   <time> <?end-time>  Input a break
  project <name> <time>       Log a project timing
  show                        Show the breakdown of the current week

Options:
  -h, --help                  Show this help message and exit

Examples:
  work start 8:15
  work end 17:12
  work break 12:00
  work break 12:20 14:00";

/// Exact, case-sensitive verb lookup.
pub fn match_verb(verb: &str) -> CommandKind {
    CommandKind::ALL
        .into_iter()
        .find(|kind| kind.as_str() == verb)
        .unwrap_or(CommandKind::None)
}

/// Builds a `Command` from the raw process arguments.
///
/// Classification and tokenization happen in [`CommandParser::new`], assembly in
/// [`CommandParser::package`]. The assembled command is handed out once by
/// [`CommandParser::collect`].
#[derive(Debug, Default)]
pub struct CommandParser {
    kind: CommandKind,
    args: Vec<String>,
    flags: Vec<String>,
    errors: Vec<Error>,
    command: Option<Command>,
    packaged: bool,
}

impl CommandParser {
    /// `argv` includes the program name, as `std::env::args` does.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parser = Self::default();
        let mut argv = argv.into_iter().skip(1).map(Into::into);

        let Some(verb) = argv.next() else {
            return parser;
        };
        parser.kind = match_verb(&verb);
        if parser.kind == CommandKind::None {
            log::debug!("unrecognised verb {:?}", verb);
            return parser;
        }

        for value in argv {
            if value.starts_with('-') {
                parser.flags.push(value);
            } else {
                parser.args.push(value);
            }
        }
        log::debug!(
            "verb {:?} with args {:?} and flags {:?}",
            parser.kind.as_str(),
            parser.args,
            parser.flags
        );

        parser
    }

    /// Assembles the command for the classified verb. Only the first call does anything.
    pub fn package(&mut self) -> &mut Self {
        if self.packaged {
            log::warn!("command already packaged");
            return self;
        }
        self.packaged = true;
        if self.kind == CommandKind::None {
            return self;
        }

        let args = self.args.as_slice();
        let result = match self.kind {
            CommandKind::None => Ok(Command::None),
            CommandKind::Start => assemble_start(args),
            CommandKind::End => assemble_end(args),
            CommandKind::Break => assemble_break(args),
            CommandKind::Project => assemble_project(args),
            CommandKind::Show => Ok(Command::Show),
        };

        match result {
            Ok(command) => self.command = Some(command),
            Err(err) => {
                log::info!("could not assemble {:?}: {}", self.kind.as_str(), err);
                self.errors.push(err);
            }
        }
        self
    }

    /// Takes the assembled command. Later calls return `None`.
    pub fn collect(&mut self) -> Option<Command> {
        self.command.take()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// True when there is no command to run, which is not the same as failing.
    pub fn nothing(&self) -> bool {
        match &self.command {
            Some(command) => command.kind() == CommandKind::None,
            None => true,
        }
    }

    pub fn failed(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[cfg(test)]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Tokens starting with `-`, in the order given. No flag is acted on yet.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }
}

// start [day] <time>
fn assemble_start(args: &[String]) -> Result<Command, Error> {
    let first = args
        .first()
        .ok_or_else(|| Error::insufficient_args("Expected a time."))?;

    // The day is optional: a token that isn't one is left for the time.
    let date = date_from_string(first).ok();
    let cursor = usize::from(date.is_some());

    let time = args
        .get(cursor)
        .ok_or_else(|| Error::insufficient_args("Expected time as well as date."))?;
    let time = time_from_string(time)?;

    Ok(Command::Start { time, date })
}

// end <time>
fn assemble_end(args: &[String]) -> Result<Command, Error> {
    let time = args
        .first()
        .ok_or_else(|| Error::insufficient_args("Expected a time."))?;
    let time = time_from_string(time)?;

    Ok(Command::End { time })
}

// break <time> [end-time]
fn assemble_break(args: &[String]) -> Result<Command, Error> {
    let start = args
        .first()
        .ok_or_else(|| Error::insufficient_args("Expected a time."))?;
    let start = time_from_string(start)?;

    match args.get(1) {
        None => Ok(Command::AddBreak { time: start }),
        Some(end) => {
            let end = time_from_string(end)?;
            Ok(Command::SetBreak { start, end })
        }
    }
}

// project <name> <duration>
fn assemble_project(args: &[String]) -> Result<Command, Error> {
    let name = args
        .first()
        .ok_or_else(|| Error::insufficient_args("Expected a project name."))?;
    let duration = args
        .get(1)
        .ok_or_else(|| Error::insufficient_args("Expected a duration time."))?;
    let duration = time_from_string(duration)?;

    Ok(Command::Project {
        name: name.clone(),
        duration,
    })
}

use std::fmt;

/// Kinds of errors the working-time application can report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[default]
    None,
    InvalidCommand,
    Parse,
    InsufficientArgs,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::None => "None",
            ErrorKind::InvalidCommand => "InvalidCommand",
            ErrorKind::Parse => "Parse",
            ErrorKind::InsufficientArgs => "InsufficientArgs",
        };
        f.write_str(name)
    }
}

/// Error value returned by the primitive parsers and the command parser.
#[derive(Debug, Default, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{kind}-Error] - {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn insufficient_args(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientArgs, message)
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand, message)
    }
}

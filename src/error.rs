use std::io::{self, Write};

use crate::core::commands::CommandError;

/// The only text a user ever sees for a failure, whatever its cause.
pub const GENERIC_ERROR: &str = "An error has occurred\n";

/// Coarse classification of every failure the shell can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Invocation,
    Parse,
    BuiltinArgument,
    Execution,
}

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Invocation(String),
    FlagError(String),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::Invocation(_) | ShellError::FlagError(_) => ErrorKind::Invocation,
            ShellError::Readline(_) | ShellError::Io(_) => ErrorKind::Execution,
        }
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Invocation(msg) => write!(f, "Invocation error: {}", msg),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

/// Receives every per-group failure of a line as it happens.
pub trait ErrorSink {
    fn report(&mut self, err: &CommandError);
}

/// Collapses every error to [`GENERIC_ERROR`] on standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl ErrorSink for StderrSink {
    fn report(&mut self, err: &CommandError) {
        log::debug!("{:?} error: {}", err.kind(), err);
        write_generic_error();
    }
}

pub fn report_shell_error(err: &ShellError) {
    log::debug!("{:?} error: {}", err.kind(), err);
    write_generic_error();
}

fn write_generic_error() {
    let mut stderr = io::stderr().lock();
    // Nowhere left to report a failure of the error stream itself.
    let _ = stderr.write_all(GENERIC_ERROR.as_bytes());
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::ParseError;

    #[derive(Default)]
    struct Collect(Vec<ErrorKind>);

    impl ErrorSink for Collect {
        fn report(&mut self, err: &CommandError) {
            self.0.push(err.kind());
        }
    }

    #[test]
    fn test_generic_message_is_exact() {
        assert_eq!(GENERIC_ERROR, "An error has occurred\n");
    }

    #[test]
    fn test_sink_sees_kind() {
        let mut sink = Collect::default();
        sink.report(&CommandError::Parse(ParseError::MultipleRedirections));
        sink.report(&CommandError::InvalidArguments("cd".into()));
        assert_eq!(sink.0, vec![ErrorKind::Parse, ErrorKind::BuiltinArgument]);
    }

    #[test]
    fn test_shell_error_kind() {
        assert_eq!(
            ShellError::Invocation("too many arguments".into()).kind(),
            ErrorKind::Invocation
        );
        assert!(!ShellError::FlagError("bad".into()).to_string().is_empty());
    }
}

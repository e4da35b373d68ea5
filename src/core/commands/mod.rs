use std::collections::BTreeMap;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use super::parser::ParseError;
use super::state::SessionState;
use crate::error::ErrorKind;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum CommandError {
    Parse(ParseError),
    InvalidArguments(String),
    TooManyGroups(usize),
    TooManyPaths(usize),
    ChangeDirectory(std::io::Error),
    ProcessError(ProcessError),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Parse(_) | CommandError::TooManyGroups(_) => ErrorKind::Parse,
            CommandError::InvalidArguments(_) | CommandError::TooManyPaths(_) => {
                ErrorKind::BuiltinArgument
            }
            CommandError::ChangeDirectory(_) | CommandError::ProcessError(_) => {
                ErrorKind::Execution
            }
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Parse(err) => write!(f, "parse error: {}", err),
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::TooManyGroups(n) => write!(f, "too many commands: {} dropped", n),
            CommandError::TooManyPaths(n) => write!(f, "search path full: {} dropped", n),
            CommandError::ChangeDirectory(err) => write!(f, "cd: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        CommandError::Parse(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the line loop does after a group has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    AbortLine,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[String], state: &mut SessionState) -> Result<Flow, CommandError>;

    /// How the rest of the line proceeds once `err` has been reported.
    fn flow_after(&self, _err: &CommandError) -> Flow {
        Flow::Continue
    }
}

#[derive(Debug, Clone)]
enum CommandType {
    Cd(CdCommand),
    Path(PathCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut SessionState) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Path(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
        }
    }

    fn flow_after(&self, err: &CommandError) -> Flow {
        match self {
            CommandType::Cd(cmd) => cmd.flow_after(err),
            CommandType::Path(cmd) => cmd.flow_after(err),
            CommandType::Exit(cmd) => cmd.flow_after(err),
        }
    }
}

/// Result of running a builtin: where the line goes next, and the error
/// to report first, if any.
#[derive(Debug)]
pub struct BuiltinOutcome {
    pub flow: Flow,
    pub error: Option<CommandError>,
}

#[derive(Debug, Clone)]
pub struct BuiltinDispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("path", CommandType::Path(PathCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        Self { commands }
    }

    #[cfg(test)]
    pub(crate) fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs `name` if it is a builtin; `None` means it must be launched.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        state: &mut SessionState,
    ) -> Option<BuiltinOutcome> {
        let cmd = self.commands.get(name)?;
        let outcome = match cmd.execute(args, state) {
            Ok(flow) => BuiltinOutcome { flow, error: None },
            Err(err) => BuiltinOutcome {
                flow: cmd.flow_after(&err),
                error: Some(err),
            },
        };
        Some(outcome)
    }
}

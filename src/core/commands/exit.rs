use super::{Command, CommandError, Flow};
use crate::core::state::SessionState;

/// Ends the shell; any arguments are ignored.
#[derive(Debug, Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _state: &mut SessionState) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

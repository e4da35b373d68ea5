use super::{Command, CommandError, Flow};
use crate::core::state::SessionState;
use std::env;

/// Changes the shell's working directory; takes exactly one argument.
#[derive(Debug, Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _state: &mut SessionState) -> Result<Flow, CommandError> {
        let [dir] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd expects exactly one directory, got {}",
                args.len()
            )));
        };

        env::set_current_dir(dir).map_err(CommandError::ChangeDirectory)?;
        log::debug!("cd: now in {}", dir);
        Ok(Flow::Continue)
    }
}

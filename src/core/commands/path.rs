use super::{Command, CommandError, Flow};
use crate::core::state::SessionState;

/// As the first argument, clears the search path back to its initial entry.
pub const RESET_FLAG: &str = "-o";

/// Appends directories to the search path: `path [-o] dir...`.
#[derive(Debug, Clone)]
pub struct PathCommand;

impl Default for PathCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PathCommand {
    fn execute(&self, args: &[String], state: &mut SessionState) -> Result<Flow, CommandError> {
        let Some(first) = args.first() else {
            return Err(CommandError::InvalidArguments(
                "path expects at least one directory".to_string(),
            ));
        };

        if first == RESET_FLAG {
            state.reset_search_path();
        }

        // `-o` anywhere else is accepted and ignored.
        let dropped = args
            .iter()
            .filter(|arg| arg.as_str() != RESET_FLAG)
            .filter(|arg| !state.push_search_path(arg))
            .count();

        log::debug!("path: {:?}", state.search_path());
        if dropped > 0 {
            return Err(CommandError::TooManyPaths(dropped));
        }
        Ok(Flow::Continue)
    }

    fn flow_after(&self, err: &CommandError) -> Flow {
        match err {
            CommandError::InvalidArguments(_) => Flow::AbortLine,
            _ => Flow::Continue,
        }
    }
}

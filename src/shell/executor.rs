use crate::core::commands::{BuiltinDispatcher, CommandError, Flow};
use crate::core::config::Limits;
use crate::core::parser::{parse_group, split_groups};
use crate::core::state::SessionState;
use crate::error::ErrorSink;
use crate::process::{Barrier, ProcessLauncher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Parses and runs lines, one at a time, against a persistent session.
#[derive(Debug, Clone)]
pub struct LineExecutor {
    state: SessionState,
    limits: Limits,
    builtins: BuiltinDispatcher,
    launcher: ProcessLauncher,
}

impl LineExecutor {
    pub fn new(limits: Limits) -> Self {
        Self {
            state: SessionState::new(&limits),
            limits,
            builtins: BuiltinDispatcher::new(),
            launcher: ProcessLauncher::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs every group of `line` and waits for all of their children.
    ///
    /// `exit` returns immediately, leaving children of this line running.
    pub fn execute_line(&mut self, line: &str, sink: &mut dyn ErrorSink) -> LineOutcome {
        let split = split_groups(line, self.limits.max_groups);
        if split.dropped > 0 {
            sink.report(&CommandError::TooManyGroups(split.dropped));
        }

        let mut barrier = Barrier::new();
        for source in split.groups {
            match self.execute_group(source, &mut barrier, sink) {
                Flow::Continue => {}
                Flow::AbortLine => break,
                Flow::Exit => return LineOutcome::Exit,
            }
        }

        log::debug!("waiting for {} children", barrier.pending());
        barrier.wait_all();
        LineOutcome::Continue
    }

    fn execute_group(
        &mut self,
        source: &str,
        barrier: &mut Barrier,
        sink: &mut dyn ErrorSink,
    ) -> Flow {
        let group = match parse_group(source, self.limits.max_tokens) {
            Ok(group) => group,
            Err(err) => {
                sink.report(&err.into());
                return Flow::Continue;
            }
        };
        log::debug!("group: {:?}", group);

        // Builtins run in the shell itself, so a redirection does not apply.
        if let Some(outcome) = self.builtins.dispatch(&group.name, &group.args, &mut self.state) {
            if let Some(err) = outcome.error {
                sink.report(&err);
            }
            return outcome.flow;
        }

        self.launcher.launch(&group, self.state.search_path(), barrier, sink);
        Flow::Continue
    }
}

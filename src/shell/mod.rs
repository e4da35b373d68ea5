use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

use rustyline::{config::Configurer, error::ReadlineError, DefaultEditor};

mod executor;

pub use executor::{LineExecutor, LineOutcome};

use crate::{
    core::config::Config,
    error::{report_shell_error, ShellError, StderrSink},
    flags::Flags,
};

pub const PROMPT: &str = "dash> ";

const BANNER: &str = "
############################################
##                                        ##
##                                        ##
##        **     DAllas SHell     **      ##
##                                        ##
##                                        ##
############################################
";

/// Where lines come from, chosen by the number of positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch(PathBuf),
}

impl Mode {
    pub fn from_args(args: &[String]) -> Result<Self, ShellError> {
        match args {
            [] => Ok(Mode::Interactive),
            [script] => Ok(Mode::Batch(PathBuf::from(script))),
            _ => Err(ShellError::Invocation(format!(
                "expected at most one script, got {}",
                args.len()
            ))),
        }
    }
}

pub struct Shell {
    mode: Mode,
    config: Config,
    executor: LineExecutor,
    sink: StderrSink,
}

impl Shell {
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let mode = Mode::from_args(flags.positionals())?;
        let config = Config::from_flags(flags);
        let executor = LineExecutor::new(config.limits);

        Ok(Shell {
            mode,
            config,
            executor,
            sink: StderrSink,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        match self.mode.clone() {
            Mode::Interactive => self.run_interactive(),
            Mode::Batch(script) => self.run_batch(&script),
        }
    }

    fn run_interactive(&mut self) -> Result<(), ShellError> {
        if self.config.show_banner {
            println!("{}", BANNER);
        }

        if io::stdin().is_terminal() {
            self.run_editor()
        } else {
            self.run_piped()
        }
    }

    fn run_editor(&mut self) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);
        if let Some(history) = &self.config.history_file {
            // A missing history file is normal on first use.
            let _ = editor.load_history(history);
        }

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if self.execute_line(&line) == LineOutcome::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e @ (ReadlineError::Io(_) | ReadlineError::Errno(_))) => return Err(e.into()),
                // Undecodable input only costs the line it was on.
                Err(e) => report_shell_error(&e.into()),
            }
        }

        if let Some(history) = &self.config.history_file {
            if let Err(e) = editor.save_history(history) {
                log::warn!("could not save history to {}: {}", history.display(), e);
            }
        }
        Ok(())
    }

    /// Prompts on stdout and reads stdin directly when it is not a terminal.
    fn run_piped(&mut self) -> Result<(), ShellError> {
        let mut stdin = io::stdin().lock();
        loop {
            let mut stdout = io::stdout().lock();
            stdout.write_all(PROMPT.as_bytes())?;
            stdout.flush()?;
            drop(stdout);

            let Some(line) = read_line_lossy(&mut stdin)? else {
                break;
            };
            if self.execute_line(&line) == LineOutcome::Exit {
                break;
            }
        }
        Ok(())
    }

    fn run_batch(&mut self, script: &Path) -> Result<(), ShellError> {
        let file = File::open(script).map_err(|e| {
            ShellError::Invocation(format!("cannot open {}: {}", script.display(), e))
        })?;
        let mut reader = BufReader::new(file);

        while let Some(line) = read_line_lossy(&mut reader)? {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}{}", PROMPT, line)?;
            stdout.flush()?;
            drop(stdout);

            if self.execute_line(&line) == LineOutcome::Exit {
                break;
            }
        }
        Ok(())
    }

    fn execute_line(&mut self, line: &str) -> LineOutcome {
        self.executor.execute_line(line, &mut self.sink)
    }
}

/// Reads one line without its terminator, replacing invalid UTF-8.
/// Returns `None` at end of input.
fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

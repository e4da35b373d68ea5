use std::borrow::Cow;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use super::{Barrier, ProcessError, RedirectionScope};
use crate::core::parser::CommandGroup;
use crate::error::ErrorSink;
use crate::path::PathResolver;

/// Runs non-builtin command groups as child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    resolver: PathResolver,
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }

    /// Resolves and starts `group`, reporting any failure to `sink`.
    ///
    /// A redirected group is waited on before this returns, with the shell's
    /// own streams restored afterwards. Its failures are reported while the
    /// redirection is still in place, so they land in the target file. Any
    /// other child is handed to `barrier` and left running.
    pub fn launch(
        &self,
        group: &CommandGroup,
        search_path: &[String],
        barrier: &mut Barrier,
        sink: &mut dyn ErrorSink,
    ) {
        let scope = match group.redirect.as_deref().map(RedirectionScope::acquire) {
            None => None,
            Some(Ok(scope)) => Some(scope),
            Some(Err(e)) => {
                sink.report(&ProcessError::Redirect(e).into());
                return;
            }
        };

        if let Err(err) = self.start(group, search_path, barrier, scope.is_some()) {
            sink.report(&err.into());
        }
        drop(scope);
    }

    fn start(
        &self,
        group: &CommandGroup,
        search_path: &[String],
        barrier: &mut Barrier,
        redirected: bool,
    ) -> Result<(), ProcessError> {
        let program = self.resolver.resolve(&group.name, search_path)?;
        let mut child = self.spawn_process(&program, &group.args)?;

        if redirected {
            let status = child.wait().map_err(ProcessError::Wait)?;
            log::debug!("{} exited with {}", program.display(), status);
        } else {
            barrier.track(child);
        }
        Ok(())
    }

    /// Starts `program` with `args`; its argv[0] is the resolved path.
    ///
    /// A program that cannot be executed never runs any shell code: the
    /// failure comes back here as an error instead.
    pub fn spawn_process(&self, program: &Path, args: &[String]) -> Result<Child, ProcessError> {
        let mut command = Command::new(invocable(program).as_os_str());
        command
            .arg0(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = command.spawn().map_err(ProcessError::Spawn)?;
        log::debug!("spawned {} as {}", program.display(), child.id());
        Ok(child)
    }
}

/// `Command` searches `$PATH` for names without a slash; anchor those to
/// the working directory so only the shell's own search path applies.
fn invocable(program: &Path) -> Cow<'_, Path> {
    match program.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Cow::Borrowed(program),
        _ => Cow::Owned(Path::new(".").join(program)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::CommandError;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Collect(Vec<String>);

    impl ErrorSink for Collect {
        fn report(&mut self, err: &CommandError) {
            self.0.push(err.to_string());
        }
    }

    fn group(name: &str, args: &[&str]) -> CommandGroup {
        CommandGroup {
            name: name.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            redirect: None,
        }
    }

    #[test]
    fn test_invocable() {
        assert_eq!(invocable(Path::new("ls")), Path::new("./ls"));
        assert_eq!(invocable(Path::new("/bin/ls")), Path::new("/bin/ls"));
        assert_eq!(invocable(Path::new("bin/ls")), Path::new("bin/ls"));
    }

    #[test]
    fn test_launch_tracks_unredirected_child() {
        let launcher = ProcessLauncher::new();
        let mut barrier = Barrier::new();
        let search_path = vec![String::new(), "/bin".to_string()];

        let mut sink = Collect::default();

        launcher.launch(&group("true", &[]), &search_path, &mut barrier, &mut sink);
        assert!(sink.0.is_empty());
        assert_eq!(barrier.pending(), 1);
        assert_eq!(barrier.wait_all(), 1);
    }

    #[test]
    fn test_launch_unresolvable() {
        let launcher = ProcessLauncher::new();
        let mut barrier = Barrier::new();
        let mut sink = Collect::default();

        launcher.launch(&group("true", &[]), &[String::new()], &mut barrier, &mut sink);
        assert_eq!(sink.0.len(), 1);
        assert!(sink.0[0].contains("Command not found: true"));
        assert_eq!(barrier.pending(), 0);
    }

    #[test]
    fn test_spawn_passes_arguments() {
        let launcher = ProcessLauncher::new();
        let output = launcher
            .spawn_process(&PathBuf::from("/bin/sh"), &["-c".into(), "exit 3".into()])
            .unwrap()
            .wait()
            .unwrap();
        assert_eq!(output.code(), Some(3));
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let launcher = ProcessLauncher::new();
        let result = launcher.spawn_process(Path::new("/nonexistent/tool"), &[]);
        assert!(matches!(result, Err(ProcessError::Spawn(_))));
    }
}

use std::fmt;

pub mod barrier;
pub mod launcher;
pub mod redirect;

pub use barrier::Barrier;
pub use launcher::ProcessLauncher;
pub use redirect::RedirectionScope;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Redirect(std::io::Error),
    Spawn(std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Redirect(e) => write!(f, "Redirection failed: {}", e),
            ProcessError::Spawn(e) => write!(f, "Spawn failed: {}", e),
            ProcessError::Wait(e) => write!(f, "Wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

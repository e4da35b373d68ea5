use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::{AsFd, AsRawFd, OwnedFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Redirection targets are created world-accessible, subject to the umask.
pub const TARGET_MODE: u32 = 0o777;

/// Points the shell's standard output and error at a file for as long as
/// it lives, so children spawned meanwhile inherit the file. Dropping it
/// puts the original descriptors back.
#[derive(Debug)]
pub struct RedirectionScope {
    saved_out: OwnedFd,
    saved_err: OwnedFd,
    target: File,
}

impl RedirectionScope {
    /// Opens `target` (created if absent, truncated if present) and swaps it in.
    pub fn acquire(target: &Path) -> io::Result<Self> {
        let target = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(TARGET_MODE)
            .open(target)?;

        io::stdout().flush()?;
        let saved_out = io::stdout().as_fd().try_clone_to_owned()?;
        let saved_err = io::stderr().as_fd().try_clone_to_owned()?;

        // From here on, Drop restores whatever has been swapped.
        let scope = Self {
            saved_out,
            saved_err,
            target,
        };
        redirect_fd(scope.target.as_raw_fd(), libc::STDOUT_FILENO)?;
        redirect_fd(scope.target.as_raw_fd(), libc::STDERR_FILENO)?;
        Ok(scope)
    }
}

impl Drop for RedirectionScope {
    fn drop(&mut self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        if let Err(e) = redirect_fd(self.saved_out.as_raw_fd(), libc::STDOUT_FILENO) {
            log::warn!("failed to restore stdout: {}", e);
        }
        if let Err(e) = redirect_fd(self.saved_err.as_raw_fd(), libc::STDERR_FILENO) {
            log::warn!("failed to restore stderr: {}", e);
        }
    }
}

fn redirect_fd(src: RawFd, dst: RawFd) -> io::Result<()> {
    if unsafe { libc::dup2(src, dst) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_unopenable_target_leaves_streams_alone() {
        let target = env::temp_dir().join("dash_no_such_dir").join("out.txt");
        assert!(RedirectionScope::acquire(&target).is_err());
        assert!(!target.exists());
    }
}

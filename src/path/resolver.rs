use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::process::ProcessError;

/// Finds the executable a bare command name refers to.
#[derive(Debug, Clone)]
pub struct PathResolver;

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first executable `entry/name` along `search_path`.
    pub fn resolve(&self, name: &str, search_path: &[String]) -> Result<PathBuf, ProcessError> {
        search_path
            .iter()
            .map(|entry| self.candidate(entry, name))
            .find(|candidate| self.is_executable(candidate))
            .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))
    }

    pub fn candidate(&self, entry: &str, name: &str) -> PathBuf {
        if entry.is_empty() {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{}/{}", entry, name))
        }
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return false;
        };
        unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn search_path(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn setup_bin_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("dash_resolver_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_candidate() {
        let resolver = PathResolver::new();
        assert_eq!(resolver.candidate("", "ls"), PathBuf::from("ls"));
        assert_eq!(resolver.candidate("/bin", "ls"), PathBuf::from("/bin/ls"));
        assert_eq!(resolver.candidate("", "/bin/ls"), PathBuf::from("/bin/ls"));
    }

    #[test]
    fn test_resolves_in_order() {
        let first = setup_bin_dir("first");
        let second = setup_bin_dir("second");
        for dir in [&first, &second] {
            let tool = dir.join("tool");
            fs::write(&tool, "#!/bin/sh\n").unwrap();
            fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let resolver = PathResolver::new();
        let path = search_path(&["", second.to_str().unwrap(), first.to_str().unwrap()]);
        assert_eq!(resolver.resolve("tool", &path).unwrap(), second.join("tool"));

        fs::remove_dir_all(first).unwrap();
        fs::remove_dir_all(second).unwrap();
    }

    #[test]
    fn test_skips_non_executable() {
        let plain = setup_bin_dir("plain");
        let runnable = setup_bin_dir("runnable");
        fs::write(plain.join("tool"), "data").unwrap();
        fs::set_permissions(plain.join("tool"), fs::Permissions::from_mode(0o644)).unwrap();
        fs::write(runnable.join("tool"), "#!/bin/sh\n").unwrap();
        fs::set_permissions(runnable.join("tool"), fs::Permissions::from_mode(0o755)).unwrap();

        let resolver = PathResolver::new();
        let path = search_path(&[plain.to_str().unwrap(), runnable.to_str().unwrap()]);
        assert_eq!(resolver.resolve("tool", &path).unwrap(), runnable.join("tool"));

        fs::remove_dir_all(plain).unwrap();
        fs::remove_dir_all(runnable).unwrap();
    }

    #[test]
    fn test_absolute_name_with_empty_entry() {
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve("/bin/sh", &search_path(&[""])).unwrap(),
            PathBuf::from("/bin/sh")
        );
    }

    #[test]
    fn test_not_found() {
        let resolver = PathResolver::new();
        let result = resolver.resolve("definitely_not_a_command_42", &search_path(&["", "/bin"]));
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
    }

    #[test]
    fn test_empty_search_path() {
        let resolver = PathResolver::new();
        assert!(resolver.resolve("sh", &[]).is_err());
    }
}

use super::config::Limits;

/// Interpreter state that outlives a single line.
///
/// The working directory is not stored here: `cd` changes the process's
/// own directory, which spawned children inherit.
#[derive(Debug, Clone)]
pub struct SessionState {
    search_path: Vec<String>,
    max_paths: usize,
}

impl SessionState {
    pub fn new(limits: &Limits) -> Self {
        Self {
            search_path: vec![String::new()],
            max_paths: limits.max_paths.max(1),
        }
    }

    /// Directories tried in order; the empty entry means the name as given.
    pub fn search_path(&self) -> &[String] {
        &self.search_path
    }

    pub fn reset_search_path(&mut self) {
        self.search_path.truncate(1);
        self.search_path[0].clear();
    }

    /// Returns false when the list is already full.
    pub fn push_search_path(&mut self, entry: &str) -> bool {
        if self.search_path.len() >= self.max_paths {
            return false;
        }
        self.search_path.push(entry.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_search_path() {
        let state = SessionState::new(&Limits::default());
        assert_eq!(state.search_path(), &[String::new()]);
    }

    #[test]
    fn test_push_until_full() {
        let limits = Limits {
            max_paths: 3,
            ..Limits::default()
        };
        let mut state = SessionState::new(&limits);
        assert!(state.push_search_path("/bin"));
        assert!(state.push_search_path("/usr/bin"));
        assert!(!state.push_search_path("/sbin"));
        assert_eq!(state.search_path(), &["", "/bin", "/usr/bin"]);
    }

    #[test]
    fn test_reset_keeps_empty_entry() {
        let mut state = SessionState::new(&Limits::default());
        state.push_search_path("/bin");
        state.reset_search_path();
        assert_eq!(state.search_path(), &[String::new()]);
    }
}

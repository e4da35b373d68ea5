use std::path::PathBuf;

use crate::flags::Flags;

/// Upper bounds on what a single line may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Parallel groups per line.
    pub max_groups: usize,
    /// Whitespace-separated tokens per group.
    pub max_tokens: usize,
    /// Search path entries, including the initial empty entry.
    pub max_paths: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_groups: 10,
            max_tokens: 10,
            max_paths: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub limits: Limits,
    pub history_file: Option<PathBuf>,
    pub show_banner: bool,
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            limits: Limits::default(),
            history_file: dirs::home_dir().map(|home| home.join(".dash_history")),
            show_banner: !flags.is_set("quiet"),
        }
    }
}

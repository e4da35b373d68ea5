use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    positionals: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Do not show the startup banner".to_string(),
                value: None,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Log diagnostics to stderr".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            positionals: Vec::new(),
        }
    }

    /// Marks known flags as set; every other argument is positional.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut only_positionals = false;

        for arg in args {
            if only_positionals {
                self.positionals.push(arg.clone());
                continue;
            }
            if arg == "--" {
                only_positionals = true;
                continue;
            }

            match self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
            {
                Some(flag) => flag.value = Some("true".to_string()),
                None if arg.starts_with("--") => {
                    return Err(ShellError::FlagError(format!("Unknown flag {}", arg)));
                }
                None => self.positionals.push(arg.clone()),
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    pub fn print_help(&self) {
        println!("Usage: dash [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

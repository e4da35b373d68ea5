mod splitter;
mod tokenizer;

pub use splitter::{split_groups, SplitLine, PARALLEL_DELIMITER};
pub use tokenizer::{parse_group, CommandGroup, REDIRECTION_OPERATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingCommand,
    MultipleRedirections,
    MissingRedirectionTarget,
    ExtraTokensAfterTarget,
    TooManyTokens { count: usize, max: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingCommand => write!(f, "missing command name"),
            ParseError::MultipleRedirections => write!(f, "multiple redirections"),
            ParseError::MissingRedirectionTarget => write!(f, "missing redirection target"),
            ParseError::ExtraTokensAfterTarget => {
                write!(f, "extra tokens after redirection target")
            }
            ParseError::TooManyTokens { count, max } => {
                write!(f, "too many tokens: {} (limit {})", count, max)
            }
        }
    }
}

impl std::error::Error for ParseError {}

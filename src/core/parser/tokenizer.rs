use std::path::PathBuf;

use super::ParseError;

/// Sends both standard output and standard error of a command to a file.
pub const REDIRECTION_OPERATOR: char = '>';

/// One command of a line, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    pub name: String,
    pub args: Vec<String>,
    pub redirect: Option<PathBuf>,
}

#[derive(Debug)]
enum Redirect<'a> {
    None,
    Pending,
    Target(&'a str),
}

/// Tokenizes one command source on whitespace and pulls out its redirection.
///
/// The operator may stand alone (`ls > out`) or be glued to its neighbours
/// (`ls>out`, `ls> out`, `ls >out`). Only one redirection is allowed, and it
/// must be the last thing on the command.
pub fn parse_group(source: &str, max_tokens: usize) -> Result<CommandGroup, ParseError> {
    let tokens: Vec<&str> = source.split_whitespace().collect();
    if tokens.len() > max_tokens {
        return Err(ParseError::TooManyTokens {
            count: tokens.len(),
            max: max_tokens,
        });
    }

    let mut words: Vec<String> = Vec::with_capacity(tokens.len());
    let mut redirect = Redirect::None;

    for token in tokens {
        if token.contains(REDIRECTION_OPERATOR) {
            if !matches!(redirect, Redirect::None)
                || token.matches(REDIRECTION_OPERATOR).count() > 1
            {
                return Err(ParseError::MultipleRedirections);
            }

            let (left, right) = token
                .split_once(REDIRECTION_OPERATOR)
                .unwrap_or((token, ""));
            if !left.is_empty() {
                words.push(left.to_string());
            }
            redirect = if right.is_empty() {
                Redirect::Pending
            } else {
                Redirect::Target(right)
            };
            continue;
        }

        match redirect {
            Redirect::None => words.push(token.to_string()),
            Redirect::Pending => redirect = Redirect::Target(token),
            Redirect::Target(_) => return Err(ParseError::ExtraTokensAfterTarget),
        }
    }

    let redirect = match redirect {
        Redirect::None => None,
        Redirect::Pending => return Err(ParseError::MissingRedirectionTarget),
        Redirect::Target(target) => Some(PathBuf::from(target)),
    };

    let mut words = words.into_iter();
    let name = words.next().ok_or(ParseError::MissingCommand)?;

    Ok(CommandGroup {
        name,
        args: words.collect(),
        redirect,
    })
}

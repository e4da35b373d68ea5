/// Separates commands that run concurrently on one line.
pub const PARALLEL_DELIMITER: char = '&';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine<'a> {
    pub groups: Vec<&'a str>,
    /// Segments past `max_groups` that were not produced.
    pub dropped: usize,
}

/// Splits a line into at most `max_groups` command sources.
///
/// Consecutive delimiters collapse and blank segments are skipped, so
/// `"a && b &"` yields `["a ", " b "]`.
pub fn split_groups(line: &str, max_groups: usize) -> SplitLine<'_> {
    let mut segments = line
        .split(PARALLEL_DELIMITER)
        .filter(|segment| !segment.trim().is_empty());

    let groups: Vec<&str> = segments.by_ref().take(max_groups).collect();
    let dropped = segments.count();

    SplitLine { groups, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_command() {
        let split = split_groups("ls -la /tmp", 10);
        assert_eq!(split.groups, vec!["ls -la /tmp"]);
        assert_eq!(split.dropped, 0);
    }

    #[test]
    fn test_parallel_commands() {
        let split = split_groups("a & b&c", 10);
        assert_eq!(split.groups, vec!["a ", " b", "c"]);
    }

    #[test]
    fn test_collapses_empty_segments() {
        let split = split_groups("&& a &&& b & ", 10);
        assert_eq!(split.groups, vec![" a ", " b "]);
        assert_eq!(split.dropped, 0);
    }

    #[test]
    fn test_blank_line() {
        assert!(split_groups("", 10).groups.is_empty());
        assert!(split_groups("  \t ", 10).groups.is_empty());
        assert!(split_groups("&&&", 10).groups.is_empty());
    }

    #[test]
    fn test_caps_group_count() {
        let split = split_groups("a&b&c&d&e", 3);
        assert_eq!(split.groups, vec!["a", "b", "c"]);
        assert_eq!(split.dropped, 2);
    }
}

//! Parsing of delimited reflog dumps.
//!
//! Each input line carries four fields joined by the ASCII record separator
//! (`U+001E`): abbreviated hash, author name, selector (`HEAD@{0}`) and subject. This
//! is what `git log -g --format=%h%x1e%aN%x1e%gd%x1e%gs` prints. Lines with any other
//! field count are dropped without affecting their neighbours.

use crate::core::reflog_action::ReflogAction;
use serde::{Deserialize, Serialize};

/// Field separator between the columns of a reflog line
pub const FIELD_SEPARATOR: char = '\u{1e}';

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflogEntry {
    pub hash: String,
    pub author: String,
    pub selector: String,
    pub subject: String,
    pub action_category: ReflogAction,
}

pub struct ReflogParser;

impl ReflogParser {
    pub fn parse<I, S>(lines: I) -> Vec<ReflogEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| Self::parse_line(line.as_ref()))
            .collect()
    }

    /// Parse one delimited line; `None` unless it has exactly four fields
    pub fn parse_line(line: &str) -> Option<ReflogEntry> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let &[hash, author, selector, subject] = fields.as_slice() else {
            log::trace!(
                "Dropping reflog line with {} fields (expected {FIELD_COUNT})",
                fields.len()
            );
            return None;
        };

        Some(ReflogEntry {
            hash: hash.to_string(),
            author: author.to_string(),
            selector: selector.to_string(),
            subject: subject.to_string(),
            action_category: ReflogAction::classify(subject),
        })
    }

    /// Build the `--format` argument that produces lines this parser accepts
    pub fn git_format() -> String {
        ["%h", "%aN", "%gd", "%gs"].join("%x1e")
    }
}

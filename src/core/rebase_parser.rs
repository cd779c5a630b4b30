//! Parsing of interactive-rebase instruction lists.
//!
//! [`RebaseTodoParser`] turns the lines of `rebase-merge/git-rebase-todo` (pending
//! instructions) or `rebase-merge/done` (already executed instructions) into
//! [`RebaseInstructionEntry`] values. Both files share one line grammar.
//!
//! Parsing is best-effort: comments, blank lines and lines with an unknown command
//! word contribute no entry, and lines that are too short simply leave fields empty.
//! The parser never fails.

use crate::core::action::{ActionRule, FixupFlag, RebaseAction};
use serde::{Deserialize, Serialize};

/// One instruction of a rebase todo or done list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebaseInstructionEntry {
    pub action: RebaseAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixup_flag: Option<FixupFlag>,
}

impl RebaseInstructionEntry {
    fn bare(action: RebaseAction) -> Self {
        Self {
            action,
            commit_hash: None,
            subject: None,
            fixup_flag: None,
        }
    }
}

pub struct RebaseTodoParser;

impl RebaseTodoParser {
    /// Parse an ordered sequence of lines, keeping one entry per meaningful line
    pub fn parse<I, S>(lines: I) -> Vec<RebaseInstructionEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| Self::parse_line(line.as_ref()))
            .collect()
    }

    /// Parse a single instruction line. Returns `None` for comments, blank lines
    /// and unknown commands.
    pub fn parse_line(line: &str) -> Option<RebaseInstructionEntry> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut tokens = line.split_whitespace();
        let command = tokens.next()?;
        let Some(rule) = ActionRule::lookup(command) else {
            log::trace!("Skipping rebase line with unknown command '{command}'");
            return None;
        };

        let mut entry = RebaseInstructionEntry::bare(rule.action);

        if rule.action == RebaseAction::Break {
            return Some(entry);
        }

        if rule.takes_remainder() {
            // The command word starts the trimmed line, so the rest is a plain suffix
            let remainder = line[command.len()..].trim_start();
            if !remainder.is_empty() {
                entry.subject = Some(remainder.to_string());
            }
            return Some(entry);
        }

        let mut rest = tokens.peekable();
        if rule.has_flag_slot {
            entry.fixup_flag = rest
                .next_if(|token| FixupFlag::from_token(token).is_some())
                .and_then(FixupFlag::from_token);
        }
        entry.commit_hash = rest.next().map(str::to_string);

        let words: Vec<&str> = rest.collect();
        if !words.is_empty() {
            entry.subject = Some(words.join(" "));
        }

        Some(entry)
    }
}

//! Rebase instruction actions and the command-word grammar table.
//!
//! This module defines [`RebaseAction`], the closed set of commands an interactive
//! rebase instruction list can carry, and [`ActionRule`], the shape of the rest of a
//! line once its command word is known. The table is the single place where aliases
//! are resolved, so every alias parses exactly like its canonical word.
//!
//! # Public API
//! - [`RebaseAction`]: Enumeration of instruction commands
//! - [`ActionRule`]: Parsing rule returned by [`ActionRule::lookup`]
//! - [`FixupFlag`]: Message-reuse flag carried by `fixup -C` / `fixup -c`
//!
//! # Grammar
//! | command      | alias | shape                              |
//! |--------------|-------|------------------------------------|
//! | `pick`       | `p`   | `<hash> <subject>`                 |
//! | `reword`     | `r`   | `<hash> <subject>`                 |
//! | `edit`       | `e`   | `<hash> <subject>`                 |
//! | `squash`     | `s`   | `<hash> <subject>`                 |
//! | `fixup`      | `f`   | `[-C \| -c] <hash> <subject>`      |
//! | `drop`       | `d`   | `<hash> <subject>`                 |
//! | `exec`       | `x`   | `<command...>`                     |
//! | `break`      | `b`   | (nothing)                          |
//! | `label`      |       | `<label...>`                       |
//! | `reset`      |       | `<label...>`                       |
//! | `update-ref` |       | `<ref...>`                         |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Command of a single rebase instruction line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RebaseAction {
    Pick,
    Reword,
    Edit,
    Squash,
    Fixup,
    Exec,
    Drop,
    Break,
    Label,
    Reset,
    UpdateRef,
}

/// Command words recognised in instruction lines, canonical words first
const ACTION_TABLE: &[(&str, RebaseAction)] = &[
    ("pick", RebaseAction::Pick),
    ("reword", RebaseAction::Reword),
    ("edit", RebaseAction::Edit),
    ("squash", RebaseAction::Squash),
    ("fixup", RebaseAction::Fixup),
    ("exec", RebaseAction::Exec),
    ("drop", RebaseAction::Drop),
    ("break", RebaseAction::Break),
    ("label", RebaseAction::Label),
    ("reset", RebaseAction::Reset),
    ("update-ref", RebaseAction::UpdateRef),
    ("p", RebaseAction::Pick),
    ("r", RebaseAction::Reword),
    ("e", RebaseAction::Edit),
    ("s", RebaseAction::Squash),
    ("f", RebaseAction::Fixup),
    ("d", RebaseAction::Drop),
    ("b", RebaseAction::Break),
    ("x", RebaseAction::Exec),
];

impl RebaseAction {
    pub const ALL: [RebaseAction; 11] = [
        RebaseAction::Pick,
        RebaseAction::Reword,
        RebaseAction::Edit,
        RebaseAction::Squash,
        RebaseAction::Fixup,
        RebaseAction::Exec,
        RebaseAction::Drop,
        RebaseAction::Break,
        RebaseAction::Label,
        RebaseAction::Reset,
        RebaseAction::UpdateRef,
    ];

    /// Canonical command word as written by git
    pub fn as_str(&self) -> &'static str {
        match self {
            RebaseAction::Pick => "pick",
            RebaseAction::Reword => "reword",
            RebaseAction::Edit => "edit",
            RebaseAction::Squash => "squash",
            RebaseAction::Fixup => "fixup",
            RebaseAction::Exec => "exec",
            RebaseAction::Drop => "drop",
            RebaseAction::Break => "break",
            RebaseAction::Label => "label",
            RebaseAction::Reset => "reset",
            RebaseAction::UpdateRef => "update-ref",
        }
    }

    /// Documented short alias, if the command has one
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            RebaseAction::Pick => Some("p"),
            RebaseAction::Reword => Some("r"),
            RebaseAction::Edit => Some("e"),
            RebaseAction::Squash => Some("s"),
            RebaseAction::Fixup => Some("f"),
            RebaseAction::Drop => Some("d"),
            RebaseAction::Break => Some("b"),
            RebaseAction::Exec => Some("x"),
            RebaseAction::Label | RebaseAction::Reset | RebaseAction::UpdateRef => None,
        }
    }

    /// Whether lines with this command name a commit
    pub fn expects_hash(&self) -> bool {
        matches!(
            self,
            RebaseAction::Pick
                | RebaseAction::Reword
                | RebaseAction::Edit
                | RebaseAction::Squash
                | RebaseAction::Fixup
                | RebaseAction::Drop
        )
    }

    /// The parsing rule for this command
    pub fn rule(self) -> ActionRule {
        ActionRule {
            action: self,
            expects_hash: self.expects_hash(),
            has_flag_slot: self == RebaseAction::Fixup,
        }
    }
}

impl fmt::Display for RebaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of an instruction line after its command word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub action: RebaseAction,
    pub expects_hash: bool,
    pub has_flag_slot: bool,
}

impl ActionRule {
    /// Look up a command word (canonical or alias). Matching is case-sensitive.
    pub fn lookup(word: &str) -> Option<ActionRule> {
        ACTION_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == word)
            .map(|(_, action)| action.rule())
    }

    /// Whether the remainder of the line is kept verbatim as the subject
    /// (`exec`, `label`, `reset`, `update-ref`)
    pub fn takes_remainder(&self) -> bool {
        !self.expects_hash && self.action != RebaseAction::Break
    }
}

/// Message-reuse flag of a `fixup` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixupFlag {
    /// `-C`: use the fixup commit's message as is
    #[serde(rename = "-C")]
    ReuseMessage,
    /// `-c`: use the fixup commit's message and open the editor
    #[serde(rename = "-c")]
    EditMessage,
}

impl FixupFlag {
    pub fn from_token(token: &str) -> Option<FixupFlag> {
        match token {
            "-C" => Some(FixupFlag::ReuseMessage),
            "-c" => Some(FixupFlag::EditMessage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FixupFlag::ReuseMessage => "-C",
            FixupFlag::EditMessage => "-c",
        }
    }
}

impl fmt::Display for FixupFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

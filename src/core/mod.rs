//! Core functionality for porcelain-state.
//!
//! Parsers for git plumbing output, the freshness-checked cache, and the state layer
//! that ties them to a repository.

pub mod action;
pub mod cache;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod output;
pub mod rebase_parser;
pub mod reflog_action;
pub mod reflog_parser;
pub mod state;

// === Error handling ===
pub use error::{PorcelainError, Result};

// === Rebase instructions ===
// Grammar table plus the line parser for git-rebase-todo / done
pub use action::{ActionRule, FixupFlag, RebaseAction};
pub use rebase_parser::{RebaseInstructionEntry, RebaseTodoParser};

// === Reflog ===
// Delimited line parser and the subject classifier
pub use reflog_action::ReflogAction;
pub use reflog_parser::{ReflogEntry, ReflogParser, FIELD_SEPARATOR};

// === Caching ===
pub use cache::{
    global, install_global, reset_global, Fingerprint, FreshnessCache, FsMtimeProbe, MtimeProbe,
    DEFAULT_WATCHED_PATHS,
};

// === Repository state ===
pub use config::StateConfig;
pub use git::GitRepo;
pub use state::{cache_key, RebaseStatus, RepoState};

// === Output formatting ===
pub use colors::{
    get_action_color_style, get_aligned_action, get_aligned_category, get_category_color_style,
};
pub use output::{print_error, print_info, print_json, print_section_header};

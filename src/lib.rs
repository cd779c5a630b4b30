//! porcelain-state - typed, cached views of git plumbing output.
//!
//! This library turns the raw text of an interactive-rebase instruction list and a
//! reflog dump into typed entries, and caches derived state against the modification
//! times of repository marker files so an interactive UI can redraw without
//! re-running git.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Rebase instruction and reflog parsers
//! - The freshness-checked cache and its process-wide instance
//! - The repository state layer combining both
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Rebase instructions
    ActionRule,
    FixupFlag,
    RebaseAction,
    RebaseInstructionEntry,
    RebaseTodoParser,

    // Reflog
    ReflogAction,
    ReflogEntry,
    ReflogParser,

    // Caching
    FreshnessCache,
    Fingerprint,
    FsMtimeProbe,
    MtimeProbe,

    // Repository state
    cache_key,
    GitRepo,
    RebaseStatus,
    RepoState,
    StateConfig,

    // Error handling
    PorcelainError,
    Result,
};

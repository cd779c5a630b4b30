//! Cached, typed views of repository state.
//!
//! [`RepoState`] answers questions like "which instructions are left in the current
//! rebase" by going through a [`FreshnessCache`] first. On a miss or a stale entry it
//! reads the raw lines again, runs the matching parser and stores the result. Entries
//! are fingerprinted against the git directory, so they stay valid until one of the
//! cache's watched marker files changes.
//!
//! # Public API
//! - [`RepoState`]: State accessors for one repository
//! - [`RebaseStatus`]: Snapshot of an in-progress rebase
//! - [`cache_key`]: Key convention scoping a feature to a repository root

use crate::core::{
    cache::{self, FreshnessCache},
    error::Result,
    git::{
        GitRepo, REBASE_APPLY_HEAD_NAME_FILE, REBASE_APPLY_ONTO_FILE, REBASE_DONE_FILE,
        REBASE_HEAD_NAME_FILE, REBASE_ONTO_FILE, REBASE_TODO_FILE,
    },
    rebase_parser::{RebaseInstructionEntry, RebaseTodoParser},
    reflog_parser::{ReflogEntry, ReflogParser},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Build the cache key for `feature` in the repository rooted at `root`
pub fn cache_key(feature: &str, root: &Path) -> String {
    let root_hash = format!("{:x}", md5::compute(root.to_string_lossy().as_bytes()));
    format!("{feature}:{root_hash}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebaseStatus {
    pub in_progress: bool,
    /// Branch being rebased, e.g. `refs/heads/topic`; absent for a detached HEAD
    pub head_name: Option<String>,
    /// Commit the branch is being replayed onto
    pub onto: Option<String>,
    pub done: Vec<RebaseInstructionEntry>,
    pub todo: Vec<RebaseInstructionEntry>,
}

pub struct RepoState<'a> {
    repo: &'a GitRepo,
    cache: Arc<FreshnessCache>,
}

impl<'a> RepoState<'a> {
    /// State accessors backed by the process-wide cache
    pub fn new(repo: &'a GitRepo) -> Self {
        Self::with_cache(repo, cache::global())
    }

    pub fn with_cache(repo: &'a GitRepo, cache: Arc<FreshnessCache>) -> Self {
        Self { repo, cache }
    }

    pub fn cache(&self) -> &Arc<FreshnessCache> {
        &self.cache
    }

    /// Instructions still to be executed by the current rebase
    pub fn rebase_todo(&self) -> Result<Vec<RebaseInstructionEntry>> {
        self.cached_instructions("rebase-todo", REBASE_TODO_FILE)
    }

    /// Instructions the current rebase has already executed
    pub fn rebase_done(&self) -> Result<Vec<RebaseInstructionEntry>> {
        self.cached_instructions("rebase-done", REBASE_DONE_FILE)
    }

    pub fn rebase_status(&self) -> Result<RebaseStatus> {
        if !self.repo.rebase_in_progress() {
            log::debug!("No rebase in progress");
            return Ok(RebaseStatus::default());
        }

        Ok(RebaseStatus {
            in_progress: true,
            head_name: self
                .rebase_value(REBASE_HEAD_NAME_FILE, REBASE_APPLY_HEAD_NAME_FILE)?
                .filter(|name| name != "detached HEAD"),
            onto: self.rebase_value(REBASE_ONTO_FILE, REBASE_APPLY_ONTO_FILE)?,
            done: self.rebase_done()?,
            todo: self.rebase_todo()?,
        })
    }

    /// Reflog of `reference`, newest first, optionally limited to `limit` entries
    pub fn reflog(&self, reference: &str, limit: Option<usize>) -> Result<Vec<ReflogEntry>> {
        let feature = self.reflog_feature(reference, limit);
        self.cached(&feature, || {
            let lines = self.repo.reflog_lines(reference, limit)?;
            Ok(ReflogParser::parse(&lines))
        })
    }

    /// Feature name under which the reflog of `reference` is cached.
    ///
    /// Carries the ref's tip and reflog length, so moving a ref that none of the
    /// watched paths cover (a branch other than the checked-out one) selects a new
    /// entry instead of serving the old one.
    pub fn reflog_feature(&self, reference: &str, limit: Option<usize>) -> String {
        let mut feature = format!("reflog:{reference}");
        if let Some(marker) = self.repo.reflog_marker(reference) {
            feature.push_str(&format!("@{marker}"));
        }
        if let Some(limit) = limit {
            feature.push_str(&format!(":{limit}"));
        }
        feature
    }

    /// Value from the merge backend's state file, else from the apply backend's
    fn rebase_value(&self, merge_file: &str, apply_file: &str) -> Result<Option<String>> {
        match self.repo.read_git_file_value(merge_file)? {
            Some(value) => Ok(Some(value)),
            None => self.repo.read_git_file_value(apply_file),
        }
    }

    fn cached_instructions(
        &self,
        feature: &str,
        relative: &str,
    ) -> Result<Vec<RebaseInstructionEntry>> {
        self.cached(feature, || {
            let lines = self.repo.read_git_file_lines(relative)?.unwrap_or_default();
            Ok(RebaseTodoParser::parse(&lines))
        })
    }

    fn cached<T, F>(&self, feature: &str, compute: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<T>,
    {
        let root = self.repo.git_dir();
        let key = cache_key(feature, root);

        if let (Some(value), true) = self.cache.get::<T>(&key, root) {
            return Ok(value);
        }

        log::debug!("Recomputing '{feature}' for {}", root.display());
        let value = compute()?;
        self.cache.set(key, root, value.clone());
        Ok(value)
    }
}

//! Repository access for the state layer.
//!
//! [`GitRepo`] wraps a `git2::Repository` for discovery and path resolution, reads
//! repository-internal files as lines, and runs the one plumbing command the state
//! layer needs (the reflog dump). Parsing is left to the parser modules.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository access
//!
//! # Key Features
//! - **Discovery**: Open the repository containing any path
//! - **Rebase state**: Detect an in-progress rebase and read its instruction files
//! - **Reflog dump**: Produce separator-delimited reflog lines for [`ReflogParser`]

use crate::core::{
    error::{PorcelainError, Result},
    reflog_parser::ReflogParser,
};
use git2::Repository;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Directory of an interactive (merge backend) rebase, relative to the git directory
pub const REBASE_MERGE_DIR: &str = "rebase-merge";
/// Directory of an apply backend rebase or `git am` session
pub const REBASE_APPLY_DIR: &str = "rebase-apply";
pub const REBASE_TODO_FILE: &str = "rebase-merge/git-rebase-todo";
pub const REBASE_DONE_FILE: &str = "rebase-merge/done";
pub const REBASE_HEAD_NAME_FILE: &str = "rebase-merge/head-name";
pub const REBASE_ONTO_FILE: &str = "rebase-merge/onto";
pub const REBASE_APPLY_HEAD_NAME_FILE: &str = "rebase-apply/head-name";
pub const REBASE_APPLY_ONTO_FILE: &str = "rebase-apply/onto";

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Open the repository containing the current directory
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::open(&current_dir).map_err(|_| PorcelainError::NotInGitRepo)
    }

    /// The git directory (`.git` or the worktree's private git dir)
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Read a file under the git directory as lines. `Ok(None)` when it does not exist.
    ///
    /// Bytes that are not valid UTF-8 (subjects in a legacy commit encoding) are
    /// replaced rather than rejected.
    pub fn read_git_file_lines(&self, relative: impl AsRef<Path>) -> Result<Option<Vec<String>>> {
        let path = self.git_dir().join(relative);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(
                String::from_utf8_lossy(&bytes)
                    .lines()
                    .map(str::to_string)
                    .collect(),
            )),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                log::warn!("Failed to read {}: {e}", path.display());
                Err(PorcelainError::Io(e))
            }
        }
    }

    /// First line of a file under the git directory, trimmed
    pub fn read_git_file_value(&self, relative: impl AsRef<Path>) -> Result<Option<String>> {
        Ok(self
            .read_git_file_lines(relative)?
            .and_then(|lines| lines.into_iter().next())
            .map(|line| line.trim().to_string())
            .filter(|value| !value.is_empty()))
    }

    pub fn rebase_in_progress(&self) -> bool {
        let git_dir = self.git_dir();
        git_dir.join(REBASE_MERGE_DIR).is_dir() || git_dir.join(REBASE_APPLY_DIR).is_dir()
    }

    /// Identify the current state of `reference`'s reflog as `<tip oid>:<entry count>`.
    ///
    /// `None` when the name does not resolve to a ref (e.g. `main~2` or an unborn HEAD).
    pub fn reflog_marker(&self, reference: &str) -> Option<String> {
        let resolved = self.repo.resolve_reference_from_short_name(reference).ok()?;
        let name = resolved.name()?.to_string();
        let tip = resolved.resolve().ok()?.target()?;
        let entries = self.repo.reflog(&name).map(|log| log.len()).unwrap_or(0);
        Some(format!("{tip}:{entries}"))
    }

    /// Reflog of `reference` as separator-delimited lines, newest first
    pub fn reflog_lines(&self, reference: &str, limit: Option<usize>) -> Result<Vec<String>> {
        if reference.is_empty() || reference.starts_with('-') {
            return Err(PorcelainError::invalid_reference(reference));
        }

        let mut args = vec![
            "log".to_string(),
            "-g".to_string(),
            format!("--format={}", ReflogParser::git_format()),
        ];
        if let Some(limit) = limit {
            args.push(format!("--max-count={limit}"));
        }
        args.push(reference.to_string());
        args.push("--".to_string());

        let stdout = self.git_output(&args)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }

    /// Run git against this repository's git directory and capture stdout
    fn git_output(&self, args: &[String]) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.arg("--git-dir").arg(self.git_dir()).args(args);
        if let Some(workdir) = self.workdir() {
            cmd.current_dir(workdir);
        }

        log::debug!("Running git {}", args.join(" "));
        let output = cmd.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PorcelainError::git_command_failed(
                args.join(" "),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

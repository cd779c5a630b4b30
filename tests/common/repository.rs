//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories through the git CLI and for
//! writing rebase state files directly into the git directory.

#![allow(dead_code)]

use porcelain_state::core::error::{PorcelainError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_dir(&self) -> PathBuf {
        self.path.join(".git")
    }
}

/// Runs git in `repo_path` without checking the exit status
pub fn git(repo_path: &Path, args: &[&str]) -> Result<Output> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .env("GIT_SEQUENCE_EDITOR", "true")
        .env("GIT_EDITOR", "true")
        .output()
        .map_err(PorcelainError::Io)
}

/// Sets up a fresh git repository on branch `main` with a test identity
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    commit_file(&repo.path, "initial.txt", "initial content\n", "Initial commit")?;
    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Writes, stages and commits a single file
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git(repo_path, &["add", filename])?;
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Writes the files of an interactive rebase that stopped part way through
pub fn write_rebase_state(
    repo: &TestRepo,
    done: &[&str],
    todo: &[&str],
    head_name: &str,
    onto: &str,
) -> Result<()> {
    let rebase_dir = repo.git_dir().join("rebase-merge");
    fs::create_dir_all(&rebase_dir)?;
    fs::write(rebase_dir.join("done"), lines(done))?;
    fs::write(rebase_dir.join("git-rebase-todo"), lines(todo))?;
    fs::write(rebase_dir.join("head-name"), format!("{head_name}\n"))?;
    fs::write(rebase_dir.join("onto"), format!("{onto}\n"))?;
    Ok(())
}

fn lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

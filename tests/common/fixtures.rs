//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use porcelain_state::core::error::Result;

/// Scenario: instruction list of a rebase stopped at a `break`
pub const REBASE_DONE: &[&str] = &[
    "pick abc1234 Add feature A",
    "squash def5678 Fix typo in A",
    "exec make test",
    "break",
];

pub const REBASE_TODO: &[&str] = &[
    "pick ghi9012 Add feature B",
    "fixup -C jkl3456 Polish feature B",
    "",
    "# Rebase 0123456..ghi9012 onto 0123456 (2 commands)",
    "#",
    "# Commands:",
    "# p, pick <commit> = use commit",
];

pub fn create_stopped_rebase_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    write_rebase_state(
        &repo,
        REBASE_DONE,
        REBASE_TODO,
        "refs/heads/topic",
        "0123456789abcdef0123456789abcdef01234567",
    )?;
    Ok(repo)
}

/// Scenario: repository whose HEAD reflog holds, newest first,
/// checkout, amend, commit and initial-commit entries
pub fn create_history_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    commit_file(&repo.path, "second.txt", "second\n", "Second commit")?;
    git(&repo.path, &["commit", "--amend", "-m", "Second commit, amended"])?;
    git(&repo.path, &["checkout", "-b", "topic"])?;
    Ok(repo)
}

/// Scenario: three linear commits after the initial one
pub fn create_linear_history_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    commit_file(&repo.path, "a.txt", "a\n", "Add a")?;
    commit_file(&repo.path, "b.txt", "b\n", "Add b")?;
    commit_file(&repo.path, "c.txt", "c\n", "Add c")?;
    Ok(repo)
}

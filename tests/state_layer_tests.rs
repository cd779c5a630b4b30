use porcelain_state::core::{
    cache::{self, FreshnessCache},
    git::GitRepo,
    state::{cache_key, RepoState},
    RebaseAction, ReflogAction,
};
use std::sync::Arc;
use std::time::Duration;

mod common;
use common::{fixtures::*, repository::*};

#[cfg(test)]
mod state_layer_tests {
    use super::*;

    #[test]
    fn test_real_rebase_stopped_by_failing_exec() -> anyhow::Result<()> {
        let repo = create_linear_history_repo()?;
        // Stops right after the first `exec false`
        git(&repo.path, &["rebase", "-i", "-x", "false", "HEAD~2"])?;

        let git_repo = GitRepo::open(&repo.path)?;
        let state = RepoState::with_cache(&git_repo, Arc::new(FreshnessCache::new()));
        let status = state.rebase_status()?;

        assert!(status.in_progress);
        assert_eq!(status.head_name.as_deref(), Some("refs/heads/main"));

        let done: Vec<RebaseAction> = status.done.iter().map(|e| e.action).collect();
        assert_eq!(done, vec![RebaseAction::Pick, RebaseAction::Exec]);
        assert_eq!(status.done[0].subject.as_deref(), Some("Add b"));
        assert_eq!(status.done[1].subject.as_deref(), Some("false"));
        assert_eq!(status.done[1].commit_hash, None);

        let todo: Vec<RebaseAction> = status.todo.iter().map(|e| e.action).collect();
        assert_eq!(todo, vec![RebaseAction::Pick, RebaseAction::Exec]);
        assert_eq!(status.todo[0].subject.as_deref(), Some("Add c"));
        assert!(status.todo[0].commit_hash.is_some());

        git(&repo.path, &["rebase", "--abort"])?;

        // The todo file vanished, so the cached parse no longer matches
        assert!(!state.rebase_status()?.in_progress);
        assert!(state.rebase_todo()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_reflog_is_recomputed_after_new_commit() -> anyhow::Result<()> {
        let repo = create_linear_history_repo()?;
        let git_repo = GitRepo::open(&repo.path)?;
        let cache = Arc::new(FreshnessCache::new());
        let state = RepoState::with_cache(&git_repo, Arc::clone(&cache));

        let before = state.reflog("HEAD", None)?;
        assert_eq!(before.len(), 4);
        assert_eq!(before[0].action_category, ReflogAction::Commit);
        assert_eq!(before[3].action_category, ReflogAction::Initial);

        let key = cache_key(&state.reflog_feature("HEAD", None), git_repo.git_dir());
        assert!(cache.is_valid(&key, git_repo.git_dir()));

        // Keep the new commit's mtimes clearly apart from the recorded ones
        std::thread::sleep(Duration::from_millis(50));
        commit_file(&repo.path, "d.txt", "d\n", "Add d")?;
        assert!(!cache.is_valid(&key, git_repo.git_dir()));

        let after = state.reflog("HEAD", None)?;
        assert_eq!(after.len(), 5);
        assert_eq!(after[0].subject, "commit: Add d");
        assert_eq!(after[1].hash, before[0].hash);

        Ok(())
    }

    #[test]
    fn test_reflog_of_moved_branch_is_recomputed() -> anyhow::Result<()> {
        // On `topic`, so moving `main` touches none of the default watched paths
        let repo = create_history_repo()?;
        let git_repo = GitRepo::open(&repo.path)?;
        let state = RepoState::with_cache(&git_repo, Arc::new(FreshnessCache::new()));

        let before = state.reflog("main", None)?;
        assert_eq!(before.len(), 3);

        git(&repo.path, &["branch", "-f", "main", "HEAD~1"])?;

        let after = state.reflog("main", None)?;
        let uncached = RepoState::with_cache(&git_repo, Arc::new(FreshnessCache::new()))
            .reflog("main", None)?;
        assert_eq!(after.len(), 4);
        assert_eq!(after, uncached);
        assert_eq!(after[1].hash, before[0].hash);

        Ok(())
    }

    #[test]
    fn test_limited_and_unlimited_reflogs_are_cached_separately() -> anyhow::Result<()> {
        let repo = create_linear_history_repo()?;
        let git_repo = GitRepo::open(&repo.path)?;
        let cache = Arc::new(FreshnessCache::new());
        let state = RepoState::with_cache(&git_repo, Arc::clone(&cache));

        assert_eq!(state.reflog("HEAD", Some(2))?.len(), 2);
        assert_eq!(state.reflog("HEAD", None)?.len(), 4);
        assert_eq!(cache.len(), 2);

        Ok(())
    }

    #[test]
    fn test_global_cache_reset_orphans_previous_instance() -> anyhow::Result<()> {
        let repo = create_stopped_rebase_repo()?;
        let git_repo = GitRepo::open(&repo.path)?;
        let root = git_repo.git_dir();
        let key = cache_key("rebase-todo", root);

        let first = cache::reset_global();
        let todo = RepoState::new(&git_repo).rebase_todo()?;
        assert_eq!(todo.len(), 2);
        assert!(cache::global().is_valid(&key, root));

        cache::reset_global();
        assert_eq!(
            cache::global().get::<Vec<porcelain_state::RebaseInstructionEntry>>(&key, root),
            (None, false)
        );
        assert_eq!(
            first.get::<Vec<porcelain_state::RebaseInstructionEntry>>(&key, root),
            (Some(todo), true)
        );

        Ok(())
    }
}

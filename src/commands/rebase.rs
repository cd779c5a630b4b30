use crate::core::{
    colors::get_aligned_action,
    error::Result,
    git::GitRepo,
    output::{print_info, print_json, print_section_header},
    rebase_parser::RebaseInstructionEntry,
    state::{RebaseStatus, RepoState},
};
use colored::*;

pub fn execute_rebase(json: bool) -> Result<()> {
    let git_repo = GitRepo::open_current()?;
    let state = RepoState::new(&git_repo);
    let status = state.rebase_status()?;

    if json {
        return print_json(&status);
    }

    if !status.in_progress {
        print_info("No rebase in progress");
        return Ok(());
    }

    println!("\n{}", format_rebase_header(&status));

    if status.done.is_empty() && status.todo.is_empty() {
        print_info("No instruction list (non-interactive rebase or am session)");
        return Ok(());
    }

    if !status.done.is_empty() {
        print_section_header("Done");
        for entry in &status.done {
            println!("  {}", format_instruction_line(entry));
        }
    }

    if !status.todo.is_empty() {
        print_section_header("Todo");
        for entry in &status.todo {
            println!("  {}", format_instruction_line(entry));
        }
    }

    println!();
    Ok(())
}

fn format_rebase_header(status: &RebaseStatus) -> String {
    let branch = status
        .head_name
        .as_deref()
        .map(|name| name.strip_prefix("refs/heads/").unwrap_or(name))
        .unwrap_or("detached HEAD");

    match status.onto.as_deref() {
        Some(onto) => format!(
            "{} {} {} {}",
            "Rebasing".white(),
            branch.blue(),
            "onto".white(),
            short_hash(onto).yellow()
        ),
        None => format!("{} {}", "Rebasing".white(), branch.blue()),
    }
}

/// `<action> [<flag>] [<hash>] [<subject>]`
pub fn format_instruction_line(entry: &RebaseInstructionEntry) -> String {
    let mut parts = vec![get_aligned_action(entry.action).to_string()];
    if let Some(flag) = entry.fixup_flag {
        parts.push(flag.as_str().bright_black().to_string());
    }
    if let Some(hash) = entry.commit_hash.as_deref() {
        parts.push(hash.yellow().to_string());
    }
    if let Some(subject) = entry.subject.as_deref() {
        parts.push(subject.white().to_string());
    }
    parts.join(" ")
}

fn short_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}

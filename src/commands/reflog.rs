use crate::core::{
    colors::get_aligned_category,
    error::Result,
    git::GitRepo,
    output::{print_info, print_json, print_section_header},
    reflog_parser::ReflogEntry,
    state::RepoState,
};
use colored::*;

pub const DEFAULT_REFERENCE: &str = "HEAD";

pub fn execute_reflog(reference: Option<String>, limit: Option<usize>, json: bool) -> Result<()> {
    let reference = reference.as_deref().unwrap_or(DEFAULT_REFERENCE);
    let git_repo = GitRepo::open_current()?;
    let state = RepoState::new(&git_repo);
    let entries = state.reflog(reference, limit)?;

    if json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        print_info(&format!("No reflog entries for {reference}"));
        return Ok(());
    }

    print_section_header(&format!("Reflog for {reference}"));
    for entry in &entries {
        println!("  {}", format_reflog_line(entry));
    }
    println!();

    Ok(())
}

/// `<selector> <hash> <category> <subject> (<author>)`
pub fn format_reflog_line(entry: &ReflogEntry) -> String {
    format!(
        "{} {} {} {} {}",
        entry.selector.bright_black(),
        entry.hash.yellow(),
        get_aligned_category(entry.action_category),
        entry.subject.white(),
        format!("({})", entry.author).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reflog_parser::ReflogParser;

    #[test]
    fn test_format_reflog_line() {
        colored::control::set_override(false);
        let raw = "abc1234\x1eJohn Doe\x1eHEAD@{0}\x1ecommit (amend): Fix typo";
        let entry = ReflogParser::parse_line(raw).expect("line should parse");
        assert_eq!(
            format_reflog_line(&entry),
            "HEAD@{0} abc1234 amend       commit (amend): Fix typo (John Doe)"
        );
    }
}

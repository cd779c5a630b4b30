//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the styled error prefix
pub fn has_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}

/// Creates a predicate that checks for a section header such as `Todo:`
pub fn has_section(header: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{header}:"))
}

/// Creates a predicate that checks for a rendered instruction line
pub fn has_instruction(action: &str, rest: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{action:<10} {rest}"))
}

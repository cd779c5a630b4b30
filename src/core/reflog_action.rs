//! Classification of reflog subjects into coarse action categories.
//!
//! git records a reflog message as `<descriptor>: <details>`, where the descriptor is
//! an action word optionally followed by a mode flag, a ref name and one or more
//! parenthesized qualifiers, e.g. `commit (amend)`, `rebase -i (start)`,
//! `rebase (interactive) (finish)` or `merge feature`. [`ReflogAction::classify`]
//! reduces that to one of a closed set of categories and never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived category of a reflog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReflogAction {
    Commit,
    Amend,
    Initial,
    Merge,
    Checkout,
    Reset,
    Branch,
    Pull,
    Clone,
    Rebase,
    CherryPick,
    Rewritten,
    Restart,
    Unknown,
}

impl ReflogAction {
    /// Classify a reflog subject line
    pub fn classify(subject: &str) -> ReflogAction {
        let Some((descriptor, _)) = subject.split_once(':') else {
            return ReflogAction::Unknown;
        };

        let (base, qualifier) = split_qualifiers(descriptor);
        let Some(word) = base.split_whitespace().next() else {
            return ReflogAction::Unknown;
        };

        match word {
            "commit" => match qualifier {
                Some("amend") => ReflogAction::Amend,
                Some("initial") => ReflogAction::Initial,
                Some("merge") => ReflogAction::Merge,
                _ => ReflogAction::Commit,
            },
            "rebase" => ReflogAction::Rebase,
            "merge" => ReflogAction::Merge,
            other => Self::from_base_word(other).unwrap_or(ReflogAction::Unknown),
        }
    }

    /// Action words that map to a category of the same name
    fn from_base_word(word: &str) -> Option<ReflogAction> {
        match word {
            "checkout" => Some(ReflogAction::Checkout),
            "reset" => Some(ReflogAction::Reset),
            "branch" => Some(ReflogAction::Branch),
            "pull" => Some(ReflogAction::Pull),
            "clone" => Some(ReflogAction::Clone),
            "cherry-pick" => Some(ReflogAction::CherryPick),
            "rewritten" => Some(ReflogAction::Rewritten),
            "restart" => Some(ReflogAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReflogAction::Commit => "commit",
            ReflogAction::Amend => "amend",
            ReflogAction::Initial => "initial",
            ReflogAction::Merge => "merge",
            ReflogAction::Checkout => "checkout",
            ReflogAction::Reset => "reset",
            ReflogAction::Branch => "branch",
            ReflogAction::Pull => "pull",
            ReflogAction::Clone => "clone",
            ReflogAction::Rebase => "rebase",
            ReflogAction::CherryPick => "cherry-pick",
            ReflogAction::Rewritten => "rewritten",
            ReflogAction::Restart => "restart",
            ReflogAction::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReflogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strip trailing `(...)` groups from a descriptor.
/// Returns the remaining text and the content of the rightmost group.
fn split_qualifiers(descriptor: &str) -> (&str, Option<&str>) {
    let mut base = descriptor.trim();
    let mut qualifier = None;

    while base.ends_with(')') {
        let Some(open) = base.rfind('(') else {
            break;
        };
        if qualifier.is_none() {
            qualifier = Some(base[open + 1..base.len() - 1].trim());
        }
        base = base[..open].trim_end();
    }

    (base, qualifier)
}

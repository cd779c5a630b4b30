//! Color mapping for rebase actions and reflog categories.
//!
//! Every place that prints an action or a category goes through these functions, so
//! the same action always renders in the same color.
//!
//! # Color Scheme
//! - **pick / commit**: Green for commits that are kept as they are
//! - **reword / edit / amend**: Yellow for commits whose content or message changes
//! - **squash / fixup**: Cyan for commits folded into their predecessor
//! - **drop / reset**: Red for history that is discarded
//! - **exec / checkout / branch / pull**: Blue for commands that do not rewrite commits
//! - **break / merge**: Magenta
//! - **label / update-ref / unknown**: Muted

use crate::core::{action::RebaseAction, reflog_action::ReflogAction};
use colored::*;

/// Width of the longest action word (`update-ref`)
const ACTION_WIDTH: usize = 10;
/// Width of the longest category word (`cherry-pick`)
const CATEGORY_WIDTH: usize = 11;

pub fn get_action_color_style(action: RebaseAction) -> Box<dyn Fn(&str) -> ColoredString> {
    match action {
        RebaseAction::Pick => Box::new(|text: &str| text.green()),
        RebaseAction::Reword | RebaseAction::Edit => Box::new(|text: &str| text.yellow()),
        RebaseAction::Squash | RebaseAction::Fixup => Box::new(|text: &str| text.cyan()),
        RebaseAction::Drop => Box::new(|text: &str| text.red()),
        RebaseAction::Exec => Box::new(|text: &str| text.blue()),
        RebaseAction::Break => Box::new(|text: &str| text.magenta().bold()),
        RebaseAction::Label | RebaseAction::Reset | RebaseAction::UpdateRef => {
            Box::new(|text: &str| text.bright_black())
        }
    }
}

pub fn get_category_color_style(category: ReflogAction) -> Box<dyn Fn(&str) -> ColoredString> {
    match category {
        ReflogAction::Commit | ReflogAction::Initial | ReflogAction::Clone => {
            Box::new(|text: &str| text.green())
        }
        ReflogAction::Amend | ReflogAction::CherryPick => Box::new(|text: &str| text.yellow()),
        ReflogAction::Rebase | ReflogAction::Rewritten | ReflogAction::Restart => {
            Box::new(|text: &str| text.cyan())
        }
        ReflogAction::Reset => Box::new(|text: &str| text.red()),
        ReflogAction::Checkout | ReflogAction::Branch | ReflogAction::Pull => {
            Box::new(|text: &str| text.blue())
        }
        ReflogAction::Merge => Box::new(|text: &str| text.magenta()),
        ReflogAction::Unknown => Box::new(|text: &str| text.bright_black()),
    }
}

/// Colored action word padded to a common width
pub fn get_aligned_action(action: RebaseAction) -> ColoredString {
    let color_fn = get_action_color_style(action);
    color_fn(&format!("{:<width$}", action.as_str(), width = ACTION_WIDTH))
}

/// Colored category word padded to a common width
pub fn get_aligned_category(category: ReflogAction) -> ColoredString {
    let color_fn = get_category_color_style(category);
    color_fn(&format!("{:<width$}", category.as_str(), width = CATEGORY_WIDTH))
}

pub mod rebase;
pub mod reflog;

pub use rebase::*;
pub use reflog::*;

//! Theme token collaborators.

mod tokens;

pub use tokens::{ThemeTokens, TokenSource};

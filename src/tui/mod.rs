//! Terminal glue (crossterm): event conversion and terminal setup/restore.
//!
//! Kept apart from `kernel`/`app` so the deck logic builds and tests without terminal crates.

pub mod crossterm;
pub mod terminal_guard;

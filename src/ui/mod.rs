//! UI layer (thin wrapper over `ratatui`).
//!
//! All `ratatui` types stay behind the backend adapter; the app talks to a stable runtime
//! (hit-test, hover, drag/drop) and records paint commands.

pub mod core;

pub mod backend;

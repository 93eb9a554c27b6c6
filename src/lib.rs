//! langdeck: a terminal deck of cards that can be reordered by dragging them with the mouse.
//!
//! Modules:
//! - core: input events and the view trait
//! - kernel: the deck state and its single `reorder` operation
//! - ui: geometry, hit-testing, the drag/drop runtime and paint commands
//! - app: the deck screen (layout, painting, wiring drops to `reorder`)
//! - settings, logging: configuration file and `tracing` setup
//! - tui: crossterm glue, behind the `tui` feature

pub mod app;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

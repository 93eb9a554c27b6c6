//! Frontend-independent state. Nothing in here depends on terminal crates.

pub mod deck;

pub use deck::{DeckAction, DeckState, Item, ItemId};

//! The reorderable deck: items with stable ids and the single `reorder` operation.

pub mod action;
pub mod item;
pub mod state;

pub use action::DeckAction;
pub use item::{default_items, CardStyle, Gradient, Item, ItemId};
pub use state::{move_by_index, DeckError, DeckState};

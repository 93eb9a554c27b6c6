//! Application layer: the deck screen, its drag/drop rules, colors and gradients.

pub mod deck;
pub(crate) mod dnd_rules;
pub mod gradient;
pub mod theme;

pub use deck::DeckApp;
pub use theme::DeckTheme;

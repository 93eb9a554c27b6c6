//! Shared input abstractions used by the kernel, the UI runtime and the terminal layer.

pub mod event;
pub mod view;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};
pub use view::{EventResult, View};

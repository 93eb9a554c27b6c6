use crate::core::event::InputEvent;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;

/// A screen that takes input and paints itself through a [`Backend`].
pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, backend: &mut dyn Backend, area: Rect);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

//! The deck screen: a column of draggable cards over a [`DeckState`].
//!
//! `DeckApp` is the only writer of the deck. Pointer input goes through the [`UiRuntime`],
//! and a finished drag becomes exactly one `reorder` call.

use super::theme::DeckTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::deck::{DeckState, ItemId};
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::Id;
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::tree::UiTree;
use std::sync::mpsc::{self, Receiver};

mod input;
mod layout;
mod render;

pub use layout::{DeckLayout, TITLE};

const MAX_LOG_DRAIN_PER_TICK: usize = 256;

pub struct DeckApp {
    deck: DeckState,
    ui_runtime: UiRuntime,
    ui_tree: UiTree,
    painter: Painter,
    theme: DeckTheme,
    last_render_area: Option<Rect>,
    log_rx: Option<Receiver<String>>,
    last_log: Option<String>,
}

impl DeckApp {
    pub fn new(
        deck: DeckState,
        theme: DeckTheme,
        drag_threshold: u16,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        Self {
            deck,
            ui_runtime: UiRuntime::with_drag_threshold(drag_threshold),
            ui_tree: UiTree::new(),
            painter: Painter::default(),
            theme,
            last_render_area: None,
            log_rx,
            last_log: None,
        }
    }

    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    pub fn theme(&self) -> &DeckTheme {
        &self.theme
    }

    pub fn is_dragging(&self) -> bool {
        self.ui_runtime.is_dragging()
    }

    pub fn last_log(&self) -> Option<&str> {
        self.last_log.as_deref()
    }

    /// Node id of the card for `item`. Stable across frames and reorders.
    pub fn card_id(item: &ItemId) -> Id {
        Id::from_parts(&["deck", "card", item.as_str()])
    }

    /// Drains pending log lines; returns `true` when the status line changed.
    pub fn tick(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut latest = None;
        let mut disconnected = false;
        for _ in 0..MAX_LOG_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(line) => latest = Some(line),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }

        match latest {
            Some(line) => {
                self.last_log = Some(line);
                true
            }
            None => false,
        }
    }
}

impl View for DeckApp {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        render::render(self, backend, area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/deck/mod.rs"]
mod tests;

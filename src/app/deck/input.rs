use super::DeckApp;
use crate::app::dnd_rules::DECK_DND_RULES;
use crate::core::event::{InputEvent, KeyCode, KeyEvent};
use crate::core::view::EventResult;
use crate::kernel::deck::DeckAction;
use crate::ui::core::input::{DragPayload, UiEvent};
use crate::ui::core::tree::{Node, NodeKind};

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => key.modifiers.is_empty(),
        KeyCode::Char('c') => key.modifiers.ctrl,
        _ => false,
    }
}

pub(super) fn handle_input(app: &mut DeckApp, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) if key.is_press() && is_quit_key(key) => return EventResult::Quit,
        InputEvent::FocusGained => return EventResult::Ignored,
        InputEvent::Key(_) | InputEvent::Mouse(_) | InputEvent::FocusLost | InputEvent::Resize(..) => {}
    }

    let out = app
        .ui_runtime
        .on_input(event, &app.ui_tree, &DECK_DND_RULES);
    let changed = apply_ui_events(app, &out.events);

    // A new size always needs a frame.
    if out.needs_redraw || changed || matches!(event, InputEvent::Resize(..)) {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn apply_ui_events(app: &mut DeckApp, events: &[UiEvent]) -> bool {
    let mut changed = false;
    for event in events {
        match event {
            UiEvent::DragEnd { payload, over, .. } => {
                changed |= drop_card(app, *payload, over.as_ref());
            }
            UiEvent::DragCancel { id } => {
                tracing::debug!(card = ?id, "drag cancelled, order unchanged");
            }
            UiEvent::HoverChanged { .. } | UiEvent::DragStart { .. } | UiEvent::DragOver { .. } => {}
        }
    }
    changed
}

/// Resolves the dragged card and the card under it through the committed slots the hit-test
/// tree was built from, then asks the deck for exactly one reorder.
fn drop_card(app: &mut DeckApp, payload: DragPayload, over: Option<&Node>) -> bool {
    let DragPayload::Card { slot } = payload;
    let Some(source) = app.deck.items().get(slot).map(|item| item.id.clone()) else {
        tracing::debug!(slot, "drop from a slot that no longer holds a card");
        return false;
    };
    let target = over.and_then(|node| match node.kind {
        NodeKind::Card { slot } => app.deck.items().get(slot).map(|item| item.id.clone()),
    });

    let moved = app.deck.dispatch(DeckAction::Reorder {
        source: source.clone(),
        target,
    });

    if moved {
        let label = app
            .deck
            .get(&source)
            .map(|item| item.label.as_str())
            .unwrap_or_default();
        let position = app.deck.index_of(&source).map_or(0, |i| i + 1);
        tracing::info!(item = %source, "moved {label} to position {position}");
        // Slots changed; hit-testing must follow before the next frame does it.
        app.relayout();
    }
    moved
}

use crate::ui::core::input::DragPayload;
use crate::ui::core::runtime::DragDropRules;
use crate::ui::core::tree::{Node, NodeKind};

/// Every card can be picked up, and a card lands on any card, itself included. Dropping on
/// the own slot resolves to a no-op reorder.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DeckDragDropRules;

pub(crate) const DECK_DND_RULES: DeckDragDropRules = DeckDragDropRules;

impl DragDropRules for DeckDragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload> {
        match source.kind {
            NodeKind::Card { slot } => Some(DragPayload::Card { slot }),
        }
    }

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool {
        match (payload, target.kind) {
            (DragPayload::Card { .. }, NodeKind::Card { .. }) => true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/dnd_rules.rs"]
mod tests;

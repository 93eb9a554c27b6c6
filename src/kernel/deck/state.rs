use super::action::DeckAction;
use super::item::{Item, ItemId};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("duplicate item id `{0}`")]
    DuplicateId(ItemId),
}

/// The ordered list of cards. Order is the only thing that ever changes, and only through
/// [`DeckState::reorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeckState {
    items: Vec<Item>,
}

impl DeckState {
    pub fn new(items: Vec<Item>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(DeckError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter().map(|item| &item.id)
    }

    pub fn dispatch(&mut self, action: DeckAction) -> bool {
        match action {
            DeckAction::Reorder { source, target } => self.reorder(&source, target.as_ref()),
        }
    }

    /// Moves `source` into `target`'s slot, shifting the items in between by one.
    ///
    /// Returns `false` without touching the list when `target` is absent, equals `source`, or
    /// either id is unknown (late events from a list that has since changed).
    pub fn reorder(&mut self, source: &ItemId, target: Option<&ItemId>) -> bool {
        let Some((from, to)) = self.resolve(source, target) else {
            return false;
        };

        if !move_by_index(&mut self.items, from, to) {
            return false;
        }

        tracing::debug!(%source, from, to, "deck reordered");
        true
    }

    /// The order the deck would have if `source` were dropped on `over` now.
    pub fn preview_order(&self, source: &ItemId, over: Option<&ItemId>) -> Vec<&Item> {
        let mut order: Vec<&Item> = self.items.iter().collect();
        if let Some((from, to)) = self.resolve(source, over) {
            move_by_index(&mut order, from, to);
        }
        order
    }

    fn resolve(&self, source: &ItemId, target: Option<&ItemId>) -> Option<(usize, usize)> {
        let target = target?;
        if source == target {
            return None;
        }

        let from = self.index_of(source);
        let to = self.index_of(target);
        match (from, to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => {
                tracing::debug!(%source, %target, "ignoring reorder for unknown item");
                None
            }
        }
    }
}

/// Single-element array move: remove at `from`, insert at `to` of the shortened sequence.
pub fn move_by_index<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/deck/state.rs"]
mod tests;

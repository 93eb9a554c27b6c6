use super::item::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckAction {
    /// Move `source` into `target`'s current slot. `target == None` means the drag had no
    /// destination.
    Reorder {
        source: ItemId,
        target: Option<ItemId>,
    },
}

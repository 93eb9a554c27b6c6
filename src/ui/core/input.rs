use super::id::Id;
use super::tree::Node;

/// What a drag session carries, decided by the app's [`super::runtime::DragDropRules`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPayload {
    /// The card picked up from its committed slot.
    Card { slot: usize },
}

/// Events produced by [`super::runtime::UiRuntime`].
///
/// A drag session always produces `DragStart`, any number of `DragOver`, then exactly one of
/// `DragEnd` or `DragCancel`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<Id>,
        to: Option<Id>,
    },
    DragStart {
        id: Id,
    },
    DragOver {
        id: Id,
        over: Option<Id>,
    },
    /// The drag button was released. `over` is the target picked by the last collision pass.
    DragEnd {
        id: Id,
        payload: DragPayload,
        over: Option<Node>,
    },
    DragCancel {
        id: Id,
    },
}

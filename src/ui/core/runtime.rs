//! Pointer state machine: hover tracking and the `Idle -> Dragging -> Idle` drag session.

use super::collision::closest_center;
use super::geom::{Pos, Rect};
use super::id::Id;
use super::input::{DragPayload, UiEvent};
use super::tree::{Node, UiTree};
use crate::core::event::{InputEvent, KeyCode, MouseButton, MouseEvent, MouseEventKind};

pub const DEFAULT_DRAG_THRESHOLD: u16 = 2;

/// App-specific rules deciding what can be dragged and where it can land.
pub trait DragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload>;

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

impl UiRuntimeOutput {
    fn emit(&mut self, event: UiEvent) {
        self.events.push(event);
        self.needs_redraw = true;
    }
}

#[derive(Debug, Clone)]
pub struct DragSession {
    button: MouseButton,
    source: Node,
    payload: DragPayload,
    start: Pos,
    pos: Pos,
    over: Option<Node>,
}

impl DragSession {
    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    pub fn over(&self) -> Option<&Node> {
        self.over.as_ref()
    }

    /// Pointer offset from where the button went down.
    pub fn delta(&self) -> (i32, i32) {
        (
            i32::from(self.pos.x) - i32::from(self.start.x),
            i32::from(self.pos.y) - i32::from(self.start.y),
        )
    }

    /// Where the dragged card currently is: its original rect moved with the pointer.
    pub fn dragged_rect(&self) -> Rect {
        let (dx, dy) = self.delta();
        self.source.rect.translate(dx, dy)
    }
}

#[derive(Debug, Clone)]
enum Pointer {
    Idle,
    /// A button is down but the pointer has not travelled past the drag threshold.
    Pressed {
        button: MouseButton,
        start: Pos,
        source: Option<Node>,
    },
    Dragging(DragSession),
}

#[derive(Debug)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pointer: Pointer,
    drag_threshold: u16,
}

impl Default for UiRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::with_drag_threshold(DEFAULT_DRAG_THRESHOLD)
    }

    pub fn with_drag_threshold(drag_threshold: u16) -> Self {
        Self {
            hovered: None,
            pointer: Pointer::Idle,
            drag_threshold,
        }
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    pub fn drag(&self) -> Option<&DragSession> {
        match &self.pointer {
            Pointer::Dragging(drag) => Some(drag),
            Pointer::Idle | Pointer::Pressed { .. } => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag().is_some()
    }

    /// Abort the active drag without a drop. Returns the cancel event, if a drag was active.
    pub fn cancel_drag(&mut self) -> Option<UiEvent> {
        if !self.is_dragging() {
            return None;
        }
        let Pointer::Dragging(drag) = std::mem::replace(&mut self.pointer, Pointer::Idle) else {
            return None;
        };
        tracing::debug!(source = ?drag.source.id, "drag cancelled");
        Some(UiEvent::DragCancel { id: drag.source.id })
    }

    pub fn on_input(
        &mut self,
        input: &InputEvent,
        tree: &UiTree,
        rules: &dyn DragDropRules,
    ) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::default();
        match input {
            InputEvent::Mouse(me) => self.on_mouse(me, tree, rules, &mut out),
            InputEvent::Key(key) if key.code == KeyCode::Esc && key.is_press() => {
                if let Some(event) = self.cancel_drag() {
                    out.emit(event);
                }
            }
            InputEvent::FocusLost | InputEvent::Resize(..) => {
                if let Some(event) = self.cancel_drag() {
                    out.emit(event);
                }
                self.pointer = Pointer::Idle;
            }
            InputEvent::Key(_) | InputEvent::FocusGained => {}
        }
        out
    }

    fn on_mouse(
        &mut self,
        me: &MouseEvent,
        tree: &UiTree,
        rules: &dyn DragDropRules,
        out: &mut UiRuntimeOutput,
    ) {
        let pos = Pos::new(me.column, me.row);

        let hovered = tree.hit(pos, |s| s.hover).map(|n| n.id);
        if hovered != self.hovered {
            out.emit(UiEvent::HoverChanged {
                from: self.hovered,
                to: hovered,
            });
            self.hovered = hovered;
        }

        match me.kind {
            MouseEventKind::Down(button) => self.press(button, pos, tree),
            MouseEventKind::Drag(_) => self.drag_to(pos, tree, rules, out),
            MouseEventKind::Up(button) => self.release(button, out),
            MouseEventKind::Moved | MouseEventKind::Scroll => {}
        }
    }

    fn press(&mut self, button: MouseButton, start: Pos, tree: &UiTree) {
        // The active drag owns the pointer until its own button goes up.
        if self.is_dragging() {
            return;
        }
        self.pointer = Pointer::Pressed {
            button,
            start,
            source: tree.hit(start, |s| s.drag).copied(),
        };
    }

    fn drag_to(&mut self, pos: Pos, tree: &UiTree, rules: &dyn DragDropRules, out: &mut UiRuntimeOutput) {
        if let Pointer::Pressed {
            button,
            start,
            source,
        } = self.pointer
        {
            if start.manhattan(pos) < u32::from(self.drag_threshold) {
                return;
            }
            // Only the primary button picks cards up.
            let Some(source) = source.filter(|_| button == MouseButton::Left) else {
                return;
            };
            let Some(payload) = rules.payload_for_source(&source) else {
                return;
            };

            tracing::debug!(source = ?source.id, "drag started");
            out.emit(UiEvent::DragStart { id: source.id });
            self.pointer = Pointer::Dragging(DragSession {
                button,
                source,
                payload,
                start,
                pos: start,
                over: None,
            });
        }

        let Pointer::Dragging(drag) = &mut self.pointer else {
            return;
        };
        drag.pos = pos;

        let payload = &drag.payload;
        let over = closest_center(
            drag.dragged_rect(),
            pos,
            tree.drop_targets().filter(|n| rules.can_drop(payload, n)),
        )
        .copied();

        let over_id = over.map(|n| n.id);
        if over_id != drag.over.map(|n| n.id) {
            out.events.push(UiEvent::DragOver {
                id: drag.source.id,
                over: over_id,
            });
        }
        drag.over = over;
        out.needs_redraw = true;
    }

    fn release(&mut self, button: MouseButton, out: &mut UiRuntimeOutput) {
        match std::mem::replace(&mut self.pointer, Pointer::Idle) {
            Pointer::Dragging(drag) if drag.button == button => {
                tracing::debug!(source = ?drag.source.id, over = ?drag.over.map(|n| n.id), "drag ended");
                out.emit(UiEvent::DragEnd {
                    id: drag.source.id,
                    payload: drag.payload,
                    over: drag.over,
                });
            }
            Pointer::Pressed { button: held, .. } if held == button => {}
            Pointer::Idle => {}
            // A different button went up; the gesture in progress continues.
            other => self.pointer = other,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;

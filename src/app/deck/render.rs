use super::layout::{DeckLayout, TITLE};
use super::DeckApp;
use crate::app::gradient::LinearGradient;
use crate::app::theme::{parse_color, DeckTheme};
use crate::kernel::deck::{Item, ItemId};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, Painter};
use crate::ui::core::input::DragPayload;
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use unicode_width::UnicodeWidthStr;

const HINT: &str = "Drag a card to reorder | q quit";
/// How far the dragged card's label gradient is mixed toward white.
const DRAG_LIFT: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardState {
    Idle,
    Hovered,
    Dragging,
}

impl DeckApp {
    /// Rebuilds the hit-test tree from the committed order. Cards are registered at the slot
    /// they occupy in the deck, never at a preview position.
    pub(super) fn relayout(&mut self) {
        self.ui_tree.clear();

        let Some(area) = self.last_render_area else {
            return;
        };
        let layout = DeckLayout::compute(area);

        for (slot, item) in self.deck.items().iter().enumerate() {
            let Some(rect) = layout.slot_rect(slot) else {
                break;
            };
            self.ui_tree.push(Node {
                id: DeckApp::card_id(&item.id),
                rect,
                sense: Sense::CARD,
                kind: NodeKind::Card { slot },
            });
        }
    }
}

pub(super) fn render(app: &mut DeckApp, backend: &mut dyn Backend, area: Rect) {
    app.last_render_area = Some(area);
    app.relayout();

    let mut painter = std::mem::take(&mut app.painter);
    painter.clear();
    paint(app, &mut painter, area);
    backend.draw(area, painter.cmds());
    app.painter = painter;
}

fn paint(app: &DeckApp, painter: &mut Painter, area: Rect) {
    let layout = DeckLayout::compute(area);
    let theme = &app.theme;

    painter.fill(area, Style::default());
    paint_centered(
        painter,
        layout.title,
        TITLE,
        Style::default().fg(theme.title_fg).bold(),
    );

    let drag = app.ui_runtime.drag();
    let items = app.deck.items();
    let dragged: Option<&ItemId> = drag.and_then(|d| match *d.payload() {
        DragPayload::Card { slot } => items.get(slot).map(|item| &item.id),
    });
    let over = drag
        .and_then(|d| d.over())
        .and_then(|node| match node.kind {
            NodeKind::Card { slot } => items.get(slot).map(|item| &item.id),
        });

    let order: Vec<&Item> = match dragged {
        Some(source) => app.deck.preview_order(source, over),
        None => items.iter().collect(),
    };

    let hovered = app.ui_runtime.hovered();
    for (slot, item) in order.iter().enumerate() {
        if Some(&item.id) == dragged {
            continue;
        }
        let Some(rect) = layout.slot_rect(slot) else {
            break;
        };
        let state = if drag.is_none() && hovered == Some(DeckApp::card_id(&item.id)) {
            CardState::Hovered
        } else {
            CardState::Idle
        };
        paint_card(painter, theme, item, rect, state);
    }

    // The dragged card goes last so it sits above everything else.
    if let (Some(drag), Some(source)) = (drag, dragged) {
        if let Some(item) = app.deck.get(source) {
            let rect = layout.clamp_to_column(drag.dragged_rect());
            let shadow = rect.translate(1, 1).intersect(layout.area);
            painter.fill(shadow, Style::default().bg(theme.shadow));
            paint_card(painter, theme, item, rect, CardState::Dragging);
        }
    }

    let hint = match dragged.and_then(|id| app.deck.get(id)) {
        Some(item) => format!("Moving {}: release to drop, Esc to cancel", item.label),
        None => HINT.to_string(),
    };
    let status = match app.last_log() {
        Some(line) => format!("{hint} | {line}"),
        None => hint,
    };
    painter.text(
        Pos::new(layout.status.x, layout.status.y),
        status,
        Style::default().fg(theme.status_fg),
        layout.status,
    );
}

fn paint_card(painter: &mut Painter, theme: &DeckTheme, item: &Item, rect: Rect, state: CardState) {
    let (border, kind) = match state {
        CardState::Idle => (theme.border, BorderKind::Rounded),
        CardState::Hovered => (theme.hover_border, BorderKind::Rounded),
        CardState::Dragging => (theme.drag_border, BorderKind::Thick),
    };

    painter.fill(rect, Style::default());
    painter.border(rect, Style::default().fg(border), kind);

    if rect.w < 3 || rect.h < 3 {
        return;
    }
    let inner = rect.inner();
    let label = item.label.as_str();
    let pos = centered_pos(inner, label);
    let base = Style::default().bold();

    let lift = if state == CardState::Dragging { DRAG_LIFT } else { 0.0 };
    match card_gradient(item, lift) {
        Some(gradient) => {
            let runs = gradient.spans(rect, pos, label, base, |c| theme.fit(c));
            painter.runs(pos, runs, inner);
        }
        None => painter.text(pos, label, base.fg(theme.label_fg), inner),
    }
}

fn card_gradient(item: &Item, lift: f32) -> Option<LinearGradient> {
    let gradient = item.style.gradient.as_ref()?;
    let from = parse_color(&gradient.from)?.lighten(lift);
    let to = parse_color(&gradient.to)?.lighten(lift);
    Some(LinearGradient::new(from, to, gradient.deg))
}

fn paint_centered(painter: &mut Painter, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    painter.text(centered_pos(area, text), text, style, area);
}

fn centered_pos(area: Rect, text: &str) -> Pos {
    let width = (UnicodeWidthStr::width(text).min(usize::from(area.w))) as u16;
    Pos::new(
        area.x + (area.w - width) / 2,
        area.y + area.h.saturating_sub(1) / 2,
    )
}

use crate::ui::core::geom::Rect;

pub const TITLE: &str = "The Best Programming Languages";

const TITLE_TOP: u16 = 1;
const CARDS_TOP: u16 = 3;
const CARD_HEIGHT: u16 = 3;
const CARD_GAP: u16 = 1;
const MAX_CARD_WIDTH: u16 = 60;
const SIDE_MARGIN: u16 = 2;
const STATUS_HEIGHT: u16 = 1;

/// Where things go for a given terminal area. Pure geometry, recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckLayout {
    pub area: Rect,
    pub title: Rect,
    /// Region the cards live in; slots that do not fit entirely are dropped.
    pub column: Rect,
    pub status: Rect,
}

impl DeckLayout {
    pub fn compute(area: Rect) -> Self {
        let status_y = area.bottom().saturating_sub(STATUS_HEIGHT).max(area.y);
        let status = Rect::new(area.x, status_y, area.w, STATUS_HEIGHT.min(area.h));

        let title_y = area.y.saturating_add(TITLE_TOP);
        let title = if title_y < status_y {
            Rect::new(area.x, title_y, area.w, 1)
        } else {
            Rect::new(area.x, title_y, area.w, 0)
        };

        let width = area
            .w
            .saturating_sub(SIDE_MARGIN.saturating_mul(2))
            .min(MAX_CARD_WIDTH);
        let x = area.x.saturating_add((area.w - width) / 2);
        let top = area.y.saturating_add(CARDS_TOP);
        let column = Rect::new(x, top, width, status_y.saturating_sub(top));

        Self {
            area,
            title,
            column,
            status,
        }
    }

    pub fn slot_rect(&self, slot: usize) -> Option<Rect> {
        if self.column.is_empty() {
            return None;
        }
        let stride = u32::from(CARD_HEIGHT + CARD_GAP);
        let y = u32::from(self.column.y) + u32::try_from(slot).ok()?.checked_mul(stride)?;
        if y + u32::from(CARD_HEIGHT) > u32::from(self.column.bottom()) {
            return None;
        }
        Some(Rect::new(
            self.column.x,
            u16::try_from(y).ok()?,
            self.column.w,
            CARD_HEIGHT,
        ))
    }

    /// Keeps a dragged card inside the column horizontally and vertically.
    pub fn clamp_to_column(&self, rect: Rect) -> Rect {
        let max_y = self.column.bottom().saturating_sub(rect.h).max(self.column.y);
        let max_x = self.column.right().saturating_sub(rect.w).max(self.column.x);
        Rect::new(
            rect.x.clamp(self.column.x, max_x),
            rect.y.clamp(self.column.y, max_y),
            rect.w,
            rect.h,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/deck/layout.rs"]
mod tests;

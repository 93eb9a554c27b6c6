use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    /// Resting and hovered cards.
    Rounded,
    /// The card being dragged.
    Thick,
}

impl BorderKind {
    /// `[top_left, top_right, bottom_left, bottom_right, horizontal, vertical]`
    pub fn glyphs(self) -> [&'static str; 6] {
        match self {
            BorderKind::Rounded => ["╭", "╮", "╰", "╯", "─", "│"],
            BorderKind::Thick => ["┏", "┓", "┗", "┛", "━", "┃"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    Fill {
        rect: Rect,
        style: Style,
    },
    /// Styled runs laid out left to right from `pos`, cut off at `clip`.
    Text {
        pos: Pos,
        runs: Vec<(String, Style)>,
        clip: Rect,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

/// Records one frame of paint commands; a [`crate::ui::backend::Backend`] replays them in
/// order, so later commands land on top.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::Fill { rect, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.runs(pos, vec![(text.into(), style)], clip);
    }

    pub fn runs(&mut self, pos: Pos, runs: Vec<(String, Style)>, clip: Rect) {
        if runs.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Text { pos, runs, clip });
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;

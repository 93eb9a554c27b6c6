//! Linear color gradients sampled per terminal cell.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Color, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cells are about twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// A two-stop gradient across a rect, with the angle measured like CSS `linear-gradient`:
/// `0` points up, `90` points right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    from: Color,
    to: Color,
    dir: (f32, f32),
}

impl LinearGradient {
    pub fn new(from: Color, to: Color, deg: f32) -> Self {
        let rad = deg.to_radians();
        Self {
            from,
            to,
            dir: (rad.sin(), -rad.cos()),
        }
    }

    /// Position of cell `(x, y)` along the gradient line of `rect`, in `0.0..=1.0`.
    pub fn offset_at(&self, rect: Rect, x: u16, y: u16) -> f32 {
        let (dx, dy) = self.dir;
        let w = rect.w as f32;
        let h = rect.h as f32 * CELL_ASPECT;
        let len = (w * dx).abs() + (h * dy).abs();
        if len <= f32::EPSILON {
            return 0.5;
        }

        let px = (x as f32 - rect.x as f32) + 0.5 - rect.w as f32 / 2.0;
        let py = ((y as f32 - rect.y as f32) + 0.5 - rect.h as f32 / 2.0) * CELL_ASPECT;
        (0.5 + (px * dx + py * dy) / len).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, rect: Rect, x: u16, y: u16) -> Color {
        self.from.lerp(self.to, self.offset_at(rect, x, y))
    }

    /// Splits `text` drawn at `pos` into styled runs, one color per cell. `fit` maps sampled
    /// colors to what the terminal can show; adjacent cells that end up equal share a run.
    pub fn spans(
        &self,
        rect: Rect,
        pos: Pos,
        text: &str,
        base: Style,
        fit: impl Fn(Color) -> Color,
    ) -> Vec<(String, Style)> {
        let mut out: Vec<(String, Style)> = Vec::new();
        let mut x = pos.x;
        for g in text.graphemes(true) {
            let style = base.fg(fit(self.color_at(rect, x, pos.y)));
            match out.last_mut() {
                Some((run, run_style)) if *run_style == style => run.push_str(g),
                _ => out.push((g.to_string(), style)),
            }
            x = x.saturating_add(UnicodeWidthStr::width(g) as u16);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/gradient.rs"]
mod tests;

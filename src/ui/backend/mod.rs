//! Rendering backends.
//!
//! Both backends replay the same [`PaintCmd`] list onto a grid of cells through [`Surface`];
//! only cell storage differs. The trait keeps `ratatui` types out of the rest of the crate.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

/// A grid of cells paint commands can be written into.
pub(crate) trait Surface {
    fn bounds(&self) -> Rect;

    /// Overwrites one cell. Out-of-bounds writes are ignored.
    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);
}

pub(crate) fn replay(surface: &mut impl Surface, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::Fill { rect, style } => fill(surface, *rect, *style),
            PaintCmd::Text { pos, runs, clip } => {
                let mut x = pos.x;
                for (text, style) in runs {
                    x = put_str(surface, Pos::new(x, pos.y), text, *style, *clip);
                }
            }
            PaintCmd::Border { rect, style, kind } => border(surface, *rect, *style, *kind),
        }
    }
}

fn fill(surface: &mut impl Surface, rect: Rect, style: Style) {
    let rect = rect.intersect(surface.bounds());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            surface.put(x, y, " ", style);
        }
    }
}

/// Writes `text` grapheme by grapheme and returns the column after it, so runs chain.
/// Wide glyphs are written whole or not at all; their trailing cells get an empty symbol.
fn put_str(surface: &mut impl Surface, pos: Pos, text: &str, style: Style, clip: Rect) -> u16 {
    let clip = clip.intersect(surface.bounds());
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        let next = x.saturating_add(w);
        if clip.contains(Pos::new(x, pos.y)) && next <= clip.right() {
            surface.put(x, pos.y, g, style);
            for cont in x + 1..next {
                surface.put(cont, pos.y, "", style);
            }
        }
        x = next;
    }
    x
}

fn border(surface: &mut impl Surface, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(surface.bounds());
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let [tl, tr, bl, br, h, v] = kind.glyphs();
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    for x in rect.x + 1..right {
        surface.put(x, rect.y, h, style);
        surface.put(x, bottom, h, style);
    }
    for y in rect.y + 1..bottom {
        surface.put(rect.x, y, v, style);
        surface.put(right, y, v, style);
    }
    surface.put(rect.x, rect.y, tl, style);
    surface.put(right, rect.y, tr, style);
    surface.put(rect.x, bottom, bl, style);
    surface.put(right, bottom, br, style);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;

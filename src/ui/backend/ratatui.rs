use super::{replay, Backend, Surface};
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::style::{Color as RColor, Modifier, Style as RStyle};
use ratatui::Terminal;
use std::io;

/// The current frame's buffer, seen as a paint target.
struct FrameBackend<'a> {
    buf: &'a mut Buffer,
}

impl Surface for FrameBackend<'_> {
    fn bounds(&self) -> Rect {
        let area = self.buf.area;
        Rect::new(area.x, area.y, area.width, area.height)
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.reset();
            cell.set_symbol(symbol).set_style(to_ratatui_style(style));
        }
    }
}

impl Backend for FrameBackend<'_> {
    fn draw(&mut self, _area: Rect, cmds: &[PaintCmd]) {
        replay(self, cmds);
    }
}

/// Owns the crossterm-backed terminal; callers only ever see [`Backend`].
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
        })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area = frame.area();
            let area = Rect::new(area.x, area.y, area.width, area.height);
            let mut backend = FrameBackend {
                buf: frame.buffer_mut(),
            };
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

fn to_ratatui_style(style: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = style.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = style.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}

fn to_ratatui_color(color: Color) -> RColor {
    match color {
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;

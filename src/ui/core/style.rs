//! Colors and text styles, independent of the terminal library.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    /// An entry of the terminal's 256-color palette (0-15 are the ANSI colors).
    Indexed(u8),
}

impl Color {
    /// Linear RGB interpolation. Palette colors snap to whichever end `t` is closer to.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        match (self, to) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let mix = |a: u8, b: u8| {
                    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
                };
                Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
            }
            _ if t < 0.5 => self,
            _ => to,
        }
    }

    /// Mixes an RGB color toward white by `amount` (`0.0..=1.0`). Palette colors are kept.
    pub fn lighten(self, amount: f32) -> Color {
        match self {
            Color::Rgb(..) => self.lerp(Color::Rgb(255, 255, 255), amount),
            Color::Indexed(_) => self,
        }
    }
}

/// Foreground, background and weight of a run of cells. Unset colors use the terminal default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub fn fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    pub fn bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;

//! Deck colors. Settings can override each one; the whole palette is then mapped down to what
//! the terminal can show.

use crate::settings::ThemeSettings;
use crate::ui::core::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckTheme {
    pub border: Color,
    pub hover_border: Color,
    pub drag_border: Color,
    pub shadow: Color,
    pub title_fg: Color,
    /// Label color for cards without a usable gradient.
    pub label_fg: Color,
    pub status_fg: Color,
    pub depth: ColorDepth,
}

/// How many colors the terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    TrueColor,
    Ansi256,
    Ansi16,
}

impl ColorDepth {
    /// `LANGDECK_COLOR_SUPPORT` wins when it parses; otherwise `COLORTERM` and `TERM` decide.
    pub fn detect() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self::parse(&var("LANGDECK_COLOR_SUPPORT"))
            .unwrap_or_else(|| Self::from_env_vars(&var("COLORTERM"), &var("TERM")))
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => Some(ColorDepth::TrueColor),
            "256" | "ansi256" => Some(ColorDepth::Ansi256),
            "16" | "ansi16" | "basic" => Some(ColorDepth::Ansi16),
            _ => None,
        }
    }

    pub fn from_env_vars(colorterm: &str, term: &str) -> Self {
        let (colorterm, term) = (colorterm.to_ascii_lowercase(), term.to_ascii_lowercase());
        if ["truecolor", "24bit", "direct"]
            .iter()
            .any(|needle| colorterm.contains(needle) || term.contains(needle))
        {
            ColorDepth::TrueColor
        } else if term.contains("256color") {
            ColorDepth::Ansi256
        } else {
            ColorDepth::Ansi16
        }
    }

    /// The closest color this depth can show.
    pub fn fit(self, color: Color) -> Color {
        match (self, color) {
            (ColorDepth::TrueColor, _) | (ColorDepth::Ansi256, Color::Indexed(_)) => color,
            (ColorDepth::Ansi256, Color::Rgb(r, g, b)) => Color::Indexed(nearest_ansi256([r, g, b])),
            (ColorDepth::Ansi16, Color::Indexed(i)) if i < 16 => color,
            (ColorDepth::Ansi16, Color::Indexed(i)) => Color::Indexed(nearest_ansi16(palette_rgb(i))),
            (ColorDepth::Ansi16, Color::Rgb(r, g, b)) => Color::Indexed(nearest_ansi16([r, g, b])),
        }
    }
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),       // dark gray
            hover_border: Color::Indexed(6), // cyan
            drag_border: Color::Indexed(3),  // yellow
            shadow: Color::Indexed(0),
            title_fg: Color::Indexed(15),
            label_fg: Color::Indexed(15),
            status_fg: Color::Indexed(8),
            depth: ColorDepth::TrueColor,
        }
    }
}

impl DeckTheme {
    /// Maps every theme color down to `depth`; gradient samples follow through [`Self::fit`].
    pub fn set_depth(&mut self, depth: ColorDepth) {
        self.depth = depth;
        for slot in self.slots_mut() {
            *slot = depth.fit(*slot);
        }
    }

    /// Applies every override that parses; unknown color names are skipped with a warning.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            ("border", &settings.border),
            ("hover_border", &settings.hover_border),
            ("drag_border", &settings.drag_border),
            ("shadow", &settings.shadow),
            ("title_fg", &settings.title_fg),
            ("label_fg", &settings.label_fg),
            ("status_fg", &settings.status_fg),
        ];

        for ((name, value), slot) in overrides.into_iter().zip(self.slots_mut()) {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(setting = name, value = %value, "unknown theme color"),
            }
        }
    }

    pub fn fit(&self, color: Color) -> Color {
        self.depth.fit(color)
    }

    // Same order as the fields in `ThemeSettings`.
    fn slots_mut(&mut self) -> [&mut Color; 7] {
        [
            &mut self.border,
            &mut self.hover_border,
            &mut self.drag_border,
            &mut self.shadow,
            &mut self.title_fg,
            &mut self.label_fg,
            &mut self.status_fg,
        ]
    }
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Best of the 6x6x6 cube entry (each channel snapped to its nearest level) and the gray ramp.
fn nearest_ansi256(rgb: [u8; 3]) -> u8 {
    let level = |v: u8| {
        (0u8..6)
            .min_by_key(|&i| CUBE_LEVELS[usize::from(i)].abs_diff(v))
            .unwrap_or(0)
    };
    let [r, g, b] = rgb.map(level);
    let cube = 16 + 36 * r + 6 * g + b;

    let avg = rgb.iter().map(|&c| u32::from(c)).sum::<u32>() / 3;
    let gray = 232 + (avg.saturating_sub(3) / 10).min(23) as u8;

    if distance_sq(rgb, palette_rgb(gray)) < distance_sq(rgb, palette_rgb(cube)) {
        gray
    } else {
        cube
    }
}

fn nearest_ansi16(rgb: [u8; 3]) -> u8 {
    (0u8..16)
        .min_by_key(|&i| distance_sq(rgb, ANSI16_RGB[usize::from(i)]))
        .unwrap_or(0)
}

fn palette_rgb(index: u8) -> [u8; 3] {
    match index {
        0..=15 => ANSI16_RGB[usize::from(index)],
        16..=231 => {
            let i = index - 16;
            [i / 36, (i / 6) % 6, i % 6].map(|l| CUBE_LEVELS[usize::from(l)])
        }
        _ => [8 + (index - 232) * 10; 3],
    }
}

fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b)
        .map(|(&x, y)| u32::from(x.abs_diff(y)).pow(2))
        .sum()
}

const ANSI16_RGB: [[u8; 3]; 16] = [
    [0, 0, 0],
    [205, 0, 0],
    [0, 205, 0],
    [205, 205, 0],
    [0, 0, 238],
    [205, 0, 205],
    [0, 205, 205],
    [229, 229, 229],
    [127, 127, 127],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [92, 92, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// Parses `#RRGGBB`, the web color names used by card gradients, and the terminal's ANSI names.
///
/// `cyan` resolves to the web color so gradients stay smooth; use `ansi_cyan` or an index for
/// the palette entry.
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    if let Some(&(_, rgb)) = WEB_COLORS.iter().find(|(name, _)| *name == v) {
        return Some(Color::Rgb(rgb.0, rgb.1, rgb.2));
    }

    let c = match v.as_str() {
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "ansi_cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

const WEB_COLORS: [(&str, (u8, u8, u8)); 6] = [
    ("purple", (0x80, 0x00, 0x80)),
    ("pink", (0xFF, 0xC0, 0xCB)),
    ("indigo", (0x4B, 0x00, 0x82)),
    ("cyan", (0x00, 0xFF, 0xFF)),
    ("orange", (0xFF, 0xA5, 0x00)),
    ("salmon", (0xFA, 0x80, 0x72)),
];

//! Style types for highlighted text
//!
//! Inline CSS declarations carried by highlight spans are interpreted here
//! into terminal styles. Only the properties a terminal can show are read;
//! everything else is ignored.

/// Terminal colors: the ANSI 16-color palette plus true color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a CSS color value (named, `#rgb`, `#rrggbb`, `rgb(r, g, b)`)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<u8> = args
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<std::result::Result<_, _>>()
                .ok()?;
            return match parts.as_slice() {
                [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
                _ => None,
            };
        }
        let color = match value.as_str() {
            "black" => Color::Black,
            "red" | "darkred" | "crimson" => Color::Red,
            "green" | "darkgreen" => Color::Green,
            "yellow" | "gold" | "orange" => Color::Yellow,
            "blue" | "navy" | "darkblue" => Color::Blue,
            "magenta" | "purple" | "fuchsia" => Color::Magenta,
            "cyan" | "teal" | "aqua" => Color::Cyan,
            "white" | "silver" => Color::White,
            "gray" | "grey" => Color::BrightBlack,
            "lightcoral" | "tomato" => Color::BrightRed,
            "lime" | "lightgreen" => Color::BrightGreen,
            "lightyellow" => Color::BrightYellow,
            "lightblue" | "dodgerblue" => Color::BrightBlue,
            "violet" | "orchid" => Color::BrightMagenta,
            "lightcyan" => Color::BrightCyan,
            _ => return None,
        };
        Some(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
    match hex.len() {
        3 => {
            let (r, g, b) = (digit(0, 1)?, digit(1, 1)?, digit(2, 1)?);
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::Rgb(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        _ => None,
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Layer inline CSS declarations (`color: red; font-weight: bold`) over
    /// this style; inner spans override outer ones
    pub fn apply_declarations(&mut self, css: &str) {
        for declaration in css.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim().trim_end_matches("!important").trim();

            match property.as_str() {
                "color" => {
                    if let Some(color) = Color::parse(value) {
                        self.fg = color;
                    }
                }
                "background" | "background-color" => {
                    if let Some(color) = Color::parse(value) {
                        self.bg = color;
                    }
                }
                "font-weight" => {
                    self.bold = matches!(value, "bold" | "bolder" | "600" | "700" | "800" | "900");
                }
                "font-style" => {
                    self.italic = matches!(value, "italic" | "oblique");
                }
                "text-decoration" | "text-decoration-line" => {
                    self.underline = value.split_whitespace().any(|v| v == "underline");
                }
                _ => {}
            }
        }
    }
}

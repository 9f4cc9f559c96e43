//! Static style-code vocabulary.
//!
//! Names are spelled without hyphens because the color-pair identifier
//! grammar reserves `-` as its segment delimiter.

use crossterm::style::{Attribute, Color};

/// SGR style code as understood by the terminal.
pub type AnsiCode = u8;

/// Offset between a foreground SGR code and its background counterpart.
pub const BG_OFFSET: AnsiCode = 10;

/// Foreground color names and their SGR codes (8 base + 8 high-intensity).
pub const FOREGROUNDS: [(&str, AnsiCode); 16] = [
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("hiblack", 90),
    ("hired", 91),
    ("higreen", 92),
    ("hiyellow", 93),
    ("hiblue", 94),
    ("himagenta", 95),
    ("hicyan", 96),
    ("hiwhite", 97),
];

/// Attribute names and their terminal style codes.
///
/// The blink pair stays mapped even though many terminals ignore it.
pub const ATTRIBUTES: [(&str, Attribute); 10] = [
    ("reset", Attribute::Reset),
    ("italic", Attribute::Italic),
    ("bold", Attribute::Bold),
    ("faint", Attribute::Dim),
    ("underline", Attribute::Underlined),
    ("reverse", Attribute::Reverse),
    ("concealed", Attribute::Hidden),
    ("crossed", Attribute::CrossedOut),
    ("blinkslow", Attribute::SlowBlink),
    ("blinkrapid", Attribute::RapidBlink),
];

/// Convert an SGR color code to the terminal collaborator's named color.
///
/// Accepts foreground codes (30-37, 90-97) and their background
/// counterparts shifted by [`BG_OFFSET`]. Crossterm's `Dark*` variants are
/// the 8 base colors; its plain variants are the high-intensity set.
pub fn terminal_color(code: AnsiCode) -> Option<Color> {
    let base = if (40..=47).contains(&code) || (100..=107).contains(&code) {
        code - BG_OFFSET
    } else {
        code
    };
    match base {
        30 => Some(Color::Black),
        31 => Some(Color::DarkRed),
        32 => Some(Color::DarkGreen),
        33 => Some(Color::DarkYellow),
        34 => Some(Color::DarkBlue),
        35 => Some(Color::DarkMagenta),
        36 => Some(Color::DarkCyan),
        37 => Some(Color::Grey),
        90 => Some(Color::DarkGrey),
        91 => Some(Color::Red),
        92 => Some(Color::Green),
        93 => Some(Color::Yellow),
        94 => Some(Color::Blue),
        95 => Some(Color::Magenta),
        96 => Some(Color::Cyan),
        97 => Some(Color::White),
        _ => None,
    }
}

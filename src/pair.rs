//! Color-pair identifier parsing.
//!
//! An identifier has the shape `fg[-bg][-attr1[-attr2...]]` and is split
//! positionally: segment 0 is the foreground name, segment 1 (when present)
//! the background name, and every later segment an attribute name.

/// Color name token that applies no color.
pub const NORMAL: &str = "normal";

/// Borrowed, positionally parsed view of a color-pair identifier.
///
/// Parsing never fails; unknown names only surface when the pair is
/// resolved against the style tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair<'a> {
    identifier: &'a str,
    foreground: &'a str,
    background: Option<&'a str>,
}

impl<'a> ColorPair<'a> {
    /// Split an identifier into its positional segments.
    pub fn parse(identifier: &'a str) -> Self {
        let mut segments = identifier.split('-');
        let foreground = segments.next().unwrap_or(identifier);
        let background = segments.next();
        Self {
            identifier,
            foreground,
            background,
        }
    }

    /// The full identifier this pair was parsed from.
    pub fn identifier(&self) -> &'a str {
        self.identifier
    }

    /// Foreground color name (segment 0).
    pub fn foreground(&self) -> &'a str {
        self.foreground
    }

    /// Background color name (segment 1), if present.
    pub fn background(&self) -> Option<&'a str> {
        self.background
    }

    /// Attribute names (segments 2 and later), in identifier order.
    pub fn attributes(&self) -> impl Iterator<Item = &'a str> {
        self.identifier.split('-').skip(2)
    }

    /// The `fg[-bg]` prefix of the identifier, which keys the style cache.
    pub fn color_key(&self) -> &'a str {
        match self.background {
            Some(bg) => &self.identifier[..self.foreground.len() + 1 + bg.len()],
            None => self.identifier,
        }
    }
}

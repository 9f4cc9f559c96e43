//! Color-pair resolution, caching, and rendering.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossterm::style::{Attribute, ContentStyle};
use tracing::debug;

use crate::codes::{self, AnsiCode, ATTRIBUTES, BG_OFFSET, FOREGROUNDS};
use crate::error::StyleError;
use crate::pair::{ColorPair, NORMAL};

/// Resolves color-pair identifiers to terminal styles and renders text.
///
/// A `Styler` owns the name tables and a grow-only cache of resolved
/// `fg-bg` combinations. Construct one per application (or per test);
/// there is no process-wide instance. Sharing a `Styler` across threads is
/// safe: the cache sits behind a mutex and every insert is idempotent.
#[derive(Debug)]
pub struct Styler {
    foregrounds: HashMap<&'static str, AnsiCode>,
    backgrounds: HashMap<&'static str, AnsiCode>,
    attributes: HashMap<&'static str, Attribute>,
    cache: Mutex<HashMap<String, ContentStyle>>,
    colored_output: bool,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler {
    /// Create a styler that renders colored output.
    pub fn new() -> Self {
        Self::with_colored_output(true)
    }

    /// Create a styler that validates identifiers but renders plain text.
    pub fn plain() -> Self {
        Self::with_colored_output(false)
    }

    fn with_colored_output(colored_output: bool) -> Self {
        let foregrounds: HashMap<_, _> = FOREGROUNDS.into_iter().collect();
        // Background codes are the foreground codes shifted by BG_OFFSET.
        let backgrounds = foregrounds
            .iter()
            .map(|(&name, &code)| (name, code + BG_OFFSET))
            .collect();
        Self {
            foregrounds,
            backgrounds,
            attributes: ATTRIBUTES.into_iter().collect(),
            cache: Mutex::new(HashMap::new()),
            colored_output,
        }
    }

    /// Whether rendered output carries escape sequences.
    pub fn color_enabled(&self) -> bool {
        self.colored_output
    }

    /// SGR foreground code for a color name.
    pub fn foreground_code(&self, name: &str) -> Option<AnsiCode> {
        self.foregrounds.get(name).copied()
    }

    /// SGR background code for a color name.
    pub fn background_code(&self, name: &str) -> Option<AnsiCode> {
        self.backgrounds.get(name).copied()
    }

    /// Terminal style code for an attribute name.
    pub fn attribute_code(&self, name: &str) -> Option<Attribute> {
        self.attributes.get(name).copied()
    }

    /// Number of distinct `fg-bg` combinations resolved so far.
    pub fn cached_pairs(&self) -> usize {
        self.lock_cache().len()
    }

    /// Resolve the color portion of an identifier to a terminal style.
    ///
    /// The style for a given `fg[-bg]` prefix is built on first use and
    /// served from the cache afterwards. Attribute segments are ignored
    /// here; [`Styler::colored`] resolves them on every call.
    pub fn resolve(&self, identifier: &str) -> Result<ContentStyle, StyleError> {
        self.resolve_pair(&ColorPair::parse(identifier))
    }

    fn resolve_pair(&self, pair: &ColorPair<'_>) -> Result<ContentStyle, StyleError> {
        let key = pair.color_key();
        if let Some(style) = self.lock_cache().get(key) {
            return Ok(*style);
        }
        let style = self.build_style(pair)?;
        debug!(key = %key, "caching resolved color pair");
        self.lock_cache().insert(key.to_string(), style);
        Ok(style)
    }

    /// Build the style for a pair's colors. Resolution failure means
    /// nothing is cached and nothing is rendered.
    fn build_style(&self, pair: &ColorPair<'_>) -> Result<ContentStyle, StyleError> {
        let mut style = ContentStyle::new();
        let fg = pair.foreground();
        if fg != NORMAL {
            let code = self
                .foreground_code(fg)
                .ok_or_else(|| StyleError::UnknownColor(fg.to_string()))?;
            style.foreground_color = codes::terminal_color(code);
        }
        if let Some(bg) = pair.background() {
            if bg != NORMAL {
                let code = self
                    .background_code(bg)
                    .ok_or_else(|| StyleError::UnknownColor(bg.to_string()))?;
                style.background_color = codes::terminal_color(code);
            }
        }
        Ok(style)
    }

    /// Render `args` under the identifier's colors and attributes.
    ///
    /// Works on a value copy of the cached style, so attribute segments
    /// never accumulate into later calls that share the same `fg-bg`
    /// prefix. An unknown attribute aborts before any text is produced.
    pub fn colored(
        &self,
        identifier: &str,
        args: fmt::Arguments<'_>,
    ) -> Result<String, StyleError> {
        let pair = ColorPair::parse(identifier);
        let mut style = self.resolve_pair(&pair)?;
        for name in pair.attributes() {
            let attribute = self
                .attribute_code(name)
                .ok_or_else(|| StyleError::UnknownAttribute(name.to_string()))?;
            style.attributes.set(attribute);
        }
        let text = args.to_string();
        if !self.colored_output {
            return Ok(text);
        }
        Ok(style.apply(text).to_string())
    }

    /// Write a literal message to stdout under the identifier's style.
    ///
    /// The message is rendered verbatim, never interpreted as a format
    /// string.
    pub fn print(&self, identifier: &str, message: &str) -> Result<(), StyleError> {
        self.printf(identifier, format_args!("{message}"))
    }

    /// Like [`Styler::print`], with a trailing newline.
    pub fn println(&self, identifier: &str, message: &str) -> Result<(), StyleError> {
        let rendered = self.colored(identifier, format_args!("{message}"))?;
        println!("{rendered}");
        Ok(())
    }

    /// Write formatted text to stdout under the identifier's style.
    pub fn printf(&self, identifier: &str, args: fmt::Arguments<'_>) -> Result<(), StyleError> {
        let rendered = self.colored(identifier, args)?;
        print!("{rendered}");
        Ok(())
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, ContentStyle>> {
        // Cache writes are idempotent inserts, so a lock poisoned by a
        // panicking thread still holds a usable map.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

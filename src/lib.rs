//! Terminal text styling from hyphen-delimited color-pair identifiers.
//!
//! A color pair such as `red-black-bold` names a foreground color, an
//! optional background color, and any number of text attributes. A
//! [`Styler`] resolves the pair against fixed name tables, memoizes the
//! color combination, and wraps formatted text in the matching ANSI
//! escape sequences (rendering is delegated to `crossterm`).
//!
//! ```
//! use colorpair::Styler;
//!
//! let styler = Styler::new();
//! let line = styler.colored("green-normal-bold", format_args!("{} checks passed", 3))?;
//! println!("{line}");
//! # Ok::<(), colorpair::StyleError>(())
//! ```

pub mod codes;
pub mod error;
pub mod pair;
pub mod styler;

pub use crossterm::style::{Attribute, Color, ContentStyle};

pub use codes::{AnsiCode, ATTRIBUTES, BG_OFFSET, FOREGROUNDS};
pub use error::StyleError;
pub use pair::{ColorPair, NORMAL};
pub use styler::Styler;

/// Format text under a color pair.
///
/// Expands to [`Styler::colored`] with `format!`-style arguments.
#[macro_export]
macro_rules! cformat {
    ($styler:expr, $pair:expr, $($arg:tt)*) => {
        $styler.colored($pair, ::core::format_args!($($arg)*))
    };
}

/// Print formatted text under a color pair, without a trailing newline.
///
/// Expands to [`Styler::printf`].
#[macro_export]
macro_rules! cprint {
    ($styler:expr, $pair:expr, $($arg:tt)*) => {
        $styler.printf($pair, ::core::format_args!($($arg)*))
    };
}

/// Print formatted text under a color pair, with a trailing newline.
///
/// Expands to [`Styler::println`].
#[macro_export]
macro_rules! cprintln {
    ($styler:expr, $pair:expr, $($arg:tt)*) => {
        $styler.println($pair, &::std::format!($($arg)*))
    };
}

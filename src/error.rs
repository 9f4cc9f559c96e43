//! Color-pair resolution errors.

/// Errors produced while resolving a color-pair identifier.
///
/// All failures are synchronous and name the offending token; nothing is
/// retried or logged on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A foreground or background segment matched no color table entry
    /// and was not the literal `normal`.
    #[error("color `{0}` is not recognized")]
    UnknownColor(String),

    /// An attribute segment matched no attribute table entry.
    #[error("attribute `{0}` is not recognized")]
    UnknownAttribute(String),
}

//! Key events produced by the decoder.

/// A single decoded keypress.
///
/// Literal bytes (including control characters) stay in [`Key::Char`];
/// escape sequences map to the named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A byte delivered as-is.
    Char(u8),
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Delete key.
    Delete,
    /// A lone escape, or a sequence that was not recognized.
    Escape,
}

/// The byte a terminal sends for Ctrl plus `c`.
#[inline]
pub const fn ctrl_key(c: u8) -> u8 {
    c & 0x1f
}

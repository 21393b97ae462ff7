//! Keyboard input as reported by the host.

/// Keyboard key, named after DOM `KeyboardEvent.key` values.
///
/// Only Escape means anything to the page; every other key collapses to
/// [`Key::Unidentified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Keys the page has no use for.
    Unidentified,
}

impl Key {
    /// Maps a DOM `key` string (`"Escape"`, `"Enter"`, `"a"`) to a key.
    #[must_use]
    pub fn from_dom(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Unidentified,
        }
    }
}

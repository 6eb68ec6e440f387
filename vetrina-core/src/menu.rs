//! Menu open/closed view-state.
//!
//! The mobile navigation menu carries exactly one piece of state: whether it
//! is open. Everything the page shows for it (panel class, body scroll lock,
//! toggle-button class, `aria-expanded`, button glyph) is a projection of
//! that boolean, computed by [`MenuState::view`].

/// Class present on the menu panel while it is open.
pub const PANEL_OPEN_CLASS: &str = "is-open";
/// Class present on `<body>` while the menu is open, suppressing background scroll.
pub const BODY_LOCK_CLASS: &str = "no-scroll";
/// Class present on the toggle button while the menu is open.
pub const BUTTON_ACTIVE_CLASS: &str = "is-active";
/// Button glyph while the menu is open (close affordance).
pub const GLYPH_OPEN: &str = "✕";
/// Button glyph while the menu is closed (hamburger).
pub const GLYPH_CLOSED: &str = "☰";

/// Open/closed state of the navigation menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip between open and closed. Its own inverse.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Project the state into everything the navbar renders.
    #[must_use]
    pub const fn view(self) -> MenuView {
        MenuView {
            panel_open: self.open,
            scroll_locked: self.open,
            button_active: self.open,
            aria_expanded: aria_expanded_value(self.open),
            glyph: if self.open { GLYPH_OPEN } else { GLYPH_CLOSED },
        }
    }
}

/// Render projection of a [`MenuState`].
///
/// All three boolean fields carry the same value; they are kept separate so
/// each DOM target names the flag it consumes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MenuView {
    /// `is-open` membership on the menu panel.
    pub panel_open: bool,
    /// `no-scroll` membership on the document body.
    pub scroll_locked: bool,
    /// `is-active` membership on the toggle button.
    pub button_active: bool,
    /// `aria-expanded` value on the toggle button.
    pub aria_expanded: &'static str,
    /// Text content of the toggle button.
    pub glyph: &'static str,
}

/// Read an `aria-expanded` attribute. Only the literal `"true"` counts as
/// expanded; a missing or malformed attribute reads as closed.
#[must_use]
pub fn is_expanded(attr: Option<&str>) -> bool {
    attr == Some("true")
}

/// String form written back to `aria-expanded`.
#[must_use]
pub const fn aria_expanded_value(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

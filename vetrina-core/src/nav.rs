//! Primary navigation destinations.

/// One entry in the primary navigation menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    /// Translation key for the visible label.
    pub key: &'static str,
    /// Route path the entry links to.
    pub href: &'static str,
}

/// Destinations listed in the navbar menu, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        key: "nav.home",
        href: "/",
    },
    NavItem {
        key: "nav.dashboard",
        href: "/dashboard",
    },
    NavItem {
        key: "nav.stats",
        href: "/stats",
    },
];

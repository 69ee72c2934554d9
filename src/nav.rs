//! Mobile navigation menu state and active-link matching.

/// Open/closed state of the collapsible nav, as mirrored in `aria-expanded`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    /// Read state from a toggle's `aria-expanded` attribute.
    pub fn from_aria_expanded(raw: Option<&str>) -> Self {
        Self { open: raw == Some("true") }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Last segment of `pathname`, or `index_page` when that segment is empty.
pub fn current_page<'a>(pathname: &'a str, index_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => index_page,
    }
}

/// Whether a nav link's `href` points at the current page.
pub fn is_active_link(href: Option<&str>, page: &str) -> bool {
    href == Some(page)
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;

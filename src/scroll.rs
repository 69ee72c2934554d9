//! In-page anchor resolution for smooth scrolling.

/// Element id targeted by an `href="#id"` link. A bare `#` has no target.
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    let id = href?.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

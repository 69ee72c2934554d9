//! Artifact grid filtering.
//!
//! Filter buttons carry a `data-filter` value and cards carry a `data-type`.
//! The special value `all` shows every card.

pub const ALL: &str = "all";

/// Filter chosen by the most recently activated button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Type(String),
    /// Button without a `data-filter`; matches nothing.
    Unset,
}

impl FilterSelection {
    pub fn from_data_filter(raw: Option<&str>) -> Self {
        match raw {
            Some(ALL) => Self::All,
            Some(kind) => Self::Type(kind.to_string()),
            None => Self::Unset,
        }
    }

    pub fn shows(&self, card_type: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Type(kind) => card_type == Some(kind.as_str()),
            Self::Unset => false,
        }
    }

    /// Inline `display` value for a card: empty restores the stylesheet default.
    pub fn display_for(&self, card_type: Option<&str>) -> &'static str {
        if self.shows(card_type) { "" } else { "none" }
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

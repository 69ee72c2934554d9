use super::*;

#[test]
fn parse_accepts_only_exact_literals() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn from_attribute_treats_non_dark_as_light() {
    assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_attribute(None), Theme::Light);
}

#[test]
fn opposite_flips_both_ways() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
}

#[test]
fn display_matches_persisted_literal() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn dark_appearance_offers_light_switch() {
    let look = ToggleAppearance::for_theme(Theme::Dark);
    assert_eq!(look.aria_label, "Switch to light theme");
    assert!(look.is_dark);
    assert!(look.icon_markup.contains("icon-moon"));
}

#[test]
fn light_appearance_offers_dark_switch() {
    let look = ToggleAppearance::for_theme(Theme::Light);
    assert_eq!(look.aria_label, "Switch to dark theme");
    assert!(!look.is_dark);
    assert!(look.icon_markup.contains("icon-sun"));
}

#[test]
fn appearance_dark_flag_tracks_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(ToggleAppearance::for_theme(theme).is_dark, theme.is_dark());
    }
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

use super::*;

#[test]
fn defaults_match_site_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.storage_key, "site-theme");
    assert_eq!(cfg.theme_attribute, "data-theme");
    assert_eq!(cfg.theme_toggle_selector, "#theme-toggle");
    assert_eq!(cfg.contact_fields.message, "#message");
    assert_eq!(cfg.index_page, "index.html");
}

#[test]
fn from_json_keeps_defaults_for_missing_keys() {
    let cfg = SiteConfig::from_json(r#"{"storage_key":"portfolio-theme"}"#).unwrap();
    assert_eq!(cfg.storage_key, "portfolio-theme");
    assert_eq!(cfg.nav_selector, "#main-nav");
    assert_eq!(cfg.contact_fields, ContactFields::default());
}

#[test]
fn from_json_accepts_partial_contact_fields() {
    let cfg = SiteConfig::from_json(r##"{"contact_fields":{"email":"#reply-to"}}"##).unwrap();
    assert_eq!(cfg.contact_fields.email, "#reply-to");
    assert_eq!(cfg.contact_fields.name, "#name");
}

#[test]
fn from_json_blank_is_default() {
    assert_eq!(SiteConfig::from_json("   ").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = SiteConfig::from_json(r#"{"storage_kye":"x"}"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn resolve_falls_back_on_malformed_json() {
    assert_eq!(SiteConfig::resolve(Some("{not json")), SiteConfig::default());
}

#[test]
fn resolve_without_attribute_is_default() {
    assert_eq!(SiteConfig::resolve(None), SiteConfig::default());
}

use super::*;

#[test]
fn menu_reads_aria_expanded() {
    assert!(NavMenu::from_aria_expanded(Some("true")).open);
    assert!(!NavMenu::from_aria_expanded(Some("false")).open);
    assert!(!NavMenu::from_aria_expanded(None).open);
}

#[test]
fn menu_toggle_round_trips_attribute() {
    let closed = NavMenu::default();
    let open = closed.toggled();
    assert_eq!(open.aria_expanded(), "true");
    assert_eq!(open.toggled().aria_expanded(), "false");
}

#[test]
fn current_page_is_last_segment() {
    assert_eq!(current_page("/work/about.html", "index.html"), "about.html");
    assert_eq!(current_page("contact.html", "index.html"), "contact.html");
}

#[test]
fn current_page_defaults_to_index() {
    assert_eq!(current_page("/", "index.html"), "index.html");
    assert_eq!(current_page("", "index.html"), "index.html");
    assert_eq!(current_page("/work/", "home.html"), "home.html");
}

#[test]
fn active_link_requires_exact_href() {
    assert!(is_active_link(Some("about.html"), "about.html"));
    assert!(!is_active_link(Some("./about.html"), "about.html"));
    assert!(!is_active_link(None, "index.html"));
}

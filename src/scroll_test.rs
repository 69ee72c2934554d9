use super::*;

#[test]
fn strips_leading_hash() {
    assert_eq!(anchor_target(Some("#projects")), Some("projects"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(anchor_target(Some("#")), None);
}

#[test]
fn non_fragment_links_have_no_target() {
    assert_eq!(anchor_target(Some("about.html#team")), None);
    assert_eq!(anchor_target(None), None);
}

use super::*;

#[test]
fn banner_points_at_apply_page() {
    assert_eq!(BANNER_CTA_HREF, "/apply");
    assert_eq!(BANNER_CTA_LABEL, "Apply to GSoC with AOSSIE");
}

#[test]
fn banner_copy_matches_site_text() {
    assert_eq!(BANNER_LABEL, "Apply Banner");
    assert_eq!(BANNER_HEADING, "Launch into AOSSIE's open-source world through GSoC!");
    assert!(BANNER_DESCRIPTION.starts_with("Learn how to apply"));
    assert!(BANNER_DESCRIPTION.ends_with("Google Summer of Code."));
}

#[test]
fn banner_switches_background_in_dark_mode() {
    assert!(SECTION_CLASS.split(' ').any(|c| c == "dark:bg-yellow-400"));
}

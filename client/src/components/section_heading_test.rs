use super::*;

#[test]
fn heading_has_brand_colors_for_both_modes() {
    let class = section_heading_class("");
    assert!(class.split(' ').any(|c| c == "text-[#00843D]"));
    assert!(class.split(' ').any(|c| c == "dark:text-yellow-400"));
}

#[test]
fn heading_has_inset_ring() {
    let class = section_heading_class("");
    assert!(class.split(' ').any(|c| c == "ring-1"));
    assert!(class.split(' ').any(|c| c == "ring-inset"));
}

#[test]
fn heading_appends_custom_class() {
    assert!(section_heading_class("custom-class").ends_with(" custom-class"));
}

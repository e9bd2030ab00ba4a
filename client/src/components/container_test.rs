use super::*;

#[test]
fn container_size_defaults_to_medium() {
    assert_eq!(ContainerSize::default(), ContainerSize::Md);
    assert_eq!(ContainerSize::default().max_width_class(), "max-w-4xl");
}

#[test]
fn pattern_class_includes_size_and_custom_class() {
    let class = pattern_class(ContainerSize::Lg, "relative grid");
    assert!(class.contains("max-w-6xl"));
    assert!(class.ends_with("relative grid"));
}

#[test]
fn pattern_sizes_are_distinct() {
    let widths = [ContainerSize::Sm, ContainerSize::Md, ContainerSize::Lg].map(ContainerSize::max_width_class);
    assert_ne!(widths[0], widths[1]);
    assert_ne!(widths[1], widths[2]);
}

#[test]
fn custom_class_lands_on_outer_wrapper() {
    assert_eq!(with_extra(OUTER_CLASS, "outer-class"), "sm:px-8 outer-class");
    assert!(with_extra(INNER_CLASS, "inner-class").ends_with("inner-class"));
}

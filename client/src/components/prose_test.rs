use super::*;

fn tokens(class: &str) -> Vec<&str> {
    class.split(' ').collect()
}

#[test]
fn prose_has_base_and_dark_classes() {
    let class = prose_class("");
    let tokens = tokens(&class);
    assert!(tokens.contains(&"prose"));
    assert!(tokens.contains(&"dark:prose-invert"));
}

#[test]
fn prose_has_code_and_heading_modifiers() {
    let class = prose_class("");
    let tokens = tokens(&class);
    for expected in ["prose-code:p-2", "prose-code:bg-slate-300", "prose-headings:font-extrabold", "prose-headings:mt-0"] {
        assert!(tokens.contains(&expected), "missing {expected}");
    }
}

#[test]
fn prose_appends_custom_class() {
    assert!(tokens(&prose_class("custom-class")).contains(&"custom-class"));
}

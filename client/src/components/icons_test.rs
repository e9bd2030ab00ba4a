use super::*;
use crate::components::render_html;

#[test]
fn x_icon_renders_decorative_svg_with_custom_class() {
    let html = render_html(|| view! { <XIcon class="custom-class"/> });
    assert!(html.contains("<svg"));
    assert!(html.contains(r#"viewBox="0 0 24 24""#));
    assert!(html.contains(r#"aria-hidden="true""#));
    assert!(html.contains(r#"fill="currentColor""#));
    assert!(html.contains(r#"class="custom-class""#));
    assert!(html.contains("<path"));
}

#[test]
fn icons_without_class_still_render() {
    let html = render_html(|| view! { <GitHubIcon/> });
    assert!(html.contains(r#"aria-hidden="true""#));
}

#[test]
fn mode_toggle_icons_are_both_decorative() {
    for html in [render_html(|| view! { <SunIcon/> }), render_html(|| view! { <MoonIcon/> })] {
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
    }
}

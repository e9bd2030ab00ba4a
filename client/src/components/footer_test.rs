use super::*;
use crate::components::render_html;

#[test]
fn footer_links_to_every_nav_entry() {
    let paths: Vec<_> = NAV_ENTRIES.iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/about", "/projects", "/ideas", "/apply"]);
}

#[test]
fn social_links_have_expected_targets_and_labels() {
    let links: Vec<_> = SOCIAL_LINKS.iter().map(|l| (l.href, l.label)).collect();
    assert_eq!(
        links,
        vec![
            ("mailto:aossie.oss@gmail.com", "Contact by Mail"),
            ("https://gitlab.com/aossie", "Follow on GitLab"),
            ("https://github.com/AOSSIE-Org", "Follow on GitHub"),
            ("https://discord.gg/hjUhu33uAn", "Join on Discord"),
            ("https://twitter.com/aossie_org", "Follow on X (Twitter)"),
        ]
    );
}

#[test]
fn every_social_link_has_distinct_icon() {
    for (i, a) in SOCIAL_LINKS.iter().enumerate() {
        for b in &SOCIAL_LINKS[i + 1..] {
            assert_ne!(a.icon, b.icon);
        }
    }
}

#[test]
fn only_mail_link_stays_in_tab() {
    let in_tab: Vec<_> = SOCIAL_LINKS.iter().filter(|l| !l.opens_new_tab()).map(|l| l.icon).collect();
    assert_eq!(in_tab, vec![SocialIcon::Mail]);
}

#[test]
fn copyright_names_organization_and_years() {
    assert!(COPYRIGHT.starts_with("\u{a9} 2016-2025 AOSSIE"));
}

#[test]
fn footer_nav_has_dark_mode_text() {
    assert!(NAV_CLASS.split(' ').any(|c| c == "dark:text-zinc-200"));
    assert!(NAV_CLASS.starts_with("flex gap-5"));
}

#[test]
fn footer_renders_labelled_social_links() {
    let html = render_html(|| view! { <Footer/> });
    for link in SOCIAL_LINKS {
        assert!(html.contains(&format!(r#"aria-label="{}""#, link.label)), "missing {}", link.label);
        assert!(html.contains(&format!(r#"href="{}""#, link.href)));
    }
    assert_eq!(html.matches(r#"target="_blank""#).count(), SOCIAL_LINKS.len() - 1);
    assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), SOCIAL_LINKS.len() - 1);
}

#[test]
fn footer_renders_nav_links_and_copyright() {
    let html = render_html(|| view! { <Footer/> });
    for entry in NAV_ENTRIES {
        assert!(html.contains(&format!(r#"href="{}""#, entry.path)));
        assert!(html.contains(entry.label));
    }
    assert!(html.contains(COPYRIGHT));
}

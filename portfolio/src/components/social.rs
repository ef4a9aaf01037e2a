use super::Icon;
use crate::content::PROFILES;
use crate::motion::PressScale;
use crate::types::{IconSize, SocialProfile};
use leptos::prelude::*;

/// An icon link to an external profile. Opens in a new tab without handing
/// the new page a reference back to this one.
#[component]
pub fn SocialLink(
    profile: SocialProfile,
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    view! {
        <a
            href=profile.url
            target="_blank"
            rel="noopener noreferrer"
            class="social-link motion-press"
            style={PressScale::SOCIAL.css()}
            aria-label=profile.name
        >
            <Icon glyph=profile.glyph size=size />
        </a>
    }
}

/// The full row of profile links.
#[component]
pub fn SocialLinks(
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    let class = match size {
        IconSize::Regular => "social-links",
        IconSize::Large => "social-links large",
    };
    view! {
        <div class=class>
            {PROFILES
                .into_iter()
                .map(|profile| view! { <SocialLink profile=profile size=size /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn link_opens_new_tab_without_opener() {
        let html = view! { <SocialLink profile=PROFILES[0] /> }.to_html();
        assert!(html.contains(r#"href="https://github.com/AntonOsika""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn link_carries_hover_and_press_scale() {
        let html = view! { <SocialLink profile=PROFILES[1] /> }.to_html();
        assert!(html.contains("motion-press"));
        assert!(html.contains("--hover-scale: 1.2; --press-scale: 0.9;"));
    }

    #[test]
    fn row_links_every_profile_once() {
        let html = view! { <SocialLinks /> }.to_html();
        for profile in PROFILES {
            assert_eq!(html.matches(profile.url).count(), 1, "{}", profile.name);
        }
        assert_eq!(html.matches(r#"width="24""#).count(), 3);
    }
}

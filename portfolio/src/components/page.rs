//! Page root: owns the scroll offset and composes the sections.

use super::{About, Contact, Header, Hero, Projects};
use crate::scroll::{track_scroll, AnyScrollSource};
use crate::shapes::ShapeRng;
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

/// The whole page.
///
/// Subscribes to `scroll` (the browser window by default) on mount and
/// releases the subscription when its owner is cleaned up. Only the header
/// reads the offset.
#[component]
pub fn PortfolioPage(
    #[prop(optional)]
    scroll: AnyScrollSource,
    #[prop(optional)]
    random: ShapeRng,
) -> impl IntoView {
    let offset = track_scroll(&scroll);

    view! {
        <style>{PAGE_CSS}</style>
        <div class="page">
            <Header offset=offset />
            <main>
                <Hero random=random />
                <Projects />
                <About />
                <Contact />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualScroll;
    use leptos::tachys::view::RenderHtml;

    fn render(scroll: &ManualScroll) -> String {
        view! {
            <PortfolioPage
                scroll=AnyScrollSource::new(scroll.clone())
                random=ShapeRng::new(|| 0.5)
            />
        }
        .to_html()
    }

    #[test]
    fn sections_render_in_order() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        let html = owner.with(|| render(&scroll));

        let positions: Vec<_> = [
            r#"class="site-header""#,
            r#"class="hero""#,
            r#"id="projects""#,
            r#"id="about""#,
            r#"id="contact""#,
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_new_tab_link_drops_the_opener() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        let html = owner.with(|| render(&scroll));

        // 3 hero + 2 project + 3 contact
        let new_tab = html.matches(r#"target="_blank""#).count();
        assert_eq!(new_tab, 8);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), new_tab);
    }

    #[test]
    fn each_profile_appears_in_hero_and_contact() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        let html = owner.with(|| render(&scroll));

        for profile in crate::content::PROFILES {
            let href = format!(r#"href="{}""#, profile.url);
            assert_eq!(html.matches(&href).count(), 2, "{}", profile.name);
        }
    }

    #[test]
    fn header_tint_follows_scroll() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        owner.with(|| {
            let offset = track_scroll(&scroll);
            let header = move || view! { <Header offset=offset /> }.to_html();

            assert!(header().contains("rgba(255, 182, 193, 0);"));
            scroll.scroll_to(250.0);
            assert!(header().contains("rgba(255, 182, 193, 0.5);"));
            scroll.scroll_to(1000.0);
            assert!(header().contains("rgba(255, 182, 193, 0.9);"));
        });
    }

    #[test]
    fn teardown_releases_scroll_subscription() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        let (html, offset) = owner.with(|| (render(&scroll), track_scroll(&scroll)));
        assert!(html.contains("rgba(255, 182, 193, 0);"));
        assert_eq!(scroll.listener_count(), 2);

        scroll.scroll_to(300.0);
        assert_eq!(scroll.delivered(), 2);
        let before = offset.get_untracked();
        assert_eq!(before.px(), 300.0);

        owner.cleanup();
        assert_eq!(scroll.listener_count(), 0);

        scroll.scroll_to(600.0);
        scroll.scroll_to(0.0);
        assert_eq!(scroll.delivered(), 2);
        assert!(offset.try_get_untracked().is_none_or(|after| after == before));
    }
}

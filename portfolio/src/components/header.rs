use crate::content::OWNER;
use crate::motion::Entrance;
use crate::scroll::{header_background, ScrollOffset};
use crate::types::Section;
use leptos::prelude::*;

/// Fixed top bar. Its pink tint deepens with scroll (see
/// [`header_background`]); title and nav slide in once on mount.
#[component]
pub fn Header(#[prop(into)] offset: Signal<ScrollOffset>) -> impl IntoView {
    let style = move || format!("background-color: {};", header_background(offset.get()));

    view! {
        <header class="site-header" style=style>
            <h1 class="site-title" style={Entrance::HEADER_TITLE.css()}>{OWNER}</h1>
            <nav class="site-nav">
                <ul style={Entrance::HEADER_NAV.css()}>
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! {
                            <li><a href={section.href()}>{section.label()}</a></li>
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

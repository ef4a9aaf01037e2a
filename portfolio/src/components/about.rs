use crate::content::{ABOUT_HEADING, ABOUT_PARAGRAPHS};
use crate::types::Section;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id={Section::About.anchor()} class="section section-about">
            <div class="container">
                <h2 class="section-title">{ABOUT_HEADING}</h2>
                <div class="about-body">
                    {ABOUT_PARAGRAPHS
                        .into_iter()
                        .map(|text| view! { <p class="section-text">{text}</p> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use super::SocialLinks;
use crate::content::{CONTACT_BLURB, CONTACT_HEADING};
use crate::types::{IconSize, Section};
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id={Section::Contact.anchor()} class="section section-contact">
            <div class="container">
                <h2 class="section-title">{CONTACT_HEADING}</h2>
                <div class="contact-body">
                    <p class="section-text">{CONTACT_BLURB}</p>
                    <SocialLinks size=IconSize::Large />
                </div>
            </div>
        </section>
    }
}

use crate::content::{PROJECTS, PROJECTS_HEADING, PROJECT_CTA};
use crate::motion::PressScale;
use crate::types::{ProjectCard, Section};
use leptos::prelude::*;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id={Section::Projects.anchor()} class="section section-projects">
            <div class="container">
                <h2 class="section-title">{PROJECTS_HEADING}</h2>
                <div class="project-grid">
                    {PROJECTS
                        .into_iter()
                        .map(|project| view! { <ProjectCardView project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// A single project with a call-to-action link; the whole card reacts to
/// hover and press.
#[component]
pub fn ProjectCardView(project: ProjectCard) -> impl IntoView {
    view! {
        <div class="project-card motion-press" style={PressScale::CARD.css()}>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>
            <a
                href=project.url
                target="_blank"
                rel="noopener noreferrer"
                class="project-cta"
            >
                {PROJECT_CTA}
            </a>
        </div>
    }
}

use super::SocialLinks;
use crate::content::{HERO_SUBTITLE, HERO_TITLE};
use crate::motion::Entrance;
use crate::shapes::{generate_shapes, DecorativeShape, ShapeRng};
use leptos::prelude::*;

/// Full-viewport intro with a field of drifting circles behind it.
///
/// Shapes are drawn from `random` each time the hero mounts; the default is
/// the browser's `Math.random`.
#[component]
pub fn Hero(
    #[prop(optional)]
    random: ShapeRng,
) -> impl IntoView {
    let mut random = random;
    let shapes = generate_shapes(&mut random);

    view! {
        <section class="hero">
            <div class="hero-content" style={Entrance::HERO_TEXT.css()}>
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                <SocialLinks />
            </div>
            <FloatingShapes shapes=shapes />
        </section>
    }
}

#[component]
pub fn FloatingShapes(shapes: Vec<DecorativeShape>) -> impl IntoView {
    shapes
        .into_iter()
        .map(|shape| view! { <div class="shape" aria-hidden="true" style={shape.style()}></div> })
        .collect_view()
}

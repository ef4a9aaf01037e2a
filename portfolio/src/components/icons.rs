//! Inline SVG outline icons.

use crate::types::{Glyph, IconSize};
use leptos::prelude::*;

/// Renders a stroked [`Glyph`] at the given size.
///
/// ```rust,ignore
/// view! { <Icon glyph=GLYPH_GITHUB size=IconSize::Large /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    let px = size.pixels().to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={px.clone()}
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

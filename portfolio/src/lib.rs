//! # portfolio
//!
//! Anton Osika's personal page, written as a Leptos 0.8 client-side app.
//!
//! A fixed header whose pink tint deepens as you scroll, a hero with a field
//! of drifting circles, two project cards, an about blurb and a contact row.
//! The only state is the vertical scroll offset; everything else is literal
//! content from [`content`] and animation parameters from [`motion`].
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components, one file each
//! - [`scroll`] - scroll offset signal, header tint, subscription lifetime
//! - [`shapes`] - injectable randomness and the hero's decorative shapes
//! - [`motion`] - declarative animation parameters lowered to CSS
//! - [`content`] / [`types`] - what the page says and links to
//! - [`styles`] - the stylesheet
//!
//! ## Running
//!
//! ```text
//! trunk serve --features csr
//! ```
//!
//! ---
//!
//! Built with Rust + Leptos.

pub mod components;
pub mod content;
pub mod error;
pub mod motion;
pub mod scroll;
pub mod shapes;
pub mod styles;
pub mod types;

pub use error::PageError;

use components::PortfolioPage;
use leptos::prelude::*;

/// Installs the console logger and mounts the page onto `<body>`.
///
/// Log level is `Debug` in debug builds and `Info` in release builds.
pub fn mount() -> Result<(), PageError> {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level)?;

    web_sys::window().ok_or(PageError::NoWindow)?;
    leptos::mount::mount_to_body(|| view! { <PortfolioPage /> });
    log::info!("[portfolio] mounted");
    Ok(())
}

//! Scroll tracking for the header tint.
//!
//! The page root owns a single [`ScrollOffset`] signal. It is fed by a
//! [`ScrollSource`] (the browser window in production, a manual source in
//! tests) through a [`ScrollSubscription`] that is released when the root's
//! reactive owner is cleaned up.

use crate::error::PageError;
use crate::types::Rgba;
use leptos::ev;
use leptos::prelude::*;

/// Scroll distance at which the header reaches full tint.
pub const HEADER_FADE_DISTANCE: f64 = 500.0;
/// The header never goes fully opaque.
pub const HEADER_MAX_ALPHA: f64 = 0.9;
/// Light pink, tinted by [`header_alpha`].
pub const HEADER_TINT: (u8, u8, u8) = (255, 182, 193);

/// Vertical scroll distance from the top of the page, in px. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    pub const ZERO: ScrollOffset = ScrollOffset(0.0);

    /// Overscroll bounce (negative) and garbage (NaN) readings clamp to 0.
    pub fn new(px: f64) -> Self {
        if px.is_finite() && px > 0.0 {
            ScrollOffset(px)
        } else {
            ScrollOffset::ZERO
        }
    }

    pub fn px(self) -> f64 {
        self.0
    }
}

/// `min(offset / 500, 0.9)`.
pub fn header_alpha(offset: ScrollOffset) -> f64 {
    (offset.px() / HEADER_FADE_DISTANCE).min(HEADER_MAX_ALPHA)
}

pub fn header_background(offset: ScrollOffset) -> Rgba {
    let (r, g, b) = HEADER_TINT;
    Rgba::new(r, g, b, header_alpha(offset))
}

/// Called with the raw scroll position on every scroll event.
pub type ScrollCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Anything that can report scroll positions.
pub trait ScrollSource {
    /// Starts delivering scroll events to `on_scroll` until the returned
    /// subscription is released or dropped.
    fn listen(&self, on_scroll: ScrollCallback) -> Result<ScrollSubscription, PageError>;
}

/// A live scroll listener. Releasing (explicitly or by drop) detaches it
/// exactly once.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Boxed source so components can take one as a plain prop.
pub struct AnyScrollSource(Box<dyn ScrollSource>);

impl AnyScrollSource {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Box::new(source))
    }
}

impl Default for AnyScrollSource {
    fn default() -> Self {
        Self::new(WindowScroll)
    }
}

impl ScrollSource for AnyScrollSource {
    fn listen(&self, on_scroll: ScrollCallback) -> Result<ScrollSubscription, PageError> {
        self.0.listen(on_scroll)
    }
}

/// The browser window's `scroll` event and `scrollY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl WindowScroll {
    fn read() -> Result<f64, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        Ok(window.scroll_y()?)
    }
}

impl ScrollSource for WindowScroll {
    fn listen(&self, on_scroll: ScrollCallback) -> Result<ScrollSubscription, PageError> {
        web_sys::window().ok_or(PageError::NoWindow)?;
        let handle = window_event_listener(ev::scroll, move |_| match WindowScroll::read() {
            Ok(y) => on_scroll(y),
            Err(err) => log::warn!("[scroll] skipping event: {err}"),
        });
        Ok(ScrollSubscription::new(move || handle.remove()))
    }
}

/// Creates the page's scroll offset signal, starting at 0, and keeps it in
/// sync with `source` until the current reactive owner is cleaned up.
///
/// If the source cannot be attached the offset simply stays at 0.
pub fn track_scroll(source: &dyn ScrollSource) -> ReadSignal<ScrollOffset> {
    let (offset, set_offset) = signal(ScrollOffset::ZERO);

    let subscription = source.listen(Box::new(move |y| {
        // try_set: the signal may already be disposed if the owner is mid-teardown
        let _ = set_offset.try_set(ScrollOffset::new(y));
    }));

    match subscription {
        Ok(subscription) => {
            log::debug!("[scroll] subscribed");
            on_cleanup(move || {
                subscription.release();
                log::debug!("[scroll] released");
            });
        }
        Err(err) => log::warn!("[scroll] header tint disabled: {err}"),
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualScroll;
    use pretty_assertions::assert_eq;

    #[test]
    fn alpha_follows_offset_and_clamps() {
        assert_eq!(header_alpha(ScrollOffset::new(0.0)), 0.0);
        assert_eq!(header_alpha(ScrollOffset::new(250.0)), 0.5);
        assert_eq!(header_alpha(ScrollOffset::new(450.0)), 0.9);
        assert_eq!(header_alpha(ScrollOffset::new(500.0)), 0.9);
        assert_eq!(header_alpha(ScrollOffset::new(10_000.0)), 0.9);
    }

    #[test]
    fn alpha_is_monotonic_and_bounded() {
        let mut previous = 0.0;
        for step in 0..=1200 {
            let alpha = header_alpha(ScrollOffset::new(step as f64));
            assert!(alpha >= previous);
            assert!((0.0..=HEADER_MAX_ALPHA).contains(&alpha));
            previous = alpha;
        }
    }

    #[test]
    fn negative_and_nan_offsets_clamp_to_zero() {
        assert_eq!(ScrollOffset::new(-35.0), ScrollOffset::ZERO);
        assert_eq!(ScrollOffset::new(f64::NAN), ScrollOffset::ZERO);
        assert_eq!(header_alpha(ScrollOffset::new(-35.0)), 0.0);
    }

    #[test]
    fn background_is_tinted_pink() {
        assert_eq!(
            header_background(ScrollOffset::new(250.0)).to_string(),
            "rgba(255, 182, 193, 0.5)"
        );
    }

    #[test]
    fn subscription_releases_once_on_drop_or_release() {
        let scroll = ManualScroll::default();
        let first = scroll.listen(Box::new(|_| {})).unwrap();
        let second = scroll.listen(Box::new(|_| {})).unwrap();
        assert_eq!(scroll.listener_count(), 2);

        first.release();
        assert_eq!(scroll.listener_count(), 1);
        drop(second);
        assert_eq!(scroll.listener_count(), 0);
    }

    #[test]
    fn tracked_offset_follows_scroll_events() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        let offset = owner.with(|| track_scroll(&scroll));

        assert_eq!(offset.get_untracked(), ScrollOffset::ZERO);
        assert_eq!(header_alpha(offset.get_untracked()), 0.0);

        scroll.scroll_to(250.0);
        assert_eq!(header_alpha(offset.get_untracked()), 0.5);

        scroll.scroll_to(1000.0);
        assert_eq!(header_alpha(offset.get_untracked()), 0.9);
    }

    #[test]
    fn cleanup_detaches_listener() {
        let scroll = ManualScroll::default();
        let owner = Owner::new();
        let offset = owner.with(|| track_scroll(&scroll));
        scroll.scroll_to(120.0);
        assert_eq!(scroll.listener_count(), 1);
        assert_eq!(scroll.delivered(), 1);
        let before = offset.get_untracked();
        assert_eq!(before, ScrollOffset::new(120.0));

        owner.cleanup();
        assert_eq!(scroll.listener_count(), 0);

        // nothing left to deliver to; must not panic
        scroll.scroll_to(900.0);
        assert_eq!(scroll.delivered(), 1);
        // disposed or frozen, never the post-teardown position
        assert!(offset.try_get_untracked().is_none_or(|after| after == before));
    }
}

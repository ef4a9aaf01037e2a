//! Declarative animation parameters.
//!
//! Nothing here drives frames. Each type describes an animation as data and
//! lowers it to inline CSS (custom properties plus an `animation` shorthand)
//! that the keyframes and classes in [`crate::styles::PAGE_CSS`] consume. The
//! browser's own animation scheduler does the rest.

/// One-shot fade + vertical slide played when an element first mounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Starting vertical offset in px; negative slides down into place.
    pub from_y: f64,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
}

impl Entrance {
    pub const HEADER_TITLE: Entrance = Entrance { from_y: -50.0, duration: 0.5, delay: 0.0 };
    pub const HEADER_NAV: Entrance = Entrance { from_y: -50.0, duration: 0.5, delay: 0.2 };
    pub const HERO_TEXT: Entrance = Entrance { from_y: 50.0, duration: 0.8, delay: 0.0 };

    /// `fill-mode: both` keeps the element hidden during the delay and at rest
    /// afterwards; `iteration-count: 1` means scroll never re-triggers it.
    pub fn css(&self) -> String {
        format!(
            "--enter-from-y: {}px; animation: enter {}s ease-out {}s 1 both;",
            self.from_y, self.duration, self.delay
        )
    }
}

/// Scale feedback for pointer hover and press, eased back to 1 on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressScale {
    pub hover: f64,
    pub press: f64,
}

impl PressScale {
    pub const SOCIAL: PressScale = PressScale { hover: 1.2, press: 0.9 };
    pub const CARD: PressScale = PressScale { hover: 1.05, press: 0.95 };

    /// Pairs with the `.motion-press` class.
    pub fn css(&self) -> String {
        format!("--hover-scale: {}; --press-scale: {};", self.hover, self.press)
    }
}

/// A 2D transform target: translation in px and rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

/// How often an animation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite,
}

/// Continuous motion from rest to `to` and, for ping-pong, back again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub to: Transform,
    /// Seconds per leg.
    pub duration: f64,
    pub repeat: Repeat,
    pub ping_pong: bool,
}

impl Oscillation {
    /// Forever back and forth between rest and `to`.
    pub fn ping_pong(to: Transform, duration: f64) -> Self {
        Self {
            to,
            duration,
            repeat: Repeat::Infinite,
            ping_pong: true,
        }
    }

    pub fn css(&self) -> String {
        let count = match self.repeat {
            Repeat::Once => "1",
            Repeat::Infinite => "infinite",
        };
        let direction = if self.ping_pong { "alternate" } else { "normal" };
        format!(
            "--drift-x: {}px; --drift-y: {}px; --drift-rotate: {}deg; animation: drift {}s ease-in-out 0s {} {};",
            self.to.x, self.to.y, self.to.rotate, self.duration, count, direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entrance_plays_once_with_delay() {
        assert_eq!(
            Entrance::HEADER_NAV.css(),
            "--enter-from-y: -50px; animation: enter 0.5s ease-out 0.2s 1 both;"
        );
    }

    #[test]
    fn press_scale_exposes_both_targets() {
        assert_eq!(PressScale::SOCIAL.css(), "--hover-scale: 1.2; --press-scale: 0.9;");
        assert_eq!(PressScale::CARD.css(), "--hover-scale: 1.05; --press-scale: 0.95;");
    }

    #[test]
    fn ping_pong_repeats_forever_and_alternates() {
        let osc = Oscillation::ping_pong(
            Transform {
                x: -120.0,
                y: 40.5,
                rotate: 90.0,
            },
            7.5,
        );
        assert_eq!(osc.repeat, Repeat::Infinite);
        assert_eq!(
            osc.css(),
            "--drift-x: -120px; --drift-y: 40.5px; --drift-rotate: 90deg; animation: drift 7.5s ease-in-out 0s infinite alternate;"
        );
    }

    #[test]
    fn single_run_oscillation() {
        let osc = Oscillation {
            to: Transform::default(),
            duration: 1.0,
            repeat: Repeat::Once,
            ping_pong: false,
        };
        assert!(osc.css().ends_with("animation: drift 1s ease-in-out 0s 1 normal;"));
    }
}

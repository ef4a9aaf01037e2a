//! Floating background shapes for the hero.
//!
//! Every mount of the hero draws a fresh set of [`SHAPE_COUNT`] shapes from a
//! [`RandomSource`]. Nothing is seeded or persisted; tests inject a fixed
//! sequence instead of the browser's `Math.random`.

use crate::motion::{Oscillation, Transform};
use crate::types::Rgba;

/// Shapes per hero mount.
pub const SHAPE_COUNT: usize = 20;
/// Width and height range, px.
pub const SIZE_RANGE: (f64, f64) = (20.0, 70.0);
/// Oscillation leg duration range, seconds.
pub const DURATION_RANGE: (f64, f64) = (5.0, 15.0);
/// Maximum drift from the resting position along each axis, px.
pub const MAX_DRIFT: f64 = 200.0;
pub const SHAPE_ALPHA: f64 = 0.3;

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// The browser's `Math.random`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Boxed random source so components can take one as a plain prop.
/// Defaults to [`MathRandom`].
pub struct ShapeRng(Box<dyn RandomSource>);

impl ShapeRng {
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self(Box::new(source))
    }
}

impl Default for ShapeRng {
    fn default() -> Self {
        Self::new(MathRandom)
    }
}

impl RandomSource for ShapeRng {
    fn next_unit(&mut self) -> f64 {
        self.0.next_unit()
    }
}

fn lerp((lo, hi): (f64, f64), t: f64) -> f64 {
    lo + t * (hi - lo)
}

fn channel(t: f64) -> u8 {
    (t * 255.0).clamp(0.0, 255.0) as u8
}

/// One decorative circle: where it rests, what it looks like, where it drifts.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorativeShape {
    pub width: f64,
    pub height: f64,
    pub color: Rgba,
    /// Resting position as a percentage of the hero's width.
    pub left: f64,
    /// Resting position as a percentage of the hero's height.
    pub top: f64,
    pub motion: Oscillation,
}

impl DecorativeShape {
    /// Draws eleven values: width, height, red, green, blue, left, top,
    /// drift x, drift y, rotation, duration.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let width = lerp(SIZE_RANGE, rng.next_unit());
        let height = lerp(SIZE_RANGE, rng.next_unit());
        let color = Rgba::new(
            channel(rng.next_unit()),
            channel(rng.next_unit()),
            channel(rng.next_unit()),
            SHAPE_ALPHA,
        );
        let left = rng.next_unit() * 100.0;
        let top = rng.next_unit() * 100.0;
        let to = Transform {
            x: lerp((-MAX_DRIFT, MAX_DRIFT), rng.next_unit()),
            y: lerp((-MAX_DRIFT, MAX_DRIFT), rng.next_unit()),
            rotate: rng.next_unit() * 360.0,
        };
        let duration = lerp(DURATION_RANGE, rng.next_unit());

        Self {
            width,
            height,
            color,
            left,
            top,
            motion: Oscillation::ping_pong(to, duration),
        }
    }

    /// Inline style for the shape's `div`.
    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {}px; background: {}; left: {}%; top: {}%; {}",
            self.width,
            self.height,
            self.color,
            self.left,
            self.top,
            self.motion.css()
        )
    }
}

pub fn generate_shapes(rng: &mut impl RandomSource) -> Vec<DecorativeShape> {
    let shapes: Vec<_> = (0..SHAPE_COUNT).map(|_| DecorativeShape::generate(rng)).collect();
    log::debug!("[shapes] generated {} decorative shapes", shapes.len());
    shapes
}

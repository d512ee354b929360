//! Coordinate and geometry types shared by the canvas and the compositor.
//!
//! Canonical CPU space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The camera is the only place that flips into a +Y-up, origin-centered
//! frame; see `scene::OrthographicCamera`.

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Affine2;
pub use vec2::Vec2;

//! Color model shared between the canvas rasterizer and the compositor.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - packing to/from the canvas's RGBA8 pixel store
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

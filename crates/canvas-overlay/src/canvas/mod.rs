//! CPU 2D drawing surface.
//!
//! Responsibilities:
//! - own a fixed-size premultiplied RGBA8 pixel buffer
//! - expose an immediate-mode drawing API (fills, strokes, clip, transform)
//! - keep drawing state (colors, line width, transform, clip) on the surface
//!   so it persists across scoped accesses and dies with the surface on
//!   reallocation
//!
//! Rasterization lives in `raster`; it is deliberately simple (pixel-center
//! coverage, no antialiasing).

mod raster;
mod surface;

pub use surface::Canvas;

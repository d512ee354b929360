//! GPU compositing subsystem.
//!
//! The compositor consumes `scene::OverlayFrame` borrows and issues wgpu
//! commands. It owns its GPU resources (pipeline, buffers, the overlay
//! texture) and rebuilds them lazily when the surface format or the
//! overlay's pixel dimensions change.
//!
//! Convention:
//! - plane geometry is a unit quad centered at the origin
//! - the vertex shader applies `projection × plane-scale` from a uniform

mod compositor;
mod ctx;

pub use compositor::OverlayCompositor;
pub use ctx::{RenderCtx, RenderTarget};

//! Minimal scene types consumed by output devices.
//!
//! Responsibilities:
//! - orthographic camera framing the overlay in pixel units
//! - the single screen-aligned plane the overlay texture is applied to
//! - the renderer-agnostic frame borrow handed to `OutputDevice::draw`

mod camera;
mod frame;
mod mesh;

pub use camera::OrthographicCamera;
pub use frame::OverlayFrame;
pub use mesh::{OverlayScene, PlaneMesh};

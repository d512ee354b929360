//! 2D canvas overlay for wgpu render targets.
//!
//! This crate composites an immediate-mode 2D drawing surface on top of a
//! 3D scene as a screen-aligned textured plane, framed by an orthographic
//! camera in pixel units. Typical uses are HUDs and diagnostic overlays.
//!
//! The entry point is [`overlay::OverlaySurface`], bound to an
//! [`device::OutputDevice`] (for real rendering, [`device::GpuDevice`]).

pub mod canvas;
pub mod coords;
pub mod device;
pub mod logging;
pub mod overlay;
pub mod paint;
pub mod render;
pub mod scene;

pub use canvas::Canvas;
pub use device::{DrawOutcome, GpuDevice, GpuInit, OutputDevice, SurfaceErrorAction};
pub use overlay::OverlaySurface;

//! Output-device boundary.
//!
//! This module is responsible for:
//! - the `OutputDevice` capability the overlay is bound to (size query,
//!   autoclear-color flag, scene draw)
//! - the wgpu-backed implementation: Instance/Adapter/Device/Queue creation,
//!   surface (swapchain) configuration, frame acquisition and presentation

mod gpu;
mod output;

pub use gpu::{GpuDevice, GpuInit, SurfaceErrorAction};
pub use output::{DrawOutcome, OutputDevice};

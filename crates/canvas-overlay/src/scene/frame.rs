use super::{OrthographicCamera, OverlayScene};

/// Everything an output device needs to draw one overlay frame.
///
/// This is the derived-texture seam: `pixels` is the canvas's current
/// premultiplied RGBA8 content, and `texture_dirty` tells the device whether
/// its GPU copy is stale and must be re-uploaded before sampling.
///
/// Borrowed for the duration of a single `OutputDevice::draw` call.
#[derive(Debug, Copy, Clone)]
pub struct OverlayFrame<'a> {
    pub scene: &'a OverlayScene,
    pub camera: &'a OrthographicCamera,

    /// Premultiplied RGBA8, row-major, top-left origin.
    pub pixels: &'a [u8],
    pub pixel_width: u32,
    pub pixel_height: u32,

    /// True when `pixels` changed since the device last uploaded them.
    pub texture_dirty: bool,
}

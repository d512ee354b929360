use anyhow::Result;

use crate::scene::OverlayFrame;

/// What happened to a frame handed to [`OutputDevice::draw`].
///
/// Transient surface conditions (lost/outdated/timed-out swapchains) are not
/// errors, but a skipped frame has not consumed the overlay's pixel upload —
/// callers must keep the texture marked stale until a frame is presented.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawOutcome {
    /// The frame reached the device's target; any pending upload was consumed.
    Presented,
    /// The frame was dropped (transient surface condition); retry next frame.
    Skipped,
}

/// Rendering target the overlay is bound to.
///
/// The device is externally owned and shared with the host application; the
/// overlay only requires these three capabilities:
/// - report current pixel dimensions (queried at construction and in
///   `OverlaySurface::sync_to_output_device`, never observed autonomously)
/// - a flag controlling whether color is auto-cleared before a draw
/// - draw a scene through a camera into the device's own target
///
/// `OverlaySurface::render` sets the autoclear flag to `false` and leaves it
/// that way; hosts relying on autoclear elsewhere must re-enable it
/// themselves.
pub trait OutputDevice {
    /// Current pixel dimensions of the device's drawable area.
    fn surface_size(&self) -> (u32, u32);

    /// Whether the device clears its color target before drawing.
    fn autoclear_color(&self) -> bool;

    fn set_autoclear_color(&mut self, autoclear: bool);

    /// Draws one overlay frame into the device's target.
    ///
    /// Implementations honor `autoclear_color`: when false, the frame
    /// composites over whatever was previously drawn. Returns
    /// [`DrawOutcome::Skipped`] when the frame was dropped for a transient
    /// reason and the pixel upload was not consumed.
    fn draw(&mut self, frame: &OverlayFrame<'_>) -> Result<DrawOutcome>;
}

//! The overlay surface manager.
//!
//! Binds a CPU canvas, a derived GPU texture, an orthographic camera, and a
//! one-plane scene to a shared output device, and keeps all of them
//! consistent with the device's pixel dimensions.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::canvas::Canvas;
use crate::device::{DrawOutcome, OutputDevice};
use crate::scene::{OrthographicCamera, OverlayFrame, OverlayScene};

/// Near/far planes of the overlay camera. The plane sits at `z = 0`, so any
/// small positive depth range works; these values are part of the public
/// contract.
const ORTHO_NEAR: f32 = 0.0;
const ORTHO_FAR: f32 = 50.0;

/// 2D canvas composited onto a 3D target as a screen-aligned textured plane.
///
/// The overlay owns its canvas, camera, and scene, and shares the output
/// device with the host. It never observes the device autonomously: call
/// [`sync_to_output_device`](Self::sync_to_output_device) after the device's
/// own dimensions change.
///
/// Typical frame:
///
/// ```ignore
/// overlay.clear();
/// overlay.with_context(|c| {
///     c.set_fill_color(Color::from_straight(1.0, 1.0, 1.0, 0.9));
///     c.fill_rect(Rect::new(8.0, 8.0, 120.0, 24.0));
/// });
/// overlay.render()?;
/// ```
pub struct OverlaySurface {
    device: Rc<RefCell<dyn OutputDevice>>,

    width: u32,
    height: u32,

    canvas: Canvas,
    camera: OrthographicCamera,
    scene: OverlayScene,

    /// True when the canvas pixels changed since the device last uploaded
    /// its texture copy.
    texture_dirty: bool,
}

impl OverlaySurface {
    /// Creates an overlay bound permanently to `device`.
    ///
    /// Reads the device's current pixel dimensions and establishes a
    /// consistent initial state through one [`resize`](Self::resize). Fails
    /// when the device reports a zero dimension — the one invalid-argument
    /// condition this type checks; nothing is constructed on failure.
    pub fn new(device: Rc<RefCell<dyn OutputDevice>>) -> Result<Self> {
        let (width, height) = device.borrow().surface_size();
        anyhow::ensure!(
            width > 0 && height > 0,
            "output device reports a zero-sized surface ({width}x{height})"
        );

        let mut overlay = Self {
            device,
            width,
            height,
            canvas: Canvas::new(width, height),
            camera: OrthographicCamera::new(0.0, 0.0, 0.0, 0.0, ORTHO_NEAR, ORTHO_FAR),
            scene: OverlayScene::new(),
            texture_dirty: false,
        };
        overlay.resize(width, height);
        Ok(overlay)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    // Orthographic bounds are derived from the dimensions rather than
    // stored, so they can never drift out of sync.

    #[inline]
    pub fn left(&self) -> f32 {
        self.width as f32 / -2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.width as f32 / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.height as f32 / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height as f32 / -2.0
    }

    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    pub fn scene(&self) -> &OverlayScene {
        &self.scene
    }

    /// Read-only view of the canvas. Mutation goes through
    /// [`with_context`](Self::with_context).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// True when the canvas pixels are newer than the device's texture copy.
    pub fn texture_dirty(&self) -> bool {
        self.texture_dirty
    }

    /// Sets the overlay's dimensions, for most uses the output device's.
    ///
    /// Destroys and reallocates the drawing surface: pixel contents and any
    /// drawing state (fill color, line width, transform, clip) are lost and
    /// must be re-issued by the caller. The camera bounds and the plane's
    /// scale are updated in the same call, so the next render is consistent.
    ///
    /// Callers are expected to pass positive device dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        self.scene
            .plane
            .set_scale([width as f32, height as f32, 1.0]);
        self.canvas = Canvas::new(width, height);
        self.camera
            .set_bounds(self.left(), self.right(), self.top(), self.bottom());
    }

    /// Re-reads the bound device's dimensions and resizes to match.
    ///
    /// The overlay does not watch the device; hosts call this whenever the
    /// device itself was resized.
    pub fn sync_to_output_device(&mut self) {
        let (width, height) = self.device.borrow().surface_size();
        self.resize(width, height);
    }

    /// Gives `draw` exclusive, synchronous access to the drawing context and
    /// marks the texture stale afterwards.
    ///
    /// This is the only sanctioned way to mutate the canvas. The closure
    /// runs to completion before this call returns; its return value is
    /// passed through, and panics propagate to the caller.
    pub fn with_context<R>(&mut self, draw: impl FnOnce(&mut Canvas) -> R) -> R {
        self.with_context_mark(draw, true)
    }

    /// Like [`with_context`](Self::with_context), but with explicit control
    /// over the texture-dirty flag.
    ///
    /// The flag is *assigned* `mark_texture_dirty`, so passing `false` also
    /// cancels a pending re-upload from an earlier pass.
    pub fn with_context_mark<R>(
        &mut self,
        draw: impl FnOnce(&mut Canvas) -> R,
        mark_texture_dirty: bool,
    ) -> R {
        let out = draw(&mut self.canvas);
        self.texture_dirty = mark_texture_dirty;
        out
    }

    /// Erases the drawing surface to fully transparent over the full
    /// current `width × height` rectangle.
    ///
    /// Deliberately does not mark the texture stale; a subsequent
    /// [`with_context`](Self::with_context) pass does. Clearing without
    /// drawing afterwards therefore leaves the last uploaded content on
    /// screen.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Draws the overlay into the shared output device.
    ///
    /// Side effect on shared state: disables the device's autoclear-color
    /// flag so the overlay composites on top of whatever was previously
    /// drawn instead of erasing it. The flag stays off; hosts relying on
    /// autoclear elsewhere must re-enable it themselves.
    ///
    /// A skipped frame (transient surface condition) is not an error, but it
    /// has not consumed the pixel upload: the texture stays marked stale so
    /// the next presented frame picks the content up.
    pub fn render(&mut self) -> Result<()> {
        let frame = OverlayFrame {
            scene: &self.scene,
            camera: &self.camera,
            pixels: self.canvas.pixels(),
            pixel_width: self.width,
            pixel_height: self.height,
            texture_dirty: self.texture_dirty,
        };

        let outcome = {
            let mut device = self.device.borrow_mut();
            device.set_autoclear_color(false);
            device.draw(&frame)?
        };

        if outcome == DrawOutcome::Presented {
            // Only a presented frame has consumed the upload.
            self.texture_dirty = false;
        }
        Ok(())
    }
}

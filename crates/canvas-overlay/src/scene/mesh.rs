/// Unit quad centered at the origin, scaled to the overlay's pixel size.
///
/// Geometry never changes; sizing happens entirely through `scale`, which
/// the overlay keeps at `(width, height, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMesh {
    scale: [f32; 3],
}

impl Default for PlaneMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneMesh {
    #[inline]
    pub const fn new() -> Self {
        Self { scale: [1.0, 1.0, 1.0] }
    }

    #[inline]
    pub fn scale(&self) -> [f32; 3] {
        self.scale
    }

    #[inline]
    pub fn set_scale(&mut self, scale: [f32; 3]) {
        self.scale = scale;
    }
}

/// The overlay's scene: exactly one textured plane.
///
/// Alpha blending is implied; the compositor always draws the plane with
/// premultiplied source-over blending.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OverlayScene {
    pub plane: PlaneMesh,
}

impl OverlayScene {
    #[inline]
    pub fn new() -> Self {
        Self { plane: PlaneMesh::new() }
    }
}

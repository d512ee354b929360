/// Orthographic camera in pixel units, centered on the origin, +Y up.
///
/// The overlay keeps the viewing volume spanning exactly its own pixel
/// dimensions: `left = -w/2`, `right = w/2`, `top = h/2`, `bottom = -h/2`,
/// with a fixed `[near, far]` of `[0, 50]` looking down −Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthographicCamera {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self { left, right, top, bottom, near, far }
    }

    /// Updates the four viewing-volume bounds, keeping near/far.
    #[inline]
    pub fn set_bounds(&mut self, left: f32, right: f32, top: f32, bottom: f32) {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
    }

    /// Column-major projection matrix targeting wgpu NDC (z in [0, 1]).
    ///
    /// The camera looks down −Z from the origin; a point at `z = 0` with
    /// `near = 0` lands on the NDC near plane.
    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        let rl = self.right - self.left;
        let tb = self.top - self.bottom;
        let fns = self.far - self.near;

        [
            [2.0 / rl, 0.0, 0.0, 0.0],
            [0.0, 2.0 / tb, 0.0, 0.0],
            [0.0, 0.0, -1.0 / fns, 0.0],
            [
                -(self.right + self.left) / rl,
                -(self.top + self.bottom) / tb,
                -self.near / fns,
                1.0,
            ],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(m: [[f32; 4]; 4], p: [f32; 3]) -> [f32; 3] {
        // Column-major: out = m · [p, 1].
        let mut out = [0.0f32; 3];
        for row in 0..3 {
            out[row] =
                m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row];
        }
        out
    }

    fn camera_800x600() -> OrthographicCamera {
        OrthographicCamera::new(-400.0, 400.0, 300.0, -300.0, 0.0, 50.0)
    }

    #[test]
    fn center_maps_to_ndc_origin() {
        let m = camera_800x600().projection_matrix();
        assert_eq!(project(m, [0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn top_right_corner_maps_to_ndc_one_one() {
        let m = camera_800x600().projection_matrix();
        let out = project(m, [400.0, 300.0, 0.0]);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn bottom_left_corner_maps_to_ndc_minus_one() {
        let m = camera_800x600().projection_matrix();
        let out = project(m, [-400.0, -300.0, 0.0]);
        assert_eq!(out[0], -1.0);
        assert_eq!(out[1], -1.0);
    }

    #[test]
    fn depth_range_maps_into_zero_one() {
        let m = camera_800x600().projection_matrix();
        // near plane (z = 0) → 0, far plane (z = −50) → 1.
        assert_eq!(project(m, [0.0, 0.0, 0.0])[2], 0.0);
        assert_eq!(project(m, [0.0, 0.0, -50.0])[2], 1.0);
    }

    #[test]
    fn set_bounds_keeps_depth_planes() {
        let mut cam = camera_800x600();
        cam.set_bounds(-200.0, 200.0, 150.0, -150.0);
        assert_eq!(cam.left, -200.0);
        assert_eq!(cam.near, 0.0);
        assert_eq!(cam.far, 50.0);
    }
}

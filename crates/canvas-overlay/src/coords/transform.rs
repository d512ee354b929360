use super::Vec2;

/// 2D affine transform in canvas parameter order `(a b c d e f)`:
///
/// ```text
/// x' = a·x + c·y + e
/// y' = b·x + d·y + f
/// ```
///
/// This is the drawing-context transform applied to geometry before
/// rasterization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Affine2 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, offset.x, offset.y)
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `radians`, positive rotating +X toward +Y (clockwise on
    /// screen given the +Y-down pixel frame).
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Composition: applies `self` first, then `next`.
    #[inline]
    pub fn then(self, next: Affine2) -> Affine2 {
        Affine2 {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: Vec2, want: Vec2) {
        assert!(
            (got.x - want.x).abs() < 1e-4 && (got.y - want.y).abs() < 1e-4,
            "got {got:?}, want {want:?}"
        );
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let p = Vec2::new(3.0, -7.5);
        assert_eq!(Affine2::IDENTITY.apply(p), p);
    }

    #[test]
    fn translation_offsets() {
        let t = Affine2::translation(Vec2::new(10.0, 20.0));
        assert_eq!(t.apply(Vec2::new(1.0, 2.0)), Vec2::new(11.0, 22.0));
    }

    #[test]
    fn scaling_scales_about_origin() {
        let s = Affine2::scaling(2.0, 3.0);
        assert_eq!(s.apply(Vec2::new(4.0, 5.0)), Vec2::new(8.0, 15.0));
    }

    #[test]
    fn quarter_turn_rotation() {
        let r = Affine2::rotation(std::f32::consts::FRAC_PI_2);
        // +X maps to +Y in the +Y-down frame.
        assert_close(r.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn then_applies_in_order() {
        // Scale, then translate: p = (1, 1) → (2, 2) → (12, 2).
        let t = Affine2::scaling(2.0, 2.0).then(Affine2::translation(Vec2::new(10.0, 0.0)));
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn then_is_not_commutative() {
        // Translate, then scale: p = (1, 1) → (11, 1) → (22, 2).
        let t = Affine2::translation(Vec2::new(10.0, 0.0)).then(Affine2::scaling(2.0, 2.0));
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(22.0, 2.0));
    }
}

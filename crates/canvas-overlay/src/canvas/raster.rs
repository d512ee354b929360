//! Convex-polygon rasterization over a premultiplied RGBA8 buffer.
//!
//! Coverage model: a pixel is covered when its center lies inside the
//! polygon (half-plane test against every edge, winding-corrected). No
//! antialiasing. An optional device-space clip rect bounds the walk.

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Fills `poly` with `color`, blending src-over in premultiplied space.
pub(super) fn fill_convex(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    poly: &[Vec2],
    color: Color,
    clip: Option<Rect>,
) {
    let src = color.to_rgba8_premul();
    if src[3] == 0 && src[0] == 0 && src[1] == 0 && src[2] == 0 {
        return;
    }
    for_each_covered(pixels, width, height, poly, clip, |px| blend_over(px, src));
}

/// Writes fully transparent pixels over the covered region of `poly`.
pub(super) fn clear_convex(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    poly: &[Vec2],
    clip: Option<Rect>,
) {
    for_each_covered(pixels, width, height, poly, clip, |px| *px = [0; 4]);
}

/// Source-over in premultiplied space: `dst = src + dst·(1 − src.a)`.
#[inline]
fn blend_over(dst: &mut [u8; 4], src: [u8; 4]) {
    if src[3] == 255 {
        *dst = src;
        return;
    }
    let inv = 255 - src[3] as u32;
    for i in 0..4 {
        let d = dst[i] as u32;
        dst[i] = (src[i] as u32 + (d * inv + 127) / 255).min(255) as u8;
    }
}

/// Walks every pixel whose center is covered by the convex polygon,
/// restricted to the surface bounds and the optional clip rect.
fn for_each_covered(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    poly: &[Vec2],
    clip: Option<Rect>,
    mut f: impl FnMut(&mut [u8; 4]),
) {
    if poly.len() < 3 || !poly.iter().all(|p| p.is_finite()) {
        return;
    }

    // Winding sign: twice the signed area. Degenerate polygons cover nothing.
    let mut area2 = 0.0f32;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        area2 += p.x * q.y - q.x * p.y;
    }
    if area2 == 0.0 {
        return;
    }
    let sign = if area2 > 0.0 { 1.0 } else { -1.0 };

    // Bounding box, clamped to the surface and the clip rect.
    let mut min = poly[0];
    let mut max = poly[0];
    for p in &poly[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    if let Some(c) = clip {
        let c = c.normalized();
        min.x = min.x.max(c.origin.x);
        min.y = min.y.max(c.origin.y);
        max.x = max.x.min(c.origin.x + c.size.x);
        max.y = max.y.min(c.origin.y + c.size.y);
    }

    let x0 = (min.x.floor().max(0.0) as u32).min(width);
    let y0 = (min.y.floor().max(0.0) as u32).min(height);
    let x1 = (max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (max.y.ceil().max(0.0) as u32).min(height);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        let cy = y as f32 + 0.5;
        let row = y as usize * width as usize * 4;
        for x in x0..x1 {
            let cx = x as f32 + 0.5;

            let mut inside = true;
            for i in 0..poly.len() {
                let p = poly[i];
                let q = poly[(i + 1) % poly.len()];
                let cross = (q.x - p.x) * (cy - p.y) - (q.y - p.y) * (cx - p.x);
                if cross * sign < 0.0 {
                    inside = false;
                    break;
                }
            }
            if !inside {
                continue;
            }

            let off = row + x as usize * 4;
            let px: &mut [u8; 4] = (&mut pixels[off..off + 4])
                .try_into()
                .expect("pixel slice is 4 bytes by construction");
            f(px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(w: u32, h: u32) -> Vec<u8> {
        vec![0; (w * h * 4) as usize]
    }

    fn px(pixels: &[u8], w: u32, x: u32, y: u32) -> [u8; 4] {
        let off = ((y * w + x) * 4) as usize;
        [pixels[off], pixels[off + 1], pixels[off + 2], pixels[off + 3]]
    }

    fn quad(x: f32, y: f32, w: f32, h: f32) -> [Vec2; 4] {
        Rect::new(x, y, w, h).corners()
    }

    const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[test]
    fn fills_interior_not_exterior() {
        let mut p = buf(8, 8);
        fill_convex(&mut p, 8, 8, &quad(2.0, 2.0, 4.0, 4.0), WHITE, None);
        assert_eq!(px(&p, 8, 3, 3), [255, 255, 255, 255]);
        assert_eq!(px(&p, 8, 1, 3), [0, 0, 0, 0]);
        assert_eq!(px(&p, 8, 6, 6), [0, 0, 0, 0]);
    }

    #[test]
    fn winding_order_does_not_matter() {
        let mut cw = buf(4, 4);
        let mut ccw = buf(4, 4);
        let c = quad(0.0, 0.0, 4.0, 4.0);
        let reversed = [c[3], c[2], c[1], c[0]];
        fill_convex(&mut cw, 4, 4, &c, WHITE, None);
        fill_convex(&mut ccw, 4, 4, &reversed, WHITE, None);
        assert_eq!(cw, ccw);
        assert_eq!(px(&cw, 4, 2, 2), [255, 255, 255, 255]);
    }

    #[test]
    fn clip_restricts_coverage() {
        let mut p = buf(8, 8);
        fill_convex(
            &mut p,
            8,
            8,
            &quad(0.0, 0.0, 8.0, 8.0),
            WHITE,
            Some(Rect::new(0.0, 0.0, 4.0, 8.0)),
        );
        assert_eq!(px(&p, 8, 3, 3), [255, 255, 255, 255]);
        assert_eq!(px(&p, 8, 4, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_geometry_is_clamped() {
        let mut p = buf(4, 4);
        fill_convex(&mut p, 4, 4, &quad(-10.0, -10.0, 100.0, 100.0), WHITE, None);
        assert_eq!(px(&p, 4, 0, 0), [255, 255, 255, 255]);
        assert_eq!(px(&p, 4, 3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn degenerate_polygon_covers_nothing() {
        let mut p = buf(4, 4);
        let line = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(2.0, 0.0)];
        fill_convex(&mut p, 4, 4, &line, WHITE, None);
        assert!(p.iter().all(|&b| b == 0));
    }

    #[test]
    fn blend_half_alpha_over_opaque() {
        let mut p = buf(1, 1);
        fill_convex(&mut p, 1, 1, &quad(0.0, 0.0, 1.0, 1.0), WHITE, None);
        let half_red = Color::from_straight(1.0, 0.0, 0.0, 0.5);
        fill_convex(&mut p, 1, 1, &quad(0.0, 0.0, 1.0, 1.0), half_red, None);

        let got = px(&p, 1, 0, 0);
        // dst = src + dst·(1 − 0.5): red saturates, green/blue halve, alpha stays 1.
        assert_eq!(got[3], 255);
        assert!(got[0] > 250);
        assert!((got[1] as i32 - 128).abs() <= 1);
        assert!((got[2] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn clear_convex_writes_transparent() {
        let mut p = buf(4, 4);
        fill_convex(&mut p, 4, 4, &quad(0.0, 0.0, 4.0, 4.0), WHITE, None);
        clear_convex(&mut p, 4, 4, &quad(1.0, 1.0, 2.0, 2.0), None);
        assert_eq!(px(&p, 4, 1, 1), [0, 0, 0, 0]);
        assert_eq!(px(&p, 4, 0, 0), [255, 255, 255, 255]);
    }
}

use crate::coords::{Affine2, Rect, Vec2};
use crate::paint::Color;

use super::raster;

/// Immediate-mode drawing state.
///
/// Lives on the canvas (not on a scoped context handle) so that state set in
/// one drawing pass carries into the next, and is discarded wholesale when
/// the canvas is reallocated.
#[derive(Debug, Clone)]
struct DrawState {
    fill: Color,
    stroke: Color,
    line_width: f32,
    transform: Affine2,
    /// Device-space clip, fixed at the moment `clip_rect` is called.
    clip: Option<Rect>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Color::from_straight(0.0, 0.0, 0.0, 1.0),
            stroke: Color::from_straight(0.0, 0.0, 0.0, 1.0),
            line_width: 1.0,
            transform: Affine2::IDENTITY,
            clip: None,
        }
    }
}

/// Owned 2D raster surface plus its drawing context.
///
/// The pixel store is premultiplied RGBA8, row-major, top-left origin,
/// exactly `width × height` pixels. All drawing operations go through the
/// current transform and clip and blend src-over.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl Canvas {
    /// Allocates a transparent canvas with default drawing state.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
            state: DrawState::default(),
            saved: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied RGBA8 pixel data, row-major from the top-left.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads one pixel. Out-of-bounds coordinates read as transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::transparent();
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        Color::from_rgba8_premul([
            self.pixels[off],
            self.pixels[off + 1],
            self.pixels[off + 2],
            self.pixels[off + 3],
        ])
    }

    // ── drawing state ─────────────────────────────────────────────────────

    pub fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width.max(0.0);
    }

    /// Replaces the current transform.
    pub fn set_transform(&mut self, transform: Affine2) {
        self.state.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.state.transform = Affine2::IDENTITY;
    }

    /// Concatenates `t` onto the current transform; `t` applies to geometry
    /// first, in user space.
    pub fn transform(&mut self, t: Affine2) {
        self.state.transform = t.then(self.state.transform);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.transform(Affine2::translation(offset));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform(Affine2::scaling(sx, sy));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.transform(Affine2::rotation(radians));
    }

    /// Intersects the clip with `rect` (given in user space, converted to its
    /// device-space bounding box at call time). Only `save`/`restore` widens
    /// the clip again.
    pub fn clip_rect(&mut self, rect: Rect) {
        let device = self.user_bbox(rect);
        self.state.clip = match self.state.clip {
            None => Some(device),
            Some(existing) => Some(
                existing
                    .intersect(device)
                    .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
            ),
        };
    }

    pub fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    /// Restores the most recently saved state; no-op on an empty stack.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    // ── drawing operations ────────────────────────────────────────────────

    /// Erases the entire surface to transparent.
    ///
    /// Ignores transform and clip: the full `width × height` rectangle is
    /// cleared. Drawing state is untouched.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Writes transparent pixels over `rect`, subject to transform and clip.
    pub fn clear_rect(&mut self, rect: Rect) {
        let poly = self.user_quad(rect);
        raster::clear_convex(&mut self.pixels, self.width, self.height, &poly, self.state.clip);
    }

    /// Fills `rect` with the current fill color.
    pub fn fill_rect(&mut self, rect: Rect) {
        let poly = self.user_quad(rect);
        raster::fill_convex(
            &mut self.pixels,
            self.width,
            self.height,
            &poly,
            self.state.fill,
            self.state.clip,
        );
    }

    /// Strokes the outline of `rect` with the current stroke color and line
    /// width, centered on the rectangle's edges.
    pub fn stroke_rect(&mut self, rect: Rect) {
        let half = self.state.line_width * 0.5;
        if half <= 0.0 {
            return;
        }

        let r = rect.normalized();
        let outer = r.inflate(half);
        let inner = r.inflate(-half);

        if inner.is_empty() {
            // Stroke fully covers the interior.
            self.fill_with_stroke_color(outer);
            return;
        }

        // Four non-overlapping bands so translucent strokes do not double-blend.
        let inner_max = inner.max();
        let top = Rect::new(outer.origin.x, outer.origin.y, outer.size.x, half * 2.0);
        let bottom = Rect::new(outer.origin.x, inner_max.y, outer.size.x, half * 2.0);
        let left = Rect::new(outer.origin.x, inner.origin.y, half * 2.0, inner.size.y);
        let right = Rect::new(inner_max.x, inner.origin.y, half * 2.0, inner.size.y);

        for band in [top, bottom, left, right] {
            self.fill_with_stroke_color(band);
        }
    }

    /// Strokes a straight segment with the current stroke color and line
    /// width. Butt caps; zero-length segments draw nothing.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        let dir = to - from;
        let len = dir.length();
        let half = self.state.line_width * 0.5;
        if len <= 0.0 || half <= 0.0 {
            return;
        }

        let n = dir.perp() / len * half;
        let quad = [from + n, to + n, to - n, from - n];
        let poly = quad.map(|p| self.state.transform.apply(p));
        raster::fill_convex(
            &mut self.pixels,
            self.width,
            self.height,
            &poly,
            self.state.stroke,
            self.state.clip,
        );
    }

    /// Fills a convex polygon given in user space with the current fill
    /// color. Concave input produces an unspecified covered region.
    pub fn fill_convex_polygon(&mut self, points: &[Vec2]) {
        let poly: Vec<Vec2> = points.iter().map(|&p| self.state.transform.apply(p)).collect();
        raster::fill_convex(
            &mut self.pixels,
            self.width,
            self.height,
            &poly,
            self.state.fill,
            self.state.clip,
        );
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn fill_with_stroke_color(&mut self, rect: Rect) {
        let poly = self.user_quad(rect);
        raster::fill_convex(
            &mut self.pixels,
            self.width,
            self.height,
            &poly,
            self.state.stroke,
            self.state.clip,
        );
    }

    /// Rect corners through the current transform.
    fn user_quad(&self, rect: Rect) -> [Vec2; 4] {
        rect.normalized()
            .corners()
            .map(|p| self.state.transform.apply(p))
    }

    /// Device-space bounding box of a user-space rect.
    fn user_bbox(&self, rect: Rect) -> Rect {
        let quad = self.user_quad(rect);
        let mut min = quad[0];
        let mut max = quad[0];
        for p in &quad[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::from_origin_size(min, max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);

    fn alpha_at(c: &Canvas, x: u32, y: u32) -> f32 {
        c.pixel(x, y).a
    }

    // ── allocation / readback ─────────────────────────────────────────────

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(16, 8);
        assert_eq!(c.width(), 16);
        assert_eq!(c.height(), 8);
        assert_eq!(c.pixels().len(), 16 * 8 * 4);
        assert!(c.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn out_of_bounds_pixel_reads_transparent() {
        let c = Canvas::new(4, 4);
        assert_eq!(c.pixel(100, 100), Color::transparent());
    }

    // ── fill / clear ──────────────────────────────────────────────────────

    #[test]
    fn fill_rect_sets_pixels() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(RED);
        c.fill_rect(Rect::new(2.0, 2.0, 3.0, 3.0));
        assert_eq!(c.pixel(3, 3), RED);
        assert_eq!(c.pixel(0, 0), Color::transparent());
        assert_eq!(c.pixel(5, 3), Color::transparent());
    }

    #[test]
    fn clear_erases_everything_but_keeps_state() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(RED);
        c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        c.clear();
        assert!(c.pixels().iter().all(|&b| b == 0));

        // State survives clear; the next fill still uses red.
        c.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(c.pixel(0, 0), RED);
    }

    #[test]
    fn clear_rect_is_transform_aware() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        c.translate(Vec2::new(4.0, 0.0));
        c.clear_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(alpha_at(&c, 4, 0), 0.0);
        assert_eq!(alpha_at(&c, 0, 0), 1.0);
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn translate_moves_fill() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.translate(Vec2::new(4.0, 4.0));
        c.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(alpha_at(&c, 5, 5), 1.0);
        assert_eq!(alpha_at(&c, 1, 1), 0.0);
    }

    #[test]
    fn scale_grows_fill() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.scale(4.0, 4.0);
        c.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(alpha_at(&c, 7, 7), 1.0);
    }

    #[test]
    fn reset_transform_restores_identity() {
        let mut c = Canvas::new(8, 8);
        c.translate(Vec2::new(100.0, 100.0));
        c.reset_transform();
        c.set_fill_color(WHITE);
        c.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(alpha_at(&c, 0, 0), 1.0);
    }

    // ── clip ──────────────────────────────────────────────────────────────

    #[test]
    fn clip_limits_fills() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.clip_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(alpha_at(&c, 3, 3), 1.0);
        assert_eq!(alpha_at(&c, 4, 4), 0.0);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.clip_rect(Rect::new(0.0, 0.0, 4.0, 8.0));
        c.clip_rect(Rect::new(0.0, 0.0, 8.0, 4.0));
        c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(alpha_at(&c, 3, 3), 1.0);
        assert_eq!(alpha_at(&c, 3, 4), 0.0);
        assert_eq!(alpha_at(&c, 4, 3), 0.0);
    }

    #[test]
    fn disjoint_clips_draw_nothing() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.clip_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        c.clip_rect(Rect::new(6.0, 6.0, 2.0, 2.0));
        c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        assert!(c.pixels().iter().all(|&b| b == 0));
    }

    // ── save / restore ────────────────────────────────────────────────────

    #[test]
    fn restore_pops_clip_and_colors() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(RED);
        c.save();
        c.set_fill_color(WHITE);
        c.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        c.restore();

        c.fill_rect(Rect::new(4.0, 4.0, 1.0, 1.0));
        assert_eq!(c.pixel(4, 4), RED);
    }

    #[test]
    fn restore_on_empty_stack_is_noop() {
        let mut c = Canvas::new(2, 2);
        c.restore();
        c.set_fill_color(WHITE);
        c.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(alpha_at(&c, 1, 1), 1.0);
    }

    // ── strokes ───────────────────────────────────────────────────────────

    #[test]
    fn stroke_line_covers_width() {
        let mut c = Canvas::new(8, 8);
        c.set_stroke_color(WHITE);
        c.set_line_width(2.0);
        c.stroke_line(Vec2::new(0.0, 4.0), Vec2::new(8.0, 4.0));
        // Band spans y in [3, 5).
        assert_eq!(alpha_at(&c, 4, 3), 1.0);
        assert_eq!(alpha_at(&c, 4, 4), 1.0);
        assert_eq!(alpha_at(&c, 4, 1), 0.0);
        assert_eq!(alpha_at(&c, 4, 6), 0.0);
    }

    #[test]
    fn zero_length_line_draws_nothing() {
        let mut c = Canvas::new(4, 4);
        c.set_stroke_color(WHITE);
        c.stroke_line(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert!(c.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn stroke_rect_outlines_without_filling() {
        let mut c = Canvas::new(16, 16);
        c.set_stroke_color(WHITE);
        c.set_line_width(2.0);
        c.stroke_rect(Rect::new(4.0, 4.0, 8.0, 8.0));
        // On the edge.
        assert_eq!(alpha_at(&c, 8, 4), 1.0);
        assert_eq!(alpha_at(&c, 4, 8), 1.0);
        // Interior stays empty.
        assert_eq!(alpha_at(&c, 8, 8), 0.0);
        // Well outside.
        assert_eq!(alpha_at(&c, 0, 0), 0.0);
    }

    #[test]
    fn translucent_stroke_rect_does_not_double_blend_corners() {
        let mut c = Canvas::new(16, 16);
        c.set_stroke_color(Color::from_straight(1.0, 1.0, 1.0, 0.5));
        c.set_line_width(4.0);
        c.stroke_rect(Rect::new(4.0, 4.0, 8.0, 8.0));
        // Corner pixel covered exactly once: alpha stays at 0.5.
        let corner = c.pixel(3, 3);
        assert!((corner.a - 0.5).abs() < 0.01, "corner alpha {}", corner.a);
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn fill_convex_polygon_triangle() {
        let mut c = Canvas::new(8, 8);
        c.set_fill_color(WHITE);
        c.fill_convex_polygon(&[
            Vec2::new(0.0, 8.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(8.0, 8.0),
        ]);
        assert_eq!(alpha_at(&c, 4, 6), 1.0);
        assert_eq!(alpha_at(&c, 0, 0), 0.0);
        assert_eq!(alpha_at(&c, 7, 0), 0.0);
    }
}

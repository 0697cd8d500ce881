use image::{Rgba, RgbaImage};
use pfx_core::{BlendMode, Rgb};

/// RGBA float canvas with premultiplied alpha.
///
/// Coverage is sampled once at each pixel center, so edges are hard.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    blend: BlendMode,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
            blend: BlendMode::Normal,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    /// Compositing mode for subsequent draws
    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    fn composite(&mut self, px: u32, py: u32, src: [f32; 4]) {
        let idx = py as usize * self.width as usize + px as usize;
        let dst = &mut self.pixels[idx];
        match self.blend {
            BlendMode::Normal => {
                let keep = 1.0 - src[3];
                for c in 0..4 {
                    dst[c] = src[c] + dst[c] * keep;
                }
            }
            BlendMode::Additive => {
                for c in 0..4 {
                    dst[c] = (src[c] + dst[c]).min(1.0);
                }
            }
        }
    }

    /// Composite `color` at `alpha` onto every pixel whose center satisfies `inside`
    fn fill_where(
        &mut self,
        bounds: [f64; 4],
        color: Rgb,
        alpha: f64,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        let alpha = alpha.clamp(0.0, 1.0) as f32;
        if alpha <= 0.0 {
            return;
        }
        let [r, g, b] = color.to_unit();
        let src = [r * alpha, g * alpha, b * alpha, alpha];

        let [min_x, min_y, max_x, max_y] = bounds;
        let Some((x0, x1)) = pixel_span(min_x, max_x, self.width) else { return };
        let Some((y0, y1)) = pixel_span(min_y, max_y, self.height) else { return };

        for py in y0..=y1 {
            let cy = py as f64 + 0.5;
            for px in x0..=x1 {
                let cx = px as f64 + 0.5;
                if inside(cx, cy) {
                    self.composite(px, py, src);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        if !(radius > 0.0) {
            return;
        }
        let r2 = radius * radius;
        let bounds = [cx - radius, cy - radius, cx + radius, cy + radius];
        self.fill_where(bounds, color, alpha, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r2
        });
    }

    /// Fill a closed polygon using the nonzero winding rule
    pub fn fill_polygon(&mut self, points: &[[f64; 2]], color: Rgb, alpha: f64) {
        if points.len() < 3 {
            return;
        }
        let bounds = points.iter().fold(
            [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY],
            |[a, b, c, d], [x, y]| [a.min(*x), b.min(*y), c.max(*x), d.max(*y)],
        );
        self.fill_where(bounds, color, alpha, |x, y| winding_number(points, x, y) != 0);
    }

    /// Ring of `width` centered on the circle of `radius`
    pub fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Rgb, alpha: f64) {
        let half = width / 2.0;
        let outer = radius + half;
        let bounds = [cx - outer, cy - outer, cx + outer, cy + outer];
        self.fill_where(bounds, color, alpha, |x, y| {
            ((x - cx).hypot(y - cy) - radius).abs() <= half
        });
    }

    /// Butt-capped line from `a` to `b`
    pub fn stroke_segment(&mut self, a: [f64; 2], b: [f64; 2], width: f64, color: Rgb, alpha: f64) {
        let half = width / 2.0;
        let bounds = [
            a[0].min(b[0]) - half,
            a[1].min(b[1]) - half,
            a[0].max(b[0]) + half,
            a[1].max(b[1]) + half,
        ];
        let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
        let len2 = dx * dx + dy * dy;
        if len2 <= 0.0 {
            return;
        }
        self.fill_where(bounds, color, alpha, |x, y| {
            let t = ((x - a[0]) * dx + (y - a[1]) * dy) / len2;
            if !(0.0..=1.0).contains(&t) {
                return false;
            }
            let (nx, ny) = (a[0] + dx * t, a[1] + dy * t);
            (x - nx).hypot(y - ny) <= half
        });
    }

    /// Straight-alpha 8-bit RGBA at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().map(to_straight_rgba8)
    }

    /// Row-major straight-alpha RGBA bytes
    pub fn to_rgba8(&self) -> Vec<u8> {
        let texels: Vec<[u8; 4]> = self.pixels.iter().copied().map(to_straight_rgba8).collect();
        bytemuck::cast_slice(&texels).to_vec()
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(to_straight_rgba8(self.pixels[y as usize * self.width as usize + x as usize]))
        })
    }
}

fn to_straight_rgba8(p: [f32; 4]) -> [u8; 4] {
    let a = p[3];
    if a <= 0.0 {
        return [0; 4];
    }
    let q = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    [q(p[0] / a), q(p[1] / a), q(p[2] / a), q(a)]
}

/// Pixel indices whose centers may fall inside `[lo, hi]`, clipped to `0..size`
fn pixel_span(lo: f64, hi: f64, size: u32) -> Option<(u32, u32)> {
    if !(lo.is_finite() && hi.is_finite()) || size == 0 {
        return None;
    }
    let first = (lo - 0.5).ceil().max(0.0);
    let last = (hi - 0.5).floor().min(size as f64 - 1.0);
    (first <= last).then(|| (first as u32, last as u32))
}

fn winding_number(points: &[[f64; 2]], x: f64, y: f64) -> i32 {
    let mut winding = 0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let cross = (b[0] - a[0]) * (y - a[1]) - (x - a[0]) * (b[1] - a[1]);
        if a[1] <= y {
            if b[1] > y && cross > 0.0 {
                winding += 1;
            }
        } else if b[1] <= y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding
}

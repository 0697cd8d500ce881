use pfx_core::{EffectConfig, EmitterType, GIZMO_MARKER_RADIUS, Particle, Rgb, TrailDecal};

use crate::canvas::Canvas;
use crate::shapes::ShapePath;

const GIZMO_COLOR: Rgb = Rgb::GREEN;
const GIZMO_MARKER_ALPHA: f64 = 0.5;
const GIZMO_MARKER_WIDTH: f64 = 2.0;
const GIZMO_EXTENT_ALPHA: f64 = 0.2;
const GIZMO_EXTENT_WIDTH: f64 = 1.5;

/// Draw one frame: clear, pick the blend mode, decals (when trails are on),
/// then particles in spawn order, and optionally the emitter gizmo on top.
pub fn render_frame(
    canvas: &mut Canvas,
    decals: &[TrailDecal],
    particles: &[Particle],
    config: &EffectConfig,
    show_gizmo: bool,
) {
    canvas.clear();
    canvas.set_blend(config.blend);

    if config.trail {
        for d in decals {
            canvas.fill_circle(d.x, d.y, d.size, d.color, d.alpha);
        }
    }

    for p in particles {
        draw_particle(canvas, p);
    }

    if show_gizmo {
        draw_gizmo(canvas, config);
    }
}

pub fn draw_particle(canvas: &mut Canvas, p: &Particle) {
    match ShapePath::local(p.shape, p.current_size).placed(p.x, p.y, p.rotation) {
        ShapePath::Circle { center: [x, y], radius } => {
            canvas.fill_circle(x, y, radius, p.color, p.alpha)
        }
        ShapePath::Polygon(points) => canvas.fill_polygon(&points, p.color, p.alpha),
    }
}

/// Emitter origin marker plus the outline of the spawn region.
/// Point emitters have no extent; neither does a zero radius.
pub fn draw_gizmo(canvas: &mut Canvas, config: &EffectConfig) {
    let (cx, cy) = (config.emit_x, config.emit_y);
    canvas.stroke_circle(
        cx,
        cy,
        GIZMO_MARKER_RADIUS,
        GIZMO_MARKER_WIDTH,
        GIZMO_COLOR,
        GIZMO_MARKER_ALPHA,
    );

    if config.radius <= 0.0 {
        return;
    }
    match config.emitter_type {
        EmitterType::Circle | EmitterType::Area => canvas.stroke_circle(
            cx,
            cy,
            config.radius,
            GIZMO_EXTENT_WIDTH,
            GIZMO_COLOR,
            GIZMO_EXTENT_ALPHA,
        ),
        EmitterType::Line => {
            let (sin, cos) = config.rotation_radians().sin_cos();
            let (dx, dy) = (cos * config.radius, sin * config.radius);
            canvas.stroke_segment(
                [cx - dx, cy - dy],
                [cx + dx, cy + dy],
                GIZMO_EXTENT_WIDTH,
                GIZMO_COLOR,
                GIZMO_EXTENT_ALPHA,
            );
        }
        EmitterType::Point => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfx_core::{BlendMode, CANVAS_SIZE, Shape};

    fn particle(shape: Shape, x: f64, y: f64, size: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            life: 1.0,
            max_life: 1.0,
            size,
            current_size: size,
            color_start: Rgb::RED,
            color_end: Rgb::RED,
            color: Rgb::RED,
            alpha: 1.0,
            shape,
            rotation: 0.0,
            angular_velocity: 0.0,
        }
    }

    fn normal() -> EffectConfig {
        EffectConfig {
            blend: BlendMode::Normal,
            ..EffectConfig::default()
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(CANVAS_SIZE, CANVAS_SIZE)
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut c = canvas();
        render_frame(&mut c, &[], &[particle(Shape::Circle, 100.0, 100.0, 5.0)], &normal(), false);
        assert_eq!(c.pixel(100, 100).unwrap(), [255, 0, 0, 255]);
        render_frame(&mut c, &[], &[], &normal(), false);
        assert_eq!(c.pixel(100, 100).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rotated_square_covers_its_diagonal() {
        let mut c = canvas();
        let mut p = particle(Shape::Square, 50.0, 50.0, 4.0);
        p.rotation = std::f64::consts::FRAC_PI_4;
        render_frame(&mut c, &[], &[p], &normal(), false);
        // corner now points along +x, about 5.66 px out
        assert_eq!(c.pixel(54, 49).unwrap()[3], 255);
        // the unrotated corner region is empty
        assert_eq!(c.pixel(53, 53).unwrap()[3], 0);
    }

    #[test]
    fn test_triangle_apex_up() {
        let mut c = canvas();
        render_frame(&mut c, &[], &[particle(Shape::Triangle, 50.0, 50.0, 10.0)], &normal(), false);
        assert_eq!(c.pixel(49, 42).unwrap()[3], 255);
        assert_eq!(c.pixel(42, 42).unwrap()[3], 0);
        assert_eq!(c.pixel(42, 58).unwrap()[3], 255);
    }

    #[test]
    fn test_star_has_notches() {
        let mut c = canvas();
        render_frame(&mut c, &[], &[particle(Shape::Star, 100.0, 100.0, 20.0)], &normal(), false);
        // outer spike along +x
        assert_eq!(c.pixel(117, 99).unwrap()[3], 255);
        // between spikes at 18 degrees the star edge is well inside 20 px
        let (sin, cos) = 18f64.to_radians().sin_cos();
        let (x, y) = (100.0 + cos * 17.0, 100.0 + sin * 17.0);
        assert_eq!(c.pixel(x as u32, y as u32).unwrap()[3], 0);
        assert_eq!(c.pixel(100, 100).unwrap()[3], 255);
    }

    #[test]
    fn test_decals_need_trails() {
        let decal = TrailDecal {
            x: 30.0,
            y: 30.0,
            color: Rgb::WHITE,
            alpha: 1.0,
            size: 3.0,
            life: 0.1,
        };
        let mut c = canvas();
        render_frame(&mut c, std::slice::from_ref(&decal), &[], &normal(), false);
        assert_eq!(c.pixel(30, 30).unwrap()[3], 0);

        let trail = EffectConfig { trail: true, ..normal() };
        render_frame(&mut c, &[decal], &[], &trail, false);
        assert_eq!(c.pixel(30, 30).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_particles_paint_in_spawn_order() {
        let mut c = canvas();
        let mut top = particle(Shape::Square, 20.0, 20.0, 5.0);
        top.color = Rgb::GREEN;
        render_frame(&mut c, &[], &[particle(Shape::Square, 20.0, 20.0, 5.0), top], &normal(), false);
        assert_eq!(c.pixel(20, 20).unwrap(), [0, 255, 0, 255]);
    }

    #[test]
    fn test_gizmo_marker_and_extent() {
        let mut c = canvas();
        let config = EffectConfig {
            emitter_type: EmitterType::Circle,
            radius: 100.0,
            ..normal()
        };
        render_frame(&mut c, &[], &[], &config, true);
        assert_eq!(c.pixel(264, 256).unwrap(), [0, 255, 0, 128]);
        assert_eq!(c.pixel(355, 256).unwrap(), [0, 255, 0, 51]);
        assert_eq!(c.pixel(256, 256).unwrap()[3], 0);

        render_frame(&mut c, &[], &[], &config, false);
        assert_eq!(c.pixel(264, 256).unwrap()[3], 0);
    }

    #[test]
    fn test_line_gizmo_follows_rotation() {
        let mut c = canvas();
        let config = EffectConfig {
            emitter_type: EmitterType::Line,
            radius: 100.0,
            rotation: 90.0,
            ..normal()
        };
        render_frame(&mut c, &[], &[], &config, true);
        assert_eq!(c.pixel(256, 330).unwrap()[3], 51);
        assert_eq!(c.pixel(330, 256).unwrap()[3], 0);
    }
}

use std::f64::consts::PI;

use pfx_core::{STAR_INNER_RATIO, STAR_SPIKES, Shape};

/// Outline of a particle shape in particle-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePath {
    Circle { center: [f64; 2], radius: f64 },
    Polygon(Vec<[f64; 2]>),
}

impl ShapePath {
    /// Local outline for `shape` at half-extent `size`
    pub fn local(shape: Shape, size: f64) -> Self {
        match shape {
            Shape::Circle => Self::Circle { center: [0.0, 0.0], radius: size },
            Shape::Square => Self::Polygon(vec![[-size, -size], [size, -size], [size, size], [-size, size]]),
            Shape::Triangle => Self::Polygon(vec![[0.0, -size], [size, size], [-size, size]]),
            Shape::Star => Self::Polygon(
                (0..STAR_SPIKES * 2)
                    .map(|i| {
                        let r = if i % 2 == 0 { size } else { size * STAR_INNER_RATIO };
                        let angle = PI / STAR_SPIKES as f64 * i as f64;
                        [angle.cos() * r, angle.sin() * r]
                    })
                    .collect(),
            ),
        }
    }

    /// Rotate by `rotation` radians about the local origin, then move to `(x, y)`
    pub fn placed(self, x: f64, y: f64, rotation: f64) -> Self {
        match self {
            Self::Circle { center: [cx, cy], radius } => Self::Circle {
                center: [x + cx, y + cy],
                radius,
            },
            Self::Polygon(points) => {
                let (sin, cos) = rotation.sin_cos();
                Self::Polygon(
                    points
                        .into_iter()
                        .map(|[px, py]| [x + px * cos - py * sin, y + px * sin + py * cos])
                        .collect(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_alternates_radii() {
        let ShapePath::Polygon(points) = ShapePath::local(Shape::Star, 10.0) else {
            panic!("star should be a polygon");
        };
        assert_eq!(points.len(), 10);
        assert!((points[0][0] - 10.0).abs() < 1e-12 && points[0][1].abs() < 1e-12);
        for (i, [x, y]) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((x.hypot(*y) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_triangle_points_up() {
        assert_eq!(
            ShapePath::local(Shape::Triangle, 2.0),
            ShapePath::Polygon(vec![[0.0, -2.0], [2.0, 2.0], [-2.0, 2.0]])
        );
    }

    #[test]
    fn test_placement_rotates_then_translates() {
        let ShapePath::Polygon(points) = ShapePath::local(Shape::Triangle, 1.0).placed(10.0, 20.0, PI / 2.0)
        else {
            panic!("triangle should be a polygon");
        };
        // apex (0, -1) rotated a quarter turn lands at (1, 0)
        assert!((points[0][0] - 11.0).abs() < 1e-12);
        assert!((points[0][1] - 20.0).abs() < 1e-12);
        assert_eq!(
            ShapePath::local(Shape::Circle, 3.0).placed(1.0, 1.0, 2.0),
            ShapePath::Circle { center: [1.0, 1.0], radius: 3.0 }
        );
    }
}

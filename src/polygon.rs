use crate::edge::Edge;
use nalgebra::Vector2;
use rand::Rng;
use sdl2::pixels::Color;
use thiserror::Error;

pub const EDGE_COLOR: Color = Color::RGBA(0, 0, 0, 255);
pub const EDGE_HIT_COLOR: Color = Color::RGBA(230, 41, 55, 255);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("minimum edge width {min} exceeds maximum {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("expected {sides} edge widths, got {got}")]
    WidthCountMismatch { sides: usize, got: usize },
}

/// A closed polygon. Vertex `i` connects to vertex `(i + 1) % len`, and the
/// color and width sequences run parallel to the vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vector2<f64>>,
    pub edge_colors: Vec<Color>,
    pub edge_widths: Vec<f64>,
    pub rotation: f64,
}

/// Draws one radial width per side, uniformly within `[min_width, max_width]`.
pub fn generate_edge_widths<R: Rng>(
    rng: &mut R,
    sides: usize,
    min_width: f64,
    max_width: f64,
) -> Result<Vec<f64>, PolygonError> {
    if min_width > max_width {
        return Err(PolygonError::InvertedBounds {
            min: min_width,
            max: max_width,
        });
    }
    Ok((0..sides)
        .map(|_| rng.gen_range(min_width..=max_width))
        .collect())
}

impl Polygon {
    /// Places vertex `i` at `center + widths[i] * (cos, sin)(i * 2pi / sides)`.
    pub fn generate(
        sides: usize,
        edge_widths: &[f64],
        center: Vector2<f64>,
    ) -> Result<Polygon, PolygonError> {
        if edge_widths.len() != sides {
            return Err(PolygonError::WidthCountMismatch {
                sides,
                got: edge_widths.len(),
            });
        }

        let angle_step = std::f64::consts::TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = i as f64 * angle_step;
                center + edge_widths[i] * Vector2::new(angle.cos(), angle.sin())
            })
            .collect();

        Ok(Polygon {
            vertices,
            edge_colors: vec![EDGE_COLOR; sides],
            edge_widths: edge_widths.to_vec(),
            rotation: 0.,
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge(&self, index: usize) -> Edge {
        Edge {
            p0: self.vertices[index],
            p1: self.vertices[(index + 1) % self.vertices.len()],
        }
    }

    pub fn centroid(&self) -> Vector2<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc, vertex| acc + vertex);
        sum / self.vertices.len() as f64
    }

    /// Rotates every vertex around the centroid and accumulates the angle.
    pub fn rotate(&mut self, angle: f64) {
        let center = self.centroid();
        let (sin, cos) = angle.sin_cos();
        for vertex in &mut self.vertices {
            let relative = *vertex - center;
            *vertex = center
                + Vector2::new(
                    relative.x * cos - relative.y * sin,
                    relative.x * sin + relative.y * cos,
                );
        }
        self.rotation += angle;
    }

    /// Shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            area += v1.x * v2.y - v1.y * v2.x;
        }
        area.abs() / 2.
    }

    pub fn mark_hit(&mut self, index: usize) {
        self.edge_colors[index] = EDGE_HIT_COLOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand_pcg::Pcg64;

    fn test_rng() -> Pcg64 {
        Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
    }

    #[test]
    fn edge_widths_stay_within_bounds() {
        let mut rng = test_rng();
        let widths = generate_edge_widths(&mut rng, 7, 150., 250.).unwrap();
        assert_eq!(widths.len(), 7);
        for width in widths {
            assert!((150. ..=250.).contains(&width));
        }
    }

    #[test]
    fn equal_bounds_yield_constant_widths() {
        let mut rng = test_rng();
        let widths = generate_edge_widths(&mut rng, 5, 200., 200.).unwrap();
        assert!(widths.iter().all(|width| *width == 200.));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut rng = test_rng();
        let result = generate_edge_widths(&mut rng, 7, 250., 150.);
        assert_eq!(
            result,
            Err(PolygonError::InvertedBounds {
                min: 250.,
                max: 150.
            })
        );
    }

    #[test]
    fn width_count_must_match_sides() {
        let result = Polygon::generate(7, &[200.; 6], Vector2::new(400., 300.));
        assert_eq!(
            result,
            Err(PolygonError::WidthCountMismatch { sides: 7, got: 6 })
        );
    }

    #[test]
    fn generated_vertices_lie_on_their_widths() {
        let center = Vector2::new(400., 300.);
        let polygon = Polygon::generate(7, &[200.; 7], center).unwrap();
        assert_eq!(polygon.vertices.len(), 7);
        assert_eq!(polygon.edge_colors.len(), 7);
        assert_eq!(polygon.edge_widths.len(), 7);
        assert_eq!(polygon.rotation, 0.);
        assert!(polygon.edge_colors.iter().all(|color| *color == EDGE_COLOR));
        for vertex in &polygon.vertices {
            assert_relative_eq!((vertex - center).norm(), 200., epsilon = 1e-9);
        }
    }

    #[test]
    fn area_matches_shoelace() {
        let square = Polygon {
            vertices: vec![
                Vector2::new(0., 0.),
                Vector2::new(4., 0.),
                Vector2::new(4., 3.),
                Vector2::new(0., 3.),
            ],
            edge_colors: vec![EDGE_COLOR; 4],
            edge_widths: vec![0.; 4],
            rotation: 0.,
        };
        assert_relative_eq!(square.area(), 12., epsilon = 1e-12);

        // A regular n-gon of circumradius r has area n * r^2 * sin(2pi/n) / 2.
        let polygon = Polygon::generate(7, &[200.; 7], Vector2::new(400., 300.)).unwrap();
        let expected = 7. * 200. * 200. * (std::f64::consts::TAU / 7.).sin() / 2.;
        assert_relative_eq!(polygon.area(), expected, epsilon = 1e-6);
    }

    #[test]
    fn area_is_invariant_under_rotation() {
        let mut rng = test_rng();
        let widths = generate_edge_widths(&mut rng, 7, 150., 250.).unwrap();
        let mut polygon = Polygon::generate(7, &widths, Vector2::new(400., 300.)).unwrap();
        let before = polygon.area();
        polygon.rotate(0.7);
        assert_relative_eq!(polygon.area(), before, epsilon = 1e-6);
    }

    #[test]
    fn rotation_round_trips() {
        let mut rng = test_rng();
        let widths = generate_edge_widths(&mut rng, 7, 150., 250.).unwrap();
        let mut polygon = Polygon::generate(7, &widths, Vector2::new(400., 300.)).unwrap();
        let original = polygon.vertices.clone();

        polygon.rotate(0.3);
        polygon.rotate(-0.3);

        assert_relative_eq!(polygon.rotation, 0., epsilon = 1e-12);
        for (vertex, expected) in polygon.vertices.iter().zip(&original) {
            assert_relative_eq!(*vertex, *expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn rotation_accumulates() {
        let mut polygon = Polygon::generate(7, &[200.; 7], Vector2::new(400., 300.)).unwrap();
        polygon.rotate(0.05);
        polygon.rotate(0.05);
        assert_relative_eq!(polygon.rotation, 0.1, epsilon = 1e-12);
    }
}

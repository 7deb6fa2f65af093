use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub radius: f64,
}

/// Positions the circle has visited, sampled once per frame while the
/// puzzle is unsolved. Cleared on reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    pub points: Vec<Vector2<f64>>,
}

use nalgebra::Vector2;

/// Directed polygon edge from `p0` to `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
}

impl Edge {
    pub fn normal(&self) -> Vector2<f64> {
        let diff = self.p1 - self.p0;
        return Vector2::new(-diff.y, diff.x).normalize();
    }
}

use crate::{circle::Circle, polygon::Polygon};
use legion::system;
use log::debug;

#[system(for_each)]
pub fn collision(circle: &mut Circle, #[resource] polygon: &mut Polygon) {
    let hits = collide_circle_polygon(circle, polygon);
    for index in hits {
        debug!(
            "edge {} hit at ({:.1}, {:.1})",
            index, circle.position.x, circle.position.y
        );
    }
}

/// Reflects the circle off every edge line it penetrates and recolors the
/// struck edges. Returns the indices of the edges hit this frame.
///
/// The test is against the infinite line through each edge, not the finite
/// segment, so a circle can be reflected by an edge it is not adjacent to.
pub fn collide_circle_polygon(circle: &mut Circle, polygon: &mut Polygon) -> Vec<usize> {
    let mut hits = Vec::new();
    for index in 0..polygon.len() {
        let edge = polygon.edge(index);
        let normal = edge.normal();
        let dist = normal.dot(&(circle.position - edge.p0));
        if dist.abs() <= circle.radius {
            let proj = circle.velocity.dot(&normal);
            circle.velocity -= proj * normal * 2.;
            circle.position += normal * (circle.radius - dist);
            hits.push(index);
        }
    }
    for index in &hits {
        polygon.mark_hit(*index);
    }
    hits
}

use crate::circle::Circle;
use legion::system;

#[system(for_each)]
pub fn advance_circles(circle: &mut Circle) {
    advance_single_circle(circle);
}

// Velocity is a per-frame displacement; one call moves the circle one frame.
pub fn advance_single_circle(circle: &mut Circle) {
    circle.position += circle.velocity;
}

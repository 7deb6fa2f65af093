use crate::circle::{Circle, Trail};
use crate::coverage::CoverageState;
use crate::polygon::{self, Polygon};
use crate::simulation::SimulationData;
use legion::{IntoQuery, Resources, World};
use log::info;
use nalgebra::Vector2;
use rand_pcg::Pcg64;

#[derive(Clone, Copy, Debug)]
pub struct GenerationConfig {
    pub sides: usize,
    pub min_width: f64,
    pub max_width: f64,
    pub center: Vector2<f64>,
    pub circle_start: Vector2<f64>,
    pub circle_velocity: Vector2<f64>,
    pub circle_radius: f64,
}

pub fn init_world(world: &mut World, resources: &mut Resources, config: GenerationConfig) {
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let polygon = generate_polygon(&mut rng, &config);
    init_circle(world, &config);

    resources.insert(CoverageState::new(polygon.area()));
    resources.insert(polygon);
    resources.insert(config);
    resources.insert(rng);
}

fn generate_polygon(rng: &mut Pcg64, config: &GenerationConfig) -> Polygon {
    let edge_widths =
        polygon::generate_edge_widths(rng, config.sides, config.min_width, config.max_width)
            .expect("edge width bounds are inverted");
    let polygon = Polygon::generate(config.sides, &edge_widths, config.center)
        .expect("edge width count matches side count");
    info!(
        "generated {}-gon with area {:.0}",
        config.sides,
        polygon.area()
    );
    polygon
}

fn init_circle(world: &mut World, config: &GenerationConfig) {
    world.push((
        Circle {
            position: config.circle_start,
            velocity: config.circle_velocity,
            radius: config.circle_radius,
        },
        Trail::default(),
    ));
}

/// Regenerates the polygon and clears everything the puzzle accumulated.
/// The circle keeps its current position and velocity.
pub fn reset_world(world: &mut World, resources: &mut Resources) {
    let config = *resources
        .get::<GenerationConfig>()
        .expect("generation config missing");
    let polygon = {
        let mut rng = resources.get_mut::<Pcg64>().expect("world rng missing");
        generate_polygon(&mut rng, &config)
    };
    {
        let mut coverage = resources
            .get_mut::<CoverageState>()
            .expect("coverage state missing");
        coverage.reset(polygon.area());
    }
    {
        let mut simulation_data = resources
            .get_mut::<SimulationData>()
            .expect("simulation data missing");
        simulation_data.timer = 0.;
    }
    resources.insert(polygon);

    let mut query = <&mut Trail>::query();
    for trail in query.iter_mut(world) {
        trail.points.clear();
    }
}

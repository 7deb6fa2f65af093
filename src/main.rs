extern crate sdl2;

pub mod advance;
pub mod circle;
pub mod collision;
pub mod coverage;
pub mod edge;
pub mod polygon;
pub mod render;
pub mod simulation;
pub mod world_gen;

use coverage::CoverageState;
use legion::{Resources, Schedule, World};
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use nalgebra::Vector2;
use polygon::Polygon;
use render::{DisplayConfig, Graphics};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use world_gen::GenerationConfig;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const ROTATION_STEP: f64 = 0.05;

fn init_logging() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(log::LevelFilter::Info))
        .unwrap();
    log4rs::init_config(config).unwrap();
}

pub fn main() {
    init_logging();

    // Setup.
    let graphics = render::init_graphics(DisplayConfig {
        width: WIDTH,
        height: HEIGHT,
    });
    let mut event_pump = graphics.sdl_context.event_pump().unwrap();
    let mut world = World::default();
    let mut resources = Resources::default();

    // Initialize world.
    world_gen::init_world(
        &mut world,
        &mut resources,
        GenerationConfig {
            sides: 7,
            min_width: 150.,
            max_width: 250.,
            center: Vector2::new(400., 300.),
            circle_start: Vector2::new(400., 300.),
            circle_velocity: Vector2::new(15., -3.),
            circle_radius: 10.,
        },
    );
    simulation::init_simulation(&mut resources);
    resources.insert(graphics);

    // Initialize scheduler.
    let mut schedule = Schedule::builder()
        .add_system(coverage::sample_trail_system())
        .add_system(advance::advance_circles_system())
        .add_system(collision::collision_system())
        .add_thread_local(render::rasterize_trail_system())
        .add_thread_local(coverage::measure_coverage_system())
        .add_thread_local(render::render_scene_system())
        .add_system(simulation::advance_time_system())
        .build();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } => {
                    let solved = resources
                        .get::<CoverageState>()
                        .map(|coverage| coverage.solved)
                        .unwrap_or(false);
                    if solved {
                        info!("resetting puzzle");
                        world_gen::reset_world(&mut world, &mut resources);
                        if let Some(mut graphics) = resources.get_mut::<Graphics>() {
                            render::clear_trace(&mut graphics.trace);
                        }
                    }
                }
                _ => {}
            }
        }

        // Held keys rotate the polygon around its centroid, one step per frame.
        let keyboard = event_pump.keyboard_state();
        if keyboard.is_scancode_pressed(Scancode::Left) {
            if let Some(mut polygon) = resources.get_mut::<Polygon>() {
                polygon.rotate(-ROTATION_STEP);
            }
        }
        if keyboard.is_scancode_pressed(Scancode::Right) {
            if let Some(mut polygon) = resources.get_mut::<Polygon>() {
                polygon.rotate(ROTATION_STEP);
            }
        }

        schedule.execute(&mut world, &mut resources);
    }
}

use crate::circle::{Circle, Trail};
use crate::coverage::{CoverageState, TRAIL_COLOR};
use crate::polygon::Polygon;
use crate::simulation::SimulationData;
use legion::{system, world::SubWorld, IntoQuery};
use nalgebra::Vector2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas};
use sdl2::surface::Surface;
use sdl2::video::Window;

pub const BACKGROUND_COLOR: Color = Color::RGBA(130, 130, 130, 255);
pub const CIRCLE_COLOR: Color = Color::RGBA(230, 41, 55, 255);
pub const HUD_COLOR: Color = Color::RGBA(255, 255, 255, 255);
pub const SOLVED_COLOR: Color = Color::RGBA(0, 228, 48, 255);
const CLEAR_COLOR: Color = Color::RGBA(0, 0, 0, 0);

pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

/// Explicit handle over all display state: the SDL context, the window
/// canvas, and the persistent off-screen trace buffer. Everything is
/// released by scope when the handle drops at loop exit.
pub struct Graphics {
    pub config: DisplayConfig,
    pub sdl_context: sdl2::Sdl,
    pub canvas: Canvas<Window>,
    pub trace: Canvas<Surface<'static>>,
}

pub fn init_graphics(display_config: DisplayConfig) -> Graphics {
    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();

    let window = video_subsystem
        .window("Polypaint", display_config.width, display_config.height)
        .position_centered()
        .build()
        .unwrap();
    let trace = make_trace_canvas(display_config.width, display_config.height);

    Graphics {
        config: display_config,
        sdl_context: sdl_context,
        canvas: window.into_canvas().build().unwrap(),
        trace: trace,
    }
}

/// Software surface canvas for the trail. Needs no window, so tests can
/// drive the rasterize/count path headlessly.
pub fn make_trace_canvas(width: u32, height: u32) -> Canvas<Surface<'static>> {
    let surface = Surface::new(width, height, PixelFormatEnum::RGBA8888).unwrap();
    let mut trace = surface.into_canvas().unwrap();
    trace.set_draw_color(CLEAR_COLOR);
    trace.clear();
    trace
}

pub fn clear_trace(trace: &mut Canvas<Surface<'static>>) {
    trace.set_draw_color(CLEAR_COLOR);
    trace.clear();
}

/// Stamps a thick line between every consecutive pair of trail points.
/// The buffer is persistent; restamping already-drawn segments is a no-op.
pub fn stamp_trail(trace: &mut Canvas<Surface<'static>>, radius: f64, points: &[Vector2<f64>]) {
    for pair in points.windows(2) {
        trace
            .thick_line(
                pair[0].x as i16,
                pair[0].y as i16,
                pair[1].x as i16,
                pair[1].y as i16,
                (radius * 2.) as u8,
                TRAIL_COLOR,
            )
            .expect("ok");
    }
}

#[system]
#[read_component(Circle)]
#[read_component(Trail)]
pub fn rasterize_trail(world: &mut SubWorld, #[resource] graphics: &mut Graphics) {
    for (circle, trail) in <(&Circle, &Trail)>::query().iter(world) {
        stamp_trail(&mut graphics.trace, circle.radius, &trail.points);
    }
}

#[system]
#[read_component(Circle)]
pub fn render_scene(
    world: &mut SubWorld,
    #[resource] graphics: &mut Graphics,
    #[resource] polygon: &Polygon,
    #[resource] coverage: &CoverageState,
    #[resource] simulation_data: &SimulationData,
) {
    let Graphics {
        config,
        canvas,
        trace,
        ..
    } = graphics;

    canvas.set_draw_color(BACKGROUND_COLOR);
    canvas.clear();

    for index in 0..polygon.len() {
        let edge = polygon.edge(index);
        canvas
            .line(
                edge.p0.x as i16,
                edge.p0.y as i16,
                edge.p1.x as i16,
                edge.p1.y as i16,
                polygon.edge_colors[index],
            )
            .expect("ok");
    }

    for circle in <&Circle>::query().iter(world) {
        canvas
            .filled_circle(
                circle.position.x as i16,
                circle.position.y as i16,
                circle.radius as i16,
                CIRCLE_COLOR,
            )
            .expect("ok");
    }

    // Blit the trace buffer over the scene.
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_from_surface(trace.surface())
        .expect("trace texture");
    texture.set_blend_mode(BlendMode::Blend);
    canvas.copy(&texture, None, None).expect("ok");

    hud(canvas, config, coverage, simulation_data);

    canvas.present();
}

fn hud(
    canvas: &mut Canvas<Window>,
    config: &DisplayConfig,
    coverage: &CoverageState,
    simulation_data: &SimulationData,
) {
    canvas
        .string(
            10,
            10,
            &format!("Time: {:.2} seconds", simulation_data.timer),
            HUD_COLOR,
        )
        .expect("ok");
    canvas
        .string(
            10,
            40,
            &format!("Colored Area: {:.2}%", coverage.percentage),
            HUD_COLOR,
        )
        .expect("ok");
    canvas
        .string(
            10,
            60,
            &format!("Colored Area Pixels: {:.2}", coverage.polygon_area),
            HUD_COLOR,
        )
        .expect("ok");

    if coverage.solved {
        let center_x = (config.width / 2) as i16;
        let center_y = (config.height / 2) as i16;
        canvas
            .string(
                center_x - 120,
                center_y,
                "90% of the polygon is colored!",
                SOLVED_COLOR,
            )
            .expect("ok");
        canvas
            .string(center_x - 100, center_y + 30, "Press 'R' to reset!", SOLVED_COLOR)
            .expect("ok");
    }
}

use crate::circle::{Circle, Trail};
use crate::render::Graphics;
use legion::system;
use log::info;
use sdl2::pixels::Color;
use sdl2::surface::SurfaceRef;

pub const TRAIL_COLOR: Color = Color::RGBA(253, 249, 0, 255);
pub const SOLVED_THRESHOLD: f64 = 90.0;

/// Per-polygon coverage bookkeeping. The area is cached at generation time
/// and only replaced on reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageState {
    pub polygon_area: f64,
    pub colored_pixels: usize,
    pub percentage: f64,
    pub solved: bool,
}

impl CoverageState {
    pub fn new(polygon_area: f64) -> CoverageState {
        CoverageState {
            polygon_area,
            colored_pixels: 0,
            percentage: 0.,
            solved: false,
        }
    }

    pub fn reset(&mut self, polygon_area: f64) {
        *self = CoverageState::new(polygon_area);
    }
}

#[system(for_each)]
pub fn sample_trail(circle: &Circle, trail: &mut Trail, #[resource] coverage: &CoverageState) {
    // The trail freezes once the puzzle is solved.
    if !coverage.solved {
        trail.points.push(circle.position);
    }
}

pub fn coverage_percentage(colored_pixels: usize, polygon_area: f64) -> f64 {
    colored_pixels as f64 / polygon_area * 100.
}

/// Counts pixels whose RGB channels exactly match the paint color. Alpha is
/// ignored.
pub fn count_painted(surface: &SurfaceRef) -> usize {
    let masks = surface
        .pixel_format_enum()
        .into_masks()
        .expect("trace surface has a packed pixel format");
    let rgb_mask = masks.rmask | masks.gmask | masks.bmask;
    let paint = TRAIL_COLOR.to_u32(&surface.pixel_format()) & rgb_mask;

    let width = surface.width() as usize;
    let pitch = surface.pitch() as usize;
    surface.with_lock(|pixels: &[u8]| {
        let mut count = 0;
        for row in pixels.chunks(pitch) {
            for pixel in row[..width * 4].chunks_exact(4) {
                let value = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
                if value & rgb_mask == paint {
                    count += 1;
                }
            }
        }
        count
    })
}

#[system]
pub fn measure_coverage(
    #[resource] graphics: &mut Graphics,
    #[resource] coverage: &mut CoverageState,
) {
    coverage.colored_pixels = count_painted(graphics.trace.surface());
    coverage.percentage = coverage_percentage(coverage.colored_pixels, coverage.polygon_area);
    let solved = coverage.percentage >= SOLVED_THRESHOLD;
    if solved && !coverage.solved {
        info!(
            "solved: {:.2}% of {:.0} area units painted",
            coverage.percentage, coverage.polygon_area
        );
    }
    coverage.solved = solved;
}

use crate::coverage::CoverageState;
use legion::{system, Resources};
use log::debug;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const FRAME_TIME_CAP: i64 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationData {
    /// Seconds elapsed while the puzzle was unsolved. Zeroed on reset.
    pub timer: f64,
    pub last_simulated: i64,
}

pub fn init_simulation(resources: &mut Resources) {
    resources.insert(SimulationData {
        timer: 0.,
        last_simulated: now_millis(),
    });
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

#[system]
pub fn advance_time(
    #[resource] simulation_data: &mut SimulationData,
    #[resource] coverage: &CoverageState,
) {
    let current_time = now_millis();
    let frame_time = current_time - simulation_data.last_simulated;
    debug!("Frame time: {}", frame_time);
    if !coverage.solved {
        simulation_data.timer += frame_time as f64 / 1000.;
    }
    let ms_to_sleep = std::cmp::max(0, FRAME_TIME_CAP - frame_time) as u64;
    std::thread::sleep(Duration::from_millis(ms_to_sleep));
    simulation_data.last_simulated = current_time + (ms_to_sleep as i64);
}

//! Gap Runner entry point
//!
//! Native builds have no window yet, so this runs a paced headless session
//! with an autopilot pressing the keys.

use std::time::{Duration, Instant};

use gap_runner::audio::LogBackend;
use gap_runner::renderer::HeadlessCanvas;
use gap_runner::sim::{InputEvent, Phase, autopilot_input};
use gap_runner::{FrameDriver, Settings};

/// Demo length, 30 seconds at the default frame rate
const DEMO_TICKS: u64 = 2_100;

fn main() {
    env_logger::init();
    log::info!("Gap Runner (native) starting...");

    let settings = Settings::load();
    let mut driver = FrameDriver::from_settings(&settings, LogBackend, HeadlessCanvas::default());
    let frame_time = Duration::from_secs_f32(driver.tick_dt());

    let mut crashes = 0;
    let mut last_phase = driver.state().phase();
    let mut last_frame = Instant::now();

    while driver.is_running() {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let state = driver.state();
        let mut input = autopilot_input(state);
        if state.time_ticks >= DEMO_TICKS {
            input.events.push(InputEvent::WindowClosed);
        }
        driver.advance(elapsed, input);

        let phase = driver.state().phase();
        if phase == Phase::Over && last_phase != Phase::Over {
            crashes += 1;
        }
        last_phase = phase;

        // Frame rate cap
        let spent = now.elapsed();
        if spent < frame_time {
            std::thread::sleep(frame_time - spent);
        }
    }

    println!(
        "Played {} ticks with {} crashes, best score {}",
        driver.state().time_ticks,
        crashes,
        driver.state().high_score()
    );
}


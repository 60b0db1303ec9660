//! Gap Runner entry point
//!
//! Loads configuration, opens the native window and runs the game loop.

use std::process::ExitCode;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use gap_runner::GameConfig;
use gap_runner::app;
use gap_runner::platform::WindowSurface;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gap Runner starting...");

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("RNG seed: {}", seed);
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut surface = match WindowSurface::open(&config.display.title, &config.world) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("Failed to initialize window: {}", e);
            return ExitCode::FAILURE;
        }
    };

    app::run(&mut surface, &config, &mut rng);

    ExitCode::SUCCESS
}

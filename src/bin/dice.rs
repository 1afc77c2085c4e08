//! Draggable die demo
//!
//! Click the die to grab it, drag to spin it, release to fling it.

use tumble::{App, AppConfig, DiceSketch};

fn main() {
    env_logger::init();
    log::info!("Starting dice demo");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let sketch = DiceSketch::new(&config);
    App::new(config, sketch).run();
}

//! Rotating tesseract wireframe demo

use tumble::{App, AppConfig, TesseractSketch};

fn main() {
    env_logger::init();
    log::info!("Starting tesseract demo");

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    config.window.title = format!("{} - tesseract", config.window.title);

    let sketch = TesseractSketch::new(&config);
    App::new(config, sketch).run();
}

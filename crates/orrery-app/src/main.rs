//! Binary entry point: load configuration, set up logging, run the window.

mod frame;
mod solar_system;
mod window;

use std::path::Path;

use orrery_config::Config;

fn main() {
    let config = match Config::load_or_default(Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    orrery_log::init_logging(Some(&config));

    if let Err(e) = window::run(config) {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;
pub mod view;

use colored::*;
use tracing::info;

use config::{resolve_config_path, Config, CONFIG_PATH_VAR};
use error::Result;

fn main() {
    dotenvy::dotenv().ok();

    let config_path = resolve_config_path(
        std::env::args().nth(1),
        std::env::var(CONFIG_PATH_VAR).ok(),
    );

    if let Err(e) = start_app(&config_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn start_app(config_path: &std::path::Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    logging::init(&config)?;
    colored::control::set_override(config.colors);

    info!(config = %config_path.display(), "Starting tris");
    app::run(&config)?;

    println!("{}", "Goodbye!".cyan());
    Ok(())
}

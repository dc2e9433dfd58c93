mod config;
mod error;
mod export;
mod input;
mod logging;
mod models;
mod money;
mod run;
mod summary;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let settings = config::Settings::load();

    match args.len() {
        1 => {
            // Logging must not draw over the alternate screen
            if let Some(path) = &settings.log_file {
                if let Err(e) = logging::init_file(path) {
                    eprintln!("Warning: file logging disabled: {e:#}");
                }
            }
            run::as_tui(&settings)
        }
        _ => {
            logging::init_stderr();
            run::as_cli(&args, settings)
        }
    }
}

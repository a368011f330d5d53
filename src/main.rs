use anyhow::Result;
use log::{debug, info};

use gcode_analyze::Options;

/// The single place where configuration failures decide the exit status:
/// a returned error prints its diagnostic and exits non-zero. Help and
/// version short-circuit inside argument parsing with status 0.
fn main() -> Result<()> {
    env_logger::init();

    let options = Options::from_args_and_env()?;

    debug!(
        "resolved configuration: {}",
        serde_json::to_string(&options)?
    );

    // Hand-off point for the analysis engine.
    match &options.filename {
        Some(filename) => info!(
            "ready to analyze {} ({} output)",
            filename.display(),
            options.output
        ),
        None => info!("no G-code file given"),
    }

    Ok(())
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crc_sleuth_lib::{Settings, settings_path};

use crate::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}

/// Show the effective settings and where they came from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load_from(&path)?;

    if path.exists() {
        println!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        println!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();
    print!("{}", settings.to_toml_string()?);
    Ok(())
}

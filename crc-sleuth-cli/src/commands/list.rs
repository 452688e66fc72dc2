use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crc_sleuth_lib::Algorithm;

use crate::CliError;

/// Print every built-in algorithm with its aliases.
pub(crate) fn run_list() -> Result<(), CliError> {
    println!("Supported algorithms:");
    println!();

    for algorithm in Algorithm::all() {
        println!(
            "  {:<16} {}",
            algorithm.name().if_supports_color(Stdout, |t| t.bold()),
            algorithm
                .aliases()
                .join(", ")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    println!();
    println!("Each also matches negated (0xFF - value) as \"negation <name>\".");
    Ok(())
}

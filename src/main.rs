//! Sky area calculator CLI - entry point and error reporting.

mod cli;
mod config;
mod logging;
mod output;

use cli::CliError;
use tracing::debug;

fn run(args: Vec<String>) -> Result<(), CliError> {
    let params = cli::parse_cli(args)?;
    debug!(
        longitude = ?params.region.longitude,
        latitude = ?params.region.latitude,
        format = %params.output.format,
        "parsed command line"
    );

    let result = skyarea::sky_area(&params.region)?;
    output::dispatch_output(&result, &params)?;
    Ok(())
}

fn main() {
    logging::init();
    let args: Vec<String> = std::env::args().collect();

    match run(args) {
        Ok(()) => {}
        Err(CliError::Exit(message)) => {
            println!("{}", message);
        }
        Err(CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use colored::Colorize;
use scan_gap_summary::cli::Cli;
use scan_gap_summary::{init_logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_config, cli.verbose) {
        eprintln!("{} {e}", "error:".red());
        return ExitCode::FAILURE;
    }
    log::info!("#Start main()");

    match run(&cli) {
        Ok(rendered) => {
            println!("{}", rendered.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red());
            ExitCode::FAILURE
        }
    }
}

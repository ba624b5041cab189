//! log4rs initialisation.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise logging from the YAML file at `config_file`.
///
/// Without that file, logs go to stderr at warn level (debug if `verbose`)
/// so stdout stays clean for the report.
pub fn init_logging(config_file: &Path, verbose: bool) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config_file.display()))?;
        return Ok(());
    }
    log4rs::init_config(fallback_config(verbose)?)?;
    log::debug!(
        "No log config at {}, using stderr fallback",
        config_file.display()
    );
    Ok(())
}

fn fallback_config(verbose: bool) -> Result<Config, Box<dyn Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config_levels() {
        let quiet = fallback_config(false).unwrap();
        assert_eq!(quiet.root().level(), LevelFilter::Warn);
        let verbose = fallback_config(true).unwrap();
        assert_eq!(verbose.root().level(), LevelFilter::Debug);
        assert_eq!(verbose.appenders().len(), 1);
    }
}

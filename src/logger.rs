use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE_PATH: &str = "log4rs.yaml";
const CONSOLE_APPENDER_NAME: &str = "stderr";
const CONSOLE_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {T} {t} - {m}{n}";

/// Installs log4rs as the global logger, configured from `log4rs.yaml` in the
/// working directory or, failing that, logging warnings to stderr.
///
/// The library never calls this itself. Returns `false` if a global logger
/// was already installed.
pub fn init_logger() -> bool {
    if Path::new(CONFIG_FILE_PATH).is_file()
        && log4rs::init_file(CONFIG_FILE_PATH, Default::default()).is_ok()
    {
        return true;
    }
    create_console_config()
        .map(|config| log4rs::init_config(config).is_ok())
        .unwrap_or(false)
}

fn create_console_config() -> Option<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(CONSOLE_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )
        .ok()
}

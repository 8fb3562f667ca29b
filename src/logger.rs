use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;

// Define where to store logs
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "admission.log";

/// Initializes the global logger.
///
/// This function should be called once at the very beginning of the
/// application's `main` function.
///
/// The log level is taken from `level` if given, otherwise from the `RUST_LOG`
/// environment variable (e.g. `RUST_LOG=debug`), defaulting to `info`.
///
/// Logs are written to stderr and, if `log_to_file` is set, to `logs/admission.log`.
pub fn init(level: Option<LevelFilter>, log_to_file: bool) {
    let log_level_filter = level.unwrap_or_else(|| {
        std::env::var("RUST_LOG").ok().and_then(|value| value.parse::<LevelFilter>().ok()).unwrap_or(LevelFilter::Info)
    });

    let console_config = Dispatch::new()
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base_config = Dispatch::new()
        .level(log_level_filter)
        .level_for("serde", LevelFilter::Warn)
        .level_for("uuid", LevelFilter::Warn)
        .chain(console_config);

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);
    let mut file_logging = false;

    if log_to_file {
        if let Err(e) = fs::create_dir_all(LOG_DIR) {
            eprintln!("Failed to create log directory at '{}': {}", LOG_DIR, e);
        }

        match fern::log_file(&log_file_path) {
            Ok(file) => {
                let file_config = Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {} {}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file);

                base_config = base_config.chain(file_config);
                file_logging = true;
            }
            Err(e) => eprintln!("Failed to open log file '{}': {}", log_file_path, e),
        }
    }

    if let Err(e) = base_config.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    if file_logging {
        log::info!("Logger initialized. Logging to console and '{}'.", log_file_path);
    } else {
        log::info!("Logger initialized. Logging to console only.");
    }
}

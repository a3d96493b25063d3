use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

use crate::config::Settings;

/// Directory holding log files, `~/.protparam/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".protparam")
        .join("logs")
}

/// Initialize file logging under the default log directory
pub fn init_logging(settings: &Settings) -> Result<PathBuf, Box<dyn Error>> {
    init_logging_in(&log_dir(), &settings.log_filter())
}

/// Initialize logging into a timestamped file inside `log_dir`
pub fn init_logging_in(log_dir: &Path, filter: &str) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!("protparam_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::new()
        .parse_filters(filter)
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log filter: {filter}");

    Ok(log_file)
}

/// Log system information and the active settings at startup
pub fn log_system_info(settings: &Settings) {
    info!("=== Protparam Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());
    info!("Interface: {:?}", settings.interface);
    info!("Residue policy: {:?}", settings.residue_policy);

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("PROTPARAM_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown(sequences: usize) {
    info!("=== Protparam Shutting Down ===");
    info!("Sequences analysed: {sequences}");
    info!("Application terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error, echoing it to stderr in case no logger is installed
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
        eprintln!("[{}] CRITICAL ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        error!("CRITICAL ERROR: {error}");
        eprintln!("[{}] CRITICAL ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}

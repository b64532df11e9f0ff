use clap::Parser;
use navlayout::cli::{self, Cli};
use navlayout::core::config::{self, ResolvedConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, OpenOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();
    dotenv::dotenv().ok();

    let (file_config, origin) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.settings.as_deref());

    init_logging(&resolved);
    origin.log();
    log::debug!("Config: {:?}", file_config);
    log::info!(
        "navlayout starting: {:?} on {}",
        args.command,
        resolved.settings_file.display()
    );

    cli::run(args.command, &resolved)
}

/// File logger, appended to across runs. Logging is best-effort: a log file
/// that can't be opened just means no log.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
    {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

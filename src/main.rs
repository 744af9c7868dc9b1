use clap::Parser;
use nolearn::core::config::{self, ResolvedConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nolearn", version, about = "Terminal task tracker")]
struct Args {
    /// Task file to open [default: tasks.json]
    file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            println!("Error loading config, using defaults: {e}");
            config::NolearnConfig::default()
        }
    };
    let config = config::resolve(&file_config, args.file.as_deref());

    init_logging(&config);
    log::info!(
        "Nolearn starting with task file: {}",
        config.task_file.display()
    );

    nolearn::tui::run(&config.task_file)
}

/// File logger, since the terminal belongs to the UI while running.
fn init_logging(config: &ResolvedConfig) {
    let Some(log_path) = &config.log_file else {
        return;
    };
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(log_path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

mod app_state;
mod cli;

use std::path::PathBuf;

use skiff_common::{ConfigError, SkiffError};
use skiff_config::SkiffConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Load the config named on the command line, or the platform default.
fn load_config(path: Option<&PathBuf>) -> Result<SkiffConfig, ConfigError> {
    match path {
        Some(p) => skiff_config::load_config_from(p),
        None => skiff_config::load_config(),
    }
}

/// `--log-level` wins, then `RUST_LOG`, then `[logging].level`.
fn log_filter(cli_level: Option<&str>, config: &SkiffConfig) -> EnvFilter {
    let fallback = config.logging.level.as_directive();
    if let Some(directive) = cli_level {
        return EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(fallback));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn main() {
    let args = cli::parse();

    let loaded = load_config(args.config.as_ref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_level.as_deref(), &config))
        .init();

    tracing::info!("Skiff v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.print_config {
        println!("{}", skiff_config::config_to_json(&config));
        return;
    }

    let config_path = args
        .config
        .clone()
        .or_else(|| skiff_config::toml_loader::default_config_path().ok());

    let mut app = app_state::SkiffApp::new(config, config_path, args.url);
    if let Err(e) = run(&mut app) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(app: &mut app_state::SkiffApp) -> skiff_common::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| SkiffError::Window(e.to_string()))?;
    tracing::info!("Entering event loop");
    event_loop
        .run_app(app)
        .map_err(|e| SkiffError::Window(e.to_string()))
}

//! memview - Entry Point

use clap::Parser;
use memview::state::ConfirmPolicy;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// memview - browse, search, select, edit and delete a member list in the terminal
#[derive(Parser, Debug)]
#[command(name = "memview")]
#[command(version)]
#[command(about = "Terminal table for browsing and editing a JSON member list")]
pub struct Args {
    /// URL of the member list (JSON array of {id, name, email, role})
    #[arg(long)]
    pub url: Option<String>,

    /// Read members from a local JSON file instead of fetching
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Rows per page (must be positive)
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// When bulk delete asks for confirmation
    #[arg(long, value_parser = ["when-selected", "when-empty"])]
    pub confirm: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = memview::config::load_config_with_precedence(args.config.clone())?;
        let merged = memview::config::merge_config(config_file);
        let with_env = memview::config::apply_env_overrides(merged);

        let confirm_override = args
            .confirm
            .as_deref()
            .map(str::parse::<ConfirmPolicy>)
            .transpose()?;

        memview::config::apply_cli_overrides(
            with_env,
            args.url.clone(),
            args.page_size.map(|n| n as usize),
            confirm_override,
        )
    };

    memview::logging::init(&config.log_file_path)?;

    info!(config = ?config, file = ?args.file, "Configuration loaded and resolved");

    let input_source = memview::source::detect_input_source(
        config.source_url.clone(),
        args.file.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    );

    let options = memview::view::UiOptions::new(
        config.page_size,
        config.confirm_policy,
        memview::view::ColorConfig::from_env_and_args(args.no_color),
    );

    memview::view::run_with_source(input_source, options)?;

    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use baito_core::Locale;
use clap::Parser;
use tracing::debug;

use baito_ui::config::{AppConfig, ConfigOverrides, DEFAULT_LOG_LEVEL};
use baito_ui::{app, logging, report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Part-time job income simulator.
///
/// Compares job offers by what they really pay per month once commuting
/// costs are taken out, and ranks them by net income.
#[derive(Debug, Parser)]
#[command(name = "baito-simulator", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of starter jobs, used instead of the built-in examples.
    #[arg(long)]
    jobs: Option<PathBuf>,

    /// Start with no jobs at all.
    #[arg(long, default_value_t = false, conflicts_with = "jobs")]
    empty: bool,

    /// Print the ranking as plain text and exit instead of opening the UI.
    #[arg(long, default_value_t = false)]
    report: bool,

    /// Label language (`ja` or `en`).
    #[arg(long)]
    locale: Option<Locale>,

    /// Log filter, a bare level or a full `EnvFilter` directive.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            locale: self.locale,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            empty: self.empty,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(DEFAULT_LOG_LEVEL);

    let config = AppConfig::load_or_default(cli.config.as_deref())?.with_overrides(cli.overrides());
    debug!(?config, "configuration loaded");

    // Precedence: --log-level, then RUST_LOG, then the config file.
    let level = (cli.log_level.is_some() || std::env::var_os("RUST_LOG").is_none())
        .then_some(config.log_level.as_str());
    // Both the report and the UI own stdout from here on.
    logging::apply_settings(level, config.log_file.as_deref())?;

    let state = app::build_state(&config, cli.jobs.as_deref())
        .context("failed to load starter jobs")?;
    debug!(jobs = state.store.len(), locale = %state.locale, "simulator ready");

    if cli.report {
        print!("{}", report::render_report(&state));
        return Ok(());
    }

    let result = app::run(state);
    logging::disable_file_logging();
    result
}

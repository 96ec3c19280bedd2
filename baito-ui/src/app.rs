use std::path::Path;

use anyhow::Result;
use baito_core::JobStore;
use cursive::event::{Event, Key};
use tracing::info;

use crate::config::AppConfig;
use crate::csv_loader::{self, CsvLoadError};
use crate::state::AppState;
use crate::views::show_simulator;

/// Builds the initial state: jobs from `jobs_file` when given, otherwise the
/// starter jobs (or nothing, if the config turns them off).
///
/// # Errors
///
/// Returns [`CsvLoadError`] when the job file cannot be read or parsed.
pub fn build_state(
    config: &AppConfig,
    jobs_file: Option<&Path>,
) -> Result<AppState, CsvLoadError> {
    let store = match jobs_file {
        Some(path) => {
            let store = csv_loader::load_from_file(path)?;
            info!(path = %path.display(), jobs = store.len(), "loaded starter jobs");
            store
        }
        None if config.sample_jobs => JobStore::sample(config.locale),
        None => JobStore::new(),
    };

    Ok(AppState::new(
        store,
        config.locale,
        config.currency_symbol.clone(),
    ))
}

/// Runs the terminal UI until the user quits.
pub fn run(state: AppState) -> Result<()> {
    let mut siv = cursive::default();
    siv.set_user_data(state);
    siv.add_global_callback(Event::CtrlChar('q'), |s| {
        info!("quit requested");
        s.quit();
    });
    siv.add_global_callback(Event::Key(Key::Esc), |s| s.quit());

    show_simulator(&mut siv);

    info!("starting terminal UI");
    siv.try_run()
        .map_err(|e| anyhow::anyhow!("terminal UI failed: {e}"))
}

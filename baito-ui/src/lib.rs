pub mod app;
pub mod config;
pub mod csv_loader;
pub mod labels;
pub mod logging;
pub mod report;
pub mod state;
pub mod views;

pub use app::{build_state, run};
pub use state::AppState;

//! Terminal views for the income simulator.
//!
//! - `simulator` - job editor, ranking and tips in a single dialog
//! - `status_bar` - keyboard shortcut hints

mod simulator;
mod status_bar;

pub use simulator::show_simulator;

pub mod calculations;
pub mod currency;
pub mod input;
pub mod models;
pub mod store;

pub use calculations::{IncomeResult, RankedJob, compute_income, rank_jobs};
pub use models::*;
pub use store::{JobStore, MAX_JOB_ID, StoreError};

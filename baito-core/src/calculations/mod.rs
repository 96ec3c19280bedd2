//! Income calculations for part-time job offers.
//!
//! Everything here is a pure function of the job fields. Results are cheap to
//! compute and are recomputed on every render instead of being stored.

pub mod income;
pub mod ranking;

pub use income::{IncomeResult, WEEKS_PER_MONTH, compute_income};
pub use ranking::{RankedJob, highest_hourly_wage, is_highest_wage, rank_jobs};

//! Ranking of jobs by monthly net income.
//!
//! The ranking is a projection: it borrows the jobs and never reorders the
//! collection it was built from.

use rust_decimal::Decimal;

use crate::Job;
use crate::calculations::IncomeResult;

/// One entry of the net income ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedJob<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub job: &'a Job,
    pub income: IncomeResult,
    /// The job pays the highest hourly wage in the whole collection.
    /// Shared by every job tied for that wage.
    pub is_highest_wage: bool,
}

impl RankedJob<'_> {
    /// First place, highlighted in the display.
    pub fn is_top(&self) -> bool {
        self.rank == 1
    }
}

/// The highest hourly wage among `jobs`, or `None` when there are none.
pub fn highest_hourly_wage(jobs: &[Job]) -> Option<Decimal> {
    jobs.iter().map(|job| job.hourly_wage).max()
}

/// Whether `job` pays the highest hourly wage found in `jobs`.
pub fn is_highest_wage(
    job: &Job,
    jobs: &[Job],
) -> bool {
    highest_hourly_wage(jobs).is_some_and(|max| job.hourly_wage == max)
}

/// Ranks `jobs` by net monthly income, highest first.
///
/// The sort is stable: jobs with equal net income keep their collection
/// order.
pub fn rank_jobs(jobs: &[Job]) -> Vec<RankedJob<'_>> {
    let highest_wage = highest_hourly_wage(jobs);

    let mut scored: Vec<(&Job, IncomeResult)> =
        jobs.iter().map(|job| (job, job.income())).collect();
    scored.sort_by(|(_, a), (_, b)| b.net.cmp(&a.net));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (job, income))| RankedJob {
            rank: index + 1,
            job,
            income,
            is_highest_wage: highest_wage == Some(job.hourly_wage),
        })
        .collect()
}

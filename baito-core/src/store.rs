//! The job collection.
//!
//! [`JobStore`] is the single owner of the jobs the user is comparing. Jobs
//! stay in insertion order; every derived figure (income, ranking) is
//! computed from the store on demand.

use std::collections::HashSet;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{Job, JobField, JobId, JobUpdate, Locale};

/// Hourly wage given to a freshly added job.
pub const DEFAULT_HOURLY_WAGE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
/// Weekly hours given to a freshly added job.
pub const DEFAULT_WEEKLY_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
/// Work days per week given to a freshly added job.
pub const DEFAULT_WORK_DAYS_PER_WEEK: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Largest id a job may carry. `JobId::MAX` is never handed out.
pub const MAX_JOB_ID: JobId = JobId::MAX - 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate job id {0}")]
    DuplicateId(JobId),

    #[error("job id {0} is out of range (largest allowed is {MAX_JOB_ID})")]
    IdOutOfRange(JobId),
}

/// Ordered, in-memory collection of jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing jobs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdOutOfRange`] for an id above [`MAX_JOB_ID`]
    /// and [`StoreError::DuplicateId`] if two jobs share an id.
    pub fn from_jobs(jobs: Vec<Job>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if job.id > MAX_JOB_ID {
                return Err(StoreError::IdOutOfRange(job.id));
            }
            if !seen.insert(job.id) {
                return Err(StoreError::DuplicateId(job.id));
            }
        }
        Ok(Self { jobs })
    }

    /// The two starter jobs: a full-time-ish izakaya shift with free commute
    /// and a well paid but short tutoring gig with a costly commute.
    pub fn sample(locale: Locale) -> Self {
        let [izakaya, tutor] = locale.sample_job_names();
        Self {
            jobs: vec![
                Job {
                    id: 1,
                    name: izakaya.to_string(),
                    hourly_wage: Decimal::from(1500),
                    weekly_hours: Decimal::from(30),
                    work_days_per_week: Decimal::from(5),
                    transport_cost_per_day: Decimal::ZERO,
                },
                Job {
                    id: 2,
                    name: tutor.to_string(),
                    hourly_wage: Decimal::from(2800),
                    weekly_hours: Decimal::from(2),
                    work_days_per_week: Decimal::from(1),
                    transport_cost_per_day: Decimal::from(800),
                },
            ],
        }
    }

    /// Jobs in insertion order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(
        &self,
        id: JobId,
    ) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn ids(&self) -> Vec<JobId> {
        self.jobs.iter().map(|job| job.id).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The id the next added job receives: one past the largest id in use,
    /// or 1 for an empty store.
    ///
    /// Once [`MAX_JOB_ID`] is taken, the smallest unused id is returned
    /// instead.
    pub fn next_id(&self) -> JobId {
        let largest = self.jobs.iter().map(|job| job.id).max().unwrap_or(0);
        if largest < MAX_JOB_ID {
            return largest + 1;
        }
        let used: HashSet<JobId> = self.jobs.iter().map(|job| job.id).collect();
        (1..=MAX_JOB_ID).find(|id| !used.contains(id)).unwrap_or(0)
    }

    /// Appends a job with default values and a Japanese placeholder name.
    pub fn add(&mut self) -> JobId {
        self.add_localized(Locale::default())
    }

    /// Appends a job with default values, named for `locale`.
    pub fn add_localized(
        &mut self,
        locale: Locale,
    ) -> JobId {
        let id = self.next_id();
        self.jobs.push(Job {
            id,
            name: locale.default_job_name(id),
            hourly_wage: DEFAULT_HOURLY_WAGE,
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            work_days_per_week: DEFAULT_WORK_DAYS_PER_WEEK,
            transport_cost_per_day: Decimal::ZERO,
        });
        debug!(id, "job added");
        id
    }

    /// Removes the job with `id`. Unknown ids leave the store unchanged.
    pub fn remove(
        &mut self,
        id: JobId,
    ) -> Option<Job> {
        let index = self.jobs.iter().position(|job| job.id == id)?;
        let removed = self.jobs.remove(index);
        debug!(id, "job removed");
        Some(removed)
    }

    /// Replaces one field of the job with `id`.
    ///
    /// Returns `false` (and changes nothing) when no job has that id.
    pub fn update(
        &mut self,
        id: JobId,
        update: JobUpdate,
    ) -> bool {
        let Some(slot) = self.jobs.iter_mut().find(|job| job.id == id) else {
            debug!(id, "update for unknown job ignored");
            return false;
        };
        debug!(id, field = update.field().as_str(), "job updated");
        *slot = slot.with_update(update);
        true
    }

    /// Coerces raw input text for `field` and applies it to the job with `id`.
    pub fn update_from_input(
        &mut self,
        id: JobId,
        field: JobField,
        raw: &str,
    ) -> bool {
        self.update(id, JobUpdate::from_input(field, raw))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn job_with_id(id: JobId) -> Job {
        Job {
            id,
            name: format!("job{id}"),
            hourly_wage: dec!(1100),
            weekly_hours: dec!(12),
            work_days_per_week: dec!(3),
            transport_cost_per_day: dec!(200),
        }
    }

    #[test]
    fn add_on_empty_store_starts_at_one() {
        let mut store = JobStore::new();

        let id = store.add();

        assert_eq!(id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_uses_defaults() {
        let mut store = JobStore::new();

        let id = store.add();

        assert_eq!(
            store.get(id),
            Some(&Job {
                id: 1,
                name: "バイト1".to_string(),
                hourly_wage: dec!(1000),
                weekly_hours: dec!(10),
                work_days_per_week: dec!(3),
                transport_cost_per_day: dec!(0),
            })
        );
    }

    #[test]
    fn add_localized_names_job_in_english() {
        let mut store = JobStore::new();

        let id = store.add_localized(Locale::En);

        assert_eq!(store.get(id).map(|j| j.name.as_str()), Some("Job 1"));
    }

    #[test]
    fn add_continues_after_largest_id() {
        let mut store =
            JobStore::from_jobs(vec![job_with_id(1), job_with_id(2), job_with_id(5)]).unwrap();

        let id = store.add();

        assert_eq!(id, 6);
        assert_eq!(store.ids(), vec![1, 2, 5, 6]);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = JobStore::from_jobs(vec![job_with_id(9), job_with_id(3)]).unwrap();

        store.add();
        store.add();

        assert_eq!(store.ids(), vec![9, 3, 10, 11]);
    }

    #[test]
    fn add_then_remove_restores_store() {
        let mut store = JobStore::sample(Locale::Ja);
        let before = store.clone();

        let id = store.add();
        let removed = store.remove(id);

        assert_eq!(removed.map(|j| j.id), Some(id));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = JobStore::sample(Locale::Ja);
        let before = store.clone();

        assert_eq!(store.remove(42), None);
        assert_eq!(store, before);
    }

    #[test]
    fn remove_keeps_order_of_remaining_jobs() {
        let mut store =
            JobStore::from_jobs(vec![job_with_id(1), job_with_id(2), job_with_id(3)]).unwrap();

        store.remove(2);

        assert_eq!(store.ids(), vec![1, 3]);
    }

    #[test]
    fn remove_last_job_then_add_starts_over() {
        let mut store = JobStore::new();
        let id = store.add();
        store.remove(id);

        assert!(store.is_empty());
        assert_eq!(store.add(), 1);
    }

    #[test]
    fn update_replaces_single_field() {
        let mut store = JobStore::sample(Locale::Ja);

        let applied = store.update(2, JobUpdate::TransportCostPerDay(dec!(0)));

        assert!(applied);
        let tutor = store.get(2).unwrap();
        assert_eq!(tutor.transport_cost_per_day, dec!(0));
        assert_eq!(tutor.hourly_wage, dec!(2800));
        assert_eq!(store.get(1), JobStore::sample(Locale::Ja).get(1));
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = JobStore::sample(Locale::Ja);
        let before = store.clone();

        assert!(!store.update(99, JobUpdate::Name("ghost".to_string())));
        assert_eq!(store, before);
    }

    #[test]
    fn update_from_input_coerces_invalid_numbers_to_zero() {
        let mut store = JobStore::sample(Locale::Ja);

        store.update_from_input(1, JobField::WeeklyHours, "lots");

        assert_eq!(store.get(1).unwrap().weekly_hours, dec!(0));
        assert_eq!(store.get(1).unwrap().income().net, dec!(0));
    }

    #[test]
    fn update_from_input_keeps_permissive_values() {
        let mut store = JobStore::sample(Locale::Ja);

        store.update_from_input(1, JobField::WorkDaysPerWeek, "9");
        store.update_from_input(1, JobField::HourlyWage, "-100");

        let job = store.get(1).unwrap();
        assert_eq!(job.work_days_per_week, dec!(9));
        assert_eq!(job.hourly_wage, dec!(-100));
    }

    #[test]
    fn update_keeps_position() {
        let mut store = JobStore::sample(Locale::Ja);

        store.update_from_input(1, JobField::Name, "焼肉屋");

        assert_eq!(store.ids(), vec![1, 2]);
        assert_eq!(store.jobs()[0].name, "焼肉屋");
    }

    #[test]
    fn from_jobs_rejects_duplicate_ids() {
        let result = JobStore::from_jobs(vec![job_with_id(1), job_with_id(1)]);

        assert_eq!(result, Err(StoreError::DuplicateId(1)));
    }

    #[test]
    fn from_jobs_rejects_reserved_max_id() {
        let result = JobStore::from_jobs(vec![job_with_id(JobId::MAX)]);

        assert_eq!(result, Err(StoreError::IdOutOfRange(JobId::MAX)));
    }

    #[test]
    fn add_at_largest_id_reuses_smallest_free_id() {
        let mut store =
            JobStore::from_jobs(vec![job_with_id(1), job_with_id(MAX_JOB_ID)]).unwrap();

        assert_eq!(store.add(), 2);
        assert_eq!(store.add(), 3);
        assert_eq!(store.ids(), vec![1, MAX_JOB_ID, 2, 3]);
    }

    #[test]
    fn add_never_hands_out_reserved_id() {
        let mut store = JobStore::from_jobs(vec![job_with_id(MAX_JOB_ID - 1)]).unwrap();

        assert_eq!(store.add(), MAX_JOB_ID);
        assert_eq!(store.add(), 1);
        assert!(store.ids().iter().all(|id| *id <= MAX_JOB_ID));
    }

    #[test]
    fn sample_matches_starter_jobs() {
        let store = JobStore::sample(Locale::Ja);

        assert_eq!(store.ids(), vec![1, 2]);
        assert_eq!(store.jobs()[0].name, "居酒屋");
        assert_eq!(store.jobs()[0].income().net, dec!(180000));
        assert_eq!(store.jobs()[1].name, "家庭教師");
        assert_eq!(store.jobs()[1].income().net, dec!(19200));
    }
}

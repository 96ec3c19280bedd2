//! Application state for the simulator UI.
//!
//! The job store is the single source of truth. Income figures and the
//! ranking are derived from it each time a view is refreshed.

use baito_core::currency::format_currency;
use baito_core::{JobField, JobId, JobStore, Locale, RankedJob, rank_jobs};
use rust_decimal::Decimal;

use crate::labels::Labels;

/// Application-wide state stored in Cursive's user data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: JobStore,
    pub locale: Locale,
    pub currency_symbol: String,
}

impl AppState {
    pub fn new(
        store: JobStore,
        locale: Locale,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            store,
            locale,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_locale(self.locale)
    }

    /// Formats an amount with the configured currency glyph.
    pub fn money(
        &self,
        amount: Decimal,
    ) -> String {
        format_currency(amount, &self.currency_symbol)
    }

    /// Current ranking, recomputed from the store.
    pub fn ranking(&self) -> Vec<RankedJob<'_>> {
        rank_jobs(self.store.jobs())
    }

    /// Adds a job named in the current locale.
    pub fn add_job(&mut self) -> JobId {
        self.store.add_localized(self.locale)
    }

    pub fn remove_job(
        &mut self,
        id: JobId,
    ) -> bool {
        self.store.remove(id).is_some()
    }

    /// Applies raw text typed into one of a job's fields.
    pub fn edit_field(
        &mut self,
        id: JobId,
        field: JobField,
        raw: &str,
    ) -> bool {
        self.store.update_from_input(id, field, raw)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn add_job_uses_state_locale() {
        let mut state = AppState::new(JobStore::new(), Locale::En, "￥");

        let id = state.add_job();

        assert_eq!(state.store.get(id).map(|j| j.name.as_str()), Some("Job 1"));
    }

    #[test]
    fn edit_field_updates_ranking() {
        let mut state = AppState::new(JobStore::sample(Locale::Ja), Locale::Ja, "￥");

        state.edit_field(2, JobField::WeeklyHours, "40");

        let ranking = state.ranking();
        assert_eq!(ranking[0].job.id, 2);
        assert_eq!(ranking[0].income.net, dec!(444800));
        assert_eq!(state.store.ids(), vec![1, 2]);
    }

    #[test]
    fn remove_job_reports_whether_anything_changed() {
        let mut state = AppState::new(JobStore::sample(Locale::Ja), Locale::Ja, "￥");

        assert!(state.remove_job(1));
        assert!(!state.remove_job(1));
        assert_eq!(state.store.ids(), vec![2]);
    }

    #[test]
    fn money_uses_configured_symbol() {
        let state = AppState::new(JobStore::new(), Locale::En, "$");

        assert_eq!(state.money(dec!(19200)), "$19,200");
    }
}

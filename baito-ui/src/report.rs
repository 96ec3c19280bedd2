//! Text rendering of job incomes and the ranking.
//!
//! The terminal view and `--report` share these helpers so both show the
//! same figures with the same wording.

use std::fmt::Write;

use baito_core::{Job, RankedJob};

use crate::labels::formula_line;
use crate::state::AppState;

/// Text pieces of one ranking entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntryText {
    /// `"1. name"`, plus the highest-wage tag when it applies.
    pub heading: String,
    pub formula: String,
    /// Monthly transport deduction, only when the job costs anything.
    pub transport: Option<String>,
    pub net: String,
    /// Gross income, only shown next to a transport deduction.
    pub gross: Option<String>,
}

pub fn ranking_entry_text(
    state: &AppState,
    entry: &RankedJob<'_>,
) -> RankingEntryText {
    let labels = state.labels();
    let mut heading = format!("{}. {}", entry.rank, entry.job.name);
    if entry.is_highest_wage {
        write!(heading, " [{}]", labels.highest_wage).ok();
    }

    let has_transport = entry.income.has_transport_cost();
    RankingEntryText {
        heading,
        formula: formula_line(state.locale, entry.job, &state.currency_symbol),
        transport: has_transport.then(|| {
            format!(
                "{} -{}{}",
                labels.transport,
                state.money(entry.income.transport),
                labels.per_month
            )
        }),
        net: format!("{} {}", labels.net_income, state.money(entry.income.net)),
        gross: has_transport
            .then(|| format!("({}{})", labels.gross, state.money(entry.income.gross))),
    }
}

/// One-line net income and transport summary shown beside a job's fields.
pub fn job_income_summary(
    state: &AppState,
    job: &Job,
) -> String {
    let labels = state.labels();
    let income = job.income();
    format!(
        "{} {}  {} -{}",
        labels.net_income,
        state.money(income.net),
        labels.transport,
        state.money(income.transport)
    )
}

/// Renders the full ranking as plain text.
pub fn render_report(state: &AppState) -> String {
    let labels = state.labels();
    let mut out = String::new();
    writeln!(out, "{}", labels.ranking_title).ok();

    let ranking = state.ranking();
    if ranking.is_empty() {
        writeln!(out, "  {}", labels.no_jobs).ok();
        return out;
    }

    for entry in &ranking {
        let text = ranking_entry_text(state, entry);
        write!(out, "{}  {}", text.heading, text.net).ok();
        if let Some(gross) = &text.gross {
            write!(out, " {gross}").ok();
        }
        writeln!(out).ok();
        writeln!(out, "   {}", text.formula).ok();
        if let Some(transport) = &text.transport {
            writeln!(out, "   {transport}").ok();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use baito_core::{JobStore, Locale};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_state(locale: Locale) -> AppState {
        AppState::new(JobStore::sample(locale), locale, "￥")
    }

    #[test]
    fn report_ranks_izakaya_first_in_japanese() {
        let report = render_report(&sample_state(Locale::Ja));

        assert_eq!(
            report,
            "\
実質月収ランキング
1. 居酒屋  実質月収 ￥180,000
   時給￥1500 × 週30時間 (週5日)
2. 家庭教師 [最高時給]  実質月収 ￥19,200 (総額￥22,400)
   時給￥2800 × 週2時間 (週1日)
   交通費 -￥3,200/月
"
        );
    }

    #[test]
    fn report_in_english() {
        let report = render_report(&sample_state(Locale::En));

        assert_eq!(
            report,
            "\
Net monthly income ranking
1. Izakaya  Net monthly ￥180,000
   ￥1500/h × 30h/week (5 days/week)
2. Private tutor [Top wage]  Net monthly ￥19,200 (gross ￥22,400)
   ￥2800/h × 2h/week (1 days/week)
   Transport -￥3,200/month
"
        );
    }

    #[test]
    fn report_for_empty_store() {
        let state = AppState::new(JobStore::new(), Locale::En, "￥");

        assert_eq!(
            render_report(&state),
            "Net monthly income ranking\n  No jobs yet. Add one to compare.\n"
        );
    }

    #[test]
    fn entry_without_transport_hides_gross() {
        let state = sample_state(Locale::Ja);
        let ranking = state.ranking();

        let text = ranking_entry_text(&state, &ranking[0]);

        assert_eq!(text.heading, "1. 居酒屋");
        assert_eq!(text.transport, None);
        assert_eq!(text.gross, None);
    }

    #[test]
    fn job_income_summary_shows_net_and_transport() {
        let state = sample_state(Locale::Ja);

        let summary = job_income_summary(&state, &state.store.jobs()[1]);

        assert_eq!(summary, "実質月収 ￥19,200  交通費 -￥3,200");
    }
}

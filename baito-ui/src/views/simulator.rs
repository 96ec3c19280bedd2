//! Simulator view.
//!
//! One dialog holds everything: an editable row per job (in insertion
//! order), the add button, the net income ranking and the tips. Field edits
//! refresh the income line of that job and the ranking in place; adding or
//! removing a job rebuilds the dialog.

use baito_core::{Job, JobField, JobId};
use cursive::Cursive;
use cursive::theme::{BaseColor, Color, Effect, Style};
use cursive::utils::markup::StyledString;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{
    Button, Dialog, DummyView, EditView, LinearLayout, Panel, ResizedView, TextView,
};
use tracing::debug;

use super::status_bar::{SIMULATOR_HINTS, build_status_bar};
use crate::report::{job_income_summary, ranking_entry_text};
use crate::state::AppState;

// View names for accessing components
const RANKING_VIEW: &str = "ranking";

fn income_view_name(id: JobId) -> String {
    format!("income-{id}")
}

fn field_view_name(
    id: JobId,
    field: JobField,
) -> String {
    format!("field-{id}-{}", field.as_str())
}

/// Display the simulator as the root layer.
pub fn show_simulator(siv: &mut Cursive) {
    let Some((title, quit, layout)) = siv.with_user_data(|state: &mut AppState| {
        let labels = state.labels();
        (labels.title, labels.quit, build_layout(state))
    }) else {
        return;
    };

    let dialog = Dialog::around(layout.scrollable())
        .title(title)
        .button(quit, |s| s.quit())
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(dialog);
}

fn build_layout(state: &AppState) -> LinearLayout {
    let labels = state.labels();

    let mut jobs = LinearLayout::vertical();
    if state.store.is_empty() {
        jobs.add_child(TextView::new(labels.no_jobs));
    }
    for job in state.store.jobs() {
        jobs.add_child(Panel::new(build_job_row(state, job)));
    }

    let status = build_status_bar(&SIMULATOR_HINTS);

    LinearLayout::vertical()
        .child(TextView::new(labels.subtitle))
        .child(DummyView.fixed_height(1))
        .child(jobs)
        .child(Button::new(format!("+ {}", labels.add_job), on_add))
        .child(DummyView.fixed_height(1))
        .child(
            Panel::new(TextView::new(ranking_content(state)).with_name(RANKING_VIEW))
                .title(labels.ranking_title),
        )
        .child(Panel::new(TextView::new(tips_content(state))).title(labels.tips_title))
        .child(status)
}

/// One job: a column per field, then its income line and a remove button.
fn build_job_row(
    state: &AppState,
    job: &Job,
) -> LinearLayout {
    let labels = state.labels();
    let id = job.id;

    let fields = LinearLayout::horizontal()
        .child(field_column(labels.name, job, JobField::Name, 16))
        .child(field_column(labels.hourly_wage, job, JobField::HourlyWage, 10))
        .child(field_column(labels.weekly_hours, job, JobField::WeeklyHours, 12))
        .child(field_column(labels.work_days_per_week, job, JobField::WorkDaysPerWeek, 12))
        .child(field_column(
            &format!("{} ({})", labels.transport_cost_per_day, labels.transport_hint),
            job,
            JobField::TransportCostPerDay,
            24,
        ));

    let income = LinearLayout::horizontal()
        .child(
            TextView::new(job_income_summary(state, job))
                .with_name(income_view_name(id))
                .full_width(),
        )
        .child(Button::new(labels.remove, move |s| on_remove(s, id)));

    LinearLayout::vertical().child(fields).child(income)
}

/// A label stacked over the edit box for one field.
fn field_column(
    label: &str,
    job: &Job,
    field: JobField,
    width: usize,
) -> ResizedView<LinearLayout> {
    let id = job.id;
    let edit = EditView::new()
        .content(job.field_text(field))
        .on_edit(move |s, text, _| on_field_edit(s, id, field, text))
        .with_name(field_view_name(id, field))
        .fixed_width(width.saturating_sub(1));

    LinearLayout::vertical()
        .child(TextView::new(label))
        .child(edit)
        .fixed_width(width)
}

/// Ranking panel text; first place highlighted.
fn ranking_content(state: &AppState) -> StyledString {
    let mut content = StyledString::new();
    let ranking = state.ranking();
    if ranking.is_empty() {
        content.append_plain(state.labels().no_jobs);
        return content;
    }

    for entry in &ranking {
        let text = ranking_entry_text(state, entry);
        let heading_style = if entry.is_top() {
            Style::from(Color::Dark(BaseColor::Yellow)).combine(Effect::Bold)
        } else {
            Style::from(Effect::Bold)
        };

        content.append_styled(text.heading, heading_style);
        content.append_plain("  ");
        content.append_styled(text.net, Style::from(Color::Dark(BaseColor::Green)));
        if let Some(gross) = text.gross {
            content.append_plain(" ");
            content.append_plain(gross);
        }
        content.append_plain("\n   ");
        content.append_plain(text.formula);
        if let Some(transport) = text.transport {
            content.append_plain("\n   ");
            content.append_styled(transport, Style::from(Color::Dark(BaseColor::Red)));
        }
        content.append_plain("\n");
    }
    content
}

fn tips_content(state: &AppState) -> String {
    state
        .labels()
        .tips
        .iter()
        .map(|tip| format!("• {tip}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Store the edited value and refresh the figures derived from it.
fn on_field_edit(
    siv: &mut Cursive,
    id: JobId,
    field: JobField,
    text: &str,
) {
    let changed = siv
        .with_user_data(|state: &mut AppState| state.edit_field(id, field, text))
        .unwrap_or(false);
    if changed {
        show_stored_value(siv, id, field, text);
        refresh_income(siv, id);
        refresh_ranking(siv);
    }
}

/// The stored text of a numeric field when it no longer matches what was
/// typed. Blank or sign-only input is left alone so it can be retyped.
fn corrected_text(
    job: &Job,
    field: JobField,
    typed: &str,
) -> Option<String> {
    let pending = matches!(typed.trim(), "" | "-" | "+");
    if !field.is_numeric() || pending {
        return None;
    }
    let stored = job.field_text(field);
    (stored != typed).then_some(stored)
}

fn show_stored_value(
    siv: &mut Cursive,
    id: JobId,
    field: JobField,
    typed: &str,
) {
    let corrected = siv.with_user_data(|state: &mut AppState| {
        state
            .store
            .get(id)
            .and_then(|job| corrected_text(job, field, typed))
    });
    if let Some(Some(text)) = corrected {
        siv.call_on_name(&field_view_name(id, field), |v: &mut EditView| {
            // The returned callback would re-enter this handler.
            let _ = v.set_content(text);
        });
    }
}

fn refresh_income(
    siv: &mut Cursive,
    id: JobId,
) {
    let summary = siv.with_user_data(|state: &mut AppState| {
        let state: &AppState = state;
        state
            .store
            .get(id)
            .map(|job| job_income_summary(state, job))
    });
    if let Some(Some(summary)) = summary {
        siv.call_on_name(&income_view_name(id), |v: &mut TextView| {
            v.set_content(summary);
        });
    }
}

fn refresh_ranking(siv: &mut Cursive) {
    if let Some(content) = siv.with_user_data(|state: &mut AppState| ranking_content(state)) {
        siv.call_on_name(RANKING_VIEW, |v: &mut TextView| v.set_content(content));
    }
}

fn on_add(siv: &mut Cursive) {
    if let Some(id) = siv.with_user_data(|state: &mut AppState| state.add_job()) {
        debug!(id, "added job from view");
        rebuild(siv);
    }
}

fn on_remove(
    siv: &mut Cursive,
    id: JobId,
) {
    let removed = siv
        .with_user_data(|state: &mut AppState| state.remove_job(id))
        .unwrap_or(false);
    if removed {
        rebuild(siv);
    }
}

fn rebuild(siv: &mut Cursive) {
    siv.pop_layer();
    show_simulator(siv);
}

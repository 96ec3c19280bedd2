//! User-facing text for each supported locale.

use baito_core::{Job, Locale};

/// Every label shown by the terminal view and the text report.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub hourly_wage: &'static str,
    pub weekly_hours: &'static str,
    pub work_days_per_week: &'static str,
    pub transport_cost_per_day: &'static str,
    pub transport_hint: &'static str,
    pub net_income: &'static str,
    pub transport: &'static str,
    pub gross: &'static str,
    pub per_month: &'static str,
    pub remove: &'static str,
    pub add_job: &'static str,
    pub no_jobs: &'static str,
    pub ranking_title: &'static str,
    pub highest_wage: &'static str,
    pub tips_title: &'static str,
    pub tips: [&'static str; 4],
    pub quit: &'static str,
}

static JA: Labels = Labels {
    title: "バイト収入シミュレーター",
    subtitle: "時給の罠を見破ろう！交通費も考慮した本当に稼げるバイトはどれ？",
    name: "バイト名",
    hourly_wage: "時給 (円)",
    weekly_hours: "週の労働時間",
    work_days_per_week: "週の勤務日数",
    transport_cost_per_day: "1日の交通費 (円)",
    transport_hint: "支給なら0",
    net_income: "実質月収",
    transport: "交通費",
    gross: "総額",
    per_month: "/月",
    remove: "削除",
    add_job: "バイトを追加",
    no_jobs: "バイトがありません。追加してください。",
    ranking_title: "実質月収ランキング",
    highest_wage: "最高時給",
    tips_title: "ポイント",
    tips: [
        "時給が高くても、労働時間が少なければ月収は低くなります",
        "交通費が自己負担の場合、時給が高くても実質収入が減ります",
        "「時給＝稼げる額」ではありません。総労働時間と交通費が重要です",
        "バイト選びでは時給、シフト数、交通費支給の有無を総合的に判断しましょう",
    ],
    quit: "終了",
};

static EN: Labels = Labels {
    title: "Part-time Income Simulator",
    subtitle: "Don't fall for the hourly wage: which job really pays once commuting is counted?",
    name: "Job",
    hourly_wage: "Hourly wage",
    weekly_hours: "Hours/week",
    work_days_per_week: "Days/week",
    transport_cost_per_day: "Transport/day",
    transport_hint: "0 if covered",
    net_income: "Net monthly",
    transport: "Transport",
    gross: "gross ",
    per_month: "/month",
    remove: "Remove",
    add_job: "Add job",
    no_jobs: "No jobs yet. Add one to compare.",
    ranking_title: "Net monthly income ranking",
    highest_wage: "Top wage",
    tips_title: "Tips",
    tips: [
        "A high hourly wage still means a small income if the hours are few",
        "Paying your own commute eats into what a high wage actually brings in",
        "Hourly wage is not what you earn: total hours and transport matter",
        "Weigh wage, number of shifts and transport coverage together",
    ],
    quit: "Quit",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}

/// The "wage x hours (days)" line shown under a ranked job.
pub fn formula_line(
    locale: Locale,
    job: &Job,
    symbol: &str,
) -> String {
    match locale {
        Locale::Ja => format!(
            "時給{symbol}{} × 週{}時間 (週{}日)",
            job.hourly_wage, job.weekly_hours, job.work_days_per_week
        ),
        Locale::En => format!(
            "{symbol}{}/h × {}h/week ({} days/week)",
            job.hourly_wage, job.weekly_hours, job.work_days_per_week
        ),
    }
}

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::{IncomeResult, compute_income};
use crate::input::coerce_decimal;

/// Identifier of a job, unique within a [`JobStore`](crate::JobStore).
pub type JobId = u32;

/// A part-time job offer as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,

    /// Pay per hour, in currency units.
    pub hourly_wage: Decimal,
    pub weekly_hours: Decimal,
    /// Days commuted per week. Nothing stops this from exceeding 7.
    pub work_days_per_week: Decimal,
    /// Out-of-pocket commute cost per work day; 0 when the employer covers it.
    pub transport_cost_per_day: Decimal,
}

impl Job {
    /// Monthly gross, transport and net income for this job.
    pub fn income(&self) -> IncomeResult {
        compute_income(
            self.hourly_wage,
            self.weekly_hours,
            self.work_days_per_week,
            self.transport_cost_per_day,
        )
    }

    /// Returns a copy of this job with one field replaced.
    pub fn with_update(
        &self,
        update: JobUpdate,
    ) -> Self {
        match update {
            JobUpdate::Name(name) => Self {
                name,
                ..self.clone()
            },
            JobUpdate::HourlyWage(hourly_wage) => Self {
                hourly_wage,
                ..self.clone()
            },
            JobUpdate::WeeklyHours(weekly_hours) => Self {
                weekly_hours,
                ..self.clone()
            },
            JobUpdate::WorkDaysPerWeek(work_days_per_week) => Self {
                work_days_per_week,
                ..self.clone()
            },
            JobUpdate::TransportCostPerDay(transport_cost_per_day) => Self {
                transport_cost_per_day,
                ..self.clone()
            },
        }
    }

    /// Current value of `field` rendered as editable text.
    pub fn field_text(
        &self,
        field: JobField,
    ) -> String {
        match field {
            JobField::Name => self.name.clone(),
            JobField::HourlyWage => self.hourly_wage.to_string(),
            JobField::WeeklyHours => self.weekly_hours.to_string(),
            JobField::WorkDaysPerWeek => self.work_days_per_week.to_string(),
            JobField::TransportCostPerDay => self.transport_cost_per_day.to_string(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "#{} {} (wage {} x {}h/week, {} days/week, transport {}/day)",
            self.id,
            self.name,
            self.hourly_wage,
            self.weekly_hours,
            self.work_days_per_week,
            self.transport_cost_per_day
        )
    }
}

/// The editable fields of a [`Job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    Name,
    HourlyWage,
    WeeklyHours,
    WorkDaysPerWeek,
    TransportCostPerDay,
}

impl JobField {
    pub const ALL: [JobField; 5] = [
        Self::Name,
        Self::HourlyWage,
        Self::WeeklyHours,
        Self::WorkDaysPerWeek,
        Self::TransportCostPerDay,
    ];

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Name)
    }

    /// Column/key name, also used as the CSV header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::HourlyWage => "hourly_wage",
            Self::WeeklyHours => "weekly_hours",
            Self::WorkDaysPerWeek => "work_days_per_week",
            Self::TransportCostPerDay => "transport_cost_per_day",
        }
    }
}

/// A single-field change to a job, carrying an already-coerced value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobUpdate {
    Name(String),
    HourlyWage(Decimal),
    WeeklyHours(Decimal),
    WorkDaysPerWeek(Decimal),
    TransportCostPerDay(Decimal),
}

impl JobUpdate {
    /// Builds an update from raw input text.
    ///
    /// Names are taken verbatim. Numeric fields are parsed as integers and
    /// fall back to 0 when the text is not a number.
    pub fn from_input(
        field: JobField,
        raw: &str,
    ) -> Self {
        match field {
            JobField::Name => Self::Name(raw.to_string()),
            JobField::HourlyWage => Self::HourlyWage(coerce_decimal(raw)),
            JobField::WeeklyHours => Self::WeeklyHours(coerce_decimal(raw)),
            JobField::WorkDaysPerWeek => Self::WorkDaysPerWeek(coerce_decimal(raw)),
            JobField::TransportCostPerDay => Self::TransportCostPerDay(coerce_decimal(raw)),
        }
    }

    pub fn field(&self) -> JobField {
        match self {
            Self::Name(_) => JobField::Name,
            Self::HourlyWage(_) => JobField::HourlyWage,
            Self::WeeklyHours(_) => JobField::WeeklyHours,
            Self::WorkDaysPerWeek(_) => JobField::WorkDaysPerWeek,
            Self::TransportCostPerDay(_) => JobField::TransportCostPerDay,
        }
    }
}

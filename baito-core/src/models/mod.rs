mod job;
mod locale;

pub use job::{Job, JobField, JobId, JobUpdate};
pub use locale::{Locale, ParseLocaleError};

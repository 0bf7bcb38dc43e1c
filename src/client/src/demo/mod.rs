//! Synthetic records for populating sample dashboards.

mod generator;
mod names;

pub use generator::{sample_job_duration, sample_record, DemoGenerator};
pub use names::{pronounceable_name, MAX_NAME_LEN};

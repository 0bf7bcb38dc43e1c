use chrono::{DateTime, SubsecRound, Utc};
use mockall::automock;

/// Source of wall-clock time for lifecycle transitions.
#[automock]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    /// Current time truncated to 100 ns, the resolution durations are stored
    /// at, so a stored duration always equals stop minus start.
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(7)
    }
}

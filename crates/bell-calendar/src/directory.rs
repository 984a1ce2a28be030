//! Acronym lookup seam.
//!
//! The engine never knows where schedules are stored; anything that can
//! answer `find_by_acronym` can front it.

use chrono::{DateTime, Utc};

use crate::countdown::{compute_countdown, CountdownResult};
use crate::schedule::ExchangeSchedule;

/// Read-only source of exchange schedules keyed by acronym.
pub trait ExchangeDirectory {
    /// Exact, case-sensitive match.
    fn find_by_acronym(&self, acronym: &str) -> Option<&ExchangeSchedule>;

    /// Every schedule, in the directory's listing order.
    fn schedules(&self) -> Box<dyn Iterator<Item = &ExchangeSchedule> + '_>;
}

impl ExchangeDirectory for [ExchangeSchedule] {
    fn find_by_acronym(&self, acronym: &str) -> Option<&ExchangeSchedule> {
        self.iter().find(|s| s.acronym() == acronym)
    }

    fn schedules(&self) -> Box<dyn Iterator<Item = &ExchangeSchedule> + '_> {
        Box::new(self.iter())
    }
}

/// Look `acronym` up and compute its countdown, or return the not-found
/// sentinel.
pub fn countdown_by_acronym<D: ExchangeDirectory + ?Sized>(
    directory: &D,
    acronym: &str,
    now: DateTime<Utc>,
) -> CountdownResult {
    match directory.find_by_acronym(acronym) {
        Some(schedule) => compute_countdown(schedule, now),
        None => CountdownResult::not_found(),
    }
}

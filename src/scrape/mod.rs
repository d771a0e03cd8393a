// src/scrape/mod.rs
//
// The session boundary. Driving the live page (clicking the date-select
// control, waiting out the loading spinner, locating the member rows)
// belongs to a RosterSession implementor; this module only drives the
// protocol and hands raw rows to the normalizer.

mod fixture;
pub use fixture::FixtureSession;

use std::collections::HashSet;

use crate::core::calendar::Calendar;
use crate::data::CanonicalRecord;
use crate::error::{Result, ScrapeError};
use crate::params::RecordShape;
use crate::runner::Progress;
use crate::specs::members;

/// One row as the page presents it, unnormalized. A None field means the
/// session could not locate that part of the row's markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawObservation {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub group: Option<String>,
}

/// Contract with the page-driving collaborator. Implementors guarantee
/// `member_rows` is answered only once the page has settled after
/// `select_date`; a row is never yielded mid-transition.
pub trait RosterSession {
    /// Values of the date-select control, in page order (`DD-MM-YYYY`).
    fn date_options(&mut self) -> Result<Vec<String>>;

    /// Select one option and wait for the roster to load.
    fn select_date(&mut self, option: &str) -> Result<()>;

    /// The member rows currently displayed.
    fn member_rows(&mut self) -> Result<Vec<RawObservation>>;

    /// Switch to the "Sulinngiffeqarpoq" (on leave) sub-view if the page
    /// offers one; false when it doesn't. Implementors swallow their own
    /// click failures.
    fn open_leave_view(&mut self) -> Result<bool>;
}

/// `DD-MM-YYYY` option value → ISO date.
pub fn option_to_iso(option: &str) -> String {
    option.split('-').rev().collect::<Vec<_>>().join("-")
}

/// Drive the session through every known sampling date and collect the
/// normalized observations. Malformed rows are logged and excluded; an
/// unknown sampling date aborts the run: the term table is stale and
/// guessing would corrupt history.
pub fn collect_people(
    session: &mut dyn RosterSession,
    calendar: &Calendar,
    shape: RecordShape,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<CanonicalRecord>> {
    let mut options = session.date_options()?;
    let mut seen = HashSet::new();
    options.retain(|o| seen.insert(o.clone()));

    if let Some(p) = progress.as_deref_mut() {
        p.begin(options.len());
    }

    let mut people = Vec::new();
    for option in &options {
        let date = option_to_iso(option);
        calendar.term_for(&date)?; // fail before driving the UI

        session.select_date(option)?;
        normalize_rows(&mut people, session.member_rows()?, &date, calendar, shape)?;

        if session.open_leave_view()? {
            normalize_rows(&mut people, session.member_rows()?, &date, calendar, shape)?;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&date);
        }
    }
    Ok(people)
}

fn normalize_rows(
    out: &mut Vec<CanonicalRecord>,
    rows: Vec<RawObservation>,
    date: &str,
    calendar: &Calendar,
    shape: RecordShape,
) -> Result<()> {
    for raw in rows {
        match members::normalize(&raw, date, calendar, shape) {
            Ok(rec) => out.push(rec),
            Err(e @ ScrapeError::MalformedRow { .. }) => loge!("row excluded: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_reverse_into_iso() {
        assert_eq!(option_to_iso("23-05-2016"), "2016-05-23");
        assert_eq!(option_to_iso("04-04-1979"), "1979-04-04");
    }
}

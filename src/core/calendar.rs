// src/core/calendar.rs
//
// Term and chamber classification from the fixed election/appointment
// date tables. Everything here is pure: the tables are compiled in, and
// an unknown sampling date is a hard error: it means the tables are
// stale, and guessing a term would corrupt history.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{Result, ScrapeError};
use crate::params::{CHAMBER_CUTOFF_YEAR, NEW_CHAMBER, OLD_CHAMBER};

// http://www.ina.gl/media/28274/Valg%20til%20Inatsisartut%20DA%20WEB.pdf, pp. 31-33
// http://lovgivning.gl/Lov?rid=%7b83F511C8-78BE-4B26-8277-291DFE01D57E%7d&sc_lang=da-DK
const ELECTION_DATES: &[(&str, &str)] = &[
    ("1979-04-04", "1"),
    ("1983-04-12", "2"),
    ("1984-06-06", "3"),
    ("1987-05-26", "4"),
    ("1991-03-05", "5"),
    ("1995-03-04", "6"),
    ("1999-02-16", "7"),
    ("2002-12-03", "8"),
    ("2005-11-15", "9"),
    ("2009-06-02", "10"),
    ("2013-03-12", "11"),
    ("2014-11-28", "12"),
    ("2018-04-24", "13"),
];

// Mid-term re-sampling dates; the site's date control offers these in
// addition to the election dates.
const EXTRA_APPT_DATES: &[(&str, &str)] = &[
    ("1979-05-01", "1"),
    ("2015-11-03", "12"),
    ("2016-05-23", "12"),
    ("2016-09-16", "12"),
    ("2016-10-31", "12"),
    ("2017-01-30", "12"),
    ("2017-02-23", "12"),
    ("2017-04-24", "12"),
    ("2017-09-20", "12"),
    ("2017-09-22", "12"),
    ("2017-10-09", "12"),
    ("2018-01-11", "12"),
    ("2018-05-15", "13"),
];

// Terms re-sampled finely enough to carry per-window start/end dates.
const WINDOWED_TERMS: &[&str] = &["12"];

/// One legislative period, bounded by election dates. The last term is
/// open-ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Immutable date → term lookup, built once at startup.
pub struct Calendar {
    appointments: BTreeMap<&'static str, &'static str>,
    elections: Vec<(&'static str, &'static str)>,
}

impl Calendar {
    pub fn new() -> Self {
        let mut appointments = BTreeMap::new();
        for &(date, term) in ELECTION_DATES.iter().chain(EXTRA_APPT_DATES) {
            appointments.insert(date, term);
        }
        let mut elections = ELECTION_DATES.to_vec();
        elections.sort_unstable();
        Self { appointments, elections }
    }

    /// Term seated on `date`. `date` must be one of the known sampling
    /// dates; anything else errors out rather than guessing.
    pub fn term_for(&self, date: &str) -> Result<&'static str> {
        self.appointments
            .get(date)
            .copied()
            .ok_or_else(|| ScrapeError::UnknownDate(s!(date)))
    }

    /// All terms in order, each ending the day before the next election.
    pub fn term_bounds(&self) -> Result<Vec<Term>> {
        let mut out = Vec::with_capacity(self.elections.len());
        for (i, &(start, id)) in self.elections.iter().enumerate() {
            let end_date = match self.elections.get(i + 1) {
                Some(&(next, _)) => Some(shift_date(next, -1)?),
                None => None,
            };
            out.push(Term {
                id: s!(id),
                name: join!(chamber_for(start)?, " ", id),
                start_date: s!(start),
                end_date,
            });
        }
        Ok(out)
    }

    /// Sampling windows of a windowed term: each appointment date paired
    /// with the day before the next one; the last window stays open.
    /// Empty for terms sampled only at their election date.
    pub fn sample_windows(&self, term: &str) -> Result<Vec<(String, Option<String>)>> {
        if !WINDOWED_TERMS.contains(&term) {
            return Ok(Vec::new());
        }
        let dates: Vec<&str> = self
            .appointments
            .iter()
            .filter(|&(_, t)| *t == term)
            .map(|(d, _)| *d)
            .collect();
        let mut out = Vec::with_capacity(dates.len());
        for (i, d) in dates.iter().enumerate() {
            let end = match dates.get(i + 1) {
                Some(next) => Some(shift_date(next, -1)?),
                None => None,
            };
            out.push((s!(*d), end));
        }
        Ok(out)
    }

    /// The window opening at `date`, or None when the term carries no
    /// sub-term timing.
    pub fn sample_window(&self, term: &str, date: &str) -> Result<Option<(String, Option<String>)>> {
        Ok(self
            .sample_windows(term)?
            .into_iter()
            .find(|(start, _)| start == date))
    }
}

impl Default for Calendar {
    fn default() -> Self { Self::new() }
}

/// Chamber name is purely a function of the year: the legislature was
/// renamed from Landsting to Inatsisartut with the 2009 election.
pub fn chamber_for(date: &str) -> Result<&'static str> {
    let d = parse_date(date)?;
    Ok(if d.year() < CHAMBER_CUTOFF_YEAR { OLD_CHAMBER } else { NEW_CHAMBER })
}

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ScrapeError::BadDate(s!(date)))
}

/// ISO date in, ISO date out, shifted by whole days.
pub fn shift_date(date: &str, days: i64) -> Result<String> {
    let shifted = parse_date(date)?
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| ScrapeError::BadDate(s!(date)))?;
    Ok(shifted.format("%Y-%m-%d").to_string())
}

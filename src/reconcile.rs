// src/reconcile.rs
//
// Collapses repeated per-date roster samples into a minimal set of
// contiguous membership intervals. A person re-sampled on calendar-
// adjacent windows for the same group held one tenure, not several; only
// a real gap (resignation, leave without return) closes an interval.

use std::collections::HashSet;

use crate::core::calendar::shift_date;
use crate::data::{CanonicalRecord, MembershipInterval};
use crate::error::Result;

/// Exact-tuple dedup over the whole observation set, first-seen order
/// preserved. Runs before any grouping: the "on leave" sub-view often
/// re-lists identical people, and a duplicate surviving into a run would
/// read as a zero-length gap and split an interval that isn't split.
pub fn dedup(records: Vec<CanonicalRecord>) -> Vec<CanonicalRecord> {
    let mut seen = HashSet::new();
    records.into_iter().filter(|r| seen.insert(r.clone())).collect()
}

/// Reconcile an observation set into membership intervals.
///
/// Records carrying a sample window are sorted by (name, group, start),
/// partitioned into runs of exact (name, group) equality, and each run is
/// folded left to right: a record extends the open interval iff the open
/// end, advanced one day, equals the record's start. The open interval's
/// start never moves; only its end advances. Windowless records (chamber
/// shape, single-sample terms) pass through untouched, after the merged
/// runs.
///
/// Deterministic and idempotent: re-running on its own output yields the
/// same intervals. Unparsable dates abort the whole pass, since dropping a
/// record here would corrupt its neighbors' boundaries.
pub fn reconcile(records: Vec<CanonicalRecord>) -> Result<Vec<MembershipInterval>> {
    let records = dedup(records);

    let (mut windowed, rest): (Vec<_>, Vec<_>) =
        records.into_iter().partition(CanonicalRecord::has_window);

    windowed.sort_by(|a, b| {
        (&a.name, &a.group, a.start()).cmp(&(&b.name, &b.group, b.start()))
    });

    let mut out = Vec::with_capacity(windowed.len() + rest.len());
    let mut open: Option<CanonicalRecord> = None;

    for rec in windowed {
        open = match open.take() {
            None => Some(rec),
            Some(mut cur) => {
                if same_run(&cur, &rec) && adjacent(&cur, &rec)? {
                    cur.extend_to(rec.end().cloned());
                    Some(cur)
                } else {
                    out.push(MembershipInterval::new(cur));
                    Some(rec)
                }
            }
        };
    }
    if let Some(cur) = open {
        out.push(MembershipInterval::new(cur));
    }

    out.extend(rest.into_iter().map(MembershipInterval::new));
    Ok(out)
}

fn same_run(a: &CanonicalRecord, b: &CanonicalRecord) -> bool {
    a.name == b.name && a.group == b.group
}

/// Zero-gap adjacency: the open end, advanced one day, is the next start.
/// An open-ended accumulator never merges forward.
fn adjacent(cur: &CanonicalRecord, next: &CanonicalRecord) -> Result<bool> {
    match (cur.end(), next.start()) {
        (Some(end), Some(start)) => Ok(&shift_date(end, 1)? == start),
        _ => Ok(false),
    }
}

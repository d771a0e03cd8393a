// src/data.rs
//
// Canonical record types shared by the pipeline.
//
// - CanonicalRecord: one normalized, term-tagged observation of a person's
//   group membership at one sampling point.
// - MembershipInterval: the reconciled output unit. Constructed only by
//   reconcile::reconcile() and never mutated afterwards; the persistence
//   layer consumes it exactly once.

/// Shape-dependent tail of a record: the exact sample window it covers,
/// or the chamber label of its sampling date.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Detail {
    /// `start`/`end` are None for terms sampled only at their election
    /// date, and `end` is None for the open final window of a term.
    Interval {
        start: Option<String>,
        end: Option<String>,
    },
    Chamber(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalRecord {
    pub name: String,
    pub email: Option<String>,
    pub image: Option<String>,
    pub term: String,
    pub group: String,
    pub group_id: String,
    pub detail: Detail,
}

impl CanonicalRecord {
    /// Start of the record's sample window, if it carries one.
    pub fn start(&self) -> Option<&String> {
        match &self.detail {
            Detail::Interval { start, .. } => start.as_ref(),
            Detail::Chamber(_) => None,
        }
    }

    /// End of the record's sample window. None also for open windows.
    pub fn end(&self) -> Option<&String> {
        match &self.detail {
            Detail::Interval { end, .. } => end.as_ref(),
            Detail::Chamber(_) => None,
        }
    }

    /// True for records the adjacency merge applies to.
    pub fn has_window(&self) -> bool {
        self.start().is_some()
    }

    /// Advance the window's end; the start never moves once set.
    pub fn extend_to(&mut self, new_end: Option<String>) {
        if let Detail::Interval { end, .. } = &mut self.detail {
            *end = new_end;
        }
    }
}

/// A gap-free span of continuous tenure, folded from one or more
/// calendar-adjacent records of the same (name, group).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipInterval(CanonicalRecord);

impl MembershipInterval {
    pub(crate) fn new(record: CanonicalRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &CanonicalRecord {
        &self.0
    }

    pub fn into_record(self) -> CanonicalRecord {
        self.0
    }
}

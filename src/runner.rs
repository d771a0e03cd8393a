// src/runner.rs
use std::path::PathBuf;

use crate::core::calendar::{Calendar, Term};
use crate::error::Result;
use crate::params::Params;
use crate::reconcile;
use crate::scrape::{self, RosterSession};
use crate::store::Store;

/// Optional progress sink for the frontend.
/// CLI: print lines; anything else: update its own display.
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _date: &str) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summary of what was produced.
pub struct RunSummary {
    pub people: usize,
    pub terms: usize,
    pub db_path: PathBuf,
}

/// Top-level runner: collect observations through the session, reconcile
/// them into minimal intervals, persist both streams.
pub fn run(
    params: &Params,
    session: &mut dyn RosterSession,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let calendar = Calendar::new();

    let mut people =
        scrape::collect_people(session, &calendar, params.shape, progress.as_deref_mut())?;
    logf!("collected {} observations", people.len());

    if let Some(term) = &params.term_filter {
        people.retain(|r| &r.term == term);
    }

    let intervals = reconcile::reconcile(people)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} rows after reconciliation", intervals.len()));
    }

    let mut store = Store::open(&params.out, params.shape)?;
    let people_written = store.save_people(&intervals)?;
    let terms = calendar.term_bounds()?;
    let terms_written = store.save_terms(&terms)?;
    logf!(
        "wrote {} data rows, {} terms to {}",
        people_written,
        terms_written,
        params.out.display()
    );

    Ok(RunSummary {
        people: people_written,
        terms: terms_written,
        db_path: params.out.clone(),
    })
}

/// Derived term table (CLI --list-terms).
pub fn list_terms() -> Result<Vec<Term>> {
    Calendar::new().term_bounds()
}

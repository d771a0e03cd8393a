// src/store.rs
use std::path::Path;

use rusqlite::{Connection, params};

use crate::core::calendar::Term;
use crate::data::{Detail, MembershipInterval};
use crate::error::Result;
use crate::params::RecordShape;

/// SQLite sink for the two record streams. Every write is an upsert on
/// the stream's uniqueness key, so re-running a scrape never duplicates
/// rows.
///
/// Absent window bounds are stored as empty strings, not NULL: SQLite
/// treats NULLs as distinct inside UNIQUE, and NULL bounds would let the
/// same windowless row pile up across runs. Absent email/photo and the
/// open end of the last term stay NULL; they are not part of any key.
pub struct Store {
    conn: Connection,
    shape: RecordShape,
}

impl Store {
    pub fn open(path: &Path, shape: RecordShape) -> Result<Self> {
        Self::init(Connection::open(path)?, shape)
    }

    /// In-memory store, for tests.
    pub fn in_memory(shape: RecordShape) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, shape)
    }

    fn init(conn: Connection, shape: RecordShape) -> Result<Self> {
        let store = Self { conn, shape };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        match self.shape {
            RecordShape::Interval => self.conn.execute(
                "CREATE TABLE IF NOT EXISTS data
                 (name, email, image, term, \"group\", group_id, start_date, end_date,
                  UNIQUE (name, term, \"group\", start_date, end_date))",
                [],
            )?,
            RecordShape::Chamber => self.conn.execute(
                "CREATE TABLE IF NOT EXISTS data
                 (name, email, image, term, \"group\", group_id, chamber,
                  UNIQUE (name, term, \"group\"))",
                [],
            )?,
        };
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS terms
             (id, name, start_date, end_date, UNIQUE (id))",
            [],
        )?;
        Ok(())
    }

    pub fn save_people(&mut self, people: &[MembershipInterval]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = match self.shape {
                RecordShape::Interval => {
                    tx.prepare("INSERT OR REPLACE INTO data VALUES (?, ?, ?, ?, ?, ?, ?, ?)")?
                }
                RecordShape::Chamber => {
                    tx.prepare("INSERT OR REPLACE INTO data VALUES (?, ?, ?, ?, ?, ?, ?)")?
                }
            };
            for interval in people {
                let rec = interval.record();
                match &rec.detail {
                    Detail::Interval { start, end } => stmt.execute(params![
                        rec.name,
                        rec.email,
                        rec.image,
                        rec.term,
                        rec.group,
                        rec.group_id,
                        start.clone().unwrap_or_default(),
                        end.clone().unwrap_or_default(),
                    ])?,
                    Detail::Chamber(chamber) => stmt.execute(params![
                        rec.name,
                        rec.email,
                        rec.image,
                        rec.term,
                        rec.group,
                        rec.group_id,
                        chamber,
                    ])?,
                };
            }
        }
        tx.commit()?;
        Ok(people.len())
    }

    pub fn save_terms(&mut self, terms: &[Term]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT OR REPLACE INTO terms VALUES (?, ?, ?, ?)")?;
            for t in terms {
                stmt.execute(params![t.id, t.name, t.start_date, t.end_date])?;
            }
        }
        tx.commit()?;
        Ok(terms.len())
    }

    pub fn people_count(&self) -> Result<u64> {
        let n = self.conn.query_row("SELECT COUNT(*) FROM data", [], |r| r.get(0))?;
        Ok(n)
    }

    pub fn terms_count(&self) -> Result<u64> {
        let n = self.conn.query_row("SELECT COUNT(*) FROM terms", [], |r| r.get(0))?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CanonicalRecord;

    fn interval_rec(name: &str, start: &str, end: Option<&str>) -> MembershipInterval {
        MembershipInterval::new(CanonicalRecord {
            name: s!(name),
            email: Some(s!("x@ina.gl")),
            image: None,
            term: s!("12"),
            group: s!("Siumut"),
            group_id: s!("siumut"),
            detail: Detail::Interval {
                start: Some(s!(start)),
                end: end.map(String::from),
            },
        })
    }

    #[test]
    fn saving_twice_does_not_duplicate() {
        let mut store = Store::in_memory(RecordShape::Interval).unwrap();
        let rows = vec![
            interval_rec("A", "2015-11-03", Some("2016-09-15")),
            interval_rec("B", "2015-11-03", None),
        ];
        store.save_people(&rows).unwrap();
        store.save_people(&rows).unwrap();
        assert_eq!(store.people_count().unwrap(), 2);
    }

    #[test]
    fn chamber_rows_upsert_on_name_term_group() {
        let mut store = Store::in_memory(RecordShape::Chamber).unwrap();
        let rec = MembershipInterval::new(CanonicalRecord {
            name: s!("Old Member"),
            email: None,
            image: None,
            term: s!("5"),
            group: s!("Atassut"),
            group_id: s!("atassut"),
            detail: Detail::Chamber(s!("Landsting")),
        });
        store.save_people(std::slice::from_ref(&rec)).unwrap();
        store.save_people(std::slice::from_ref(&rec)).unwrap();
        assert_eq!(store.people_count().unwrap(), 1);
    }

    #[test]
    fn terms_upsert_on_id() {
        let mut store = Store::in_memory(RecordShape::Interval).unwrap();
        let terms = vec![Term {
            id: s!("13"),
            name: s!("Inatsisartut 13"),
            start_date: s!("2018-04-24"),
            end_date: None,
        }];
        store.save_terms(&terms).unwrap();
        store.save_terms(&terms).unwrap();
        assert_eq!(store.terms_count().unwrap(), 1);
    }
}

// src/scrape/fixture.rs
//
// Offline RosterSession backed by a captured roster dump, so the whole
// pipeline runs without a browser. Dump format, one observation per line:
//
//   date <TAB> view <TAB> name <TAB> email <TAB> photo <TAB> group
//
// `date` is ISO, `view` is "main" or "leave", empty cells mean the field
// was absent on the page.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::tsv;

use super::{RawObservation, RosterSession};

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Main,
    Leave,
}

struct Entry {
    view: View,
    row: RawObservation,
}

pub struct FixtureSession {
    options: Vec<String>,              // DD-MM-YYYY, dump order
    rows: HashMap<String, Vec<Entry>>, // keyed by option value
    selected: Option<String>,
    view: View,
}

impl FixtureSession {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut options = Vec::new();
        let mut rows: HashMap<String, Vec<Entry>> = HashMap::new();

        for (n, line) in tsv::parse_rows(text).into_iter().enumerate() {
            if line.len() != 6 {
                return Err(ScrapeError::Fixture(format!(
                    "row {}: expected 6 columns, got {}",
                    n + 1,
                    line.len()
                )));
            }
            let option = iso_to_option(&line[0]);
            let view = match line[1].as_str() {
                "main" => View::Main,
                "leave" => View::Leave,
                other => {
                    return Err(ScrapeError::Fixture(format!(
                        "row {}: unknown view {other:?}",
                        n + 1
                    )));
                }
            };
            if !rows.contains_key(&option) {
                options.push(option.clone());
            }
            rows.entry(option).or_default().push(Entry {
                view,
                row: RawObservation {
                    name: cell(&line[2]),
                    email: cell(&line[3]),
                    photo: cell(&line[4]),
                    group: cell(&line[5]),
                },
            });
        }

        Ok(Self { options, rows, selected: None, view: View::Main })
    }

    fn selected(&self) -> Result<&str> {
        self.selected
            .as_deref()
            .ok_or_else(|| ScrapeError::Session(s!("no date selected")))
    }
}

fn cell(v: &str) -> Option<String> {
    if v.is_empty() { None } else { Some(s!(v)) }
}

/// ISO dump date → the page's `DD-MM-YYYY` option encoding.
fn iso_to_option(date: &str) -> String {
    date.split('-').rev().collect::<Vec<_>>().join("-")
}

impl RosterSession for FixtureSession {
    fn date_options(&mut self) -> Result<Vec<String>> {
        Ok(self.options.clone())
    }

    fn select_date(&mut self, option: &str) -> Result<()> {
        if !self.rows.contains_key(option) {
            return Err(ScrapeError::Session(format!("no such date option: {option}")));
        }
        self.selected = Some(s!(option));
        self.view = View::Main;
        Ok(())
    }

    fn member_rows(&mut self) -> Result<Vec<RawObservation>> {
        let selected = self.selected()?;
        let view = self.view;
        Ok(self.rows[selected]
            .iter()
            .filter(|e| e.view == view)
            .map(|e| e.row.clone())
            .collect())
    }

    fn open_leave_view(&mut self) -> Result<bool> {
        let selected = self.selected()?;
        let has_leave = self.rows[selected].iter().any(|e| e.view == View::Leave);
        if has_leave {
            self.view = View::Leave;
        }
        Ok(has_leave)
    }
}

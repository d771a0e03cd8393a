// src/params.rs
use std::path::PathBuf;

// Source site
pub const BASE_URL: &str = "http://www.ina.gl/inatsisartut/sammensaetning-af-inatsisartut/";

// Stock "no portrait" image; rows carrying it have no real photo
pub const PLACEHOLDER_IMAGE: &str = "INAT-dukke-lys.jpg";

// The legislature was renamed with the 2009 election
pub const CHAMBER_CUTOFF_YEAR: i32 = 2009;
pub const OLD_CHAMBER: &str = "Landsting";
pub const NEW_CHAMBER: &str = "Inatsisartut";

// Link text of the "on leave" sub-view
pub const LEAVE_VIEW_LABEL: &str = "Sulinngiffeqarpoq";

// Output
pub const DEFAULT_DB_FILE: &str = "data.sqlite";

/// Column shape of the persisted rows. Older captures recorded the chamber
/// label per row; newer ones record the exact sample window instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape {
    Interval,
    Chamber,
}

#[derive(Clone)]
pub struct Params {
    pub input: Option<PathBuf>,       // captured roster dump (TSV)
    pub out: PathBuf,                 // SQLite output path
    pub shape: RecordShape,           // row shape, see RecordShape
    pub term_filter: Option<String>,  // keep only one term's records
    pub list_terms: bool,             // print derived term table, then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            out: PathBuf::from(DEFAULT_DB_FILE),
            shape: RecordShape::Interval,
            term_filter: None,
            list_terms: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

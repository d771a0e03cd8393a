// tests/pipeline.rs
//
// End-to-end: captured dump → session → normalize → reconcile → SQLite.

use std::fs;
use std::path::PathBuf;

use ina_scrape::core::calendar::Calendar;
use ina_scrape::params::{Params, RecordShape};
use ina_scrape::runner::{self, NullProgress};
use ina_scrape::scrape::{self, FixtureSession};

const DUMP: &str = "\
# date\tview\tname\temail\tphoto\tgroup
2015-11-03\tmain\tJens Hansen\tmailto:jens@ina.gl\t/GetImage.aspx?image=/media/1/j.jpg\tSiumut
2015-11-03\tmain\tNaja Petersen\t\t/GetImage.aspx?image=/media/2/INAT-dukke-lys.jpg\tInuit_Ataqatigiit
2015-11-03\tleave\tJens Hansen\tmailto:jens@ina.gl\t/GetImage.aspx?image=/media/1/j.jpg\tSiumut
2016-05-23\tmain\tJens Hansen\tmailto:jens@ina.gl\t/GetImage.aspx?image=/media/1/j.jpg\tSiumut
2016-05-23\tmain\tBroken Row\tmailto:broken@ina.gl\t\tSiumut
2005-11-15\tmain\tOld Member\t\t/GetImage.aspx?image=/media/3/o.jpg\tAtassut
";

fn tmp_db(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ina_e2e_{name}.sqlite"));
    let _ = fs::remove_file(&p);
    p
}

#[test]
fn collect_includes_leave_rows_and_drops_malformed() {
    let cal = Calendar::new();
    let mut session = FixtureSession::parse(DUMP).unwrap();
    let people =
        scrape::collect_people(&mut session, &cal, RecordShape::Interval, None).unwrap();

    // 3 rows on 2015-11-03 (leave duplicate included), 1 on 2016-05-23
    // (the photo-less row is excluded), 1 on 2005-11-15.
    assert_eq!(people.len(), 5);
    assert!(people.iter().all(|r| r.name != "Broken Row"));
}

#[test]
fn full_pipeline_merges_dedups_and_persists() {
    let mut session = FixtureSession::parse(DUMP).unwrap();
    let mut params = Params::new();
    params.out = tmp_db("pipeline");

    let summary = runner::run(&params, &mut session, Some(&mut NullProgress)).unwrap();
    // Jens's adjacent windows merged, the leave duplicate deduped, Naja
    // and the term-9 row pass through.
    assert_eq!(summary.people, 3);
    assert_eq!(summary.terms, 13);

    let conn = rusqlite::Connection::open(&summary.db_path).unwrap();

    let (start, end): (String, String) = conn
        .query_row(
            "SELECT start_date, end_date FROM data WHERE name = 'Jens Hansen'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(start, "2015-11-03");
    assert_eq!(end, "2016-09-15");

    let (group, group_id): (String, String) = conn
        .query_row(
            "SELECT \"group\", group_id FROM data WHERE name = 'Naja Petersen'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(group, "Inuit Ataqatigiit");
    assert_eq!(group_id, "inuit_ataqatigiit");

    let (term_name, term_end): (String, String) = conn
        .query_row("SELECT name, end_date FROM terms WHERE id = '12'", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(term_name, "Inatsisartut 12");
    assert_eq!(term_end, "2018-04-23");

    // The last term stays open-ended.
    let open_end: Option<String> = conn
        .query_row("SELECT end_date FROM terms WHERE id = '13'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(open_end, None);
}

#[test]
fn rerunning_a_scrape_upserts_instead_of_duplicating() {
    let mut params = Params::new();
    params.out = tmp_db("rerun");

    let mut session = FixtureSession::parse(DUMP).unwrap();
    runner::run(&params, &mut session, None).unwrap();
    let mut session = FixtureSession::parse(DUMP).unwrap();
    let summary = runner::run(&params, &mut session, None).unwrap();
    assert_eq!(summary.people, 3);

    let conn = rusqlite::Connection::open(&summary.db_path).unwrap();
    let rows: u64 = conn
        .query_row("SELECT COUNT(*) FROM data", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 3);
}

#[test]
fn chamber_shape_records_the_chamber_instead_of_windows() {
    let mut params = Params::new();
    params.out = tmp_db("chamber");
    params.shape = RecordShape::Chamber;

    let mut session = FixtureSession::parse(DUMP).unwrap();
    let summary = runner::run(&params, &mut session, None).unwrap();
    // Jens's two samples collapse to one (name, term, group) row.
    assert_eq!(summary.people, 3);

    let conn = rusqlite::Connection::open(&summary.db_path).unwrap();
    let chamber: String = conn
        .query_row(
            "SELECT chamber FROM data WHERE name = 'Old Member'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(chamber, "Landsting");
}

#[test]
fn term_filter_restricts_the_data_stream() {
    let dump_path = std::env::temp_dir().join("ina_e2e_filter.tsv");
    fs::write(&dump_path, DUMP).unwrap();

    let mut params = Params::new();
    params.out = tmp_db("filter");
    params.term_filter = Some(String::from("9"));

    let mut session = FixtureSession::load(&dump_path).unwrap();
    let summary = runner::run(&params, &mut session, None).unwrap();
    assert_eq!(summary.people, 1);

    let conn = rusqlite::Connection::open(&summary.db_path).unwrap();
    let name: String = conn
        .query_row("SELECT name FROM data", [], |r| r.get(0))
        .unwrap();
    assert_eq!(name, "Old Member");
}

// src/cli.rs
use std::path::PathBuf;

use color_eyre::eyre::{Result, bail, eyre};

use crate::params::{Params, RecordShape};
use crate::runner::{self, Progress};
use crate::scrape::FixtureSession;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_terms {
        for t in runner::list_terms()? {
            println!(
                "{},{},{},{}",
                t.id,
                t.name,
                t.start_date,
                t.end_date.as_deref().unwrap_or("")
            );
        }
        return Ok(());
    }

    let input = params
        .input
        .clone()
        .ok_or_else(|| eyre!("missing --input <dump.tsv>; see --help"))?;
    let mut session = FixtureSession::load(&input)?;

    let summary = runner::run(&params, &mut session, Some(&mut CliProgress))?;
    println!(
        "Wrote {} data rows, {} terms to {}",
        summary.people,
        summary.terms,
        summary.db_path.display()
    );
    Ok(())
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        println!("{total} sampling dates");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, date: &str) {
        println!("  {date} done");
    }
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --input"))?;
                params.input = Some(PathBuf::from(v));}
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --out"))?;
                params.out = PathBuf::from(v);}
            "--shape" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --shape"))?;
                params.shape = match v.to_ascii_lowercase().as_str() {
                    "interval" => RecordShape::Interval,
                    "chamber" => RecordShape::Chamber,
                    other => bail!("Unknown shape: {other}"),
                };}
            "--term" => {
                params.term_filter =
                    Some(args.next().ok_or_else(|| eyre!("Missing value for --term"))?);}
            "--list-terms" => params.list_terms = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(())
}

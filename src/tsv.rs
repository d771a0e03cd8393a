// src/tsv.rs
//
// Line-per-row TSV reading/writing for captured roster dumps. Dumps are
// plain tab-separated text; blank lines and '#' comment lines are
// skipped.

use std::io::{self, Write};

pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|l| l.trim_end_matches('\r')) // CRLF tolerant
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
        .map(|l| l.split('\t').map(str::to_string).collect())
        .collect()
}

pub fn write_row<W: Write>(mut w: W, cells: &[&str]) -> io::Result<()> {
    writeln!(w, "{}", cells.join("\t"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        let rows = parse_rows("# header\n\na\tb\tc\r\nd\te\tf\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn empty_cells_survive() {
        let rows = parse_rows("a\t\tc");
        assert_eq!(rows, vec![vec!["a", "", "c"]]);
    }

    #[test]
    fn write_then_parse_round_trips() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["2016-05-23", "main", "Jens Hansen"]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(parse_rows(&text), vec![vec!["2016-05-23", "main", "Jens Hansen"]]);
    }
}

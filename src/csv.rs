// src/csv.rs
use std::io::{self, Write};

use crate::config::options::ExportOptions;
use crate::sort::RowContainer;
use crate::table::Tracklist;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the tracklist's visible cells in their current order.
pub fn write_tracklist<W: Write>(mut w: W, tl: &Tracklist, export: &ExportOptions) -> io::Result<()> {
    let sep = export.format.delim();

    if export.include_headers {
        let mut hdr = tl.header_labels();
        if export.show_stripes { hdr.push(s!("Stripes")); }
        write_row(&mut w, &hdr, sep)?;
    }
    for (row, mut cells) in tl.body.rows().iter().zip(tl.row_texts()) {
        if export.show_stripes { cells.push(row.stripes()); }
        write_row(&mut w, &cells, sep)?;
    }
    w.flush()
}

/// Same as [`write_tracklist`], into a `String`.
pub fn tracklist_to_string(tl: &Tracklist, export: &ExportOptions) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_tracklist(&mut buf, tl, export);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

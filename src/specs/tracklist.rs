// src/specs/tracklist.rs
//! Locate the track table on a Last.fm music page and read it into a
//! [`Tracklist`].
//!
//! Three layouts, tried in order:
//! 1. `<table class="… tracklist …">`: body rows get a hidden position cell.
//! 2. `<table id="albumTracklist">`: used as is.
//! 3. first `<table>` after the element (any tag) with `id="trackChart"`:
//!    the chart has no usable header, so one is synthesized, and every row
//!    gets an empty play-count cell for the scrobble fetcher to fill.

use std::{error::Error, fs};

use crate::config::options::Source;
use crate::core::net;
use crate::core::html::{
    self, attr_value, classes, find_open_tag_ci, has_class, inner_after_open_tag,
    next_tag_block_ci, open_tag, slice_between_ci, text_of,
};
use crate::table::{Cell, Layout, Row, Tbody, Tracklist, PLAY_COUNT_CELL, POSITION_CELL, SUBJECT_CELL};

/// Synthesized chart header: (class, label).
const CHART_HEADER: [(&str, &str); 7] = [
    ("positionCell",    ""),
    ("playbuttonCell",  ""),
    ("subjectCell",     "Track"),
    ("lovedCell",       ""),
    ("multibuttonCell", ""),
    ("reachCell",       "Listeners"),
    ("playCount",       "Scrobbles"),
];

/// Read the page behind `source` and parse it.
pub fn load(source: &Source) -> Result<Tracklist, Box<dyn Error>> {
    let doc = match source {
        Source::File(path) => fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?,
        Source::Remote(path) => net::http_get(&net::request_path(path))?,
    };
    parse(&doc)
}

pub fn parse(html_doc: &str) -> Result<Tracklist, Box<dyn Error>> {
    let (layout, table) = locate(html_doc).ok_or("tracklist table not found")?;
    logd!("Tracklist: found {:?} layout ({} bytes)", layout, table.len());

    let mut header = read_header(table);
    let mut rows = read_rows(table);

    match layout {
        Layout::Tracklist => {
            for (i, row) in rows.iter_mut().enumerate() {
                row.cells.insert(0, Cell::hidden(POSITION_CELL, &(i + 1).to_string()));
            }
        }
        Layout::Album => {}
        Layout::Chart => {
            header = CHART_HEADER.iter().map(|(c, l)| Cell::new(c, l)).collect();
            for row in rows.iter_mut() {
                if row.cell(PLAY_COUNT_CELL).is_none() {
                    row.cells.push(Cell::new(PLAY_COUNT_CELL, ""));
                }
            }
        }
    }

    logf!("Tracklist: {:?}, {} header cells, {} rows", layout, header.len(), rows.len());
    Ok(Tracklist { layout, header, body: Tbody::new(rows) })
}

/// Find the table and return its inner HTML.
fn locate(doc: &str) -> Option<(Layout, &str)> {
    if let Some(at) = find_open_tag_ci(doc, "table", 0, |t| has_class(t, "tracklist")) {
        return table_inner(doc, at).map(|t| (Layout::Tracklist, t));
    }
    let album = |t: &str| attr_value(t, "id").as_deref() == Some("albumTracklist");
    if let Some(at) = find_open_tag_ci(doc, "table", 0, album) {
        return table_inner(doc, at).map(|t| (Layout::Album, t));
    }

    logd!("Tracklist: no tracklist/albumTracklist table, trying #trackChart");
    let wrapper = html::find_id(doc, "trackChart")?;
    let at = find_open_tag_ci(doc, "table", wrapper, |_| true)?;
    table_inner(doc, at).map(|t| (Layout::Chart, t))
}

fn table_inner(doc: &str, at: usize) -> Option<&str> {
    slice_between_ci(&doc[at..], "<table", "</table>")
}

/// Header cells from `<thead>` (`<td>` or `<th>`).
fn read_header(table: &str) -> Vec<Cell> {
    let Some(thead) = slice_between_ci(table, "<thead", "</thead>") else {
        return Vec::new();
    };
    let cells = read_cells(thead, "<td", "</td>");
    if cells.is_empty() { read_cells(thead, "<th", "</th>") } else { cells }
}

fn read_rows(table: &str) -> Vec<Row> {
    let body = slice_between_ci(table, "<tbody", "</tbody>").unwrap_or_else(|| after_thead(table));

    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(body, "<tr", "</tr>", pos) {
        let tr = &body[tr_s..tr_e];
        pos = tr_e;

        // header rows outside <thead>
        let lc = html::to_lower(tr);
        if lc.contains("<th") && !lc.contains("<td") {
            continue;
        }
        let cells = read_cells(tr, "<td", "</td>");
        if cells.is_empty() { continue; }

        let link = subject_link(tr);
        let mut row = Row::new(rows.len(), cells);
        row.classes = classes(open_tag(tr));
        row.link = link;
        rows.push(row);
    }
    rows
}

fn after_thead(table: &str) -> &str {
    match html::to_lower(table).find("</thead>") {
        Some(i) => &table[i + "</thead>".len()..],
        None => table,
    }
}

fn read_cells(block: &str, open: &str, close: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(block, open, close, pos) {
        let cell_html = &block[s..e];
        let mut cell = Cell::new("", &text_of(inner_after_open_tag(cell_html)));
        cell.classes = classes(open_tag(cell_html));
        cells.push(cell);
        pos = e;
    }
    cells
}

/// `href` of the first link inside the row's subject cell.
fn subject_link(tr: &str) -> Option<String> {
    let at = find_open_tag_ci(tr, "td", 0, |t| has_class(t, SUBJECT_CELL))?;
    let a = find_open_tag_ci(tr, "a", at, |t| attr_value(t, "href").is_some())?;
    let end = tr[a..].find('>')? + a + 1;
    attr_value(&tr[a..end], "href")
}

// src/table.rs
//! Owned model of a tracklist table: the header row plus a `<tbody>` of
//! rows the sort engine can reorder.
//!
//! Rows keep the index they had on the page (`id`) so data fetched later
//! (scrobble counts) lands on the right row whatever the current order.

use crate::config::consts::{STRIPE_FIRST, STRIPE_LAST, STRIPE_ODD};
use crate::sort::{Column, Registry, RowContainer, TableRow};

pub const POSITION_CELL: &str = "positionCell";
pub const SUBJECT_CELL: &str = "subjectCell";
pub const PLAY_COUNT_CELL: &str = "playCount";

/// Which of the page layouts the table was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `table.tracklist`: positions are injected.
    Tracklist,
    /// `table#albumTracklist`: the page carries its own positions.
    Album,
    /// `#trackChart table`: header synthesized, play counts fetched.
    Chart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub classes: Vec<String>,
    pub text: String,
    /// Present for sorting only, not shown.
    pub hidden: bool,
}

impl Cell {
    pub fn new(class: &str, text: &str) -> Self {
        Self {
            classes: class.split_whitespace().map(|c| s!(c)).collect(),
            text: s!(text),
            hidden: false,
        }
    }

    pub fn hidden(class: &str, text: &str) -> Self {
        Self { hidden: true, ..Self::new(class, text) }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// 0-based index on the page as loaded.
    pub id: usize,
    pub classes: Vec<String>,
    pub cells: Vec<Cell>,
    /// Track page (`href` of the subject cell's link).
    pub link: Option<String>,
}

impl Row {
    pub fn new(id: usize, cells: Vec<Cell>) -> Self {
        Self { id, classes: Vec::new(), cells, link: None }
    }

    pub fn cell(&self, class: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.has_class(class))
    }

    pub fn cell_mut(&mut self, class: &str) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.has_class(class))
    }

    pub fn visible_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.hidden)
    }

    /// Banding markers currently on the row, in `first last odd` order.
    pub fn stripes(&self) -> String {
        [STRIPE_FIRST, STRIPE_LAST, STRIPE_ODD]
            .iter()
            .filter(|m| self.has_class(m))
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TableRow for Row {
    fn cell_text(&self, class: &str) -> Option<&str> {
        self.cell(class).map(|c| c.text.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(s!(class));
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// Rows in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tbody {
    rows: Vec<Row>,
}

impl Tbody {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current order as page ids.
    pub fn ids(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn by_id_mut(&mut self, id: usize) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }
}

impl RowContainer for Tbody {
    type Row = Row;

    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    fn detach_rows(&mut self) -> Vec<Row> {
        std::mem::take(&mut self.rows)
    }

    fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracklist {
    pub layout: Layout,
    pub header: Vec<Cell>,
    pub body: Tbody,
}

impl Tracklist {
    /// Header cells paired with the column they sort, if any.
    pub fn header_columns<'a>(&'a self, registry: &'a Registry) -> impl Iterator<Item = (&'a Cell, Option<Column>)> + 'a {
        self.header.iter().filter(|c| !c.hidden).map(move |cell| {
            let col = cell
                .classes
                .iter()
                .find_map(|class| registry.by_header_class(class))
                .map(|d| d.column);
            (cell, col)
        })
    }

    /// Columns this table has a header trigger for.
    pub fn sortable_columns(&self, registry: &Registry) -> Vec<Column> {
        self.header_columns(registry).filter_map(|(_, c)| c).collect()
    }

    /// `(row id, link)` of rows whose play count still has to be fetched.
    pub fn scrobble_links(&self) -> Vec<(usize, String)> {
        self.body
            .rows()
            .iter()
            .filter(|r| r.cell(PLAY_COUNT_CELL).map(|c| c.text.is_empty()).unwrap_or(false))
            .filter_map(|r| r.link.clone().map(|l| (r.id, l)))
            .collect()
    }

    /// Fill play counts by row id. Returns how many rows were updated.
    pub fn apply_scrobbles(&mut self, counts: &[(usize, String)]) -> usize {
        let mut n = 0;
        for (id, count) in counts {
            if let Some(cell) = self.body.by_id_mut(*id).and_then(|r| r.cell_mut(PLAY_COUNT_CELL)) {
                cell.text = count.clone();
                n += 1;
            }
        }
        n
    }

    /// Header labels of the visible cells.
    pub fn header_labels(&self) -> Vec<String> {
        self.header.iter().filter(|c| !c.hidden).map(|c| c.text.clone()).collect()
    }

    /// Visible cell texts per row, in current order.
    pub fn row_texts(&self) -> Vec<Vec<String>> {
        self.body
            .rows()
            .iter()
            .map(|r| r.visible_cells().map(|c| c.text.clone()).collect())
            .collect()
    }
}

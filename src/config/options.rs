// src/config/options.rs
use std::path::PathBuf;

use crate::sort::Column;

/// Where the tracklist page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A saved page on disk.
    File(PathBuf),
    /// A path on the Last.fm host, e.g. `/music/Artist/+tracks`.
    Remote(String),
}

impl Source {
    /// Paths starting with `/music` are fetched, anything else is read from disk.
    pub fn guess(text: &str) -> Self {
        let t = text.trim();
        if t.starts_with("/music") {
            Source::Remote(s!(t))
        } else {
            Source::File(PathBuf::from(t))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub source: Option<Source>,
    /// Header clicks to replay, in order.
    pub sorts: Vec<Column>,
    pub fetch_scrobbles: bool,
    pub list_columns: bool,
    pub export: ExportOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: None,
            sorts: Vec::new(),
            fetch_scrobbles: false,
            list_columns: false,
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// `None` writes to stdout.
    pub out_path: Option<PathBuf>,
    pub include_headers: bool,
    /// Append each row's banding markers as a last column.
    pub show_stripes: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: None,
            include_headers: false,
            show_stripes: false,
        }
    }
}

// src/gui/actions/load.rs
use crate::{
    config::{consts::INITIAL_SORTED_COLUMN, options::Source},
    gui::app::App,
    sort::{restripe, Registry, RowContainer, TableSorter},
    specs::tracklist,
};

/// Load the page named in the path field. A fresh table gets fresh sort memory.
pub fn load(app: &mut App) {
    if app.running {
        app.status("Wait for the fetch to finish");
        return;
    }
    let text = app.path_text.trim();
    if text.is_empty() {
        app.status("Enter a saved page or a /music/… path");
        return;
    }
    let source = Source::guess(text);
    logf!("Load: {:?}", source);

    match tracklist::load(&source) {
        Ok(mut tl) => {
            restripe(tl.body.rows_mut());
            let msg = format!("Loaded {:?} tracklist, {} rows", tl.layout, tl.body.len());
            app.sorter = TableSorter::initialize(Registry::standard(), INITIAL_SORTED_COLUMN);
            app.tracklist = Some(tl);
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

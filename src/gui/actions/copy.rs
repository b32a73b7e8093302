// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    config::options::ExportFormat,
    csv,
    gui::app::App,
};

/// Copy the table, in its current order, to the clipboard as TSV.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(tl) = app.tracklist.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let mut export = app.export.clone();
    export.format = ExportFormat::Tsv;
    export.include_headers = true;

    let txt = csv::tracklist_to_string(tl, &export);
    logf!("Copy: rows={}", tl.body.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

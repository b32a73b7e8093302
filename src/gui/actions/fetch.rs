// src/gui/actions/fetch.rs
use std::thread;

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Fetch missing play counts on a background thread. `App::update` applies
/// them once the thread hands them over.
pub fn fetch_scrobbles(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let Some(tl) = app.tracklist.as_ref() else {
        app.status("Nothing loaded");
        return;
    };
    let links = tl.scrobble_links();
    if links.is_empty() {
        app.status("No play counts to fetch");
        logd!("Fetch: clicked, but every row has a count or no link");
        return;
    }

    logf!("Fetch: Begin {} rows", links.len());
    app.running = true;

    let status = app.status.clone();
    let pending = app.pending.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let counts = scrape::collect_scrobbles(&links, Some(&mut prog));
        if let Ok(mut slot) = pending.lock() {
            *slot = Some(counts);
        }
        ctx.request_repaint();
    });
}

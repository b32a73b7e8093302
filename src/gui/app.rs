// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::INITIAL_SORTED_COLUMN, options::ExportOptions},
    sort::{Registry, TableSorter},
    table::Tracklist,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Total Scrobbles",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

/// Counts handed back by the fetch thread.
pub type PendingCounts = Arc<Mutex<Option<Vec<(usize, String)>>>>;

pub struct App {
    // source field (file path or /music/... path)
    pub path_text: String,

    // the loaded table and its sort memory; replaced together on load
    pub tracklist: Option<Tracklist>,
    pub sorter: TableSorter,

    pub export: ExportOptions,

    // status/progress (fetch thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: PendingCounts,
}

impl App {
    pub fn new() -> Self {
        logf!("Init: GUI start");
        Self {
            path_text: s!(),
            tracklist: None,
            sorter: TableSorter::initialize(Registry::standard(), INITIAL_SORTED_COLUMN),
            export: ExportOptions::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply counts from a finished fetch, if any.
    fn poll_pending(&mut self) {
        let done = self.pending.lock().ok().and_then(|mut g| g.take());
        if let Some(counts) = done {
            self.running = false;
            if let Some(tl) = self.tracklist.as_mut() {
                let n = tl.apply_scrobbles(&counts);
                logf!("Fetch: applied {} play counts", n);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();

        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            crate::gui::components::top_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::data_table::draw(ui, self);
        });

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}

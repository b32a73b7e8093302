// src/gui/components/top_bar.rs
//
// Source field, actions and status line.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.path_text)
                .hint_text("saved page.html or /music/Artist/+tracks")
                .desired_width(380.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.add_enabled(!app.running, egui::Button::new("Load")).clicked() || enter {
            actions::load(app);
        }

        let can_fetch = !app.running
            && app.tracklist.as_ref().map(|t| !t.scrobble_links().is_empty()).unwrap_or(false);
        if ui.add_enabled(can_fetch, egui::Button::new("Fetch scrobbles")).clicked() {
            actions::fetch_scrobbles(app, ui.ctx());
        }

        if ui.add_enabled(app.tracklist.is_some(), egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
    });

    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
    });
    ui.add_space(4.0);
}

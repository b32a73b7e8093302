// src/gui/components/data_table.rs
//
// Draws the tracklist. Sortable headers are clickable; a click runs the
// sort engine on the table body. Rows marked `odd` get the faint band.

use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::{
    config::consts::STRIPE_ODD,
    gui::app::App,
    sort::{attach, Column, RowContainer, TableRow},
    table::Cell,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(tl) = app.tracklist.as_mut() else {
        ui.centered_and_justified(|ui| { ui.label("No tracklist loaded"); });
        return;
    };

    let header: Vec<(String, Option<Column>)> = tl
        .header_columns(app.sorter.registry())
        .map(|(cell, col)| (cell.text.clone(), col))
        .collect();
    let (cur_col, cur_dir) = app.sorter.current();

    let cols = header.len().max(
        tl.body.rows().iter().map(|r| r.visible_cells().count()).max().unwrap_or(0),
    );
    if cols == 0 {
        ui.label("Empty tracklist");
        return;
    }

    let mut clicked: Option<Column> = None;

    let mut table = TableBuilder::new(ui)
        .striped(false)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for ci in 0..cols {
        // the subject (title) column gets the room
        let is_subject = header.get(ci).map(|(_, c)| *c == Some(Column::Track)).unwrap_or(false);
        let col = if is_subject {
            TableColumn::remainder().at_least(160.0).clip(true)
        } else {
            TableColumn::auto().at_least(24.0).clip(true)
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut row| {
            for ci in 0..cols {
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let Some((label, col)) = header.get(ci) else { return; };

                    match col {
                        Some(col) => {
                            let mut text = if label.is_empty() { s!(col.id()) } else { label.clone() };
                            if *col == cur_col {
                                text = format!("{} {}", text, cur_dir.arrow());
                            }
                            let resp = ui.add(
                                egui::Label::new(RichText::new(text).strong())
                                    .sense(Sense::click())
                                    .selectable(false),
                            );
                            if resp.on_hover_cursor(CursorIcon::PointingHand).clicked() {
                                clicked = Some(*col);
                            }
                        }
                        None => {
                            ui.add(egui::Label::new(RichText::new(label.as_str()).strong()).selectable(false));
                        }
                    }
                });
            }
        })
        .body(|body| {
            let rows = tl.body.rows();
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return; };
                let odd = data.has_class(STRIPE_ODD);
                let cells: Vec<&Cell> = data.visible_cells().collect();

                for ci in 0..cols {
                    row.col(|ui| {
                        if odd {
                            let fill = ui.visuals().faint_bg_color;
                            ui.painter().rect_filled(ui.max_rect(), 0.0, fill);
                        }
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if let Some(cell) = cells.get(ci) {
                            ui.label(cell.text.as_str());
                        }
                    });
                }
            });
        });

    if let Some(col) = clicked {
        logf!("UI: header click {}", col);
        attach(&mut tl.body, col).fire(&mut app.sorter);
    }
}

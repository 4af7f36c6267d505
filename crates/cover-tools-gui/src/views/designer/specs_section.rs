use eframe::egui;

use super::state::DesignerState;

pub fn show(ui: &mut egui::Ui, state: &DesignerState) {
    let dims = &state.dims;
    let specs = &state.specs;
    let u = dims.unit.suffix();
    let (page_w, page_h) = specs.page_size(dims.bleed);

    egui::CollapsingHeader::new("📐 Calculated Specs")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("specs_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Trim width");
                    ui.monospace(format!("{:.2} {u}", specs.total_width));
                    ui.end_row();

                    ui.label("Trim height");
                    ui.monospace(format!("{:.2} {u}", specs.total_height));
                    ui.end_row();

                    ui.label("Page with bleed");
                    ui.monospace(format!("{page_w:.2} x {page_h:.2} {u}"));
                    ui.end_row();

                    ui.label("Back board");
                    ui.monospace(format!("{} .. {} {u}", dims.turn_in, specs.back_board_end));
                    ui.end_row();

                    ui.label("Spine");
                    ui.monospace(format!("{} .. {} {u}", specs.spine_start, specs.spine_end));
                    ui.end_row();

                    ui.label("Front board");
                    ui.monospace(format!(
                        "{} .. {} {u}",
                        specs.front_board_start,
                        specs.front_board_end(dims)
                    ));
                    ui.end_row();
                });
        });
}

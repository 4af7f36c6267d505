use eframe::egui;

use super::state::DesignerState;
use crate::ui_components::{button_group, dimension_field};
use cover_dieline::Unit;

pub fn show(ui: &mut egui::Ui, state: &mut DesignerState) {
    let mut changed = false;
    let suffix = state.dims.unit.suffix();

    ui.label("Unit");
    changed |= button_group(
        ui,
        &mut state.dims.unit,
        &[(Unit::Mm, "mm"), (Unit::Cm, "cm"), (Unit::Inch, "in")],
    );
    ui.add_space(6.0);

    egui::CollapsingHeader::new("📏 Boards")
        .default_open(true)
        .show(ui, |ui| {
            changed |= dimension_field(ui, "Board width", &mut state.dims.board_width, suffix);
            changed |= dimension_field(ui, "Board height", &mut state.dims.board_height, suffix);
        });

    egui::CollapsingHeader::new("📖 Spine & Hinge")
        .default_open(true)
        .show(ui, |ui| {
            changed |= dimension_field(ui, "Spine width", &mut state.dims.spine_width, suffix);
            changed |= dimension_field(ui, "Hinge gap", &mut state.dims.hinge_gap, suffix);
        });

    egui::CollapsingHeader::new("✂ Wrap & Bleed")
        .default_open(true)
        .show(ui, |ui| {
            changed |= dimension_field(ui, "Turn-in", &mut state.dims.turn_in, suffix);
            changed |= dimension_field(ui, "Bleed", &mut state.dims.bleed, suffix);
        });

    if changed {
        state.recompute();
    }
}

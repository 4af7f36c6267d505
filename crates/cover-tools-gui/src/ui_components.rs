//! Small egui form helpers shared by the side-panel sections

use eframe::egui;

/// Labeled drag-value row with a unit suffix; returns true when edited.
///
/// Unclamped on purpose: the layout engine accepts any value, and clamping
/// here would hide that contract.
pub fn dimension_field(ui: &mut egui::Ui, label: &str, value: &mut f32, suffix: &str) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .speed(0.1)
                .suffix(format!(" {suffix}")),
        )
        .changed()
    })
    .inner
}

/// Horizontal button group for enum selection; returns true on change.
pub fn button_group<T>(ui: &mut egui::Ui, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Copy,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        for (option_value, option_text) in options {
            let selected = *value == *option_value;
            if ui.selectable_label(selected, *option_text).clicked() && !selected {
                *value = *option_value;
                changed = true;
            }
        }
    });
    changed
}

mod dimensions_section;
mod export_section;
mod specs_section;
mod state;

pub use state::DesignerState;

use crate::preview;
use cover_async_runtime::CoverCommand;
use eframe::egui;
use tokio::sync::mpsc;

pub fn show_designer(
    ui: &mut egui::Ui,
    state: &mut DesignerState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
    status: &mut String,
) {
    egui::SidePanel::left("designer_controls")
        .min_width(300.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Cover Dieline");
                ui.separator();

                dimensions_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                specs_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                export_section::show(ui, state, command_tx, status);
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        preview::show(ui, &state.dims, &state.specs);
    });

    script_window(ui.ctx(), state);
}

fn script_window(ctx: &egui::Context, state: &mut DesignerState) {
    if !state.show_script {
        return;
    }

    let mut open = true;
    egui::Window::new("InDesign Script")
        .open(&mut open)
        .default_width(540.0)
        .show(ctx, |ui| {
            if state.script_pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Generating script...");
                });
            } else if let Some(script) = &state.script {
                egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                    let mut text = script.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
                if ui.button("📋 Copy to clipboard").clicked() {
                    ui.ctx().copy_text(script.clone());
                }
            }
        });
    state.show_script = open;
}

use eframe::egui;
use tokio::sync::mpsc;

use super::state::DesignerState;
use cover_async_runtime::CoverCommand;
use cover_dieline::{BLUEPRINT_FILENAME, template_filename};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut DesignerState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
    status: &mut String,
) {
    ui.label("Export");
    ui.add_space(4.0);

    if ui.button("📄 Template PDF (actual size)").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(template_filename(&state.dims, &state.specs))
            .save_file()
        {
            let _ = command_tx.send(CoverCommand::ExportTemplate {
                dims: state.dims,
                output_path: path,
            });
            *status = "Exporting template...".to_string();
        }
    }

    if ui.button("📐 Blueprint spec sheet (A4)").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(BLUEPRINT_FILENAME)
            .save_file()
        {
            let _ = command_tx.send(CoverCommand::ExportBlueprint {
                dims: state.dims,
                output_path: path,
            });
            *status = "Exporting blueprint...".to_string();
        }
    }

    ui.add_space(8.0);
    ui.label("Automation");
    ui.add_space(4.0);

    let button = egui::Button::new("⚙ Generate InDesign script");
    if ui.add_enabled(!state.script_pending, button).clicked() {
        state.script_generation += 1;
        state.script_pending = true;
        state.show_script = true;
        let _ = command_tx.send(CoverCommand::AdvisorScript {
            dims: state.dims,
            generation: state.script_generation,
        });
    }
}

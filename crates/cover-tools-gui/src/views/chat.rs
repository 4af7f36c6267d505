use cover_advisor::{ChatRole, ChatTurn};
use cover_async_runtime::CoverCommand;
use eframe::egui;
use tokio::sync::mpsc;

use super::designer::DesignerState;

pub struct ChatState {
    pub open: bool,
    pub turns: Vec<ChatTurn>,
    pub input: String,
    pub pending: bool,
    pub generation: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            turns: vec![ChatTurn::assistant(
                "Hello! I am your prepress assistant. Ask me about paper grain, \
                 glue types, or specific InDesign settings.",
            )],
            input: String::new(),
            pending: false,
            generation: 0,
        }
    }
}

impl ChatState {
    /// Accept an answer unless a newer question is already in flight.
    pub fn apply_answer(&mut self, text: String, generation: u64) {
        if generation != self.generation {
            log::debug!("Discarding stale advisory answer (generation {generation})");
            return;
        }
        self.turns.push(ChatTurn::assistant(text));
        self.pending = false;
    }
}

pub fn show_chat(
    ctx: &egui::Context,
    state: &mut ChatState,
    designer: &DesignerState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
) {
    if !state.open {
        return;
    }

    let mut open = state.open;
    egui::Window::new("Print Expert")
        .open(&mut open)
        .default_width(420.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(320.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for turn in &state.turns {
                        let who = match turn.role {
                            ChatRole::User => "You",
                            ChatRole::Assistant => "Expert",
                        };
                        ui.horizontal_wrapped(|ui| {
                            ui.strong(format!("{who}:"));
                            ui.label(&turn.text);
                        });
                        ui.add_space(4.0);
                    }
                    if state.pending {
                        ui.weak("Thinking...");
                    }
                });

            ui.separator();

            let mut send = false;
            ui.horizontal(|ui| {
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut state.input)
                        .hint_text("Ask about binding, paper, or glue...")
                        .desired_width(ui.available_width() - 60.0),
                );
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send = true;
                }
                if ui
                    .add_enabled(!state.pending, egui::Button::new("Send"))
                    .clicked()
                {
                    send = true;
                }
            });

            if send && !state.pending && !state.input.trim().is_empty() {
                let question = std::mem::take(&mut state.input);
                let history = state.turns.clone();
                state.turns.push(ChatTurn::user(question.clone()));
                state.generation += 1;
                state.pending = true;

                let context = cover_advisor::build_context(&designer.dims, &designer.specs);
                let _ = command_tx.send(CoverCommand::AdvisorAsk {
                    history,
                    question,
                    context,
                    generation: state.generation,
                });
            }
        });
    state.open = open;
}

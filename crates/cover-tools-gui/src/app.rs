use eframe::egui;
use tokio::sync::mpsc;

use cover_async_runtime::{CoverCommand, CoverUpdate};

use crate::logger::AppLogger;
use crate::views::{ChatState, DesignerState, show_chat, show_designer};

pub struct CoverToolsApp {
    designer: DesignerState,
    chat: ChatState,
    status: String,
    show_log: bool,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<CoverCommand>,
    update_rx: mpsc::UnboundedReceiver<CoverUpdate>,

    // Runtime handle, kept so spawned work outlives the frame loop
    _tokio_handle: tokio::runtime::Handle,
}

impl CoverToolsApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            designer: DesignerState::default(),
            chat: ChatState::default(),
            status: String::new(),
            show_log: false,
            logger,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        }
    }
}

impl eframe::App for CoverToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from the worker
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                CoverUpdate::TemplateExported { path } => {
                    self.status = format!("Template → {}", path.display());
                }
                CoverUpdate::BlueprintExported { path } => {
                    self.status = format!("Blueprint → {}", path.display());
                }
                CoverUpdate::AdvisorAnswer { text, generation } => {
                    self.chat.apply_answer(text, generation);
                    ctx.request_repaint();
                }
                CoverUpdate::AdvisorScriptReady { text, generation } => {
                    self.designer.apply_script(text, generation);
                    ctx.request_repaint();
                }
                CoverUpdate::Error { message } => {
                    log::error!("{message}");
                    self.status = format!("Error: {message}");
                }
            }
        }

        // Keep polling the update channel while the worker is busy
        if self.chat.pending || self.designer.script_pending {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Cover Tools");
                ui.separator();
                ui.toggle_value(&mut self.chat.open, "💬 Print Expert");
                ui.toggle_value(&mut self.show_log, "📋 Log");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.status.is_empty() {
                    if let Some(message) = self.logger.last_message() {
                        ui.weak(message);
                    }
                } else {
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_designer(ui, &mut self.designer, &self.command_tx, &mut self.status);
        });

        show_chat(ctx, &mut self.chat, &self.designer, &self.command_tx);

        if self.show_log {
            self.log_window(ctx);
        }
    }
}

impl CoverToolsApp {
    fn log_window(&mut self, ctx: &egui::Context) {
        let entries = self.logger.recent();
        egui::Window::new("Log")
            .open(&mut self.show_log)
            .default_width(480.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in entries {
                            ui.horizontal_wrapped(|ui| {
                                ui.monospace(entry.timestamp.format("%H:%M:%S").to_string());
                                ui.colored_label(level_color(entry.level), entry.level.as_str());
                                ui.label(entry.message);
                            });
                        }
                    });
            });
    }
}

fn level_color(level: log::Level) -> egui::Color32 {
    match level {
        log::Level::Error => egui::Color32::from_rgb(239, 68, 68),
        log::Level::Warn => egui::Color32::from_rgb(234, 179, 8),
        _ => egui::Color32::GRAY,
    }
}

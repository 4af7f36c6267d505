use cover_advisor::{AdvisorClient, OFFLINE_FALLBACK, SCRIPT_ERROR_FALLBACK};
use cover_async_runtime::{CoverCommand, CoverUpdate};
use cover_dieline::CoverSpecs;
use tokio::sync::mpsc;

/// Async worker task that processes export and advisory commands
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<CoverCommand>,
    update_tx: mpsc::UnboundedSender<CoverUpdate>,
) {
    let advisor = AdvisorClient::from_env();
    if advisor.is_none() {
        log::warn!("GEMINI_API_KEY not set; advisory features will answer offline");
    }

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, advisor.as_ref(), &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: CoverCommand,
    advisor: Option<&AdvisorClient>,
    command_rx: &mut mpsc::UnboundedReceiver<CoverCommand>,
    update_tx: &mpsc::UnboundedSender<CoverUpdate>,
) {
    match cmd {
        CoverCommand::ExportTemplate { dims, output_path } => {
            match cover_dieline::export_template(&dims, &output_path).await {
                Ok(()) => {
                    log::info!("Template exported to {}", output_path.display());
                    let _ = update_tx.send(CoverUpdate::TemplateExported { path: output_path });
                }
                Err(e) => {
                    let _ = update_tx.send(CoverUpdate::Error {
                        message: format!("Failed to export template: {e}"),
                    });
                }
            }
        }

        CoverCommand::ExportBlueprint { dims, output_path } => {
            match cover_dieline::export_blueprint(&dims, &output_path).await {
                Ok(()) => {
                    log::info!("Blueprint exported to {}", output_path.display());
                    let _ = update_tx.send(CoverUpdate::BlueprintExported { path: output_path });
                }
                Err(e) => {
                    let _ = update_tx.send(CoverUpdate::Error {
                        message: format!("Failed to export blueprint: {e}"),
                    });
                }
            }
        }

        CoverCommand::AdvisorAsk {
            mut history,
            mut question,
            mut context,
            mut generation,
        } => {
            // Drain queued questions, keeping only the most recent; anything
            // else queued behind them still runs first
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let CoverCommand::AdvisorAsk {
                    history: new_history,
                    question: new_question,
                    context: new_context,
                    generation: new_generation,
                } = next_cmd
                {
                    log::debug!("Discarding queued advisory question, using newer request");
                    history = new_history;
                    question = new_question;
                    context = new_context;
                    generation = new_generation;
                } else {
                    Box::pin(process_command(next_cmd, advisor, command_rx, update_tx)).await;
                }
            }

            let text = match advisor {
                Some(client) => client.ask_print_expert(&history, &question, &context).await,
                None => OFFLINE_FALLBACK.to_string(),
            };
            let _ = update_tx.send(CoverUpdate::AdvisorAnswer { text, generation });
        }

        CoverCommand::AdvisorScript {
            mut dims,
            mut generation,
        } => {
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let CoverCommand::AdvisorScript {
                    dims: new_dims,
                    generation: new_generation,
                } = next_cmd
                {
                    log::debug!("Discarding queued script request, using newer request");
                    dims = new_dims;
                    generation = new_generation;
                } else {
                    Box::pin(process_command(next_cmd, advisor, command_rx, update_tx)).await;
                }
            }

            let specs = CoverSpecs::compute(&dims);
            let text = match advisor {
                Some(client) => client.generate_indesign_script(&dims, &specs).await,
                None => SCRIPT_ERROR_FALLBACK.to_string(),
            };
            let _ = update_tx.send(CoverUpdate::AdvisorScriptReady { text, generation });
        }
    }
}

use std::path::PathBuf;

// Re-export types from library crates
pub use cover_advisor::{ChatRole, ChatTurn};
pub use cover_dieline::{CoverDimensions, CoverSpecs};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum CoverCommand {
    ExportTemplate {
        dims: CoverDimensions,
        output_path: PathBuf,
    },
    ExportBlueprint {
        dims: CoverDimensions,
        output_path: PathBuf,
    },
    /// Ask the print expert; `generation` sequences in-flight requests so a
    /// stale answer can never overwrite a newer exchange
    AdvisorAsk {
        history: Vec<ChatTurn>,
        question: String,
        context: String,
        generation: u64,
    },
    AdvisorScript {
        dims: CoverDimensions,
        generation: u64,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum CoverUpdate {
    TemplateExported {
        path: PathBuf,
    },
    BlueprintExported {
        path: PathBuf,
    },
    AdvisorAnswer {
        text: String,
        generation: u64,
    },
    AdvisorScriptReady {
        text: String,
        generation: u64,
    },
    Error {
        message: String,
    },
}

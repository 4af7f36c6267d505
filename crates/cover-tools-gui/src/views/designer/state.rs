use cover_async_runtime::{CoverDimensions, CoverSpecs};

pub struct DesignerState {
    pub dims: CoverDimensions,
    pub specs: CoverSpecs,
    pub script: Option<String>,
    pub script_pending: bool,
    pub script_generation: u64,
    pub show_script: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        let dims = CoverDimensions::default();
        Self {
            dims,
            specs: CoverSpecs::compute(&dims),
            script: None,
            script_pending: false,
            script_generation: 0,
            show_script: false,
        }
    }
}

impl DesignerState {
    /// Re-derive the specs. Must run synchronously after every field edit,
    /// before anything downstream reads them.
    pub fn recompute(&mut self) {
        self.specs = CoverSpecs::compute(&self.dims);
    }

    /// Accept a generated script unless a newer request is already in flight.
    pub fn apply_script(&mut self, text: String, generation: u64) {
        if generation != self.script_generation {
            log::debug!("Discarding stale script response (generation {generation})");
            return;
        }
        self.script = Some(text);
        self.script_pending = false;
        self.show_script = true;
    }
}

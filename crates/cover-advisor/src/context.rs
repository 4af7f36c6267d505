//! Serialized spec context handed to the chat system instruction

use cover_dieline::{CoverDimensions, CoverSpecs};

/// One-line summary of the current layout, embedded in the assistant's
/// system instruction so answers can reference the live numbers.
pub fn build_context(dims: &CoverDimensions, specs: &CoverSpecs) -> String {
    let u = dims.unit.suffix();
    format!(
        "Current cover specification: boards {bw} x {bh} {u}, spine {sw} {u}, \
         hinge gap {hg} {u}, turn-in {ti} {u}, bleed {bl} {u}. \
         Flat sheet (cut size): {tw} x {th} {u}. \
         Spine runs {ss} to {se}; front board starts at {fs}.",
        bw = dims.board_width,
        bh = dims.board_height,
        sw = dims.spine_width,
        hg = dims.hinge_gap,
        ti = dims.turn_in,
        bl = dims.bleed,
        tw = specs.total_width,
        th = specs.total_height,
        ss = specs.spine_start,
        se = specs.spine_end,
        fs = specs.front_board_start,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_mentions_totals_and_unit() {
        let dims = CoverDimensions::default();
        let specs = CoverSpecs::compute(&dims);
        let ctx = build_context(&dims, &specs);

        assert!(ctx.contains("376 x 252 mm"));
        assert!(ctx.contains("Spine runs 178 to 198"));
        assert!(ctx.contains("front board starts at 205"));
    }
}

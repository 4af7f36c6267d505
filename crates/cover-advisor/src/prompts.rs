//! Prompt text for the advisory endpoint
//!
//! Free-text constructs with no strict schema; the endpoint treats them as
//! opaque and so do we.

use cover_dieline::{CoverDimensions, CoverSpecs};

/// Persona for the chat assistant. The serialized spec context is appended
/// by the caller.
pub const PRINT_EXPERT_SYSTEM: &str = "\
You are a master bookbinder and prepress engineer. \
Answer questions about paper grain, glue types (PVA vs Animal), cover materials, and InDesign setup. \
Keep answers technical, concise, and professional.";

/// Build the InDesign document-setup script request from the current layout.
pub fn indesign_script_prompt(dims: &CoverDimensions, specs: &CoverSpecs) -> String {
    let unit = dims.unit.suffix();
    format!(
        "Create a valid Adobe InDesign (.jsx) ExtendScript to create a new document for a hardcover book cover wrap.\n\
        \n\
        Parameters:\n\
        - Unit: {unit}\n\
        - Document Width (Trim): {total_width}\n\
        - Document Height (Trim): {total_height}\n\
        - Margins (Turn-in): {turn_in} (Top, Bottom, Left, Right)\n\
        - Bleed: {bleed} (Top, Bottom, Left, Right)\n\
        \n\
        The script should:\n\
        1. Create a new document with the specified width, height, and bleed settings.\n\
        2. Set view preferences to {unit}.\n\
        3. Add vertical guides at these X coordinates to mark the spine and hinges:\n\
           - {back_board_end} (End of Back Cover)\n\
           - {spine_start} (Start of Spine)\n\
           - {spine_end} (End of Spine)\n\
           - {front_board_start} (Start of Front Cover)\n\
        4. Add horizontal guides for the turn-ins:\n\
           - {turn_in}\n\
           - {bottom_turn_in}\n\
        5. Name the layer \"Dieline\".\n\
        6. Draw a rectangle representing the Spine and the two Boards on the Dieline layer (no fill, magenta stroke).\n\
        7. Alert the user that the setup is complete.\n\
        \n\
        Output ONLY the raw code string, no markdown code blocks, no explanation.",
        total_width = specs.total_width,
        total_height = specs.total_height,
        turn_in = dims.turn_in,
        bleed = dims.bleed,
        back_board_end = specs.back_board_end,
        spine_start = specs.spine_start,
        spine_end = specs.spine_end,
        front_board_start = specs.front_board_start,
        bottom_turn_in = specs.total_height - dims.turn_in,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_prompt_carries_guide_coordinates() {
        let dims = CoverDimensions::default();
        let specs = CoverSpecs::compute(&dims);
        let prompt = indesign_script_prompt(&dims, &specs);

        assert!(prompt.contains("- 171 (End of Back Cover)"));
        assert!(prompt.contains("- 178 (Start of Spine)"));
        assert!(prompt.contains("- 198 (End of Spine)"));
        assert!(prompt.contains("- 205 (Start of Front Cover)"));
        assert!(prompt.contains("Document Width (Trim): 376"));
        assert!(prompt.contains("no markdown code blocks"));
    }
}

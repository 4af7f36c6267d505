//! PDF export: actual-size template and A4 blueprint sheet
//!
//! Both exporters consume the same computed specs and annotation list as the
//! screen preview and place every coordinate through a single linear
//! [`Placement`]; no boundary position is recomputed here.

mod blueprint;
mod ops;
mod template;

pub use blueprint::render_blueprint;
pub use template::render_template;

use crate::annotate::build_annotations;
use crate::constants::{
    BLUEPRINT_DRAW_HEIGHT_MM, BLUEPRINT_DRAW_WIDTH_MM, BLUEPRINT_DRAW_X_MM, BLUEPRINT_DRAW_Y_MM,
    BLUEPRINT_PAGE_HEIGHT_MM, mm_to_pt,
};
use crate::layout::CoverSpecs;
use crate::types::{CoverDimensions, DielineError, Result};
use std::path::Path;

/// Fixed filename of the blueprint spec sheet
pub const BLUEPRINT_FILENAME: &str = "blueprint_spec_sheet.pdf";

/// Default filename of the actual-size template, derived from the cut size
pub fn template_filename(dims: &CoverDimensions, specs: &CoverSpecs) -> String {
    format!(
        "cover_template_{:.1}x{:.1}{}.pdf",
        specs.total_width,
        specs.total_height,
        dims.unit.suffix()
    )
}

/// Uniform linear transform from trim-box space into PDF page space.
///
/// `x` maps to `dx + x * scale`; `y` flips into the PDF's bottom-up axis via
/// `dy - y * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Placement {
    pub fn x(&self, x: f32) -> f32 {
        self.dx + x * self.scale
    }

    pub fn y(&self, y: f32) -> f32 {
        self.dy - y * self.scale
    }

    pub fn len(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Recover the trim-space x for a page-space coordinate
    pub fn invert_x(&self, px: f32) -> f32 {
        (px - self.dx) / self.scale
    }

    /// Recover the trim-space y for a page-space coordinate
    pub fn invert_y(&self, py: f32) -> f32 {
        (self.dy - py) / self.scale
    }
}

/// Placement used by the actual-size template: one model unit to its point
/// equivalent, trim origin shifted inward by the bleed margin.
pub fn template_placement(dims: &CoverDimensions, specs: &CoverSpecs) -> Placement {
    let k = dims.unit.points_per_unit();
    let (_, page_h) = specs.page_size(dims.bleed);
    Placement {
        scale: k,
        dx: dims.bleed * k,
        dy: (page_h - dims.bleed) * k,
    }
}

/// Placement used by the blueprint schematic: uniform fit into the fixed
/// drawing rectangle, centered.
pub fn blueprint_placement(specs: &CoverSpecs) -> Placement {
    let avail_w = mm_to_pt(BLUEPRINT_DRAW_WIDTH_MM);
    let avail_h = mm_to_pt(BLUEPRINT_DRAW_HEIGHT_MM);
    let mut scale = (avail_w / specs.total_width).min(avail_h / specs.total_height);
    if !scale.is_finite() || scale <= 0.0 {
        // Degenerate sheets (zero or negative span) fall back to unit scale
        scale = 1.0;
    }
    let scaled_w = specs.total_width * scale;
    let scaled_h = specs.total_height * scale;
    let page_h = mm_to_pt(BLUEPRINT_PAGE_HEIGHT_MM);
    Placement {
        scale,
        dx: mm_to_pt(BLUEPRINT_DRAW_X_MM) + (avail_w - scaled_w) / 2.0,
        dy: page_h - mm_to_pt(BLUEPRINT_DRAW_Y_MM) - (avail_h - scaled_h) / 2.0,
    }
}

/// Render the actual-size template and write it to `path`.
pub async fn export_template(dims: &CoverDimensions, path: impl AsRef<Path>) -> Result<()> {
    let dims = *dims;
    let bytes = tokio::task::spawn_blocking(move || {
        let specs = CoverSpecs::compute(&dims);
        let annotations = build_annotations(&dims, &specs);
        let mut doc = render_template(&dims, &specs, &annotations);
        let mut out = Vec::new();
        doc.save_to(&mut out)?;
        Ok::<_, DielineError>(out)
    })
    .await??;
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}

/// Render the blueprint spec sheet and write it to `path`.
pub async fn export_blueprint(dims: &CoverDimensions, path: impl AsRef<Path>) -> Result<()> {
    let dims = *dims;
    let bytes = tokio::task::spawn_blocking(move || {
        let specs = CoverSpecs::compute(&dims);
        let annotations = build_annotations(&dims, &specs);
        let mut doc = render_blueprint(&dims, &specs, &annotations);
        let mut out = Vec::new();
        doc.save_to(&mut out)?;
        Ok::<_, DielineError>(out)
    })
    .await??;
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}

pub mod annotate;
pub mod constants;
mod export;
mod layout;
mod types;

pub use annotate::{Annotation, Axis, Boundary, DimLine, build_annotations};
pub use export::{
    BLUEPRINT_FILENAME, Placement, blueprint_placement, export_blueprint, export_template,
    render_blueprint, render_template, template_filename, template_placement,
};
pub use layout::CoverSpecs;
pub use types::*;

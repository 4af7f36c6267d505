//! Actual-size prepress template rendering
//!
//! The page is the trim box plus a full bleed margin on every side (a
//! zero-width margin when bleed is 0), so trim (0,0) always lands at
//! (bleed, bleed) from the page corner. Only line work is drawn: the trim
//! outline, boundary guides, fold lines, and — with bleed — registration
//! marks, corner crop marks, and bleed ticks.

use super::ops;
use super::{Placement, template_placement};
use crate::annotate::Annotation;
use crate::constants::{
    BLEED_TICK_RATIO, CROP_MARK_GAP, CROP_MARK_LENGTH, CUT_LINE_WIDTH, FOLD_LINE_WIDTH,
    GUIDE_LINE_WIDTH, MARK_LINE_WIDTH, REG_MARK_ARM, REG_MARK_RADIUS,
};
use crate::layout::CoverSpecs;
use crate::types::CoverDimensions;
use lopdf::Document;

pub fn render_template(
    dims: &CoverDimensions,
    specs: &CoverSpecs,
    annotations: &[Annotation],
) -> Document {
    let k = dims.unit.points_per_unit();
    let (page_w, page_h) = specs.page_size(dims.bleed);
    let (page_w_pt, page_h_pt) = (page_w * k, page_h * k);
    let place = template_placement(dims, specs);

    let mut content = String::new();
    content.push_str("q\n");

    // Trim outline (cut line)
    content.push_str(&ops::stroke_color(0.0, 0.0, 0.0));
    content.push_str(&ops::line_width(CUT_LINE_WIDTH));
    content.push_str(&ops::rect_stroke(
        place.x(0.0),
        place.y(specs.total_height),
        place.len(specs.total_width),
        place.len(specs.total_height),
    ));

    for annotation in annotations {
        match annotation {
            Annotation::Guide { kind, at } => {
                content.push_str(&ops::stroke_color(0.0, 1.0, 1.0));
                content.push_str(&ops::line_width(GUIDE_LINE_WIDTH));
                content.push_str(&ops::dash(3.0, 3.0));
                if kind.is_vertical() {
                    content.push_str(&ops::line(
                        place.x(*at),
                        place.y(dims.turn_in),
                        place.x(*at),
                        place.y(specs.total_height - dims.turn_in),
                    ));
                } else {
                    content.push_str(&ops::line(
                        place.x(0.0),
                        place.y(*at),
                        place.x(specs.total_width),
                        place.y(*at),
                    ));
                }
                content.push_str(&ops::solid());
            }
            Annotation::Fold { x } => {
                content.push_str(&ops::stroke_color(1.0, 0.0, 1.0));
                content.push_str(&ops::line_width(FOLD_LINE_WIDTH));
                content.push_str(&ops::dash(6.0, 3.0));
                content.push_str(&ops::line(
                    place.x(*x),
                    place.y(0.0),
                    place.x(*x),
                    place.y(specs.total_height),
                ));
                content.push_str(&ops::solid());
            }
            Annotation::RegMark { center } => {
                content.push_str(&ops::stroke_color(0.0, 0.0, 0.0));
                content.push_str(&ops::line_width(MARK_LINE_WIDTH));
                content.push_str(&ops::registration_mark(
                    place.x(center.x),
                    place.y(center.y),
                    REG_MARK_RADIUS,
                    REG_MARK_ARM,
                ));
            }
            Annotation::BleedTick { x } => {
                let tick = place.len(dims.bleed) * BLEED_TICK_RATIO;
                content.push_str(&ops::stroke_color(0.0, 0.0, 0.0));
                content.push_str(&ops::line_width(CUT_LINE_WIDTH));
                // From each page edge inward, stopping short of the trim box
                content.push_str(&ops::line(place.x(*x), page_h_pt, place.x(*x), page_h_pt - tick));
                content.push_str(&ops::line(place.x(*x), 0.0, place.x(*x), tick));
            }
            // The template carries no panel fills or dimension callouts
            Annotation::Board { .. } | Annotation::Dimension(_) => {}
        }
    }

    if dims.bleed > 0.0 {
        content.push_str(&crop_marks(&place, specs));
    }

    content.push_str("Q\n");
    ops::single_page_document(page_w_pt, page_h_pt, content, &[])
}

/// L-shaped crop mark pairs just outside each trim corner
fn crop_marks(place: &Placement, specs: &CoverSpecs) -> String {
    let left = place.x(0.0);
    let right = place.x(specs.total_width);
    let top = place.y(0.0);
    let bottom = place.y(specs.total_height);
    let gap = CROP_MARK_GAP;
    let len = CROP_MARK_LENGTH;

    let mut out = String::new();
    out.push_str(&ops::stroke_color(0.0, 0.0, 0.0));
    out.push_str(&ops::line_width(MARK_LINE_WIDTH));

    // Top-left
    out.push_str(&ops::line(left - gap - len, top, left - gap, top));
    out.push_str(&ops::line(left, top + gap, left, top + gap + len));
    // Top-right
    out.push_str(&ops::line(right + gap, top, right + gap + len, top));
    out.push_str(&ops::line(right, top + gap, right, top + gap + len));
    // Bottom-left
    out.push_str(&ops::line(left - gap - len, bottom, left - gap, bottom));
    out.push_str(&ops::line(left, bottom - gap, left, bottom - gap - len));
    // Bottom-right
    out.push_str(&ops::line(right + gap, bottom, right + gap + len, bottom));
    out.push_str(&ops::line(right, bottom - gap, right, bottom - gap - len));

    out
}

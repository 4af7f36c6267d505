//! Blueprint spec sheet rendering
//!
//! A fixed A4 landscape page: a textual specs table on the left and the
//! schematic with the full dimension-chain annotation set on the right,
//! uniformly scaled and centered in a fixed drawing rectangle.

use super::ops;
use super::{Placement, blueprint_placement};
use crate::annotate::{Annotation, Axis, DimLine};
use crate::constants::{
    BLUEPRINT_LINE_HEIGHT_MM, BLUEPRINT_PAGE_HEIGHT_MM, BLUEPRINT_PAGE_WIDTH_MM, CUT_LINE_WIDTH,
    FOLD_LINE_WIDTH, GUIDE_LINE_WIDTH, HELVETICA_CHAR_WIDTH_RATIO, MARK_LINE_WIDTH, REG_MARK_ARM,
    REG_MARK_RADIUS, mm_to_pt,
};
use crate::layout::CoverSpecs;
use crate::types::CoverDimensions;
use lopdf::Document;

const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 10.0;
const LABEL_FONT_SIZE: f32 = 8.0;

/// Length of a dimension-line end tick (1mm each way)
const DIM_TICK: f32 = 2.83;

/// Gap between a dimension line and its label (2mm)
const LABEL_GAP: f32 = 5.67;

pub fn render_blueprint(
    dims: &CoverDimensions,
    specs: &CoverSpecs,
    annotations: &[Annotation],
) -> Document {
    let page_w = mm_to_pt(BLUEPRINT_PAGE_WIDTH_MM);
    let page_h = mm_to_pt(BLUEPRINT_PAGE_HEIGHT_MM);
    let place = blueprint_placement(specs);

    let mut content = String::new();
    content.push_str("q\n");
    content.push_str("0 0 0 rg\n");

    // Header
    content.push_str(&ops::text(
        "F2",
        TITLE_FONT_SIZE,
        mm_to_pt(10.0),
        page_h - mm_to_pt(15.0),
        "Cover Dieline - Prepress Blueprint",
    ));
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    content.push_str(&ops::text(
        "F1",
        BODY_FONT_SIZE,
        mm_to_pt(10.0),
        page_h - mm_to_pt(22.0),
        &format!("Date: {date}"),
    ));

    // Specs table: every input field and every derived total
    let u = dims.unit.suffix();
    let rows = [
        format!("Unit:        {u}"),
        format!("Trim Width:  {} {u}", specs.total_width),
        format!("Trim Height: {} {u}", specs.total_height),
        format!("Board Size:  {} x {} {u}", dims.board_width, dims.board_height),
        format!("Spine Width: {} {u}", dims.spine_width),
        format!("Hinge Gap:   {} {u}", dims.hinge_gap),
        format!("Turn-in:     {} {u}", dims.turn_in),
        format!("Bleed:       {} {u}", dims.bleed),
    ];
    for (i, row) in rows.iter().enumerate() {
        let y = page_h - mm_to_pt(40.0 + i as f32 * BLUEPRINT_LINE_HEIGHT_MM);
        content.push_str(&ops::text("F3", BODY_FONT_SIZE, mm_to_pt(10.0), y, row));
    }

    // Schematic: trim outline plus the shared annotation set
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
            Annotation::Board {
                label,
                label_pos,
                rotated,
                ..
            } => {
                content.push_str("0.6 0.6 0.6 rg\n");
                if *rotated {
                    content.push_str(&ops::text_rotated_centered(
                        "F1",
                        LABEL_FONT_SIZE,
                        place.x(label_pos.x),
                        place.y(label_pos.y),
                        label,
                        true,
                        HELVETICA_CHAR_WIDTH_RATIO,
                    ));
                } else {
                    content.push_str(&ops::text_centered(
                        "F1",
                        LABEL_FONT_SIZE,
                        place.x(label_pos.x),
                        place.y(label_pos.y),
                        label,
                        HELVETICA_CHAR_WIDTH_RATIO,
                    ));
                }
                content.push_str("0 0 0 rg\n");
            }
            Annotation::Dimension(dim) => {
                content.push_str(&dimension_ops(&place, dim));
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
                content.push_str(&ops::stroke_color(0.0, 0.0, 0.0));
                content.push_str(&ops::line_width(CUT_LINE_WIDTH));
                content.push_str(&ops::line(
                    place.x(*x),
                    place.y(-dims.bleed),
                    place.x(*x),
                    place.y(-dims.bleed * 0.2),
                ));
                content.push_str(&ops::line(
                    place.x(*x),
                    place.y(specs.total_height + dims.bleed),
                    place.x(*x),
                    place.y(specs.total_height + dims.bleed * 0.2),
                ));
            }
        }
    }

    content.push_str("Q\n");
    ops::single_page_document(
        page_w,
        page_h,
        content,
        &[
            ("F1", "Helvetica"),
            ("F2", "Helvetica-Bold"),
            ("F3", "Courier"),
        ],
    )
}

/// Dimension line with end ticks, witness lines, and its label.
///
/// Overall dimensions (no witness lines) get the bold body font; chain
/// segments get the small label font.
fn dimension_ops(place: &Placement, dim: &DimLine) -> String {
    let mut out = String::new();
    let x1 = place.x(dim.start.x);
    let y1 = place.y(dim.start.y);
    let x2 = place.x(dim.end.x);
    let y2 = place.y(dim.end.y);

    if let Some(edge) = dim.extend_from {
        out.push_str(&ops::stroke_color(0.6, 0.6, 0.6));
        out.push_str(&ops::dash(2.0, 2.0));
        out.push_str(&ops::line_width(GUIDE_LINE_WIDTH));
        match dim.axis {
            Axis::Horizontal => {
                let edge_y = place.y(edge);
                out.push_str(&ops::line(x1, edge_y, x1, y1));
                out.push_str(&ops::line(x2, edge_y, x2, y2));
            }
            Axis::Vertical => {
                let edge_x = place.x(edge);
                out.push_str(&ops::line(edge_x, y1, x1, y1));
                out.push_str(&ops::line(edge_x, y2, x2, y2));
            }
        }
        out.push_str(&ops::solid());
    }

    out.push_str(&ops::stroke_color(0.0, 0.0, 0.0));
    out.push_str(&ops::line_width(GUIDE_LINE_WIDTH));
    out.push_str(&ops::line(x1, y1, x2, y2));
    match dim.axis {
        Axis::Horizontal => {
            out.push_str(&ops::line(x1, y1 - DIM_TICK, x1, y1 + DIM_TICK));
            out.push_str(&ops::line(x2, y2 - DIM_TICK, x2, y2 + DIM_TICK));
        }
        Axis::Vertical => {
            out.push_str(&ops::line(x1 - DIM_TICK, y1, x1 + DIM_TICK, y1));
            out.push_str(&ops::line(x2 - DIM_TICK, y2, x2 + DIM_TICK, y2));
        }
    }

    let (font, size) = if dim.extend_from.is_none() {
        ("F2", BODY_FONT_SIZE)
    } else {
        ("F1", LABEL_FONT_SIZE)
    };
    match dim.axis {
        Axis::Horizontal => {
            let cx = (x1 + x2) / 2.0;
            let label_y = if dim.label_outside {
                y1 + LABEL_GAP
            } else {
                y1 - LABEL_GAP - size
            };
            out.push_str(&ops::text_centered(
                font,
                size,
                cx,
                label_y,
                &dim.label,
                HELVETICA_CHAR_WIDTH_RATIO,
            ));
        }
        Axis::Vertical => {
            let cy = (y1 + y2) / 2.0;
            out.push_str(&ops::text_rotated_centered(
                font,
                size,
                x1 - LABEL_GAP * 0.3,
                cy,
                &dim.label,
                false,
                HELVETICA_CHAR_WIDTH_RATIO,
            ));
        }
    }

    out
}

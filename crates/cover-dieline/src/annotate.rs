//! Shared annotation generation for the preview and the PDF exporters
//!
//! Every renderer consumes the same annotation list and applies only a
//! linear transform to it; no boundary position is ever recomputed
//! downstream. Coordinates are in trim-box space: origin at the trim
//! top-left, y increasing downward.

use crate::constants::{BOARD_LABEL_RATIO, CHAIN_OFFSET_RATIO};
use crate::layout::CoverSpecs;
use crate::types::{CoverDimensions, Point, Rect};

/// Direction a dimension line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Named boundary of the board/spine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    BackBoardStart,
    BackBoardEnd,
    SpineStart,
    SpineEnd,
    FrontBoardStart,
    FrontBoardEnd,
    TurnInTop,
    TurnInBottom,
}

impl Boundary {
    /// Vertical boundaries carry an x coordinate; the turn-in pair carry y.
    pub fn is_vertical(self) -> bool {
        !matches!(self, Boundary::TurnInTop | Boundary::TurnInBottom)
    }
}

/// A dimension callout: measured segment with end ticks, a label, and
/// optional witness lines back to the measured object's edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DimLine {
    pub start: Point,
    pub end: Point,
    pub label: String,
    pub axis: Axis,
    /// Label drawn on the outer side of the line (above a horizontal line,
    /// alongside a vertical one, rotated)
    pub label_outside: bool,
    /// Edge coordinate the witness lines extend from: a y coordinate for
    /// horizontal dimensions, an x coordinate for vertical ones
    pub extend_from: Option<f32>,
}

impl DimLine {
    /// Midpoint of the measured segment
    pub fn center(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// One drawable primitive, rebuilt from the specs on every render and never
/// cached across edits.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Dashed guide at a named boundary. Vertical guides span the region
    /// between the turn-in lines; horizontal guides span the full width.
    Guide { kind: Boundary, at: f32 },
    /// Fold line at a spine edge, full sheet height
    Fold { x: f32 },
    /// Board panel rectangle with its label
    Board {
        rect: Rect,
        label: &'static str,
        label_pos: Point,
        rotated: bool,
    },
    /// Dimension callout
    Dimension(DimLine),
    /// Registration mark centered in the bleed margin
    RegMark { center: Point },
    /// Short alignment tick inside the bleed margin at an interior vertical
    /// boundary
    BleedTick { x: f32 },
}

/// Build the full ordered annotation list for one computed layout.
///
/// Degenerate spans (zero or negative) are emitted as-is; clamping is the
/// input layer's problem. The only feature gate is `bleed > 0`, which adds
/// four registration marks and four bleed ticks.
pub fn build_annotations(dims: &CoverDimensions, specs: &CoverSpecs) -> Vec<Annotation> {
    let mut out = Vec::new();
    let w = specs.total_width;
    let h = specs.total_height;
    let bleed = dims.bleed;
    let front_board_end = specs.front_board_end(dims);

    // Board/spine boundaries, left to right
    for (kind, x) in [
        (Boundary::BackBoardStart, dims.turn_in),
        (Boundary::BackBoardEnd, specs.back_board_end),
        (Boundary::SpineStart, specs.spine_start),
        (Boundary::SpineEnd, specs.spine_end),
        (Boundary::FrontBoardStart, specs.front_board_start),
        (Boundary::FrontBoardEnd, front_board_end),
    ] {
        out.push(Annotation::Guide { kind, at: x });
    }

    // Turn-in boundaries
    out.push(Annotation::Guide {
        kind: Boundary::TurnInTop,
        at: dims.turn_in,
    });
    out.push(Annotation::Guide {
        kind: Boundary::TurnInBottom,
        at: h - dims.turn_in,
    });

    // Board panels
    let label_y = dims.turn_in + dims.board_height * BOARD_LABEL_RATIO;
    out.push(Annotation::Board {
        rect: Rect::new(dims.turn_in, dims.turn_in, dims.board_width, dims.board_height),
        label: "BACK",
        label_pos: Point::new(dims.turn_in + dims.board_width / 2.0, label_y),
        rotated: false,
    });
    out.push(Annotation::Board {
        rect: Rect::new(
            specs.spine_start,
            dims.turn_in,
            dims.spine_width,
            dims.board_height,
        ),
        label: "SPINE",
        label_pos: Point::new(specs.spine_start + dims.spine_width / 2.0, h / 2.0),
        rotated: true,
    });
    out.push(Annotation::Board {
        rect: Rect::new(
            specs.front_board_start,
            dims.turn_in,
            dims.board_width,
            dims.board_height,
        ),
        label: "FRONT",
        label_pos: Point::new(specs.front_board_start + dims.board_width / 2.0, label_y),
        rotated: false,
    });

    // Fold lines at the spine edges
    out.push(Annotation::Fold { x: specs.spine_start });
    out.push(Annotation::Fold { x: specs.spine_end });

    // Bottom dimension chain: seven consecutive segments whose spans sum to
    // the full sheet width
    let chain_y = h + bleed + h * CHAIN_OFFSET_RATIO;
    let stops = [
        0.0,
        dims.turn_in,
        specs.back_board_end,
        specs.spine_start,
        specs.spine_end,
        specs.front_board_start,
        front_board_end,
        w,
    ];
    let spans = [
        dims.turn_in,
        dims.board_width,
        dims.hinge_gap,
        dims.spine_width,
        dims.hinge_gap,
        dims.board_width,
        dims.turn_in,
    ];
    for (i, span) in spans.iter().enumerate() {
        out.push(Annotation::Dimension(DimLine {
            start: Point::new(stops[i], chain_y),
            end: Point::new(stops[i + 1], chain_y),
            label: format!("{span}"),
            axis: Axis::Horizontal,
            label_outside: true,
            extend_from: Some(h),
        }));
    }

    // Right-side vertical chain: turn-in, board height, turn-in
    let chain_x = w + bleed + w * CHAIN_OFFSET_RATIO;
    let v_stops = [0.0, dims.turn_in, h - dims.turn_in, h];
    let v_spans = [dims.turn_in, dims.board_height, dims.turn_in];
    for (i, span) in v_spans.iter().enumerate() {
        out.push(Annotation::Dimension(DimLine {
            start: Point::new(chain_x, v_stops[i]),
            end: Point::new(chain_x, v_stops[i + 1]),
            label: format!("{span}"),
            axis: Axis::Vertical,
            label_outside: true,
            extend_from: Some(w),
        }));
    }

    // Overall dimensions, outside the detailed chains
    let top_y = -bleed - h * CHAIN_OFFSET_RATIO;
    out.push(Annotation::Dimension(DimLine {
        start: Point::new(0.0, top_y),
        end: Point::new(w, top_y),
        label: format!("Total Width: {:.1}{}", w, dims.unit.suffix()),
        axis: Axis::Horizontal,
        label_outside: true,
        extend_from: None,
    }));
    let left_x = -bleed - w * CHAIN_OFFSET_RATIO;
    out.push(Annotation::Dimension(DimLine {
        start: Point::new(left_x, 0.0),
        end: Point::new(left_x, h),
        label: format!("Total Height: {:.1}{}", h, dims.unit.suffix()),
        axis: Axis::Vertical,
        label_outside: true,
        extend_from: None,
    }));

    if bleed > 0.0 {
        // Registration marks at the outer-edge midpoints, halfway into the
        // bleed margin
        for center in [
            Point::new(w / 2.0, -bleed / 2.0),
            Point::new(-bleed / 2.0, h / 2.0),
            Point::new(w + bleed / 2.0, h / 2.0),
            Point::new(w / 2.0, h + bleed / 2.0),
        ] {
            out.push(Annotation::RegMark { center });
        }

        // Alignment ticks at the interior vertical boundaries
        for x in [
            specs.back_board_end,
            specs.spine_start,
            specs.spine_end,
            specs.front_board_start,
        ] {
            out.push(Annotation::BleedTick { x });
        }
    }

    out
}

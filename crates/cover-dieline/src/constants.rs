//! Shared constants for dieline layout and rendering
//!
//! This module centralizes magic numbers used by the annotation generator
//! and both PDF exporters.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Annotation Placement
// =============================================================================

/// Offset of a dimension chain from the sheet edge, as a fraction of the
/// sheet span along the chain's normal
pub const CHAIN_OFFSET_RATIO: f32 = 0.08;

/// Vertical position of a board panel label, as a fraction of board height
/// below the board's top edge
pub const BOARD_LABEL_RATIO: f32 = 0.2;

/// Preview padding as a fraction of the sheet span; reserves room for the
/// dimension chains outside the trim box
pub const PREVIEW_PAD_RATIO: f32 = 0.25;

/// Share of the horizontal preview padding applied on the left side
pub const PREVIEW_PAD_LEFT_SHARE: f32 = 0.6;

/// Share of the horizontal preview padding applied on the right side, where
/// the vertical dimension chain sits
pub const PREVIEW_PAD_RIGHT_SHARE: f32 = 0.9;

// =============================================================================
// Printer's Marks (points)
// =============================================================================

/// Line width for the trim/cut outline
pub const CUT_LINE_WIDTH: f32 = 0.5;

/// Line width for boundary guide lines
pub const GUIDE_LINE_WIDTH: f32 = 0.3;

/// Line width for fold lines
pub const FOLD_LINE_WIDTH: f32 = 0.5;

/// Line width for crop and registration marks
pub const MARK_LINE_WIDTH: f32 = 0.25;

/// Length of a crop mark (3mm)
pub const CROP_MARK_LENGTH: f32 = 8.5;

/// Gap between a crop mark and the trim corner (1mm)
pub const CROP_MARK_GAP: f32 = 2.83;

/// Radius of a registration mark circle (1mm)
pub const REG_MARK_RADIUS: f32 = 2.83;

/// Half-length of a registration mark crosshair arm (2.5mm)
pub const REG_MARK_ARM: f32 = 7.09;

/// Fraction of the bleed span a bleed tick covers, measured from the page edge
pub const BLEED_TICK_RATIO: f32 = 0.8;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves:
/// 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f32 = 0.552284749831;

// =============================================================================
// Blueprint Sheet (A4 landscape, millimeters)
// =============================================================================

pub const BLUEPRINT_PAGE_WIDTH_MM: f32 = 297.0;
pub const BLUEPRINT_PAGE_HEIGHT_MM: f32 = 210.0;

/// Left edge of the schematic drawing area
pub const BLUEPRINT_DRAW_X_MM: f32 = 90.0;
/// Top edge of the schematic drawing area
pub const BLUEPRINT_DRAW_Y_MM: f32 = 40.0;
pub const BLUEPRINT_DRAW_WIDTH_MM: f32 = 180.0;
pub const BLUEPRINT_DRAW_HEIGHT_MM: f32 = 130.0;

/// Line height of the specs table
pub const BLUEPRINT_LINE_HEIGHT_MM: f32 = 7.0;

// =============================================================================
// Text Metrics
// =============================================================================

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

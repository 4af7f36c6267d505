//! Interactive dieline preview
//!
//! Paints the same annotation list the PDF exporters consume, mapped through
//! a letterboxed world-to-screen transform. Rebuilt synchronously from the
//! current dimensions every frame; nothing is cached across edits.

use cover_dieline::constants::{
    PREVIEW_PAD_LEFT_SHARE, PREVIEW_PAD_RATIO, PREVIEW_PAD_RIGHT_SHARE,
};
use cover_dieline::{
    Annotation, Axis, CoverDimensions, CoverSpecs, DimLine, build_annotations,
};
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};

const GUIDE_COLOR: Color32 = Color32::from_rgb(6, 182, 212);
const FOLD_COLOR: Color32 = Color32::from_rgb(217, 70, 239);
const DIM_COLOR: Color32 = Color32::from_rgb(161, 161, 170);
const BLEED_COLOR: Color32 = Color32::from_rgb(239, 68, 68);
const CUT_COLOR: Color32 = Color32::from_rgb(82, 82, 91);
const SHEET_COLOR: Color32 = Color32::from_rgb(244, 244, 245);
const BOARD_COLOR: Color32 = Color32::from_rgba_premultiplied(31, 31, 34, 204);
const LABEL_COLOR: Color32 = Color32::WHITE;
const MARK_COLOR: Color32 = Color32::BLACK;

/// World-space bounds that must stay visible: trim box, bleed margin, and
/// the dimension callouts outside them. Horizontal padding is asymmetric —
/// the vertical chain lives on the right.
pub fn view_bounds(dims: &CoverDimensions, specs: &CoverSpecs) -> Rect {
    let pad_x = specs.total_width * PREVIEW_PAD_RATIO;
    let pad_y = specs.total_height * PREVIEW_PAD_RATIO;
    Rect::from_min_max(
        Pos2::new(
            -dims.bleed - pad_x * PREVIEW_PAD_LEFT_SHARE,
            -dims.bleed - pad_y,
        ),
        Pos2::new(
            specs.total_width + dims.bleed + pad_x * PREVIEW_PAD_RIGHT_SHARE,
            specs.total_height + dims.bleed + pad_y,
        ),
    )
}

/// Uniform world-to-screen transform: letterbox fit, never stretch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToScreen {
    pub scale: f32,
    pub offset: Vec2,
}

impl ToScreen {
    pub fn fit(world: Rect, target: Rect) -> Self {
        let mut scale = (target.width() / world.width()).min(target.height() / world.height());
        if !scale.is_finite() || scale <= 0.0 {
            // Degenerate world rect (zero or negative sheet spans)
            scale = 1.0;
        }
        let offset = target.center().to_vec2() - world.center().to_vec2() * scale;
        Self { scale, offset }
    }

    pub fn pos(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(x * self.scale, y * self.scale) + self.offset
    }

    pub fn len(&self, v: f32) -> f32 {
        v * self.scale
    }
}

pub fn show(ui: &mut egui::Ui, dims: &CoverDimensions, specs: &CoverSpecs) {
    let annotations = build_annotations(dims, specs);
    let (response, painter) =
        ui.allocate_painter(ui.available_size_before_wrap(), egui::Sense::hover());
    let ts = ToScreen::fit(view_bounds(dims, specs), response.rect.shrink(4.0));

    paint_dieline(&painter, &ts, dims, specs, &annotations);

    let caption = if dims.bleed > 0.0 {
        format!(
            "Blueprint Preview (bleed {}{})",
            dims.bleed,
            dims.unit.suffix()
        )
    } else {
        "Blueprint Preview".to_string()
    };
    painter.text(
        response.rect.left_top() + Vec2::new(8.0, 8.0),
        Align2::LEFT_TOP,
        caption,
        FontId::monospace(11.0),
        DIM_COLOR,
    );
}

fn paint_dieline(
    painter: &egui::Painter,
    ts: &ToScreen,
    dims: &CoverDimensions,
    specs: &CoverSpecs,
    annotations: &[Annotation],
) {
    let w = specs.total_width;
    let h = specs.total_height;
    let bleed = dims.bleed;
    let hairline = ts.len(w * 0.001).abs().clamp(0.5, 2.0);
    let font_px = ts.len(w * 0.014).abs().max(8.0);
    let tick_px = ts.len(w * 0.005).abs().max(2.0);

    // Bleed margin behind everything else
    if bleed > 0.0 {
        let bleed_rect = Rect::from_min_max(ts.pos(-bleed, -bleed), ts.pos(w + bleed, h + bleed));
        painter.rect_filled(bleed_rect, 0.0, BLEED_COLOR.gamma_multiply(0.08));
        dashed_rect(painter, bleed_rect, Stroke::new(hairline, BLEED_COLOR));
    }

    // Trim box (the paper)
    let trim_rect = Rect::from_min_max(ts.pos(0.0, 0.0), ts.pos(w, h));
    painter.rect_filled(trim_rect, 0.0, SHEET_COLOR);
    painter.rect_stroke(
        trim_rect,
        0.0,
        Stroke::new(hairline * 2.0, CUT_COLOR),
        StrokeKind::Middle,
    );

    for annotation in annotations {
        match annotation {
            Annotation::Board {
                rect,
                label,
                label_pos,
                rotated,
            } => {
                let board = Rect::from_min_max(
                    ts.pos(rect.x, rect.y),
                    ts.pos(rect.right(), rect.bottom()),
                );
                painter.rect_filled(board, 0.0, BOARD_COLOR);
                let size = if *rotated {
                    ts.len(w * 0.015).abs().max(8.0)
                } else {
                    ts.len(w * 0.02).abs().max(9.0)
                };
                let center = ts.pos(label_pos.x, label_pos.y);
                if *rotated {
                    rotated_text(painter, center, label, size, LABEL_COLOR, true);
                } else {
                    painter.text(
                        center,
                        Align2::CENTER_CENTER,
                        *label,
                        FontId::monospace(size),
                        LABEL_COLOR,
                    );
                }
            }
            Annotation::Guide { kind, at } => {
                let stroke = Stroke::new(hairline, GUIDE_COLOR);
                if kind.is_vertical() {
                    dashed(
                        painter,
                        ts.pos(*at, dims.turn_in),
                        ts.pos(*at, h - dims.turn_in),
                        stroke,
                    );
                } else {
                    dashed(painter, ts.pos(0.0, *at), ts.pos(w, *at), stroke);
                }
            }
            Annotation::Fold { x } => {
                let stroke = Stroke::new(hairline * 2.0, FOLD_COLOR);
                dashed(painter, ts.pos(*x, 0.0), ts.pos(*x, h), stroke);
            }
            Annotation::Dimension(dim) => {
                paint_dimension(painter, ts, dim, font_px, tick_px, hairline);
            }
            Annotation::RegMark { center } => {
                let c = ts.pos(center.x, center.y);
                let r = ts.len(w * 0.002).abs().max(2.0);
                let arm = ts.len(w * 0.006).abs().max(4.0);
                let stroke = Stroke::new(hairline, MARK_COLOR);
                painter.circle_stroke(c, r, stroke);
                painter.line_segment([c - Vec2::new(arm, 0.0), c + Vec2::new(arm, 0.0)], stroke);
                painter.line_segment([c - Vec2::new(0.0, arm), c + Vec2::new(0.0, arm)], stroke);
            }
            Annotation::BleedTick { x } => {
                let stroke = Stroke::new(hairline, MARK_COLOR);
                painter.line_segment(
                    [ts.pos(*x, -bleed), ts.pos(*x, -bleed * 0.2)],
                    stroke,
                );
                painter.line_segment(
                    [ts.pos(*x, h + bleed), ts.pos(*x, h + bleed * 0.2)],
                    stroke,
                );
            }
        }
    }
}

fn paint_dimension(
    painter: &egui::Painter,
    ts: &ToScreen,
    dim: &DimLine,
    font_px: f32,
    tick_px: f32,
    hairline: f32,
) {
    let a = ts.pos(dim.start.x, dim.start.y);
    let b = ts.pos(dim.end.x, dim.end.y);
    let stroke = Stroke::new(hairline, DIM_COLOR);

    // Witness lines back to the measured edge
    if let Some(edge) = dim.extend_from {
        let thin = Stroke::new(hairline * 0.5, DIM_COLOR.gamma_multiply(0.5));
        match dim.axis {
            Axis::Horizontal => {
                dashed(painter, ts.pos(dim.start.x, edge), a, thin);
                dashed(painter, ts.pos(dim.end.x, edge), b, thin);
            }
            Axis::Vertical => {
                dashed(painter, ts.pos(edge, dim.start.y), a, thin);
                dashed(painter, ts.pos(edge, dim.end.y), b, thin);
            }
        }
    }

    painter.line_segment([a, b], stroke);
    match dim.axis {
        Axis::Horizontal => {
            painter.line_segment(
                [a - Vec2::new(0.0, tick_px), a + Vec2::new(0.0, tick_px)],
                stroke,
            );
            painter.line_segment(
                [b - Vec2::new(0.0, tick_px), b + Vec2::new(0.0, tick_px)],
                stroke,
            );
        }
        Axis::Vertical => {
            painter.line_segment(
                [a - Vec2::new(tick_px, 0.0), a + Vec2::new(tick_px, 0.0)],
                stroke,
            );
            painter.line_segment(
                [b - Vec2::new(tick_px, 0.0), b + Vec2::new(tick_px, 0.0)],
                stroke,
            );
        }
    }

    let center = dim.center();
    let c = ts.pos(center.x, center.y);
    match dim.axis {
        Axis::Horizontal => {
            let (pos, anchor) = if dim.label_outside {
                (Pos2::new(c.x, a.y - tick_px - 2.0), Align2::CENTER_BOTTOM)
            } else {
                (Pos2::new(c.x, a.y + tick_px + 2.0), Align2::CENTER_TOP)
            };
            painter.text(pos, anchor, &dim.label, FontId::proportional(font_px), DIM_COLOR);
        }
        Axis::Vertical => {
            rotated_text(
                painter,
                Pos2::new(c.x - font_px * 0.5, c.y),
                &dim.label,
                font_px,
                DIM_COLOR,
                false,
            );
        }
    }
}

fn dashed(painter: &egui::Painter, a: Pos2, b: Pos2, stroke: Stroke) {
    painter.extend(egui::Shape::dashed_line(&[a, b], stroke, 4.0, 3.0));
}

fn dashed_rect(painter: &egui::Painter, rect: Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for pair in corners.windows(2) {
        dashed(painter, pair[0], pair[1], stroke);
    }
}

/// Text rotated a quarter turn around its center. Clockwise reads top-down
/// (spine label); counterclockwise reads bottom-up (vertical dimensions).
fn rotated_text(
    painter: &egui::Painter,
    center: Pos2,
    text: &str,
    size: f32,
    color: Color32,
    clockwise: bool,
) {
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::monospace(size), color);
    let g = galley.size();
    let (angle, pos) = if clockwise {
        (
            std::f32::consts::FRAC_PI_2,
            Pos2::new(center.x + g.y / 2.0, center.y - g.x / 2.0),
        )
    } else {
        (
            -std::f32::consts::FRAC_PI_2,
            Pos2::new(center.x - g.y / 2.0, center.y + g.x / 2.0),
        )
    };
    painter.add(egui::epaint::TextShape::new(pos, galley, color).with_angle(angle));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cover_dieline::Unit;

    fn sample_dims() -> CoverDimensions {
        CoverDimensions {
            unit: Unit::Mm,
            board_width: 153.0,
            board_height: 216.0,
            spine_width: 20.0,
            hinge_gap: 7.0,
            turn_in: 18.0,
            bleed: 0.0,
        }
    }

    #[test]
    fn view_bounds_reserve_callout_space() {
        let dims = sample_dims();
        let specs = CoverSpecs::compute(&dims);
        let world = view_bounds(&dims, &specs);

        // 25% padding split 60/40-ish horizontally, symmetric vertically
        assert!((world.min.x - (-56.4)).abs() < 1e-3);
        assert!((world.max.x - 460.6).abs() < 1e-3);
        assert!((world.min.y - (-63.0)).abs() < 1e-3);
        assert!((world.max.y - 315.0).abs() < 1e-3);
    }

    #[test]
    fn view_bounds_include_bleed() {
        let mut dims = sample_dims();
        dims.bleed = 5.0;
        let specs = CoverSpecs::compute(&dims);
        let with_bleed = view_bounds(&dims, &specs);
        dims.bleed = 0.0;
        let without = view_bounds(&dims, &specs);

        assert!(with_bleed.min.x < without.min.x);
        assert!(with_bleed.max.y > without.max.y);
    }

    #[test]
    fn fit_letterboxes_never_stretches() {
        let world = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(200.0, 100.0));
        let target = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(400.0, 400.0));
        let ts = ToScreen::fit(world, target);

        // Width-bound: scale 2, vertically centered
        assert_eq!(ts.scale, 2.0);
        assert_eq!(ts.pos(0.0, 0.0), Pos2::new(0.0, 100.0));
        assert_eq!(ts.pos(200.0, 100.0), Pos2::new(400.0, 300.0));
    }

    #[test]
    fn fit_survives_degenerate_world() {
        let world = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(0.0, 0.0));
        let target = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0));
        let ts = ToScreen::fit(world, target);
        assert!(ts.scale.is_finite());
        assert!(ts.pos(1.0, 1.0).x.is_finite());
    }

    #[test]
    fn fit_maps_world_center_to_target_center() {
        let dims = sample_dims();
        let specs = CoverSpecs::compute(&dims);
        let world = view_bounds(&dims, &specs);
        let target = Rect::from_min_max(Pos2::new(50.0, 20.0), Pos2::new(850.0, 620.0));
        let ts = ToScreen::fit(world, target);

        let c = ts.pos(world.center().x, world.center().y);
        assert!((c.x - target.center().x).abs() < 1e-2);
        assert!((c.y - target.center().y).abs() < 1e-2);
    }
}

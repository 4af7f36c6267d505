use cover_dieline::{
    Annotation, Axis, Boundary, CoverDimensions, CoverSpecs, Unit, build_annotations,
};

fn sample_dims(bleed: f32) -> CoverDimensions {
    CoverDimensions {
        unit: Unit::Mm,
        board_width: 153.0,
        board_height: 216.0,
        spine_width: 20.0,
        hinge_gap: 7.0,
        turn_in: 18.0,
        bleed,
    }
}

fn annotations(bleed: f32) -> (CoverDimensions, CoverSpecs, Vec<Annotation>) {
    let dims = sample_dims(bleed);
    let specs = CoverSpecs::compute(&dims);
    let list = build_annotations(&dims, &specs);
    (dims, specs, list)
}

fn dimension_lines(list: &[Annotation], axis: Axis) -> Vec<&cover_dieline::DimLine> {
    list.iter()
        .filter_map(|a| match a {
            Annotation::Dimension(d) if d.axis == axis && d.extend_from.is_some() => Some(d),
            _ => None,
        })
        .collect()
}

#[test]
fn test_vertical_guides_left_to_right() {
    let (_, _, list) = annotations(0.0);
    let xs: Vec<f32> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::Guide { kind, at } if kind.is_vertical() => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(xs, vec![18.0, 171.0, 178.0, 198.0, 205.0, 358.0]);
}

#[test]
fn test_guide_kinds_present() {
    let (_, _, list) = annotations(0.0);
    let kinds: Vec<Boundary> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::Guide { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            Boundary::BackBoardStart,
            Boundary::BackBoardEnd,
            Boundary::SpineStart,
            Boundary::SpineEnd,
            Boundary::FrontBoardStart,
            Boundary::FrontBoardEnd,
            Boundary::TurnInTop,
            Boundary::TurnInBottom,
        ]
    );
}

#[test]
fn test_turn_in_guides() {
    let (dims, specs, list) = annotations(0.0);
    let ys: Vec<f32> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::Guide { kind, at } if !kind.is_vertical() => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(ys, vec![dims.turn_in, specs.total_height - dims.turn_in]);
}

#[test]
fn test_horizontal_chain_segments() {
    let (_, specs, list) = annotations(0.0);
    let chain = dimension_lines(&list, Axis::Horizontal);
    assert_eq!(chain.len(), 7);

    // Endpoints are exactly the boundary sequence
    let expected = [0.0, 18.0, 171.0, 178.0, 198.0, 205.0, 358.0, 376.0];
    for (i, d) in chain.iter().enumerate() {
        assert_eq!(d.start.x, expected[i]);
        assert_eq!(d.end.x, expected[i + 1]);
    }

    // Labels carry the span values
    let labels: Vec<&str> = chain.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["18", "153", "7", "20", "7", "153", "18"]);

    // Spans sum exactly to the total width
    let sum: f32 = chain.iter().map(|d| d.end.x - d.start.x).sum();
    assert_eq!(sum, specs.total_width);
}

#[test]
fn test_vertical_chain_segments() {
    let (_, specs, list) = annotations(0.0);
    let chain = dimension_lines(&list, Axis::Vertical);
    assert_eq!(chain.len(), 3);

    let expected = [0.0, 18.0, 234.0, 252.0];
    for (i, d) in chain.iter().enumerate() {
        assert_eq!(d.start.y, expected[i]);
        assert_eq!(d.end.y, expected[i + 1]);
    }

    let labels: Vec<&str> = chain.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["18", "216", "18"]);

    let sum: f32 = chain.iter().map(|d| d.end.y - d.start.y).sum();
    assert_eq!(sum, specs.total_height);
}

#[test]
fn test_overall_dimension_labels() {
    let (_, _, list) = annotations(0.0);
    let overall: Vec<&cover_dieline::DimLine> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::Dimension(d) if d.extend_from.is_none() => Some(d),
            _ => None,
        })
        .collect();
    assert_eq!(overall.len(), 2);
    assert_eq!(overall[0].label, "Total Width: 376.0mm");
    assert_eq!(overall[1].label, "Total Height: 252.0mm");
}

#[test]
fn test_overall_dimensions_outside_chains() {
    let (_, specs, list) = annotations(5.0);
    for a in &list {
        if let Annotation::Dimension(d) = a {
            if d.extend_from.is_none() {
                match d.axis {
                    Axis::Horizontal => {
                        assert_eq!(d.start.y, -5.0 - specs.total_height * 0.08)
                    }
                    Axis::Vertical => {
                        assert_eq!(d.start.x, -5.0 - specs.total_width * 0.08)
                    }
                }
            }
        }
    }
}

#[test]
fn test_no_bleed_marks_without_bleed() {
    let (_, _, list) = annotations(0.0);
    let marks = list
        .iter()
        .filter(|a| matches!(a, Annotation::RegMark { .. } | Annotation::BleedTick { .. }))
        .count();
    assert_eq!(marks, 0);
}

#[test]
fn test_bleed_marks_with_bleed() {
    let (_, specs, list) = annotations(5.0);

    let reg: Vec<(f32, f32)> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::RegMark { center } => Some((center.x, center.y)),
            _ => None,
        })
        .collect();
    assert_eq!(
        reg,
        vec![
            (specs.total_width / 2.0, -2.5),
            (-2.5, specs.total_height / 2.0),
            (specs.total_width + 2.5, specs.total_height / 2.0),
            (specs.total_width / 2.0, specs.total_height + 2.5),
        ]
    );

    let ticks: Vec<f32> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::BleedTick { x } => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(ticks, vec![171.0, 178.0, 198.0, 205.0]);
}

#[test]
fn test_board_panels() {
    let (dims, specs, list) = annotations(0.0);
    let boards: Vec<(&str, f32, bool)> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::Board {
                label,
                rect,
                rotated,
                ..
            } => Some((*label, rect.x, *rotated)),
            _ => None,
        })
        .collect();
    assert_eq!(
        boards,
        vec![
            ("BACK", dims.turn_in, false),
            ("SPINE", specs.spine_start, true),
            ("FRONT", specs.front_board_start, false),
        ]
    );
}

#[test]
fn test_fold_lines_at_spine_edges() {
    let (_, specs, list) = annotations(0.0);
    let folds: Vec<f32> = list
        .iter()
        .filter_map(|a| match a {
            Annotation::Fold { x } => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(folds, vec![specs.spine_start, specs.spine_end]);
}

#[test]
fn test_degenerate_spans_still_emitted() {
    let dims = CoverDimensions {
        board_width: 0.0,
        spine_width: 0.0,
        ..sample_dims(0.0)
    };
    let specs = CoverSpecs::compute(&dims);
    let list = build_annotations(&dims, &specs);

    let chain = dimension_lines(&list, Axis::Horizontal);
    assert_eq!(chain.len(), 7);
    // Zero-width segments collapse to coincident endpoints but survive
    assert_eq!(chain[1].start.x, chain[1].end.x);
    assert_eq!(chain[3].start.x, chain[3].end.x);
}

#[test]
fn test_same_primitive_count_regardless_of_geometry() {
    let normal = annotations(0.0).2.len();
    let degenerate = {
        let dims = CoverDimensions {
            board_width: -3.0,
            board_height: 0.0,
            ..sample_dims(0.0)
        };
        let specs = CoverSpecs::compute(&dims);
        build_annotations(&dims, &specs).len()
    };
    assert_eq!(normal, degenerate);
}

use cover_dieline::{CoverDimensions, CoverSpecs, Unit};

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
fn test_sample_scenario() {
    let specs = CoverSpecs::compute(&sample_dims());
    assert_eq!(specs.total_width, 376.0);
    assert_eq!(specs.total_height, 252.0);
    assert_eq!(specs.spine_start, 178.0);
    assert_eq!(specs.spine_end, 198.0);
    assert_eq!(specs.front_board_start, 205.0);
    assert_eq!(specs.back_board_end, 171.0);
}

#[test]
fn test_total_width_two_derivations_agree() {
    let cases = [
        sample_dims(),
        CoverDimensions {
            board_width: 0.0,
            ..sample_dims()
        },
        CoverDimensions {
            spine_width: -5.0,
            ..sample_dims()
        },
        CoverDimensions {
            unit: Unit::Inch,
            board_width: 5.25,
            board_height: 8.0,
            spine_width: 0.75,
            hinge_gap: 0.25,
            turn_in: 0.625,
            bleed: 0.125,
        },
    ];

    for dims in cases {
        let specs = CoverSpecs::compute(&dims);
        let chained = specs.front_board_start + dims.board_width + dims.turn_in;
        assert!(
            (specs.total_width - chained).abs() < 1e-3,
            "total width mismatch for {dims:?}: {} vs {}",
            specs.total_width,
            chained
        );
    }
}

#[test]
fn test_back_board_end_stays_literal() {
    // The back board's right edge must not move when spine-side fields change
    let mut dims = sample_dims();
    let before = CoverSpecs::compute(&dims).back_board_end;

    dims.spine_width = 99.0;
    dims.hinge_gap = 42.0;
    let after = CoverSpecs::compute(&dims).back_board_end;

    assert_eq!(before, after);
    assert_eq!(after, dims.turn_in + dims.board_width);
}

#[test]
fn test_recompute_is_bit_identical() {
    let dims = sample_dims();
    let a = CoverSpecs::compute(&dims);
    let b = CoverSpecs::compute(&dims);
    assert_eq!(a, b);
}

#[test]
fn test_width_monotonicity() {
    let base = CoverSpecs::compute(&sample_dims()).total_width;

    for bump in [
        CoverDimensions {
            board_width: 154.0,
            ..sample_dims()
        },
        CoverDimensions {
            spine_width: 21.0,
            ..sample_dims()
        },
        CoverDimensions {
            hinge_gap: 8.0,
            ..sample_dims()
        },
        CoverDimensions {
            turn_in: 19.0,
            ..sample_dims()
        },
    ] {
        let w = CoverSpecs::compute(&bump).total_width;
        assert!(w > base, "expected {w} > {base} for {bump:?}");
    }
}

#[test]
fn test_height_monotonicity() {
    let base = CoverSpecs::compute(&sample_dims()).total_height;

    let taller = CoverSpecs::compute(&CoverDimensions {
        board_height: 217.0,
        ..sample_dims()
    });
    assert!(taller.total_height > base);

    let wrapped = CoverSpecs::compute(&CoverDimensions {
        turn_in: 19.0,
        ..sample_dims()
    });
    assert!(wrapped.total_height > base);

    // Spine and hinge widths have no vertical effect
    let widened = CoverSpecs::compute(&CoverDimensions {
        spine_width: 50.0,
        hinge_gap: 20.0,
        ..sample_dims()
    });
    assert_eq!(widened.total_height, base);
}

#[test]
fn test_page_size_includes_bleed() {
    let specs = CoverSpecs::compute(&sample_dims());
    assert_eq!(specs.page_size(5.0), (386.0, 262.0));
    assert_eq!(specs.page_size(0.0), (376.0, 252.0));
}

#[test]
fn test_degenerate_inputs_not_rejected() {
    let dims = CoverDimensions {
        board_width: 0.0,
        spine_width: -10.0,
        ..sample_dims()
    };
    let specs = CoverSpecs::compute(&dims);
    assert_eq!(specs.spine_end, specs.spine_start - 10.0);
    assert_eq!(specs.back_board_end, dims.turn_in);
}

#[test]
fn test_default_dimensions() {
    let dims = CoverDimensions::default();
    assert_eq!(dims.unit, Unit::Mm);
    assert_eq!(dims.board_width, 153.0);
    assert_eq!(dims.bleed, 0.0);
}

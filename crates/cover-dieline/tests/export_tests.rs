use cover_dieline::{
    Annotation, BLUEPRINT_FILENAME, CoverDimensions, CoverSpecs, Unit, blueprint_placement,
    build_annotations, export_blueprint, export_template, render_blueprint, render_template,
    template_filename, template_placement,
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

const MM_TO_PT: f32 = 72.0 / 25.4;

#[test]
fn test_template_filename_pattern() {
    let dims = sample_dims(0.0);
    let specs = CoverSpecs::compute(&dims);
    assert_eq!(template_filename(&dims, &specs), "cover_template_376.0x252.0mm.pdf");

    let inch = CoverDimensions {
        unit: Unit::Inch,
        ..dims
    };
    assert_eq!(
        template_filename(&inch, &CoverSpecs::compute(&inch)),
        "cover_template_376.0x252.0in.pdf"
    );

    assert_eq!(BLUEPRINT_FILENAME, "blueprint_spec_sheet.pdf");
}

#[test]
fn test_template_placement_shifts_by_bleed() {
    let dims = sample_dims(5.0);
    let specs = CoverSpecs::compute(&dims);
    let place = template_placement(&dims, &specs);

    // Trim (0,0) maps to (bleed, bleed) from the page corner
    assert!((place.x(0.0) - 5.0 * MM_TO_PT).abs() < 1e-3);
    let page_h_pt = 262.0 * MM_TO_PT;
    assert!((place.y(0.0) - (page_h_pt - 5.0 * MM_TO_PT)).abs() < 1e-3);
    assert!((place.y(specs.total_height) - 5.0 * MM_TO_PT).abs() < 1e-3);
}

#[test]
fn test_template_placement_zero_bleed_margin() {
    let dims = sample_dims(0.0);
    let specs = CoverSpecs::compute(&dims);
    let place = template_placement(&dims, &specs);
    assert!(place.x(0.0).abs() < 1e-6);
    assert!((place.x(specs.total_width) - 376.0 * MM_TO_PT).abs() < 1e-2);
}

#[test]
fn test_cross_renderer_boundary_consistency() {
    // Every boundary x used on screen must round-trip through the template
    // transform unchanged
    let dims = sample_dims(5.0);
    let specs = CoverSpecs::compute(&dims);
    let place = template_placement(&dims, &specs);

    for a in build_annotations(&dims, &specs) {
        if let Annotation::Guide { kind, at } = a {
            if kind.is_vertical() {
                let recovered = place.invert_x(place.x(at));
                assert!(
                    (recovered - at).abs() < 1e-3,
                    "boundary {at} round-tripped to {recovered}"
                );
            }
        }
    }
}

#[test]
fn test_blueprint_placement_uniform_scale() {
    let specs = CoverSpecs::compute(&sample_dims(0.0));
    let place = blueprint_placement(&specs);

    let avail_w = 180.0 * MM_TO_PT;
    let avail_h = 130.0 * MM_TO_PT;
    let expected = (avail_w / specs.total_width).min(avail_h / specs.total_height);
    assert!((place.scale - expected).abs() < 1e-4);

    // One scale on both axes: proportions survive
    let w = place.x(specs.total_width) - place.x(0.0);
    let h = place.y(0.0) - place.y(specs.total_height);
    assert!((w / h - specs.total_width / specs.total_height).abs() < 1e-3);
}

#[test]
fn test_blueprint_placement_centers_drawing() {
    let specs = CoverSpecs::compute(&sample_dims(0.0));
    let place = blueprint_placement(&specs);

    let area_left = 90.0 * MM_TO_PT;
    let area_right = (90.0 + 180.0) * MM_TO_PT;
    let left_slack = place.x(0.0) - area_left;
    let right_slack = area_right - place.x(specs.total_width);
    assert!(left_slack >= -1e-3);
    assert!(right_slack >= -1e-3);
    assert!((left_slack - right_slack).abs() < 1e-2);
}

#[test]
fn test_blueprint_placement_degenerate_sheet() {
    let dims = CoverDimensions {
        board_width: 0.0,
        board_height: 0.0,
        spine_width: 0.0,
        hinge_gap: 0.0,
        turn_in: 0.0,
        ..sample_dims(0.0)
    };
    let specs = CoverSpecs::compute(&dims);
    let place = blueprint_placement(&specs);
    assert!(place.scale.is_finite());
    assert!(place.x(0.0).is_finite());
}

fn save(mut doc: lopdf::Document) -> Vec<u8> {
    let mut out = Vec::new();
    doc.save_to(&mut out).expect("save PDF");
    out
}

#[test]
fn test_render_template_produces_pdf() {
    let dims = sample_dims(5.0);
    let specs = CoverSpecs::compute(&dims);
    let annotations = build_annotations(&dims, &specs);
    let bytes = save(render_template(&dims, &specs, &annotations));
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!bytes.is_empty());
}

#[test]
fn test_template_page_size_matches_bleed() {
    let dims = sample_dims(5.0);
    let specs = CoverSpecs::compute(&dims);
    let annotations = build_annotations(&dims, &specs);
    let doc = render_template(&dims, &specs, &annotations);

    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    let page_id = pages[&1];
    let page = doc.get_object(page_id).and_then(|o| o.as_dict()).unwrap();
    let media_box = page.get(b"MediaBox").and_then(|o| o.as_array()).unwrap();
    let w = media_box[2].as_float().unwrap();
    let h = media_box[3].as_float().unwrap();
    assert!((w - 386.0 * MM_TO_PT).abs() < 0.1);
    assert!((h - 262.0 * MM_TO_PT).abs() < 0.1);
}

#[test]
fn test_render_blueprint_produces_pdf() {
    let dims = sample_dims(0.0);
    let specs = CoverSpecs::compute(&dims);
    let annotations = build_annotations(&dims, &specs);
    let bytes = save(render_blueprint(&dims, &specs, &annotations));
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_blueprint_page_is_a4_landscape() {
    let dims = sample_dims(0.0);
    let specs = CoverSpecs::compute(&dims);
    let annotations = build_annotations(&dims, &specs);
    let doc = render_blueprint(&dims, &specs, &annotations);

    let pages = doc.get_pages();
    let page = doc.get_object(pages[&1]).and_then(|o| o.as_dict()).unwrap();
    let media_box = page.get(b"MediaBox").and_then(|o| o.as_array()).unwrap();
    let w = media_box[2].as_float().unwrap();
    let h = media_box[3].as_float().unwrap();
    assert!((w - 297.0 * MM_TO_PT).abs() < 0.1);
    assert!((h - 210.0 * MM_TO_PT).abs() < 0.1);
    assert!(w > h);
}

#[tokio::test]
async fn test_export_writes_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dims = sample_dims(5.0);
    let specs = CoverSpecs::compute(&dims);

    let template_path = dir.path().join(template_filename(&dims, &specs));
    export_template(&dims, &template_path).await.expect("export template");
    assert!(template_path.exists());

    let blueprint_path = dir.path().join(BLUEPRINT_FILENAME);
    export_blueprint(&dims, &blueprint_path).await.expect("export blueprint");
    assert!(blueprint_path.exists());
}

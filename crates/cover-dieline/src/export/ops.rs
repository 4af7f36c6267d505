//! PDF content stream operator generation
//!
//! Small builders that format raw PDF operators. All coordinates are in
//! points, already mapped into page space by the caller.

use crate::constants::BEZIER_CIRCLE_FACTOR;
use lopdf::{Dictionary, Document, Object, Stream};

pub(crate) fn stroke_color(r: f32, g: f32, b: f32) -> String {
    format!("{r} {g} {b} RG\n")
}

pub(crate) fn line_width(w: f32) -> String {
    format!("{w} w\n")
}

pub(crate) fn dash(on: f32, off: f32) -> String {
    format!("[{on} {off}] 0 d\n")
}

pub(crate) fn solid() -> String {
    "[] 0 d\n".to_string()
}

pub(crate) fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> String {
    format!("{x1:.2} {y1:.2} m {x2:.2} {y2:.2} l S\n")
}

pub(crate) fn rect_stroke(x: f32, y: f32, w: f32, h: f32) -> String {
    format!("{x:.2} {y:.2} {w:.2} {h:.2} re S\n")
}

/// Circle outline approximated with four Bezier segments
pub(crate) fn circle(cx: f32, cy: f32, r: f32) -> String {
    let k = r * BEZIER_CIRCLE_FACTOR;
    let mut ops = String::new();
    ops.push_str(&format!("{:.2} {:.2} m\n", cx + r, cy));
    ops.push_str(&format!(
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
        cx + r,
        cy + k,
        cx + k,
        cy + r,
        cx,
        cy + r
    ));
    ops.push_str(&format!(
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
        cx - k,
        cy + r,
        cx - r,
        cy + k,
        cx - r,
        cy
    ));
    ops.push_str(&format!(
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
        cx - r,
        cy - k,
        cx - k,
        cy - r,
        cx,
        cy - r
    ));
    ops.push_str(&format!(
        "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
        cx + k,
        cy - r,
        cx + r,
        cy - k,
        cx + r,
        cy
    ));
    ops.push_str("S\n");
    ops
}

/// Registration mark: crosshair over a circle
pub(crate) fn registration_mark(cx: f32, cy: f32, radius: f32, arm: f32) -> String {
    let mut ops = String::new();
    ops.push_str(&circle(cx, cy, radius));
    ops.push_str(&line(cx - arm, cy, cx + arm, cy));
    ops.push_str(&line(cx, cy - arm, cx, cy + arm));
    ops
}

/// Escape characters with special meaning inside a PDF string literal
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(c),
        }
    }
    out
}

/// Text with its baseline starting at (x, y)
pub(crate) fn text(font: &str, size: f32, x: f32, y: f32, s: &str) -> String {
    format!(
        "BT /{font} {size} Tf {x:.2} {y:.2} Td ({}) Tj ET\n",
        escape_text(s)
    )
}

/// Text horizontally centered on `cx` using an approximate character width
pub(crate) fn text_centered(
    font: &str,
    size: f32,
    cx: f32,
    y: f32,
    s: &str,
    char_ratio: f32,
) -> String {
    let width = s.chars().count() as f32 * size * char_ratio;
    text(font, size, cx - width / 2.0, y, s)
}

/// Text rotated 90° around its baseline start. Counterclockwise reads
/// bottom-up (dimension labels); clockwise reads top-down (spine label).
pub(crate) fn text_rotated(
    font: &str,
    size: f32,
    x: f32,
    y: f32,
    s: &str,
    clockwise: bool,
) -> String {
    let m = if clockwise { "0 -1 1 0" } else { "0 1 -1 0" };
    format!(
        "q {m} {x:.2} {y:.2} cm BT /{font} {size} Tf 0 0 Td ({}) Tj ET Q\n",
        escape_text(s)
    )
}

/// Rotated text centered along its reading direction on (cx, cy)
pub(crate) fn text_rotated_centered(
    font: &str,
    size: f32,
    cx: f32,
    cy: f32,
    s: &str,
    clockwise: bool,
    char_ratio: f32,
) -> String {
    let half = s.chars().count() as f32 * size * char_ratio / 2.0;
    // Shift the baseline start back half the text length along the reading
    // direction: up the page for counterclockwise, down for clockwise.
    let y = if clockwise { cy + half } else { cy - half };
    text_rotated(font, size, cx, y, s, clockwise)
}

/// Assemble a complete single-page document from a finished content stream.
///
/// `fonts` maps resource names to Type1 base fonts, e.g. `("F1", "Helvetica")`.
pub(crate) fn single_page_document(
    width_pt: f32,
    height_pt: f32,
    content: String,
    fonts: &[(&str, &str)],
) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut resources = Dictionary::new();
    if !fonts.is_empty() {
        let mut font_res = Dictionary::new();
        for (name, base) in fonts {
            let mut font_dict = Dictionary::new();
            font_dict.set("Type", Object::Name(b"Font".to_vec()));
            font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
            font_dict.set("BaseFont", Object::Name(base.as_bytes().to_vec()));
            let font_id = doc.add_object(font_dict);
            font_res.set(name.as_bytes(), Object::Reference(font_id));
        }
        resources.set("Font", Object::Dictionary(font_res));
    }

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));
    let page_id = doc.add_object(page_dict);

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
    pages_dict.set("Count", Object::Integer(1));
    doc.objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    doc
}

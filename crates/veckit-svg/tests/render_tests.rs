//! End-to-end render tests: parse SVG markup and check the exact drawing
//! calls issued against a recording context.

use std::f32::consts::PI;
use veckit_canvas::{DrawOp, DrawingContext, RecordingContext};
use veckit_geometry::Point;
use veckit_svg::{SvgDocument, SvgElement};

fn render(xml: &str) -> Vec<DrawOp> {
    let doc = SvgDocument::parse(xml).expect("document should parse");
    let mut ctx = RecordingContext::new();
    doc.render(&mut ctx);
    ctx.into_ops()
}

#[test]
fn path_triangle_issues_exact_sequence() {
    let ops = render(r#"<svg width="20" height="20"><path d="M0 0 L10 0 L10 10 Z"/></svg>"#);
    assert_eq!(
        ops,
        vec![
            DrawOp::MoveTo { x: 0.0, y: 0.0 },
            DrawOp::LineTo { x: 10.0, y: 0.0 },
            DrawOp::LineTo { x: 10.0, y: 10.0 },
            DrawOp::ClosePath,
            // Default fill is black.
            DrawOp::SetSourceRgb { r: 0.0, g: 0.0, b: 0.0 },
            DrawOp::Fill,
        ]
    );
}

#[test]
fn path_with_fill_and_stroke_preserves_fill() {
    let ops = render(
        r#"<svg width="20" height="20">
             <path d="M0 0 L5 5" fill="red" stroke="blue" stroke-width="2"/>
           </svg>"#,
    );
    assert_eq!(
        ops,
        vec![
            DrawOp::MoveTo { x: 0.0, y: 0.0 },
            DrawOp::LineTo { x: 5.0, y: 5.0 },
            DrawOp::SetSourceRgb { r: 1.0, g: 0.0, b: 0.0 },
            DrawOp::FillPreserve,
            DrawOp::SetSourceRgb { r: 0.0, g: 0.0, b: 1.0 },
            DrawOp::SetLineWidth { width: 2.0 },
            DrawOp::Stroke,
        ]
    );
}

#[test]
fn smooth_cubic_chain_reflects_through_current_point() {
    let ops = render(
        r#"<svg width="60" height="30">
             <path d="M0 0 C10 0 20 10 30 0 S40 20 50 0" fill="none" stroke="black"/>
           </svg>"#,
    );
    assert_eq!(
        ops[2],
        DrawOp::CurveTo {
            c1: Point::new(40.0, -10.0),
            c2: Point::new(40.0, 20.0),
            end: Point::new(50.0, 0.0),
        }
    );
}

#[test]
fn rect_draws_rectangle_then_paints() {
    let ops = render(r#"<svg width="100" height="100"><rect x="5" y="6" width="50%" height="10"/></svg>"#);
    assert_eq!(
        ops,
        vec![
            DrawOp::Rectangle { x: 5.0, y: 6.0, width: 50.0, height: 10.0 },
            DrawOp::SetSourceRgb { r: 0.0, g: 0.0, b: 0.0 },
            DrawOp::Fill,
        ]
    );
}

#[test]
fn circle_is_a_full_arc() {
    let ops = render(r#"<svg width="40" height="40"><circle cx="10" cy="12" r="7" fill="white"/></svg>"#);
    assert_eq!(ops.len(), 3);
    match ops[0] {
        DrawOp::Arc { center, radius, start_angle, end_angle } => {
            assert_eq!(center, Point::new(10.0, 12.0));
            assert_eq!(radius, 7.0);
            assert_eq!(start_angle, 0.0);
            assert!((end_angle - 2.0 * PI).abs() < 1e-6);
        }
        other => panic!("expected Arc, got {:?}", other),
    }
    assert_eq!(ops[1], DrawOp::SetSourceRgb { r: 1.0, g: 1.0, b: 1.0 });
    assert_eq!(ops[2], DrawOp::Fill);
}

#[test]
fn ellipse_fills_inside_scoped_transform() {
    let ops = render(
        r#"<svg width="40" height="40">
             <ellipse cx="10" cy="20" rx="8" ry="4" stroke="red"/>
           </svg>"#,
    );
    assert_eq!(ops[0], DrawOp::Save);
    assert_eq!(ops[1], DrawOp::Translate { tx: 10.0, ty: 20.0 });
    assert_eq!(ops[2], DrawOp::Scale { sx: 8.0, sy: 4.0 });
    assert!(matches!(ops[3], DrawOp::Arc { radius, .. } if radius == 1.0));
    // Fill (preserved for the stroke) happens before the restore, the stroke
    // after it.
    assert_eq!(ops[5], DrawOp::FillPreserve);
    assert_eq!(ops[6], DrawOp::Restore);
    assert_eq!(*ops.last().unwrap(), DrawOp::Stroke);
}

#[test]
fn line_strokes_without_filling() {
    let ops = render(
        r#"<svg width="10" height="10"><line x1="1" y1="2" x2="3" y2="4" stroke="black"/></svg>"#,
    );
    assert_eq!(
        ops,
        vec![
            DrawOp::MoveTo { x: 1.0, y: 2.0 },
            DrawOp::LineTo { x: 3.0, y: 4.0 },
            DrawOp::SetSourceRgb { r: 0.0, g: 0.0, b: 0.0 },
            DrawOp::SetLineWidth { width: 1.0 },
            DrawOp::Stroke,
        ]
    );
}

#[test]
fn polyline_connects_points_in_order() {
    let ops = render(
        r#"<svg width="30" height="30"><polyline points="0,0 10,5 20,0" fill="none" stroke="gray"/></svg>"#,
    );
    assert_eq!(ops[0], DrawOp::MoveTo { x: 0.0, y: 0.0 });
    assert_eq!(ops[1], DrawOp::LineTo { x: 10.0, y: 5.0 });
    assert_eq!(ops[2], DrawOp::LineTo { x: 20.0, y: 0.0 });
}

#[test]
fn elements_render_in_document_order() {
    let ops = render(
        r#"<svg width="30" height="30">
             <rect width="10" height="10"/>
             <line x1="0" y1="0" x2="1" y2="1" stroke="black"/>
           </svg>"#,
    );
    let rect_pos = ops.iter().position(|op| matches!(op, DrawOp::Rectangle { .. }));
    let line_pos = ops.iter().position(|op| matches!(op, DrawOp::MoveTo { .. }));
    assert!(rect_pos.unwrap() < line_pos.unwrap());
}

#[test]
fn arc_path_renders_inside_scoped_transform() {
    let doc = SvgDocument::parse(
        r#"<svg width="30" height="30"><path d="M0 0 A5 5 0 0 1 10 0" fill="none" stroke="black"/></svg>"#,
    )
    .unwrap();
    let mut ctx = RecordingContext::new();
    doc.render(&mut ctx);
    let ops = ctx.ops();

    let save_pos = ops.iter().position(|op| matches!(op, DrawOp::Save)).unwrap();
    let arc_pos = ops.iter().position(|op| matches!(op, DrawOp::Arc { .. })).unwrap();
    let restore_pos = ops.iter().position(|op| matches!(op, DrawOp::Restore)).unwrap();
    assert!(save_pos < arc_pos && arc_pos < restore_pos);

    // The closing stroke clears the path, so the rendered context has no pen.
    assert_eq!(ctx.current_point(), Point::ORIGIN);

    // Before painting, the pen sits in document space at the arc's end.
    let path = match &doc.elements[0] {
        SvgElement::Path(path) => path,
        other => panic!("expected a path, got {:?}", other),
    };
    let mut ctx = RecordingContext::new();
    path.program.interpret(&mut ctx);
    let pen = ctx.current_point();
    assert!((pen.x - 10.0).abs() < 1e-4);
    assert!(pen.y.abs() < 1e-4);
}

#[test]
fn parsed_elements_are_typed() {
    let doc = SvgDocument::parse(
        r#"<svg width="10" height="10">
             <rect width="1" height="1"/>
             <circle r="1"/>
             <ellipse rx="1" ry="2"/>
             <line/>
             <polyline points="0,0 1,1"/>
             <path d="M0 0"/>
           </svg>"#,
    )
    .unwrap();
    assert_eq!(doc.elements.len(), 6);
    assert!(matches!(doc.elements[0], SvgElement::Rect(_)));
    assert!(matches!(doc.elements[1], SvgElement::Circle(_)));
    assert!(matches!(doc.elements[2], SvgElement::Ellipse(_)));
    assert!(matches!(doc.elements[3], SvgElement::Line(_)));
    assert!(matches!(doc.elements[4], SvgElement::Polyline(_)));
    assert!(matches!(doc.elements[5], SvgElement::Path(_)));
}

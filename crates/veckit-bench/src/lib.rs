//! # VecKit Bench
//!
//! Input generators for the VecKit benchmarks.
//!
//! Run with: cargo bench -p veckit-bench

/// Path data alternating lines, cubics and arcs, `segments` commands long.
pub fn generate_path_data(segments: usize) -> String {
    let mut data = String::from("M0 0");
    for i in 0..segments {
        let x = (i * 10) as f32;
        match i % 3 {
            0 => data.push_str(&format!(" L{} {}", x, x / 2.0)),
            1 => data.push_str(&format!(" C{} 0 {} 10 {} 0", x, x + 5.0, x + 10.0)),
            _ => data.push_str(&format!(" A5 5 0 0 1 {} 5", x + 10.0)),
        }
    }
    data
}

/// An SVG document with `shapes` mixed shape elements.
pub fn generate_document(shapes: usize) -> String {
    let mut markup = String::from(r#"<svg width="1000" height="1000">"#);
    for i in 0..shapes {
        let offset = (i * 7 % 900) as f32;
        match i % 3 {
            0 => markup.push_str(&format!(
                r#"<rect x="{offset}" y="{offset}" width="50" height="30"/>"#
            )),
            1 => markup.push_str(&format!(r#"<circle cx="{offset}" cy="{offset}" r="10"/>"#)),
            _ => markup.push_str(&format!(
                r#"<path d="M{offset} {offset} q10 -10 20 0 t20 0 z"/>"#
            )),
        }
    }
    markup.push_str("</svg>");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_path_parses() {
        let program = veckit_path::PathProgram::parse(&generate_path_data(30)).unwrap();
        assert_eq!(program.len(), 31);
    }

    #[test]
    fn test_generated_document_parses() {
        let doc = veckit_svg::SvgDocument::parse(&generate_document(9)).unwrap();
        assert_eq!(doc.elements.len(), 9);
    }
}

//! Convert an SVG file into the list of drawing instructions VecKit would
//! issue to a rendering backend.
//!
//! ## Usage
//!
//! ```bash
//! # Print the instruction list as JSON
//! svg-convert image.svg
//!
//! # Write it to a file, pretty-printed
//! svg-convert image.svg --output image.json --pretty
//! ```

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use veckit_canvas::{DrawOp, RecordingContext};
use veckit_svg::SvgDocument;

#[derive(Parser)]
#[command(name = "svg-convert")]
#[command(about = "Convert SVG files to VecKit drawing-instruction lists")]
struct Cli {
    /// Input SVG file
    input: PathBuf,

    /// Output JSON path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

/// The full conversion result: canvas size plus the recorded instruction
/// list, in issue order.
#[derive(Serialize)]
struct Conversion {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

fn convert(path: &Path) -> Result<Conversion, Box<dyn std::error::Error>> {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(format!("invalid file `{}`: expected a .svg file", path.display()).into());
    }

    let markup = fs::read_to_string(path)?;
    let doc = SvgDocument::parse(&markup)?;

    let mut ctx = RecordingContext::new();
    doc.render(&mut ctx);

    Ok(Conversion {
        width: doc.width,
        height: doc.height,
        ops: ctx.into_ops(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let conversion = convert(&cli.input)?;
    info!(ops = conversion.ops.len(), "converted {}", cli.input.display());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&conversion)?
    } else {
        serde_json::to_string(&conversion)?
    };

    match cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_convert_rejects_non_svg() {
        assert!(convert(Path::new("image.png")).is_err());
        assert!(convert(Path::new("image")).is_err());
    }

    #[test]
    fn test_convert_records_ops() {
        let mut file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
        write!(
            file,
            r#"<svg width="10" height="10"><rect width="5" height="5"/></svg>"#
        )
        .unwrap();

        let conversion = convert(file.path()).unwrap();
        assert_eq!(conversion.width, 10.0);
        assert_eq!(conversion.height, 10.0);
        assert!(conversion.ops.contains(&DrawOp::Rectangle {
            x: 0.0,
            y: 0.0,
            width: 5.0,
            height: 5.0
        }));
    }

    #[test]
    fn test_convert_missing_file_is_error() {
        assert!(convert(Path::new("no-such-file.svg")).is_err());
    }
}

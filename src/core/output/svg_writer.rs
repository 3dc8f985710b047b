//! SVG output writer.
//!
//! Draws edges first so boxes sit on top of them, then one rounded box per
//! record with the timestamp, sender and wrapped body.

use std::fmt::Write as _;

use crate::config::BoxMetrics;
use crate::core::models::{Diagram, PositionedRecord};
use crate::error::Result;

/// Margin around the records when computing the view box.
pub const EXPORT_MARGIN: f64 = 20.0;

const CORNER_RADIUS: f64 = 8.0;
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Writes the diagram to an SVG file.
pub fn write_svg(diagram: &Diagram, output_path: &str, metrics: &BoxMetrics) -> Result<()> {
    let svg = to_svg(diagram, metrics)?;
    std::fs::write(output_path, svg)?;
    Ok(())
}

/// Renders the diagram as a standalone SVG document.
///
/// The view box is the bounding box of all records plus [`EXPORT_MARGIN`].
/// An empty diagram renders as an empty document.
pub fn to_svg(diagram: &Diagram, metrics: &BoxMetrics) -> Result<String> {
    let mut svg = String::new();
    let (vx, vy, vw, vh) = diagram
        .bounds(EXPORT_MARGIN)
        .map_or((0.0, 0.0, 0.0, 0.0), |b| (b.x, b.y, b.width, b.height));

    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
        num(vw),
        num(vh),
        num(vx),
        num(vy),
        num(vw),
        num(vh),
    )?;
    writeln!(
        svg,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#FFFFFF\"/>",
        num(vx),
        num(vy),
        num(vw),
        num(vh),
    )?;

    for edge in &diagram.edges {
        let (Some(source), Some(target)) = (diagram.record(&edge.source), diagram.record(&edge.target))
        else {
            continue;
        };
        let (a, b) = (source.center(), target.center());
        writeln!(
            svg,
            "<line id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
            escape_xml(&edge.id),
            num(a.x),
            num(a.y),
            num(b.x),
            num(b.y),
            escape_xml(&edge.color),
        )?;
    }

    for record in &diagram.records {
        write_record(&mut svg, record, metrics)?;
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

fn write_record(svg: &mut String, record: &PositionedRecord, metrics: &BoxMetrics) -> std::fmt::Result {
    let color = escape_xml(&record.color);
    let left = record.x + metrics.padding / 2.0;

    writeln!(svg, "<g id=\"record-{}\">", escape_xml(&record.id))?;
    writeln!(
        svg,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{CORNER_RADIUS}\" fill=\"#FFFFFF\" stroke=\"{color}\" stroke-width=\"2\"/>",
        num(record.x),
        num(record.y),
        num(record.width),
        num(record.height),
    )?;
    writeln!(
        svg,
        "<text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"11\" fill=\"#666666\">{} {}</text>",
        num(left),
        num(record.y + metrics.header_height * 0.35),
        escape_xml(&record.message.date),
        escape_xml(&record.message.time),
    )?;
    writeln!(
        svg,
        "<text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"13\" font-weight=\"bold\" fill=\"{color}\">{}</text>",
        num(left),
        num(record.y + metrics.header_height * 0.75),
        escape_xml(&record.message.sender),
    )?;
    for (i, line) in record.lines.iter().enumerate() {
        let baseline = record.y + metrics.header_height + (i as f64 + 0.75) * metrics.line_height;
        writeln!(
            svg,
            "<text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"12\" fill=\"#222222\" xml:space=\"preserve\">{}</text>",
            num(left),
            num(baseline),
            escape_xml(line),
        )?;
    }
    svg.push_str("</g>\n");
    Ok(())
}

/// Trims trailing zeros so coordinates stay short.
fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

//! CSV output writer.

use std::fs::File;

use crate::core::models::{Diagram, PositionedRecord};
use crate::error::Result;

const HEADER: [&str; 10] = [
    "ID", "X", "Y", "Width", "Height", "Color", "Date", "Time", "Sender", "Text",
];

/// Writes one row per record with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `ID`, `X`, `Y`, `Width`, `Height`, `Color`, `Date`, `Time`, `Sender`, `Text`
/// - Coordinates with two decimals
/// - Encoding: UTF-8
///
/// Edges are implicit: each row connects to the next one.
pub fn write_csv(diagram: &Diagram, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(HEADER)?;
    for record in &diagram.records {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the diagram to a CSV string.
pub fn to_csv(diagram: &Diagram) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in &diagram.records {
        writer.write_record(build_record(record))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn build_record(record: &PositionedRecord) -> [String; 10] {
    [
        record.id.clone(),
        format!("{:.2}", record.x),
        format!("{:.2}", record.y),
        format!("{:.2}", record.width),
        format!("{:.2}", record.height),
        record.color.clone(),
        record.message.date.clone(),
        record.message.time.clone(),
        record.message.sender.clone(),
        record.message.text.clone(),
    ]
}

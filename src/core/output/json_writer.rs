//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::Diagram;
use crate::error::Result;

/// Writes the diagram to a JSON file.
///
/// # Format
/// ```json
/// {
///   "records": [
///     {"id": "0", "date": "1/1/24", "time": "09:00", "sender": "Andrea",
///      "text": "hi", "x": 50.0, "y": 600.0, "width": 200.0, "height": 84.0,
///      "color": "#FF69B4", "lines": ["hi"]}
///   ],
///   "edges": [
///     {"id": "e0-1", "source": "0", "target": "1", "color": "#FF69B4"}
///   ]
/// }
/// ```
pub fn write_json(diagram: &Diagram, output_path: &str) -> Result<()> {
    let json = to_json(diagram)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the diagram to a pretty-printed JSON string.
pub fn to_json(diagram: &Diagram) -> Result<String> {
    Ok(serde_json::to_string_pretty(diagram)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DrawingStyle, LayoutConfig};
    use crate::core::processor::layout;
    use tempfile::NamedTempFile;

    const CHAT: &str = "1/1/24 a las 09:00 - Andrea: hi\n1/1/24 a las 09:05 - David: hello there";

    #[test]
    fn test_to_json_shape() {
        let config = LayoutConfig::new().with_style(DrawingStyle::Timeline);
        let diagram = layout(CHAT, &config).unwrap();
        let json = to_json(&diagram).unwrap();

        assert!(json.contains(r#""sender": "Andrea""#));
        assert!(json.contains(r#""source": "0""#));
        assert!(json.contains(r#""id": "e0-1""#));

        let back: Diagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diagram);
    }

    #[test]
    fn test_write_json() {
        let diagram = layout(CHAT, &LayoutConfig::new()).unwrap();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&diagram, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 2);
        assert_eq!(value["edges"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_diagram() {
        let json = to_json(&Diagram::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["records"].as_array().unwrap().is_empty());
    }
}

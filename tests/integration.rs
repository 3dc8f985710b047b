//! Integration tests for the full pipeline with real files

use std::fs;

use chatheart::config::BoxMetrics;
use chatheart::layout::HeartCurve;
use chatheart::prelude::*;
use tempfile::tempdir;

const SPANISH_EXPORT: &str = "\
Chat de WhatsApp con Andrea

14/5/24 a las 20:31 - Los mensajes y las llamadas están cifrados de extremo a extremo.
14/5/24 a las 20:31 - Andrea: hola, ¿cómo estás?
14/5/24 a las 20:32 - David: muy bien
acabo de llegar a casa

y tú?
14/5/24 a las 20:35 - Andrea: genial 😍
15/5/24 a las 08:02 - David: buenos días
15/5/24 a las 08:10 - Andrea: buenos días, dormilón
16/5/24 a las 21:45 - David: te echo de menos
16/5/24 a las 21:46 - Andrea: y yo a ti ❤️";

// ============================================================================
// Scenario from the README
// ============================================================================

#[test]
fn test_two_person_timeline() {
    let text = "1/1/24 a las 09:00 - Andrea: hi\n1/1/24 a las 09:05 - David: hello there";
    let config = LayoutConfig::new()
        .with_order(OrderPolicy::None)
        .with_window(0, 2)
        .with_style(DrawingStyle::Timeline);

    let transcript = Transcript::parse(text);
    assert_eq!(transcript.len(), 2);

    let diagram = transcript.layout(&config).unwrap();
    assert_eq!(diagram.records.len(), 2);
    assert!(diagram.records[0].x < diagram.records[1].x);

    assert_eq!(diagram.edges.len(), 1);
    assert_eq!(diagram.edges[0].source, diagram.records[0].id);
    assert_eq!(diagram.edges[0].target, diagram.records[1].id);

    assert_eq!(diagram.records[0].message.sender, "Andrea");
    assert_eq!(diagram.records[0].color, config.palette.highlight);
    assert_eq!(diagram.records[1].color, config.palette.default);
}

// ============================================================================
// Parsing from files
// ============================================================================

#[test]
fn test_parse_export_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, SPANISH_EXPORT).unwrap();

    let transcript = ChatParser::new().parse(&path).unwrap();
    let stats = transcript.stats();

    assert_eq!(stats.entries, 8);
    assert_eq!(stats.messages, 7);
    assert_eq!(stats.unmatched, 1);
    assert_eq!(
        transcript.messages[1].text,
        "muy bien acabo de llegar a casa y tú?"
    );
    assert_eq!(transcript.messages[2].text, "genial 😍");
}

#[test]
fn test_parse_missing_file() {
    let err = ChatParser::new()
        .parse("does/not/exist.txt".as_ref())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_crlf_export() {
    let text = SPANISH_EXPORT.replace('\n', "\r\n");
    let transcript = Transcript::parse(&text);
    assert_eq!(transcript.len(), 7);
    assert!(transcript.messages.iter().all(|m| !m.text.ends_with('\r')));
}

// ============================================================================
// Full pipeline per style
// ============================================================================

#[test]
fn test_every_style_places_every_message() {
    let transcript = Transcript::parse(SPANISH_EXPORT);
    for style in [
        DrawingStyle::HeartOutline,
        DrawingStyle::HeartFill,
        DrawingStyle::Timeline,
    ] {
        let diagram = transcript
            .layout(&LayoutConfig::new().with_style(style))
            .unwrap();
        assert_eq!(diagram.records.len(), 7, "{style}");
        assert_eq!(diagram.edges.len(), 6, "{style}");
        for record in &diagram.records {
            assert!(record.x.is_finite() && record.y.is_finite());
            assert!(record.width >= BoxMetrics::default().min_width);
        }
    }
}

#[test]
fn test_heart_outline_symmetry() {
    // An even count puts pairs of points mirrored about the vertical axis.
    let text: String = (0..8)
        .map(|i| format!("1/1/24 a las 09:0{i} - David: x\n"))
        .collect();
    let config = LayoutConfig::new();
    let diagram = layout(&text, &config).unwrap();

    let centers: Vec<_> = diagram.records.iter().map(PositionedRecord::center).collect();
    for i in 1..4 {
        let (a, b) = (centers[i], centers[8 - i]);
        assert!((a.x - config.center.x + (b.x - config.center.x)).abs() < 1e-6);
        assert!((a.y - b.y).abs() < 1e-6);
    }
}

#[test]
fn test_heart_fill_interior_inside_polygon() {
    let text: String = (0..40)
        .map(|i| format!("2/3/24 a las 10:{:02} - Andrea: mensaje {i}\n", i % 60))
        .collect();
    let config = LayoutConfig::new()
        .with_style(DrawingStyle::HeartFill)
        .with_outline_fraction(0.25);
    let diagram = layout(&text, &config).unwrap();
    let polygon = HeartCurve::new(config.center, config.scale).polygon(config.polygon_steps);

    assert_eq!(diagram.records.len(), 40);
    for record in &diagram.records[10..] {
        assert!(polygon.contains(record.center()));
    }
}

#[test]
fn test_date_order_across_days() {
    let text = "\
3/1/24 a las 10:00 - David: third
1/1/24 a las 23:59 - Andrea: first
2/1/24 a las 00:00 - David: second
99/99/99 a las 10:00 - Andrea: broken date";
    let config = LayoutConfig::new().with_order(OrderPolicy::Date);
    let diagram = layout(text, &config).unwrap();
    let texts: Vec<&str> = diagram.records.iter().map(|r| r.message.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third", "broken date"]);
}

#[test]
fn test_window_policies_on_real_export() {
    let transcript = Transcript::parse(SPANISH_EXPORT);

    let clamped = transcript
        .layout(&LayoutConfig::new().with_window(5, 10))
        .unwrap();
    assert_eq!(clamped.records.len(), 2);

    let wrapped = transcript
        .layout(
            &LayoutConfig::new()
                .with_selection(SelectionPolicy::Wrap)
                .with_window(5, 10),
        )
        .unwrap();
    assert_eq!(wrapped.records.len(), 10);
    assert_eq!(wrapped.records[2].message, transcript.messages[0]);
}

#[test]
fn test_highlight_marker_switch() {
    let transcript = Transcript::parse(SPANISH_EXPORT);
    let config = LayoutConfig::new().with_highlight_marker("david");
    let diagram = transcript.layout(&config).unwrap();
    for record in &diagram.records {
        let expected = if record.message.sender == "David" {
            &config.palette.highlight
        } else {
            &config.palette.default
        };
        assert_eq!(&record.color, expected);
    }
}

#[test]
fn test_edge_colors_follow_source() {
    let diagram = layout(SPANISH_EXPORT, &LayoutConfig::new()).unwrap();
    for edge in &diagram.edges {
        let source = diagram.record(&edge.source).unwrap();
        assert_eq!(edge.color, source.color);
        assert_eq!(edge.id, format!("e{}-{}", edge.source, edge.target));
    }
}

// ============================================================================
// Output round trip through files
// ============================================================================

#[test]
fn test_write_every_format() {
    let dir = tempdir().unwrap();
    let config = LayoutConfig::new().with_style(DrawingStyle::HeartFill);
    let diagram = layout(SPANISH_EXPORT, &config).unwrap();

    for &format in OutputFormat::all() {
        let path = dir.path().join(format!("heart.{}", format.extension()));
        let path = path.to_str().unwrap();
        write_to_format(&diagram, path, format, &config).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("dormilón"), "{format}");
    }

    let json = fs::read_to_string(dir.path().join("heart.json")).unwrap();
    let back: Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, diagram);
}

#[test]
fn test_config_json_round_trip() {
    let config = LayoutConfig::new()
        .with_style(DrawingStyle::Timeline)
        .with_order(OrderPolicy::Random)
        .with_seed(3)
        .with_window(1, 4);
    let json = serde_json::to_string(&config).unwrap();
    let back: LayoutConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let a = layout(SPANISH_EXPORT, &config).unwrap();
    let b = layout(SPANISH_EXPORT, &back).unwrap();
    assert_eq!(a, b);
}

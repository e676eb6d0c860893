//! Fixture tests for parsing, rounding, formatting and comparison.

use crate::{Color, ColorError, Decimal, ErrorKind, HexColorError, Opacity, OpacityError};

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn default_opacity_is_one() {
    let color = Color::new("FFFFFF").unwrap();
    assert_eq!(color.opacity(), Opacity::OPAQUE);
    assert_eq!(color.opacity().to_decimal(), Decimal::from(1));
}

#[test]
fn invalid_hex_values() {
    let tests = [
        "", "#", "#1", "#12", "#1234", "#12345", "#1234567", "1", "12", "1234", "12345",
        "1234567", "####", "##FFF", "XXX", "ABCDEH", "#GGG", "#A0A0G0",
    ];

    for value in tests {
        let err = Color::new(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value, "{value:?}");
        assert!(matches!(err, ColorError::Hex(_)), "{value:?}");
    }
}

#[test]
fn invalid_opacity_values() {
    let tests = [
        ("-0.1", Color::with_opacity("FFFFFF", -0.1)),
        ("1.1", Color::with_opacity("FFFFFF", 1.1)),
        ("2", Color::with_opacity("FFFFFF", 2)),
        ("'2'", Color::with_opacity("FFFFFF", "2")),
        ("Infinity", Color::with_opacity("FFFFFF", dec("Infinity"))),
        ("inf", Color::with_opacity("FFFFFF", f64::INFINITY)),
        ("nan", Color::with_opacity("FFFFFF", "NaN")),
        ("text", Color::with_opacity("FFFFFF", "half")),
    ];

    for (label, result) in tests {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value, "{label}");
    }

    assert_eq!(
        Color::with_opacity("FFFFFF", 1.1),
        Err(ColorError::Opacity(OpacityError::OutOfRange))
    );
    assert_eq!(
        Color::with_opacity("FFFFFF", f64::INFINITY),
        Err(ColorError::Opacity(OpacityError::NonFinite))
    );
    assert_eq!(
        Color::with_opacity("FFFFFF", "half"),
        Err(ColorError::Opacity(OpacityError::Malformed))
    );
}

#[test]
fn hex_is_checked_before_opacity() {
    assert_eq!(
        Color::with_opacity("#12", 5),
        Err(ColorError::Hex(HexColorError::InvalidLength(2)))
    );
}

#[test]
fn hex() {
    let tests = [
        ("000", "#000000"),
        ("a55", "#AA5555"),
        ("#bAc", "#BBAACC"),
        ("#123", "#112233"),
        ("b00b00", "#B00B00"),
        ("806099", "#806099"),
        ("#de1e7e", "#DE1E7E"),
        ("#Facade", "#FACADE"),
    ];

    for (value, output) in tests {
        let hex = Color::new(value).unwrap().hex();
        assert_eq!(hex, output, "{value}");
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }
}

#[test]
fn short_form_matches_long_form() {
    for short in ["000", "fff", "a1B", "9c0", "#e7e"] {
        let digits = short.trim_start_matches('#');
        let long: String = digits.chars().flat_map(|c| [c, c]).collect();
        assert_eq!(Color::new(short).unwrap().hex(), Color::new(&long).unwrap().hex());
    }
}

#[test]
fn prefix_is_optional() {
    for value in ["c0ffee", "60a", "B00B00"] {
        let prefixed = format!("#{value}");
        assert_eq!(
            Color::new(value).unwrap().hex(),
            Color::new(&prefixed).unwrap().hex()
        );
    }
}

#[test]
fn opacity_rounding() {
    let tests = [
        (Color::with_opacity("c0ffee", 0), "0"),
        (Color::with_opacity("c0ffee", 1), "1"),
        (Color::with_opacity("c0ffee", 0.501), "0.5"),
        (Color::with_opacity("c0ffee", 0.254), "0.25"),
        (Color::with_opacity("c0ffee", 0.255), "0.26"),
        (Color::with_opacity("c0ffee", 0.124), "0.12"),
        (Color::with_opacity("c0ffee", 0.125), "0.12"),
        (Color::with_opacity("c0ffee", "0"), "0"),
        (Color::with_opacity("c0ffee", "0.123"), "0.12"),
        (Color::with_opacity("c0ffee", "_0.3__"), "0.3"),
        (Color::with_opacity("c0ffee", dec("0.543")), "0.54"),
    ];

    for (color, output) in tests {
        let opacity = color.unwrap().opacity();
        assert_eq!(opacity.to_string(), output);
        assert_eq!(opacity.to_decimal(), dec(output));
    }
}

#[test]
fn text_opacity_rounds_on_written_digits() {
    let cases = [("0.125", 12), ("0.135", 14), ("0.145", 14), ("0.015", 2), ("1.00", 100)];
    for (text, hundredths) in cases {
        let color = Color::with_opacity("fff", text).unwrap();
        assert_eq!(color.opacity().hundredths(), hundredths, "{text}");
    }
}

#[test]
fn display() {
    assert_eq!(Color::new("#60A").unwrap().to_string(), "#6600AA");
    assert_eq!(Color::with_opacity("#ABC", 1).unwrap().to_string(), "#AABBCC");
    assert_eq!(
        Color::with_opacity("#60A", 0.8).unwrap().to_string(),
        "rgba(102,0,170,0.8)"
    );
    assert_eq!(Color::with_opacity("#BADA00", 1).unwrap().to_string(), "#BADA00");
    assert_eq!(
        Color::with_opacity("#000", 0).unwrap().to_string(),
        "rgba(0,0,0,0)"
    );
}

#[test]
fn comparison() {
    assert_eq!(Color::new("#FFFF00").unwrap(), "FFFF00");
    assert_eq!(Color::new("#60A").unwrap(), "#6600AA");
    assert_eq!(Color::new("#c0FFeE").unwrap(), "#C0FFEE");
    assert_eq!(Color::new("#c0FFeE").unwrap(), "#c0ffee");
    assert_eq!(Color::new("#60A").unwrap(), Color::new("#6600AA").unwrap());
    assert_eq!(Color::new("#c0FFeE").unwrap(), Color::new("#C0FFEE").unwrap());
    assert_eq!(Color::new("#c0FFeE").unwrap(), Color::new("#c0ffee").unwrap());
    assert_eq!(Color::with_opacity("#AABBCC", 0.99).unwrap(), "#AABBCC");
    assert_eq!("#aabbcc", Color::new("#ABC").unwrap());
    assert_eq!(String::from("#6600AA"), Color::new("#60A").unwrap());
    assert_ne!(Color::new("#60A").unwrap(), "#6600AB");
    assert_ne!(Color::new("#60A").unwrap(), "purple");
}

#[test]
fn equal_colors_hash_alike() {
    use std::collections::HashSet;

    let set: HashSet<Color> = [
        Color::new("#c0ffee").unwrap(),
        Color::with_opacity("#C0FFEE", 0.5).unwrap(),
        Color::new("#60A").unwrap(),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn rgb() {
    let tests = [
        ("#C0C0C0", "rgb(192,192,192)"),
        ("#A52A2A", "rgb(165,42,42)"),
        ("#ff7f50", "rgb(255,127,80)"),
        ("#006400", "rgb(0,100,0)"),
    ];

    for (value, output) in tests {
        assert_eq!(Color::new(value).unwrap().rgb(), output);
        assert_eq!(Color::with_opacity(value, 0.3).unwrap().rgb(), output);
    }
}

#[test]
fn rgba() {
    let tests = [
        (Color::new("#C0C0C0"), "rgba(192,192,192,1)"),
        (Color::with_opacity("#A52A2A", 0.5), "rgba(165,42,42,0.5)"),
        (Color::with_opacity("#ff7f50", 0), "rgba(255,127,80,0)"),
        (Color::with_opacity("#006400", 0.134), "rgba(0,100,0,0.13)"),
        (Color::with_opacity("#c0FFee", 0.135), "rgba(192,255,238,0.14)"),
    ];

    for (color, output) in tests {
        assert_eq!(color.unwrap().rgba(), output);
    }
}

#[test]
fn serde_uses_the_constructor() {
    let color = Color::with_opacity("#60A", 0.8).unwrap();
    let value = serde_json::to_value(color).unwrap();
    assert_eq!(value, serde_json::json!({"hex": "#6600AA", "opacity": "0.8"}));

    let back: Color = serde_json::from_value(value).unwrap();
    assert_eq!(back.to_string(), "rgba(102,0,170,0.8)");

    let opaque: Color = serde_json::from_str(r##"{"hex": "abc"}"##).unwrap();
    assert_eq!(opaque.to_string(), "#AABBCC");

    let rounded: Color = serde_json::from_str(r##"{"hex": "abc", "opacity": 0.125}"##).unwrap();
    assert_eq!(rounded.opacity().hundredths(), 12);

    assert!(serde_json::from_str::<Color>(r##"{"hex": "abcd"}"##).is_err());
    assert!(serde_json::from_str::<Color>(r##"{"hex": "abc", "opacity": 2}"##).is_err());

    let null = serde_json::from_value::<Color>(serde_json::json!({"hex": "abc", "opacity": null}));
    let from_json = Color::from_json(&serde_json::json!("abc"), Some(&serde_json::Value::Null));
    assert!(null.unwrap_err().to_string().contains("found null"));
    assert_eq!(from_json.unwrap_err().kind(), ErrorKind::Type);
}

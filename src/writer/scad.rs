//! Emit the OpenSCAD `name = [[x, y], ...];` declaration.

use crate::model::Coordinate;
use std::fs;
use std::io;
use std::path::Path;

const INDENT: &str = "    ";

/// Render the full file body for `points`.
///
/// The layout is fixed byte-for-byte: a header comment, the opening
/// assignment, one indented pair per line joined with `,\n`, then `];`.
/// An empty sequence still gets its (empty) body line.
pub fn render(source_label: &str, variable: &str, points: &[Coordinate]) -> String {
    let mut out = format!("// Auto-generated from {source_label}\n{variable} = [\n");

    let body = points
        .iter()
        .map(|p| format!("{INDENT}[{}, {}]", component(p.x), component(p.y)))
        .collect::<Vec<_>>()
        .join(",\n");
    out.push_str(&body);

    out.push_str("\n];\n");
    out
}

/// Create or truncate `destination` and write the rendered declaration.
pub fn emit(
    source_label: &str,
    variable: &str,
    points: &[Coordinate],
    destination: &Path,
) -> io::Result<()> {
    fs::write(destination, render(source_label, variable, points))
}

/// Six fixed decimals; non-finite values use the lowercase spellings
/// (`nan`, `inf`, `-inf`).
fn component(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{v:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_three_points() {
        let points = vec![
            Coordinate::new(1.0, 2.0),
            Coordinate::new(3.0, 4.0),
            Coordinate::new(5.5, 6.25),
        ];
        let expected = "// Auto-generated from input.txt\n\
                        pts = [\n    [1.000000, 2.000000],\n    [3.000000, 4.000000],\n    [5.500000, 6.250000]\n];\n";
        assert_eq!(render("input.txt", "pts", &points), expected);
    }

    #[test]
    fn test_render_empty_body() {
        assert_eq!(
            render("a.txt", "empty", &[]),
            "// Auto-generated from a.txt\nempty = [\n\n];\n"
        );
    }

    #[test]
    fn test_render_single_point_has_no_trailing_comma() {
        let out = render("a.txt", "p", &[Coordinate::new(0.5, -0.25)]);
        assert!(out.contains("    [0.500000, -0.250000]\n];\n"));
        assert!(!out.contains("],"));
    }

    #[test]
    fn test_component_precision() {
        assert_eq!(component(1.0), "1.000000");
        assert_eq!(component(1.23456789), "1.234568");
        assert_eq!(component(-2.5), "-2.500000");
        assert_eq!(component(-0.0), "-0.000000");
        assert_eq!(component(12345.0), "12345.000000");
    }

    #[test]
    fn test_component_non_finite() {
        assert_eq!(component(f64::NAN), "nan");
        assert_eq!(component(f64::INFINITY), "inf");
        assert_eq!(component(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_variable_is_verbatim() {
        let out = render("in.txt", "my profile", &[]);
        assert!(out.contains("\nmy profile = [\n"));
    }
}

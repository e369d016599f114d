//! Per-directive field grammars.

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Line, Token};
use crate::record::{FaceGroup, LineRecord};

/// Parse `x y z [w]` after a `v` tag.
pub(crate) fn vertex(line: &mut Line<'_>) -> Result<LineRecord, ParseError> {
    let x = required_number(line)?;
    let y = required_number(line)?;
    let z = required_number(line)?;
    let w = optional_number(line, 1.0)?;
    line.expect_end()?;
    Ok(LineRecord::Vertex { x, y, z, w })
}

/// Parse `u v [w]` after a `vt` tag.
pub(crate) fn tex_coord(line: &mut Line<'_>) -> Result<LineRecord, ParseError> {
    let u = required_number(line)?;
    let v = required_number(line)?;
    let w = optional_number(line, 0.0)?;
    line.expect_end()?;
    Ok(LineRecord::TexCoord { u, v, w })
}

/// Parse `x y z` after a `vn` tag.
pub(crate) fn normal(line: &mut Line<'_>) -> Result<LineRecord, ParseError> {
    let x = required_number(line)?;
    let y = required_number(line)?;
    let z = required_number(line)?;
    line.expect_end()?;
    Ok(LineRecord::Normal { x, y, z })
}

/// Parse one or more `v[/[vt][/vn]]` groups after an `f` tag.
pub(crate) fn face(line: &mut Line<'_>) -> Result<LineRecord, ParseError> {
    let first = line
        .next_field()
        .ok_or_else(|| line.missing("face vertex"))?;
    let mut groups = vec![face_group(line, first)?];
    while let Some(token) = line.next_field() {
        groups.push(face_group(line, token)?);
    }
    Ok(LineRecord::Face { groups })
}

fn face_group(line: &Line<'_>, token: Token<'_>) -> Result<FaceGroup, ParseError> {
    let parts: Vec<&[u8]> = token.bytes.split(|&b| b == b'/').collect();
    if parts.len() > 3 || parts.iter().all(|part| part.is_empty()) {
        return Err(line.error(token.column, ParseErrorKind::FaceGroupArity));
    }

    // Column of each part within the line, for diagnostics.
    let mut column = token.column;
    let mut indices = [None; 3];
    for (slot, part) in indices.iter_mut().zip(&parts) {
        if !part.is_empty() {
            *slot = Some(integer(line, part, column)?);
        }
        column += part.len() + 1;
    }

    let Some(vertex) = indices[0] else {
        let found = token.describe();
        return Err(line.syntax(token.column, found, "vertex index before '/'"));
    };
    Ok(FaceGroup {
        vertex,
        tex_coord: indices[1],
        normal: indices[2],
    })
}

fn required_number(line: &mut Line<'_>) -> Result<f32, ParseError> {
    let token = line.next_field().ok_or_else(|| line.missing("number"))?;
    number(line, &token)
}

fn optional_number(line: &mut Line<'_>, default: f32) -> Result<f32, ParseError> {
    match line.next_field() {
        Some(token) => number(line, &token),
        None => Ok(default),
    }
}

/// Integer or decimal literal, coerced to `f32`. Literals outside the `f32`
/// range are rejected rather than saturated to infinity.
fn number(line: &Line<'_>, token: &Token<'_>) -> Result<f32, ParseError> {
    let malformed = || {
        line.error(
            token.column,
            ParseErrorKind::NumericFormat {
                literal: token.text(),
            },
        )
    };
    if !is_decimal_literal(token.bytes) {
        return Err(malformed());
    }
    std::str::from_utf8(token.bytes)
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(malformed)
}

fn integer(line: &Line<'_>, bytes: &[u8], column: usize) -> Result<i32, ParseError> {
    let malformed = || {
        line.error(
            column,
            ParseErrorKind::NumericFormat {
                literal: bytes.iter().map(|&b| b as char).collect(),
            },
        )
    };
    let digits = skip_sign(bytes);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(malformed)
}

/// `[+-] digits [. digits] [(e|E) [+-] digits]`, with at least one mantissa
/// digit on either side of the point.
fn is_decimal_literal(bytes: &[u8]) -> bool {
    let mut rest = skip_sign(bytes);
    let whole = count_digits(rest);
    rest = &rest[whole..];

    let mut fraction = 0;
    if let Some(after_point) = rest.strip_prefix(b".") {
        fraction = count_digits(after_point);
        rest = &after_point[fraction..];
    }
    if whole + fraction == 0 {
        return false;
    }

    if let Some(after_e) = rest.strip_prefix(b"e").or_else(|| rest.strip_prefix(b"E")) {
        let exponent = skip_sign(after_e);
        let digits = count_digits(exponent);
        if digits == 0 {
            return false;
        }
        rest = &exponent[digits..];
    }
    rest.is_empty()
}

fn skip_sign(bytes: &[u8]) -> &[u8] {
    match bytes.first() {
        Some(b'+' | b'-') => &bytes[1..],
        _ => bytes,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_records;

    fn single(input: &str) -> LineRecord {
        let mut records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    fn failure(input: &str) -> ParseError {
        parse_records(input.as_bytes()).unwrap_err()
    }

    fn vertex(x: f32, y: f32, z: f32, w: f32) -> LineRecord {
        LineRecord::Vertex { x, y, z, w }
    }

    fn group(vertex: i32, tex_coord: Option<i32>, normal: Option<i32>) -> FaceGroup {
        FaceGroup {
            vertex,
            tex_coord,
            normal,
        }
    }

    fn numeric(literal: &str) -> ParseErrorKind {
        ParseErrorKind::NumericFormat {
            literal: literal.to_string(),
        }
    }

    #[test]
    fn decimal_literal_shapes() {
        let accepted = ["1", "-2", "+3", "3.5", ".5", "4.", "-0.25", "1e3", "1.5E-2"];
        for ok in accepted.into_iter().chain(["-.5e+1"]) {
            assert!(is_decimal_literal(ok.as_bytes()), "{ok} should be accepted");
        }
        let rejected = ["", "-", ".", "1..2", "1e", "e5", "nan", "inf"];
        for bad in rejected.into_iter().chain(["1,5", "0x10", "1e5.0"]) {
            assert!(!is_decimal_literal(bad.as_bytes()), "{bad} should be rejected");
        }
    }

    #[test]
    fn vertex_w_defaults_to_one() {
        assert_eq!(single("v 1 2.5 -3"), vertex(1.0, 2.5, -3.0, 1.0));
        assert_eq!(single("v 1 2 3 0.5"), vertex(1.0, 2.0, 3.0, 0.5));
    }

    #[test]
    fn tex_coord_w_defaults_to_zero() {
        let LineRecord::TexCoord { u, v, w } = single("vt 0.25 0.75") else {
            panic!("expected tex coord");
        };
        assert_eq!((u, v, w), (0.25, 0.75, 0.0));

        let LineRecord::TexCoord { w, .. } = single("vt 0 1 2") else {
            panic!("expected tex coord");
        };
        assert_eq!(w, 2.0);
    }

    #[test]
    fn normal_takes_exactly_three() {
        let LineRecord::Normal { x, y, z } = single("vn 0 1 0") else {
            panic!("expected normal");
        };
        assert_eq!((x, y, z), (0.0, 1.0, 0.0));

        let err = failure("vn 0 1 0 1");
        assert_eq!(err.column(), 10);
        assert!(matches!(
            err.kind(),
            ParseErrorKind::Syntax { expected, .. } if expected == "end of line"
        ));
    }

    #[test]
    fn missing_fields_are_syntax_errors() {
        let err = failure("v 1 2");
        assert_eq!(err.column(), 6);
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Syntax {
                found: "end of line".into(),
                expected: "number".into(),
            }
        );

        assert!(matches!(failure("vt 1").kind(), ParseErrorKind::Syntax { .. }));
        assert!(matches!(failure("f").kind(), ParseErrorKind::Syntax { .. }));
        assert!(matches!(failure("f   ").kind(), ParseErrorKind::Syntax { .. }));
    }

    #[test]
    fn too_many_vertex_fields_rejected() {
        let err = failure("v 1 2 3 4 5");
        assert!(matches!(err.kind(), ParseErrorKind::Syntax { found, .. } if found == "\"5\""));
    }

    #[test]
    fn malformed_number_reports_literal() {
        let err = failure("v 1 2x 3");
        assert_eq!(err.column(), 5);
        assert_eq!(err.kind(), &numeric("2x"));
    }

    #[test]
    fn out_of_range_number_is_rejected() {
        let err = failure("v 1e39 0 0");
        assert_eq!(err.column(), 3);
        assert_eq!(err.kind(), &numeric("1e39"));

        assert!(matches!(failure("vt 0 -1e40").kind(), ParseErrorKind::NumericFormat { .. }));
        assert_eq!(single("v 3.4e38 0 0"), vertex(3.4e38, 0.0, 0.0, 1.0));
    }

    #[test]
    fn separators_may_be_tabs_and_repeated() {
        assert_eq!(single("v\t1   2\t\t3  "), vertex(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn face_group_forms() {
        let LineRecord::Face { groups } = single("f 1 2/3 4//5 6/7/8") else {
            panic!("expected face");
        };
        assert_eq!(
            groups,
            vec![
                group(1, None, None),
                group(2, Some(3), None),
                group(4, None, Some(5)),
                group(6, Some(7), Some(8)),
            ]
        );
    }

    #[test]
    fn face_keeps_negative_indices() {
        let LineRecord::Face { groups } = single("f -1 -2/-1 -3") else {
            panic!("expected face");
        };
        assert_eq!(groups[0].vertex, -1);
        assert_eq!(groups[1].tex_coord, Some(-1));
    }

    #[test]
    fn face_group_with_four_fields_fails() {
        let err = failure("f 1/2/3/4\n");
        assert_eq!(err.kind(), &ParseErrorKind::FaceGroupArity);
        assert_eq!(err.column(), 3);
        assert!(err
            .to_string()
            .contains("face vertices must contain between 1 and 3 indices"));
    }

    #[test]
    fn face_group_without_indices_fails_arity() {
        let err = failure("f 1 1 //\n");
        assert_eq!(err.kind(), &ParseErrorKind::FaceGroupArity);
        assert_eq!(err.column(), 7);

        let err = failure("f / 1 1");
        assert_eq!(err.kind(), &ParseErrorKind::FaceGroupArity);
        assert_eq!(err.column(), 3);
    }

    #[test]
    fn face_group_needs_vertex_index() {
        let err = failure("f /2/3 1 1");
        assert!(matches!(
            err.kind(),
            ParseErrorKind::Syntax { expected, .. } if expected == "vertex index before '/'"
        ));
    }

    #[test]
    fn face_index_must_be_integer() {
        let err = failure("f 1 2/x 3");
        assert_eq!(err.column(), 7);
        assert_eq!(err.kind(), &numeric("x"));

        let err = failure("f 1.5 2 3");
        assert!(matches!(err.kind(), ParseErrorKind::NumericFormat { .. }));

        let err = failure("f 99999999999 1 1");
        assert!(matches!(err.kind(), ParseErrorKind::NumericFormat { .. }));
    }
}

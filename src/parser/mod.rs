use std::borrow::Cow;

use tracing::debug;

use crate::error::ConvertError;
use crate::model::{Coordinate, PointSequence};

/// Substring that marks elided data in hand-edited listings.
pub const ELISION_MARKER: &str = "...";

/// Parse a whole coordinate listing into points, in file order.
///
/// Blank lines, `#` comments, lines containing `...` and lines with fewer
/// than two tokens are dropped. The first token pair that fails to parse
/// aborts the whole listing.
pub fn parse_points(text: &str) -> Result<PointSequence, ConvertError> {
    let mut points = PointSequence::new();

    for (idx, line) in split_lines(text).enumerate() {
        match parse_line(idx + 1, line)? {
            Some(point) => points.push(point),
            None => debug!(line = idx + 1, "skipped"),
        }
    }

    Ok(points)
}

/// Split on `\n`, `\r\n` and a lone `\r`, so old Mac listings keep one
/// point per line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
    })
}

/// Parse a single line; `Ok(None)` means the line carries no point.
///
/// `line_no` only labels the error.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Coordinate>, ConvertError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.contains(ELISION_MARKER) {
        return Ok(None);
    }

    let mut tokens = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Ok(None);
    };

    Ok(Some(Coordinate::new(
        parse_number(line_no, x)?,
        parse_number(line_no, y)?,
    )))
}

fn parse_number(line_no: usize, token: &str) -> Result<f64, ConvertError> {
    strip_digit_separators(token)
        .parse::<f64>()
        .map_err(|source| ConvertError::MalformedNumber {
            line: line_no,
            token: token.to_string(),
            source,
        })
}

/// Drop `_` digit-group separators (`1_000.5`) when every one sits between
/// two digits; otherwise hand the token back untouched so it fails to parse.
fn strip_digit_separators(token: &str) -> Cow<'_, str> {
    if !token.contains('_') {
        return Cow::Borrowed(token);
    }

    let bytes = token.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    if grouped {
        Cow::Owned(token.replace('_', ""))
    } else {
        Cow::Borrowed(token)
    }
}

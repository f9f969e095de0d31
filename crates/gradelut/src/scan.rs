//! Shared line scanner for text LUT formats.
//!
//! Both supported formats are whitespace-tokenized text with a size
//! declaration and rows of float triples; they differ only in keywords,
//! data framing, and leading voxel-index columns. One scanner handles
//! both, driven by a per-format [`FormatPolicy`].

use std::io::BufRead;

use crate::{Lut3D, LutError, LutResult};

/// Per-format parsing rules for [`scan`].
pub(crate) struct FormatPolicy {
    /// Keyword opening the edge-length declaration, e.g. `LUT_3D_SIZE`.
    pub size_keyword: &'static str,
    /// Markers delimiting the data section. When present, lines outside
    /// the span never contribute samples and scanning stops at the end
    /// marker, ignoring trailing content.
    pub data_span: Option<(&'static str, &'static str)>,
    /// Leading integer voxel-index columns on indexed data rows. Rows
    /// carrying fewer tokens than `index_columns + 3` are read as
    /// index-free.
    pub index_columns: usize,
    /// Treat any data-region line starting with an ASCII letter as
    /// metadata (`TITLE`, `DOMAIN_MIN`, ...) and skip it.
    pub skip_letter_lines: bool,
}

/// Scans a text LUT into a validated [`Lut3D`].
///
/// The first occurrence of the size keyword wins; later occurrences are
/// skipped as metadata. Sample order follows row order in the input.
pub(crate) fn scan<R: BufRead>(reader: R, policy: &FormatPolicy) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut samples: Vec<[f32; 3]> = Vec::new();
    let mut in_data = policy.data_span.is_none();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((begin, end)) = policy.data_span {
            if line == begin {
                in_data = true;
                continue;
            }
            if line == end {
                break;
            }
        }

        if line.starts_with(policy.size_keyword) {
            if size.is_none() {
                size = Some(parse_size(line, policy.size_keyword)?);
            }
            continue;
        }

        if !in_data {
            continue;
        }

        if policy.skip_letter_lines
            && line.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let offset = if tokens.len() >= policy.index_columns + 3 {
            policy.index_columns
        } else {
            0
        };
        if tokens.len() < offset + 3 {
            // Short rows are not data; the final count check catches
            // truncated files.
            continue;
        }

        let mut rgb = [0.0f32; 3];
        for (slot, token) in rgb.iter_mut().zip(&tokens[offset..offset + 3]) {
            *slot = token.parse().map_err(|_| LutError::NumericParse {
                line: idx + 1,
                token: (*token).to_string(),
            })?;
        }
        samples.push(rgb);
    }

    let size = size.ok_or_else(|| {
        LutError::MalformedHeader(format!("missing {} declaration", policy.size_keyword))
    })?;

    Lut3D::from_samples(size, samples)
}

fn parse_size(line: &str, keyword: &str) -> LutResult<usize> {
    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| LutError::MalformedHeader(format!("{keyword} missing value")))?;
    let size: i64 = value.parse().map_err(|_| {
        LutError::MalformedHeader(format!("{keyword} value `{value}` is not an integer"))
    })?;
    if size <= 0 {
        return Err(LutError::MalformedHeader(format!(
            "{keyword} must be positive, got {size}"
        )));
    }
    Ok(size as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PLAIN: FormatPolicy = FormatPolicy {
        size_keyword: "SIZE",
        data_span: None,
        index_columns: 0,
        skip_letter_lines: true,
    };

    #[test]
    fn first_size_declaration_wins() {
        let text = "SIZE 1\nSIZE 2\n0.5 0.5 0.5\n";
        let lut = scan(Cursor::new(text), &PLAIN).unwrap();
        assert_eq!(lut.size(), 1);
    }

    #[test]
    fn missing_size_is_malformed_header() {
        let text = "0 0 0\n";
        let err = scan(Cursor::new(text), &PLAIN).unwrap_err();
        assert!(matches!(err, LutError::MalformedHeader(_)));
    }

    #[test]
    fn zero_size_is_malformed_header() {
        let text = "SIZE 0\n";
        let err = scan(Cursor::new(text), &PLAIN).unwrap_err();
        assert!(matches!(err, LutError::MalformedHeader(_)));
    }

    #[test]
    fn bad_float_reports_line_and_token() {
        let text = "SIZE 1\n0.1 oops 0.3\n";
        let err = scan(Cursor::new(text), &PLAIN).unwrap_err();
        match err {
            LutError::NumericParse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decimal_point_is_locale_independent() {
        // Plain-text LUTs always use dot decimals; `str::parse` never
        // honors a host locale's comma convention.
        let text = "SIZE 1\n1.5 0.25 0.125\n";
        let lut = scan(Cursor::new(text), &PLAIN).unwrap();
        assert_eq!(lut.samples()[0], [1.5, 0.25, 0.125]);
    }
}

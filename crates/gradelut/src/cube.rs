//! Adobe/Resolve .cube LUT format support.
//!
//! The .cube format is a simple text-based 3D LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many grading tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data rows are in red-fastest order. Any line starting with a letter
//! other than the size keyword (`TITLE`, `DOMAIN_MIN`, ...) is metadata
//! and is skipped; a fourth alpha column, if present, is ignored.

use crate::scan::{FormatPolicy, scan};
use crate::{Lut3D, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const POLICY: FormatPolicy = FormatPolicy {
    size_keyword: "LUT_3D_SIZE",
    data_span: None,
    index_columns: 0,
    skip_letter_lines: true,
};

/// Reads a 3D LUT from a .cube file.
///
/// # Example
///
/// ```rust,ignore
/// let lut = cube::read_3d("grade.cube")?;
/// ```
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Parses a 3D LUT from .cube text.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    scan(reader, &POLICY)
}

/// Writes a 3D LUT to a .cube file.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    write_to(BufWriter::new(file), lut)
}

/// Writes .cube text to any writer.
pub fn write_to<W: Write>(mut writer: W, lut: &Lut3D) -> LutResult<()> {
    writeln!(writer, "# Written by gradelut")?;
    writeln!(writer, "LUT_3D_SIZE {}", lut.size())?;
    writeln!(writer)?;

    // Samples are stored in file order already.
    for rgb in lut.samples() {
        writeln!(writer, "{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LutError;
    use std::io::Cursor;

    #[test]
    fn parse_basic_cube() {
        let cube = "\
LUT_3D_SIZE 2
0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";
        let lut = parse_3d(Cursor::new(cube)).unwrap();
        assert_eq!(lut.size(), 2);
        assert_eq!(lut.sample_count(), 8);
        // Row order is preserved exactly.
        assert_eq!(lut.samples()[1], [1.0, 0.0, 0.0]);
        assert_eq!(lut.samples()[7], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn metadata_and_comments_are_ignored() {
        let bare = "\
LUT_3D_SIZE 2
0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";
        let annotated = "\
# A comment
TITLE \"Test Grade\"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0 0 0
1 0 0
0 1 0
1 1 0
# interleaved comment
0 0 1
1 0 1
0 1 1
1 1 1
";
        let a = parse_3d(Cursor::new(bare)).unwrap();
        let b = parse_3d(Cursor::new(annotated)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn alpha_column_is_ignored() {
        let cube = "LUT_3D_SIZE 1\n0.25 0.5 0.75 1.0\n";
        let lut = parse_3d(Cursor::new(cube)).unwrap();
        assert_eq!(lut.samples()[0], [0.25, 0.5, 0.75]);
    }

    #[test]
    fn short_file_reports_both_counts() {
        let cube = "\
LUT_3D_SIZE 2
0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
";
        let err = parse_3d(Cursor::new(cube)).unwrap_err();
        match err {
            LutError::SampleCountMismatch { expected, actual } => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_size_fails() {
        let cube = "0 0 0\n";
        let err = parse_3d(Cursor::new(cube)).unwrap_err();
        assert!(matches!(err, LutError::MalformedHeader(_)));
    }

    #[test]
    fn roundtrip_through_text() {
        let lut = Lut3D::identity(4);

        let mut buf = Vec::new();
        write_to(&mut buf, &lut).unwrap();
        let parsed = parse_3d(Cursor::new(buf)).unwrap();

        assert_eq!(parsed.size(), 4);
        for (a, b) in parsed.samples().iter().zip(lut.samples()) {
            for i in 0..3 {
                assert!((a[i] - b[i]).abs() < 1e-5);
            }
        }
    }
}

//! Sony Pictures Imageworks .spi3d LUT format support.
//!
//! A human-readable text format used by OpenColorIO pipelines. Unlike
//! .cube, the data section is explicitly framed and rows historically
//! carry the voxel coordinate before the color values.
//!
//! # Format
//!
//! ```text
//! SPILUT 1.0
//! 3 3
//! 3D_SIZE 32
//! BEGIN_DATA
//! 0 0 0 0.000000 0.000000 0.000000
//! 1 0 0 0.033333 0.000000 0.000000
//! ...
//! END_DATA
//! ```
//!
//! Only lines between `BEGIN_DATA` and `END_DATA` contribute samples;
//! parsing stops at `END_DATA` and trailing content is ignored. Rows with
//! six or more tokens are treated as indexed (three leading voxel-index
//! columns skipped); rows with exactly three are the index-free dialect
//! some tools emit.

use crate::scan::{FormatPolicy, scan};
use crate::{Lut3D, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const POLICY: FormatPolicy = FormatPolicy {
    size_keyword: "3D_SIZE",
    data_span: Some(("BEGIN_DATA", "END_DATA")),
    index_columns: 3,
    skip_letter_lines: false,
};

/// Reads a 3D LUT from a .spi3d file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    parse_3d(BufReader::new(file))
}

/// Parses a 3D LUT from .spi3d text.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    scan(reader, &POLICY)
}

/// Writes a 3D LUT to a .spi3d file.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    write_to(BufWriter::new(file), lut)
}

/// Writes .spi3d text (indexed dialect) to any writer.
pub fn write_to<W: Write>(mut writer: W, lut: &Lut3D) -> LutResult<()> {
    let size = lut.size();

    writeln!(writer, "SPILUT 1.0")?;
    writeln!(writer, "3 3")?;
    writeln!(writer, "3D_SIZE {size}")?;
    writeln!(writer, "BEGIN_DATA")?;

    // Samples are red-fastest; recover the voxel coordinate from the
    // flat index.
    for (i, rgb) in lut.samples().iter().enumerate() {
        let r = i % size;
        let g = (i / size) % size;
        let b = i / (size * size);
        writeln!(
            writer,
            "{} {} {} {:.6} {:.6} {:.6}",
            r, g, b, rgb[0], rgb[1], rgb[2]
        )?;
    }

    writeln!(writer, "END_DATA")?;

    Ok(())
}

//! # gradelut
//!
//! 3D Look-Up Table (LUT) parsing, generation, and evaluation for color
//! grading pipelines.
//!
//! A 3D LUT maps an input RGB triple to an output RGB triple through a
//! cube of precomputed samples with edge length N (N^3 samples total).
//! This crate loads the two common plain-text conventions, validates
//! them, and hands back an immutable [`Lut3D`] ready for a volumetric
//! texture upload or CPU-side evaluation.
//!
//! # Supported Formats
//!
//! - `.cube` - Adobe/Resolve ([`cube`] module)
//! - `.spi3d` - Sony Pictures Imageworks ([`spi3d`] module)
//!
//! # Usage
//!
//! ```rust,no_run
//! use gradelut::{Lut3D, LutResult};
//!
//! fn main() -> LutResult<()> {
//!     // Format is picked from the extension.
//!     let lut = gradelut::read("grade.cube")?;
//!     let rgb = lut.apply([0.5, 0.3, 0.2]);
//!
//!     // Generate and save an identity LUT.
//!     let neutral = Lut3D::identity(33);
//!     gradelut::write("neutral.spi3d", &neutral)?;
//!     Ok(())
//! }
//! ```
//!
//! # Guarantees
//!
//! - Sample count always equals the declared edge length cubed; short or
//!   oversized files are rejected, never truncated or padded.
//! - Sample order follows file row order exactly (red varies fastest).
//! - Numeric parsing is locale-independent (dot decimal separator).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;
mod lut3d;
mod scan;
pub mod cube;
pub mod spi3d;

pub use error::{LutError, LutResult};
pub use format::{LutFormat, read, write};
pub use lut3d::Lut3D;

//! CLI command implementations

pub mod convert;
pub mod identity;
pub mod info;
pub mod sample;

use anyhow::{Context, Result};
use gradelut::Lut3D;
use std::path::Path;

/// Load a LUT from path, dispatching on extension
pub fn load_lut(path: &Path) -> Result<Lut3D> {
    gradelut::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a LUT to path, dispatching on extension
pub fn save_lut(path: &Path, lut: &Lut3D) -> Result<()> {
    gradelut::write(path, lut).with_context(|| format!("Failed to save: {}", path.display()))
}

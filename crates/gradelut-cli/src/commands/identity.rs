//! Identity LUT generation command

use crate::IdentityArgs;
use anyhow::{Result, bail};
use gradelut::Lut3D;
use tracing::debug;

pub fn run(args: IdentityArgs) -> Result<()> {
    if args.size < 2 {
        bail!("edge length must be at least 2, got {}", args.size);
    }
    debug!("generating {n}x{n}x{n} identity LUT", n = args.size);

    let lut = Lut3D::identity(args.size);
    super::save_lut(&args.output, &lut)?;

    println!("Wrote {} ({n}^3 samples)", args.output.display(), n = args.size);

    Ok(())
}

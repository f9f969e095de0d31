//! LUT format conversion command

use crate::ConvertArgs;
use anyhow::Result;
use gradelut::LutFormat;
use tracing::debug;

pub fn run(args: ConvertArgs) -> Result<()> {
    // Validate the output extension before doing any work.
    let to = LutFormat::from_path(&args.output)?;
    let from = LutFormat::from_path(&args.input)?;
    debug!(
        "converting {} ({from}) -> {} ({to})",
        args.input.display(),
        args.output.display()
    );

    let lut = super::load_lut(&args.input)?;
    super::save_lut(&args.output, &lut)?;

    println!(
        "Wrote {} ({n}x{n}x{n} {to})",
        args.output.display(),
        n = lut.size()
    );

    Ok(())
}

//! Single-sample LUT evaluation command

use crate::SampleArgs;
use anyhow::Result;

pub fn run(args: SampleArgs) -> Result<()> {
    let lut = super::load_lut(&args.input)?;

    let out = lut.apply([args.r, args.g, args.b]);
    println!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]);

    Ok(())
}

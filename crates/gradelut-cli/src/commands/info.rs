//! LUT information command

use crate::InfoArgs;
use anyhow::Result;
use gradelut::LutFormat;
use tracing::debug;

pub fn run(args: InfoArgs) -> Result<()> {
    let format = LutFormat::from_path(&args.input)?;
    debug!("reading {} as {format}", args.input.display());

    let lut = super::load_lut(&args.input)?;

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for rgb in lut.samples() {
        for i in 0..3 {
            min[i] = min[i].min(rgb[i]);
            max[i] = max[i].max(rgb[i]);
        }
    }

    println!("{}", args.input.display());
    println!("  format:  {format}");
    println!("  size:    {n}x{n}x{n}", n = lut.size());
    println!("  samples: {}", lut.sample_count());
    println!("  min:     {:.6} {:.6} {:.6}", min[0], min[1], min[2]);
    println!("  max:     {:.6} {:.6} {:.6}", max[0], max[1], max[2]);
    if max.iter().any(|&v| v > 1.0) || min.iter().any(|&v| v < 0.0) {
        println!("  range:   extended (HDR/log-encoded values present)");
    }

    Ok(())
}

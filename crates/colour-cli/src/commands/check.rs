//! Range check command

use crate::CheckArgs;
use anyhow::Result;
use tracing::{info, trace};

pub fn run(args: CheckArgs) -> Result<()> {
    trace!(model = %args.model, values = ?args.values, "check::run");

    let colour = super::parse_colour(args.model, &args.values)?;
    info!(colour = %colour, "Colour within range");

    println!("ok: {}", colour);
    Ok(())
}

use super::{parse_vector, Output, Value};
use clap::Parser;
use tracing::trace;
use vec3d::Vec3Error;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Input vector, e.g. "1 2 3"
    #[arg(allow_hyphen_values = true)]
    vector: String,

    /// Scale factor
    #[arg(allow_negative_numbers = true)]
    factor: f64,
}

pub(crate) fn run(args: &Args, out: &Output) -> Result<(), Vec3Error> {
    trace!("{args:?}");
    let v = parse_vector("vector", &args.vector)?;
    out.emit(&[("result", Value::Vector(v.scaled(args.factor)))]);
    Ok(())
}

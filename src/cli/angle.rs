use super::{parse_vector, Output, Value};
use clap::Parser;
use tracing::{trace, warn};
use vec3d::{vector3, Vec3Error};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// First unit vector, e.g. "1 0 0"
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second unit vector
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Normalize both vectors before measuring the angle
    #[arg(short, long, default_value_t = false)]
    normalize: bool,

    /// Report the angle in degrees instead of radians
    #[arg(short, long, default_value_t = false)]
    degrees: bool,
}

pub(crate) fn run(args: &Args, out: &Output) -> Result<(), Vec3Error> {
    trace!("{args:?}");
    let mut a = parse_vector("a", &args.a)?;
    let mut b = parse_vector("b", &args.b)?;
    if args.normalize {
        a.normalize();
        b.normalize();
    }

    let mut rad = vector3::angle(&a, &b);
    if rad.is_nan() {
        warn!("Angle is undefined, the inputs must be unit vectors (see --normalize)");
    }
    if args.degrees {
        rad = rad.to_degrees();
    }
    out.emit(&[("angle", Value::Scalar(rad))]);
    Ok(())
}

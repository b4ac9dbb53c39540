use super::{parse_vector, Output, Value};
use clap::Parser;
use tracing::{info, trace};
use vec3d::{vector3, Vec3, Vec3Error};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Points to enclose, one quoted vector each
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    points: Vec<String>,
}

/// Lower and upper corner of the axis-aligned box around `points`.
pub(crate) fn bounding_box<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> (Vec3, Vec3) {
    points
        .into_iter()
        .fold((Vec3::MAX_VAL, Vec3::MIN_VAL), |(lo, hi), p| {
            (vector3::min(&lo, p), vector3::max(&hi, p))
        })
}

pub(crate) fn run(args: &Args, out: &Output) -> Result<(), Vec3Error> {
    trace!("{args:?}");
    let points = args
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| parse_vector(&format!("point {i}"), p))
        .collect::<Result<Vec<_>, _>>()?;
    info!("Bounding {} points", points.len());

    let (lo, hi) = bounding_box(&points);
    out.emit(&[("min", Value::Vector(lo)), ("max", Value::Vector(hi))]);
    Ok(())
}

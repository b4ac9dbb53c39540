use super::{parse_vector, Output, Value};
use clap::Parser;
use tracing::{debug, trace};
use vec3d::Vec3Error;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Input vector, e.g. "1 2 3"
    #[arg(allow_hyphen_values = true)]
    vector: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UnaryOp {
    Length,
    Normalize,
    Invert,
    Normal,
}

pub(crate) fn run(args: &Args, op: UnaryOp, out: &Output) -> Result<(), Vec3Error> {
    trace!("{op:?} {args:?}");
    let mut v = parse_vector("vector", &args.vector)?;

    match op {
        UnaryOp::Length => out.emit(&[
            ("length", Value::Scalar(v.length())),
            ("length_sqr", Value::Scalar(v.length_sqr())),
        ]),
        UnaryOp::Normalize => {
            if v.is_zero() {
                debug!("Zero vector has no direction, leaving it unchanged");
            }
            out.emit(&[("result", Value::Vector(*v.normalize()))]);
        }
        UnaryOp::Invert => out.emit(&[("result", Value::Vector(*v.invert()))]),
        UnaryOp::Normal => out.emit(&[("result", Value::Vector(v.normal()))]),
    }
    Ok(())
}

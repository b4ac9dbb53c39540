use super::{parse_vector, Output, Value};
use clap::Parser;
use tracing::trace;
use vec3d::{vector3, Vec3, Vec3Error};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// First vector, e.g. "1 2 3"
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Dot,
    Add,
    Sub,
    Mul,
    Cross,
    Min,
    Max,
}

impl BinaryOp {
    pub(crate) fn apply(self, a: &Vec3, b: &Vec3) -> Value {
        match self {
            BinaryOp::Dot => Value::Scalar(vector3::dot(a, b)),
            BinaryOp::Add => Value::Vector(vector3::add(a, b)),
            BinaryOp::Sub => Value::Vector(vector3::sub(a, b)),
            BinaryOp::Mul => Value::Vector(vector3::mul(a, b)),
            BinaryOp::Cross => Value::Vector(vector3::cross(a, b)),
            BinaryOp::Min => Value::Vector(vector3::min(a, b)),
            BinaryOp::Max => Value::Vector(vector3::max(a, b)),
        }
    }
}

pub(crate) fn run(args: &Args, op: BinaryOp, out: &Output) -> Result<(), Vec3Error> {
    trace!("{op:?} {args:?}");
    let a = parse_vector("a", &args.a)?;
    let b = parse_vector("b", &args.b)?;
    out.emit(&[("result", op.apply(&a, &b))]);
    Ok(())
}

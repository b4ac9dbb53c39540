pub(crate) mod angle;
pub(crate) mod binary;
pub(crate) mod bounds;
pub(crate) mod scale;
pub(crate) mod unary;

pub(crate) use binary::BinaryOp;
pub(crate) use unary::UnaryOp;

use clap::ValueEnum;
use std::fmt::Write;
use tracing::debug;
use vec3d::{Vec3, Vec3Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// A named result to print.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Value {
    Scalar(f64),
    Vector(Vec3),
}

/// Renders results in the format picked on the command line.
pub(crate) struct Output {
    format: OutputFormat,
    precision: usize,
}

impl Output {
    pub(crate) fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    pub(crate) fn emit(&self, fields: &[(&str, Value)]) {
        println!("{}", self.render(fields));
    }

    /// A single value prints bare in text mode, several print as `name: value`
    /// lines. JSON is always one object.
    fn render(&self, fields: &[(&str, Value)]) -> String {
        let p = self.precision;
        match self.format {
            OutputFormat::Text => {
                if let [(_, value)] = fields {
                    return match value {
                        Value::Scalar(s) => format!("{s:.p$}"),
                        Value::Vector(v) => format!("{v:.p$}"),
                    };
                }
                fields
                    .iter()
                    .map(|(name, value)| match value {
                        Value::Scalar(s) => format!("{name}: {s:.p$}"),
                        Value::Vector(v) => format!("{name}: {v:.p$}"),
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            OutputFormat::Json => {
                let mut s = String::from("{");
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        s.push_str(", ");
                    }
                    let _ = write!(s, "\"{name}\": ");
                    match value {
                        Value::Scalar(f) => s.push_str(&json_number(*f)),
                        Value::Vector(v) => {
                            let _ = write!(
                                s,
                                "[{}, {}, {}]",
                                json_number(v.x),
                                json_number(v.y),
                                json_number(v.z)
                            );
                        }
                    }
                }
                s.push('}');
                s
            }
        }
    }
}

/// JSON has no NaN or infinity.
fn json_number(f: f64) -> String {
    if f.is_finite() {
        format!("{f}")
    } else {
        String::from("null")
    }
}

/// Parse a vector argument, logging what was scanned before a failure.
pub(crate) fn parse_vector(name: &str, s: &str) -> Result<Vec3, Vec3Error> {
    s.parse::<Vec3>().inspect_err(|e| {
        if let Some(partial) = e.partial() {
            debug!("Scanned {partial:?} from {name} before failing");
        }
    })
}

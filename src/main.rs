mod cli;

use clap::{Parser, Subcommand};
use cli::{BinaryOp, Output, OutputFormat, UnaryOp};
use tracing::{error, trace, Level};
use vec3d::DEFAULT_PRECISION;

/// Vector arithmetic from the command line.
///
/// Vectors are passed as one quoted argument each, e.g. "1 2.5 -3".
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: 'text' for human-readable or 'json' for machine-readable
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Number of fractional digits in text output
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, global = true)]
    precision: usize,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Length and squared length of a vector
    Length(cli::unary::Args),
    /// Scale a vector to unit length
    Normalize(cli::unary::Args),
    /// Negate every component
    Invert(cli::unary::Args),
    /// Any unit vector orthogonal to the input
    Normal(cli::unary::Args),
    /// Multiply a vector by a scalar
    Scale(cli::scale::Args),
    /// Dot product of two vectors
    Dot(cli::binary::Args),
    /// Angle between two unit vectors
    Angle(cli::angle::Args),
    /// Sum of two vectors
    Add(cli::binary::Args),
    /// Difference of two vectors
    Sub(cli::binary::Args),
    /// Component-wise product of two vectors
    Mul(cli::binary::Args),
    /// Cross product of two vectors
    Cross(cli::binary::Args),
    /// Component-wise minimum of two vectors
    Min(cli::binary::Args),
    /// Component-wise maximum of two vectors
    Max(cli::binary::Args),
    /// Axis-aligned bounding box of a set of points
    Bounds(cli::bounds::Args),
}

fn main() {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    trace!("{args:?}");

    let out = Output::new(args.format, args.precision);
    let result = match &args.command {
        Commands::Length(a) => cli::unary::run(a, UnaryOp::Length, &out),
        Commands::Normalize(a) => cli::unary::run(a, UnaryOp::Normalize, &out),
        Commands::Invert(a) => cli::unary::run(a, UnaryOp::Invert, &out),
        Commands::Normal(a) => cli::unary::run(a, UnaryOp::Normal, &out),
        Commands::Scale(a) => cli::scale::run(a, &out),
        Commands::Dot(a) => cli::binary::run(a, BinaryOp::Dot, &out),
        Commands::Angle(a) => cli::angle::run(a, &out),
        Commands::Add(a) => cli::binary::run(a, BinaryOp::Add, &out),
        Commands::Sub(a) => cli::binary::run(a, BinaryOp::Sub, &out),
        Commands::Mul(a) => cli::binary::run(a, BinaryOp::Mul, &out),
        Commands::Cross(a) => cli::binary::run(a, BinaryOp::Cross, &out),
        Commands::Min(a) => cli::binary::run(a, BinaryOp::Min, &out),
        Commands::Max(a) => cli::binary::run(a, BinaryOp::Max, &out),
        Commands::Bounds(a) => cli::bounds::run(a, &out),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

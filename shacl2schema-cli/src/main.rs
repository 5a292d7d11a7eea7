use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shacl2schema::SchemaOptions;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Turtle file containing the SHACL shapes.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Inline referenced sub-schemas into the first (main) schema instead
    /// of emitting one schema per shape.
    #[arg(long)]
    unique: bool,

    /// Prefix added to every $ref value.
    #[arg(long, default_value = "", value_name = "PREFIX")]
    base_path: String,

    /// Property name to omit from every schema (repeatable).
    #[arg(long = "exclude", value_name = "NAME")]
    exclude_properties: Vec<String>,

    /// Log a summary of the loaded schema ids.
    #[arg(long)]
    log: bool,

    /// Print one-line JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ttl = std::fs::read_to_string(&args.input)?;
    let options = SchemaOptions {
        base_path: args.base_path,
        exclude_properties: args.exclude_properties,
        log: args.log,
    };

    let rendered = if args.unique {
        render(&shacl2schema::unique_schema_from_ttl(&ttl, &options)?, args.compact)?
    } else {
        render(&shacl2schema::schemas_from_ttl(&ttl, &options)?, args.compact)?
    };

    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}

fn render<T: serde::Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

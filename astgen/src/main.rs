//! Astgen binary.
//!
//! Regenerates the interpreter's AST modules from the built-in grammar.

use std::path::PathBuf;

use astgen_codegen::Driver;
use astgen_schema::builtin;
use clap::Parser;

/// Astgen command line arguments.
#[derive(Parser, Debug)]
#[command(name = "astgen")]
#[command(about = "Generates the interpreter's AST boilerplate")]
struct Args {
    /// Directory the generated modules are written into
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Also generate the statement grammar
    #[arg(long)]
    stmt: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut groups = builtin::grammar();
    if args.stmt {
        groups.push(builtin::stmt());
    }

    let driver = Driver::with_groups(&args.output_dir, groups);
    driver.run()?;

    Ok(())
}

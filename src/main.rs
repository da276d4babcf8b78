use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use ins_file::IniDocument;
use ins_to_table::{Mode, RowEmitter, TableBuilder};

#[derive(Parser, Debug)]
#[command(name = "ins-to-table")]
#[command(about = "Convert instrument definition files to embeddable instrument tables", long_about = None)]
struct Args {
    /// Device mode to convert
    #[arg(value_enum)]
    mode: Mode,

    /// Path to the .ins file (default: the mode's bundled file)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (c or json)
    #[arg(short, long, default_value = "c")]
    format: String,

    /// Suppress informational messages (only errors)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Usage errors must exit with status 1; clap's default is 2.
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    let input_path = args
        .input
        .unwrap_or_else(|| PathBuf::from(args.mode.config().input_file));

    if !args.quiet {
        eprintln!("Processing instrument file: {}", input_path.display());
    }

    let document = IniDocument::from_file(&input_path)
        .with_context(|| format!("Failed to load {}", input_path.display()))?;

    let tables = TableBuilder::new(args.mode, &document).build()?;

    if !args.quiet {
        eprintln!(
            "{} melodic banks, {} drum banks",
            tables.melodic.len(),
            tables.percussive.len()
        );
    }

    let emitter = RowEmitter::new(args.mode);
    let rows = emitter.collect_rows(&tables);

    let output = match args.format.as_str() {
        "json" => emitter.build_output_json(&rows),
        _ => emitter.build_output(&rows),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !args.quiet {
                eprintln!("Output saved to {}", path.display());
            }
        }
        None => print!("{}", output),
    }

    Ok(())
}

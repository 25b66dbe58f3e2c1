use anyhow::{Context, Result};
use clap::Parser;
use profilecut::cli::Cli;
use profilecut::{convert_file, init_logging, write_program};
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format())?;

    let config = cli.resolve_config().context("Invalid configuration")?;
    let input = config.input_path()?.to_path_buf();

    let conversion = convert_file(&input, &config)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    match &config.io.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_program(BufWriter::new(file), &conversion.gcode)?;
            tracing::info!(path = %path.display(), lines = conversion.gcode.len(), "Wrote program");
        }
        None => write_program(std::io::stdout().lock(), &conversion.gcode)?,
    }

    Ok(())
}

mod args;
mod output_format;
mod report;
mod tokenizer_choice;

use std::fs;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::debug;
use output_format::OutputFormat;
use report::Report;
use text_overlap::{BuiltinTokenizer, Overlap, Side, overlap_with_tokenizer, text_input};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Inputs compared when no operands are given.
const SAMPLES: [(&str, &str); 2] = [("Hello", "olleY"), ("abcdef", "xyzabc")];

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    for line in run(&args)? {
        println!("{line}");
    }

    Ok(())
}

/// Compares the inputs selected by `args` and returns one formatted line per
/// comparison.
fn run(args: &Args) -> Result<Vec<String>> {
    let tokenizer = BuiltinTokenizer::from(args.tokenizer);

    match (&args.x, &args.y) {
        (Some(x), Some(y)) if args.files => {
            let x = fs::read(x).with_context(|| format!("Failed to read {x}"))?;
            let y = fs::read(y).with_context(|| format!("Failed to read {y}"))?;
            debug!("Comparing files of {} and {} bytes", x.len(), y.len());

            let x = text_input(&x, Side::Prefix).context("Cannot compare the given files")?;
            let y = text_input(&y, Side::Suffix).context("Cannot compare the given files")?;

            Ok(vec![format_overlap(
                &overlap_with_tokenizer(x, y, &*tokenizer),
                tokenizer,
                args.format,
            )?])
        }
        (Some(x), Some(y)) => Ok(vec![format_overlap(
            &overlap_with_tokenizer(x, y, &*tokenizer),
            tokenizer,
            args.format,
        )?]),
        _ => SAMPLES
            .iter()
            .map(|(x, y)| {
                format_overlap(&overlap_with_tokenizer(x, y, &*tokenizer), tokenizer, args.format)
            })
            .collect(),
    }
}

fn format_overlap(
    overlap: &Overlap<'_>,
    tokenizer: BuiltinTokenizer,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(overlap.to_string()),
        OutputFormat::Json => serde_json::to_string(&Report::new(overlap, tokenizer))
            .context("Failed to serialise the result"),
    }
}

fn init_logging(verbosity: Verbosity<WarnLevel>) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                verbosity.log_level_filter()
            )
            .into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialise logging")
}

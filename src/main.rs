use anyhow::{Context, Result};
use clap::Parser;
use long_to_linked_pe::{convert_long_to_linked, FastxReader};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "long-to-linked-pe")]
#[command(about = "Split long reads into barcoded pseudo-linked read pairs")]
struct Args {
    #[arg(help = "Input FASTA/FASTQ file (reads stdin when omitted)")]
    input: Option<PathBuf>,

    #[arg(short = 'l', long = "length", help = "Sub-read length; fragments are twice this")]
    length: NonZeroUsize,

    #[arg(short = 'v', long, default_value = "false", help = "Report processing summary on stderr")]
    verbose: bool,
}

fn open_reader(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            // 1MB buffer, long reads span many lines
            Ok(Box::new(BufReader::with_capacity(1 << 20, file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin().lock()))),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reader = FastxReader::new(open_reader(args.input.as_ref())?);

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::with_capacity(1 << 20, stdout);

    let stats = convert_long_to_linked(reader, args.length.get(), &mut writer)
        .context("conversion failed")?;
    writer.flush().context("flushing output failed")?;

    if args.verbose {
        eprintln!("Processing complete!");
        eprintln!("Records read: {}", stats.records);
        eprintln!("Records skipped (shorter than one fragment): {}", stats.skipped);
        eprintln!("Sub-read pairs written: {}", stats.pairs);
    }

    Ok(())
}

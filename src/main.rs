use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phonedata::{pack, read_dataset, unpack, CardType, DecodeOptions};
use tracing_subscriber::EnvFilter;

/// Pack and unpack phone.dat mobile-number prefix databases.
#[derive(Debug, Parser)]
#[command(name = "phonedata", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a phone data file into version.txt, record.txt and index.txt
    Unpack {
        /// Phone data file to read
        data_file: PathBuf,
        /// Directory to write the plain-text files into
        plain_dir: PathBuf,
        /// Ignore unterminated bytes before the index section
        #[arg(long)]
        lenient: bool,
    },
    /// Assemble a phone data file from version.txt, record.txt and index.txt
    Pack {
        /// Directory holding the plain-text files
        plain_dir: PathBuf,
        /// Phone data file to create
        data_file: PathBuf,
    },
    /// Print a summary of a phone data file
    Info {
        /// Phone data file to read
        data_file: PathBuf,
        /// Number of sample records to print
        #[arg(long, default_value_t = 10)]
        sample: usize,
        /// Ignore unterminated bytes before the index section
        #[arg(long)]
        lenient: bool,
    },
}

fn decode_options(lenient: bool) -> DecodeOptions {
    if lenient {
        DecodeOptions::lenient()
    } else {
        DecodeOptions::strict()
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Unpack {
            data_file,
            plain_dir,
            lenient,
        } => {
            unpack(&data_file, &plain_dir, &decode_options(lenient)).with_context(|| {
                format!(
                    "failed to unpack {} into {}",
                    data_file.display(),
                    plain_dir.display()
                )
            })?;
        }
        Command::Pack {
            plain_dir,
            data_file,
        } => {
            pack(&plain_dir, &data_file).with_context(|| {
                format!(
                    "failed to pack {} into {}",
                    plain_dir.display(),
                    data_file.display()
                )
            })?;
        }
        Command::Info {
            data_file,
            sample,
            lenient,
        } => {
            let dataset = read_dataset(&data_file, &decode_options(lenient))
                .with_context(|| format!("failed to read {}", data_file.display()))?;

            println!("Phone data file: {}", data_file.display());
            println!("{}", "=".repeat(60));
            println!("  Version: {}", dataset.version);
            println!("  Records: {}", dataset.record_count());
            println!("  Index entries: {}", dataset.entry_count());

            println!("\nSample records (first {}):", sample.min(dataset.record_count()));
            for record in dataset.records.iter().take(sample) {
                println!(
                    "  {}. {} {} (zip {}, area {})",
                    record.id, record.province, record.city, record.zip_code, record.area_code
                );
            }

            println!("\nSample index entries (first {}):", sample.min(dataset.entry_count()));
            for entry in dataset.entries.iter().take(sample) {
                let city = dataset
                    .resolve(entry)
                    .map(|r| r.city.as_str())
                    .unwrap_or("?");
                println!(
                    "  {} -> record {} ({}), {}",
                    entry.phone_prefix.canonical(),
                    entry.record_id,
                    city,
                    CardType::from(entry.card_type)
                );
            }
        }
    }

    Ok(())
}

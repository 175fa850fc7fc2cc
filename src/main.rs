use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use unidiff_print::parse::parse_multi_file_diff;
use unidiff_print::write_multi_file_diff;

#[derive(Parser)]
#[command(name = "unidiff-print")]
#[command(about = "Render unified diffs in canonical byte-exact form")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a unified diff and print it back in canonical form
    Normalize {
        /// Diff to read (stdin when omitted)
        input: Option<PathBuf>,
        /// Where to write the result (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Drop timestamps from the ---/+++ lines
        #[arg(long)]
        strip_timestamps: bool,
    },
    /// List the files a unified diff touches
    Files {
        /// Diff to read (stdin when omitted)
        input: Option<PathBuf>,
    },
}

fn read_input(input: Option<&Path>) -> io::Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            input,
            output,
            strip_timestamps,
        } => {
            let mut files = parse_multi_file_diff(&read_input(input.as_deref())?)?;
            if strip_timestamps {
                for file_diff in &mut files {
                    file_diff.clear_timestamps();
                }
            }

            match output {
                Some(path) => {
                    log::debug!("writing {} file diffs to {}", files.len(), path.display());
                    let mut out = io::BufWriter::new(fs::File::create(&path)?);
                    write_multi_file_diff(&mut out, &files)?;
                    out.flush()?;
                }
                None => {
                    let mut out = io::stdout().lock();
                    write_multi_file_diff(&mut out, &files)?;
                    out.flush()?;
                }
            }
        }
        Commands::Files { input } => {
            let files = parse_multi_file_diff(&read_input(input.as_deref())?)?;
            let mut out = io::stdout().lock();
            for file_diff in &files {
                writeln!(out, "{} -> {}", file_diff.orig_name, file_diff.new_name)?;
            }
        }
    }

    Ok(())
}

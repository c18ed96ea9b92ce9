use clap::Parser;
use elfhdr_core::{decode, read_header, render, DecodeError};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Exit status for every failure.
const FAILURE: u8 = 98;

/// Display the ELF header at the start of a file
#[derive(Parser)]
#[command(
    name = "elf_header",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the ELF file
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    path: OsString,
}

impl Cli {
    /// Parses exactly one raw argument as the path. Any other count is a
    /// usage error; the argument itself is never read as a flag or `--`.
    fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut args = args.into_iter();
        if args.len() != 2 {
            return Err(CliError::Usage);
        }
        let (Some(bin), Some(path)) = (args.next(), args.next()) else {
            return Err(CliError::Usage);
        };
        Cli::try_parse_from([bin, OsString::from("--"), path]).map_err(|err| {
            log::debug!("Argument error: {err}");
            CliError::Usage
        })
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Usage: elf_header elf_filename")]
    Usage,
    #[error("Error: Can't open file {}", .path.display())]
    Open { path: PathBuf },
    #[error("Error: Can't read from file {}", .path.display())]
    Read { path: PathBuf },
    #[error("Error: Not an ELF file - {}", .path.display())]
    NotElf { path: PathBuf },
}

fn run() -> Result<Vec<String>, CliError> {
    let cli = Cli::from_args(std::env::args_os())?;
    let path = PathBuf::from(cli.path);

    let bytes = {
        let file = std::fs::File::open(&path).map_err(|err| {
            log::debug!("open {}: {err}", path.display());
            CliError::Open { path: path.clone() }
        })?;
        read_header(file).map_err(|err| {
            log::debug!("read {}: {err}", path.display());
            CliError::Read { path: path.clone() }
        })?
    };

    let header = decode(&bytes).map_err(|err| {
        log::info!("{}: {err}", path.display());
        match err {
            DecodeError::TooShort { .. } => CliError::Read { path: path.clone() },
            DecodeError::NotAnElfFile => CliError::NotElf { path: path.clone() },
        }
    })?;

    Ok(render(&header))
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(lines) => {
            println!("ELF Header:");
            for line in lines {
                println!("  {line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn single_argument_is_taken_verbatim() {
        for raw in ["file", "", "-x", "--", "--help", "--version"] {
            let cli = Cli::from_args(args(&["elf_header", raw])).expect("one argument parses");
            assert_eq!(cli.path, OsString::from(raw));
        }
    }

    #[test]
    fn other_counts_are_usage_errors() {
        for list in [&["elf_header"][..], &["elf_header", "--", "a"][..], &["elf_header", "a", "b"][..]] {
            assert!(matches!(Cli::from_args(args(list)), Err(CliError::Usage)), "{list:?}");
        }
        assert!(matches!(Cli::from_args(Vec::new()), Err(CliError::Usage)));
    }
}

//! compact-qr CLI - turn a URL into a compact QR code.

mod commands;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use compact_qr_core::constants::{DEFAULT_TERMINAL_VERSION_LIMIT, SHOW_TERMINAL_ENV};
use compact_qr_core::ErrorCorrection;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "compact-qr", version)]
#[command(about = "Generate a compact QR code PNG from a URL", long_about = None)]
#[command(after_help = "Set SHOW_TERMINAL=1 to display the QR code in the terminal.")]
pub struct Cli {
    /// URL to encode in the QR code
    url: String,

    /// PNG file to write; may be omitted when terminal display is enabled
    output: Option<PathBuf>,

    /// Draw the QR code in the terminal (same as SHOW_TERMINAL=1)
    #[arg(short, long)]
    terminal: bool,

    /// Only draw symbols whose version is below this limit
    #[arg(long, default_value_t = DEFAULT_TERMINAL_VERSION_LIMIT)]
    max_terminal_version: u8,

    /// Pixels per module, overriding the length-based choice
    #[arg(long)]
    box_size: Option<u32>,

    /// Quiet zone width in modules
    #[arg(long)]
    border: Option<u32>,

    /// Error correction level (L, M, Q or H)
    #[arg(long)]
    ec_level: Option<ErrorCorrection>,
}

/// `SHOW_TERMINAL` only counts as enabled when it is exactly "1".
fn env_flag_enabled(value: Option<&str>) -> bool {
    value == Some("1")
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("compact_qr=warn".parse()?)
                .add_directive("compact_qr_core=warn".parse()?),
        )
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize logging: {:#}", err);
        return ExitCode::from(1);
    }

    let show_terminal =
        cli.terminal || env_flag_enabled(std::env::var(SHOW_TERMINAL_ENV).ok().as_deref());

    match commands::generate(cli, show_terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error generating QR code: {:#}", err);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_flag_requires_exact_one() {
        assert!(env_flag_enabled(Some("1")));
        assert!(!env_flag_enabled(Some("0")));
        assert!(!env_flag_enabled(Some("true")));
        assert!(!env_flag_enabled(Some("")));
        assert!(!env_flag_enabled(None));
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::try_parse_from([
            "compact-qr",
            "https://example.com",
            "out.png",
            "--box-size",
            "4",
            "--ec-level",
            "h",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.box_size, Some(4));
        assert_eq!(cli.ec_level, Some(ErrorCorrection::H));
        assert_eq!(cli.max_terminal_version, 10);
    }

    #[test]
    fn test_url_is_required() {
        let err = Cli::try_parse_from(["compact-qr"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}

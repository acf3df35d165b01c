//! Generate command implementation.

use anyhow::{bail, Context};
use compact_qr_core::{Config, EncodingRequest, Generator, ParamOverrides};
use tracing::debug;

use crate::ui::print_summary;
use crate::Cli;

/// Encode the URL, save the image and report on stderr.
pub fn generate(cli: Cli, show_terminal: bool) -> anyhow::Result<()> {
    if cli.output.is_none() && !show_terminal {
        bail!("nothing to produce: pass an output file or enable terminal display (SHOW_TERMINAL=1 or --terminal)");
    }

    let overrides = ParamOverrides {
        box_size: cli.box_size,
        border: cli.border,
        ec_level: cli.ec_level,
    };
    let request = EncodingRequest::with_overrides(cli.url, overrides)?;

    let config = Config {
        show_terminal,
        terminal_version_limit: cli.max_terminal_version,
        ..Config::default()
    };
    debug!(?config, output = ?cli.output, "generating QR code");

    let generator = Generator::new(config);
    let summary = generator
        .generate(&request, cli.output.as_deref())
        .with_context(|| match &cli.output {
            Some(path) => format!("could not create {}", path.display()),
            None => "could not encode URL".to_string(),
        })?;

    print_summary(&summary);
    Ok(())
}

//! Diagnostic report printing.

use compact_qr_core::{Summary, TerminalOutput};
use thousands::Separable;

use super::print_glyph_block;

/// Print the summary lines, then the glyph block or notice, to stderr.
pub fn print_summary(summary: &Summary) {
    for line in summary_lines(summary) {
        eprintln!("{}", line);
    }
    match &summary.terminal {
        TerminalOutput::Rendered(block) => print_glyph_block(block),
        TerminalOutput::TooLarge { version } => eprintln!("{}", too_large_notice(summary, *version)),
        TerminalOutput::Disabled => {}
    }
}

fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(image) = &summary.image {
        lines.push(format!("QR code saved to: {}", image.path.display()));
    }
    lines.push(format!(
        "Version: {} ({}x{} modules, error correction {})",
        summary.version, summary.dimension, summary.dimension, summary.ec_level
    ));
    if let Some(image) = &summary.image {
        lines.push(format!("Image size: {}x{} pixels", image.width, image.height));
        lines.push(format!("File size: {}", format_file_size(image.file_size)));
    }

    lines
}

fn too_large_notice(summary: &Summary, version: u8) -> String {
    match &summary.image {
        Some(image) => format!(
            "QR code too large to display in terminal (version {}); open {} instead.",
            version,
            image.path.display()
        ),
        None => format!(
            "QR code too large to display in terminal (version {}); pass an output file to save it.",
            version
        ),
    }
}

/// "12,345 bytes (12.1 KB)"
fn format_file_size(bytes: u64) -> String {
    format!("{} bytes ({:.1} KB)", bytes.separate_with_commas(), bytes as f64 / 1024.0)
}

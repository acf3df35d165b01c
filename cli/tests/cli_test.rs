use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GLYPHS: [char; 3] = ['█', '▀', '▄'];

fn compact_qr() -> Command {
    let mut cmd = Command::cargo_bin("compact-qr").unwrap();
    cmd.env_remove("SHOW_TERMINAL").env_remove("RUST_LOG");
    cmd
}

/// A URL of exactly `len` characters with a passphrase in the query string.
fn url_of_len(len: usize) -> String {
    let base = "https://example.com/register?invite=abcdefgh&passphrase=";
    assert!(len >= base.len());
    let mut url = base.to_string();
    url.extend(std::iter::repeat('q').take(len - base.len()));
    url
}

fn decode_png(path: &Path) -> String {
    const PAD: usize = 40;
    let img = image::open(path).unwrap().to_luma8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(w + 2 * PAD, h + 2 * PAD, |x, y| {
        if x < PAD || y < PAD || x >= w + PAD || y >= h + PAD {
            255
        } else {
            img.get_pixel((x - PAD) as u32, (y - PAD) as u32).0[0]
        }
    });
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code in {}", path.display());
    grids[0].decode().unwrap().1
}

#[test]
fn test_missing_url_prints_usage_and_exits_1() {
    let dir = TempDir::new().unwrap();

    compact_qr()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_round_trip_representative_urls() {
    let dir = TempDir::new().unwrap();
    let cases = [
        ("short.png", "https://example.com".to_string(), 10),
        ("medium.png", url_of_len(200), 7),
        ("long.png", url_of_len(350), 5),
    ];

    for (name, url, box_size) in cases {
        let path = dir.path().join(name);
        let output = compact_qr().arg(&url).arg(&path).output().unwrap();
        assert!(output.status.success(), "{} failed", name);
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains(&format!("QR code saved to: {}", path.display())));

        let img = image::open(&path).unwrap();
        assert_eq!(img.width() % box_size, 0, "{} not a multiple of box size", name);
        assert!(stderr.contains(&format!("Image size: {}x{} pixels", img.width(), img.height())));

        assert_eq!(decode_png(&path), url);
    }
}

#[test]
fn test_diagnostics_include_version_and_file_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qr.png");

    compact_qr()
        .arg("https://example.com")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("Version: 2 (25x25 modules, error correction L)")
                .and(predicate::str::contains("File size: "))
                .and(predicate::str::contains(" KB)")),
        );
}

#[test]
fn test_show_terminal_renders_small_codes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qr.png");

    let output = compact_qr()
        .env("SHOW_TERMINAL", "1")
        .arg("https://example.com")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let glyph_lines: Vec<&str> = stderr
        .lines()
        .filter(|line| line.chars().any(|c| GLYPHS.contains(&c)))
        .collect();
    // version 2 is 25 modules high
    assert_eq!(glyph_lines.len(), 13);
    assert!(glyph_lines.iter().all(|line| line.chars().count() == 25));
}

#[test]
fn test_show_terminal_other_values_disable_rendering() {
    let dir = TempDir::new().unwrap();

    compact_qr()
        .env("SHOW_TERMINAL", "yes")
        .arg("https://example.com")
        .arg(dir.path().join("qr.png"))
        .assert()
        .success()
        .stderr(predicate::function(|s: &str| !s.contains(GLYPHS)));
}

#[test]
fn test_large_code_is_not_drawn() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.png");

    compact_qr()
        .env("SHOW_TERMINAL", "1")
        .arg(url_of_len(350))
        .arg(&path)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("too large to display")
                .and(predicate::str::contains("big.png"))
                .and(predicate::function(|s: &str| !s.contains(GLYPHS))),
        );
    assert!(path.exists());
}

#[test]
fn test_without_output_file_or_terminal_is_an_error() {
    let dir = TempDir::new().unwrap();

    compact_qr()
        .current_dir(dir.path())
        .arg("https://example.com")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("nothing to produce")
                .and(predicate::function(|s: &str| !s.contains(GLYPHS))),
        );

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_without_output_file_draws_when_terminal_enabled() {
    let dir = TempDir::new().unwrap();

    compact_qr()
        .current_dir(dir.path())
        .env("SHOW_TERMINAL", "1")
        .arg("https://example.com")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("█"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_huge_box_size_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("q.png");

    compact_qr()
        .args(["https://example.com", "--box-size", "1000000"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating QR code").and(predicate::str::contains("limit")));
    assert!(!path.exists());
}

#[test]
fn test_unencodable_input_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qr.png");

    compact_qr()
        .arg("x".repeat(5_000))
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Data too long"));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("qr.png");

    compact_qr()
        .arg("https://example.com")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error generating QR code").and(predicate::str::contains("qr.png")));
    assert!(!path.exists());
}

#[test]
fn test_invalid_ec_level_is_usage_error() {
    compact_qr()
        .args(["https://example.com", "--ec-level", "Z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown error correction level"));
}

//! CLI integration tests for lsb-stego.
//!
//! These run the actual binary and check outputs, exit codes and the
//! files it leaves behind.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use hound::{SampleFormat, WavSpec, WavWriter};
use image::{ImageBuffer, Rgb};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the lsb-stego binary.
fn lsb_stego() -> Command {
    Command::cargo_bin("lsb-stego").unwrap()
}

fn cover_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("cover.png");
    ImageBuffer::from_fn(width, height, |x, y| Rgb([(x * 7) as u8, (y * 11) as u8, 77]))
        .save(&path)
        .unwrap();
    path
}

fn cover_wav(dir: &Path) -> PathBuf {
    let path = dir.join("cover.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&path, spec).unwrap();
    for i in 0..2000i32 {
        writer.write_sample(((i * 37) % 2000 - 1000) as i16).unwrap();
    }
    writer.finalize().unwrap();
    path
}

/// Single file the command wrote into `dir`.
fn only_file(dir: &Path) -> PathBuf {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one output file");
    entries.remove(0)
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_commands() {
    lsb_stego()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("embed-image"))
        .stdout(predicate::str::contains("extract-image"))
        .stdout(predicate::str::contains("embed-message"))
        .stdout(predicate::str::contains("extract-message"))
        .stdout(predicate::str::contains("capacity"));
}

#[test]
fn test_embed_message_help_shows_options() {
    lsb_stego()
        .args(["embed-message", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--cover"))
        .stdout(predicate::str::contains("--message"))
        .stdout(predicate::str::contains("--kind"))
        .stdout(predicate::str::contains("--output-dir"));
}

// ============================================================================
// Message workflows
// ============================================================================

#[test]
fn test_image_message_workflow() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 32, 32);
    let out = tmp.path().join("images");

    lsb_stego()
        .arg("embed-message")
        .arg("--cover")
        .arg(&cover)
        .args(["--message", "Hi"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("MessageStegano_"));

    let stego = only_file(&out);
    lsb_stego()
        .arg("extract-message")
        .arg("--stego")
        .arg(&stego)
        .assert()
        .success()
        .stdout("Hi\n");
}

#[test]
fn test_audio_message_workflow() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_wav(tmp.path());
    let out = tmp.path().join("audio");

    lsb_stego()
        .arg("embed-message")
        .arg("--cover")
        .arg(&cover)
        .args(["--message", "ping"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("AudioStegano_"));

    let stego = only_file(&out);
    let message_file = tmp.path().join("message.txt");
    lsb_stego()
        .arg("extract-message")
        .arg("--stego")
        .arg(&stego)
        .arg("--output")
        .arg(&message_file)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&message_file).unwrap(), "ping");
}

#[test]
fn test_message_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 16, 16);
    let out = tmp.path().join("out");

    lsb_stego()
        .arg("embed-message")
        .arg("--cover")
        .arg(&cover)
        .arg("--output-dir")
        .arg(&out)
        .write_stdin("from stdin\n")
        .assert()
        .success();

    lsb_stego()
        .arg("extract-message")
        .arg("--stego")
        .arg(only_file(&out))
        .assert()
        .success()
        .stdout("from stdin\n");
}

#[test]
fn test_audio_message_too_long_fails() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_wav(tmp.path());
    let out = tmp.path().join("audio");

    lsb_stego()
        .arg("embed-message")
        .arg("--cover")
        .arg(&cover)
        .args(["--message", "this message is far too long for audio"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload too large"));

    assert!(!out.exists());
}

// ============================================================================
// Image workflows
// ============================================================================

#[test]
fn test_image_in_image_workflow() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 8, 8);
    let secret = tmp.path().join("secret.png");
    ImageBuffer::from_pixel(8, 8, Rgb([255u8, 0, 255])).save(&secret).unwrap();

    let stego_dir = tmp.path().join("stego");
    lsb_stego()
        .arg("embed-image")
        .arg("--cover")
        .arg(&cover)
        .arg("--secret")
        .arg(&secret)
        .arg("--output-dir")
        .arg(&stego_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("ImageStegano_"));

    let extracted_dir = tmp.path().join("extracted");
    lsb_stego()
        .arg("extract-image")
        .arg("--stego")
        .arg(only_file(&stego_dir))
        .arg("--output-dir")
        .arg(&extracted_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("ExtractedImage_"));

    let extracted = image::open(only_file(&extracted_dir)).unwrap().to_rgb8();
    assert!(extracted.pixels().all(|p| p.0 == [255, 0, 255]));
}

#[test]
fn test_dimension_mismatch_fails() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 2, 2);
    let secret = tmp.path().join("secret.png");
    ImageBuffer::from_pixel(3, 3, Rgb([1u8, 2, 3])).save(&secret).unwrap();

    lsb_stego()
        .arg("embed-image")
        .arg("--cover")
        .arg(&cover)
        .arg("--secret")
        .arg(&secret)
        .arg("--output-dir")
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("same dimensions"));
}

#[test]
fn test_config_file_sets_output_dir() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 16, 16);
    let configured = tmp.path().join("configured");
    let config = tmp.path().join("stego.toml");
    std::fs::write(
        &config,
        format!("image_output_dir = {:?}\n", configured.to_string_lossy()),
    )
    .unwrap();

    lsb_stego()
        .arg("--config")
        .arg(&config)
        .arg("embed-message")
        .arg("--cover")
        .arg(&cover)
        .args(["--message", "cfg"])
        .assert()
        .success();

    assert!(only_file(&configured)
        .to_string_lossy()
        .ends_with(".png"));
}

/// Cover and secret share the value 200 (LSB 0, top bit 1), so the two
/// equal-sample policies leave different stego samples (200 vs 201).
fn run_equal_samples(tmp: &Path, config_policy: &str, flag: Option<&str>) -> Vec<u8> {
    let cover = tmp.join("cover.png");
    let secret = tmp.join("secret.png");
    ImageBuffer::from_pixel(4, 4, Rgb([200u8, 200, 200])).save(&cover).unwrap();
    ImageBuffer::from_pixel(4, 4, Rgb([200u8, 200, 200])).save(&secret).unwrap();

    let config = tmp.join("stego.toml");
    std::fs::write(&config, format!("equal_samples = \"{config_policy}\"\n")).unwrap();

    let stego_dir = tmp.join(format!("stego-{config_policy}-{}", flag.unwrap_or("none")));
    let mut cmd = lsb_stego();
    cmd.arg("--config")
        .arg(&config)
        .arg("embed-image")
        .arg("--cover")
        .arg(&cover)
        .arg("--secret")
        .arg(&secret)
        .arg("--output-dir")
        .arg(&stego_dir);
    if let Some(policy) = flag {
        cmd.args(["--equal-samples", policy]);
    }
    cmd.assert().success();

    image::open(only_file(&stego_dir)).unwrap().to_rgb8().into_raw()
}

#[test]
fn test_equal_samples_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();

    let skipped = run_equal_samples(tmp.path(), "skip", None);
    assert!(skipped.iter().all(|&s| s == 200));

    let substituted = run_equal_samples(tmp.path(), "skip", Some("substitute"));
    assert!(substituted.iter().all(|&s| s == 201));

    let forced_skip = run_equal_samples(tmp.path(), "substitute", Some("skip"));
    assert!(forced_skip.iter().all(|&s| s == 200));
}

#[test]
fn test_equal_samples_rejects_unknown_policy() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 2, 2);

    lsb_stego()
        .arg("embed-image")
        .arg("--cover")
        .arg(&cover)
        .arg("--secret")
        .arg(&cover)
        .args(["--equal-samples", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sometimes"));
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_capacity_command() {
    let tmp = TempDir::new().unwrap();
    let cover = cover_png(tmp.path(), 5, 3);

    lsb_stego()
        .arg("capacity")
        .arg("--cover")
        .arg(&cover)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape:    3 x 5 x 3"))
        .stdout(predicate::str::contains("Capacity: 5 characters"));

    let wav = cover_wav(tmp.path());
    lsb_stego()
        .arg("capacity")
        .arg("--cover")
        .arg(&wav)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind:     audio"))
        .stdout(predicate::str::contains("Capacity: 31 characters"));
}

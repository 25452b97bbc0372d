//! Integration tests for the `transito` binary.
//!
//! Each test runs the built binary against temporary WAV and preset files.

use std::process::Command;
use tempfile::TempDir;
use transito_io::{WavSpec, read_wav, write_wav};

fn transito_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_transito"))
}

/// Stereo 440 Hz tone at -6 dBFS.
fn write_tone(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let tone: Vec<f32> = (0..24000)
        .map(|i| 0.5 * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 48000.0).sin())
        .collect();
    let spec = WavSpec {
        channels: 2,
        sample_rate: 48000,
        bits_per_sample: 32,
    };
    write_wav(&path, &[tone.clone(), tone], spec).unwrap();
    path
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

// ---------------------------------------------------------------------------
// `transito processors`
// ---------------------------------------------------------------------------

#[test]
fn cli_processors_lists_both_kinds() {
    let output = transito_bin().arg("processors").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available Processors"));
    assert!(stdout.contains("compressor"));
    assert!(stdout.contains("transient_splitter"));
}

#[test]
fn cli_processors_shows_parameter_table() {
    let output = transito_bin()
        .args(["processors", "compressor"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["threshold", "ratio", "knee", "range", "auto_make_up_gain"] {
        assert!(stdout.contains(key), "missing '{key}' in:\n{stdout}");
    }
    assert!(stdout.contains("upward | expander"));
}

#[test]
fn cli_processors_unknown_fails() {
    let output = transito_bin()
        .args(["processors", "reverb"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// `transito presets`
// ---------------------------------------------------------------------------

#[test]
fn cli_presets_list_and_show() {
    let output = transito_bin().args(["presets", "list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drum Punch"));
    assert!(stdout.contains("Downward Expander"));

    let output = transito_bin()
        .args(["presets", "show", "drum_punch"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("transient_splitter"));
    assert!(stdout.contains("compressor"));
}

#[test]
fn cli_presets_export_writes_loadable_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("glue.toml");

    let output = transito_bin()
        .args(["presets", "export", "gentle_glue"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("name = \"Gentle Glue\""));

    let again = transito_bin()
        .args(["presets", "export", "gentle_glue"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!again.status.success(), "export should refuse to overwrite");
}

// ---------------------------------------------------------------------------
// `transito process`
// ---------------------------------------------------------------------------

#[test]
fn cli_process_single_processor() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(&dir, "in.wav");
    let output_path = dir.path().join("out.wav");

    let output = transito_bin()
        .arg("process")
        .arg(&input)
        .arg(&output_path)
        .args([
            "--processor",
            "compressor",
            "--param",
            "threshold=-30dB",
            "--param",
            "ratio=10",
            "--bit-depth",
            "24",
        ])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Stats:"));

    let (channels, spec) = read_wav(&output_path).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(channels[0].len(), 24000);
    assert!(peak(&channels[0][12000..]) < 0.25);
}

#[test]
fn cli_process_factory_preset() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(&dir, "in.wav");
    let output_path = dir.path().join("out.wav");

    let status = transito_bin()
        .arg("process")
        .arg(&input)
        .arg(&output_path)
        .args(["--factory", "drum_punch", "--block-size", "128"])
        .status()
        .unwrap();
    assert!(status.success());

    let (channels, _) = read_wav(&output_path).unwrap();
    assert!(channels.iter().flatten().all(|s| s.is_finite()));
}

#[test]
fn cli_process_preset_file() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(&dir, "in.wav");
    let output_path = dir.path().join("out.wav");
    let preset_path = dir.path().join("quiet.toml");
    std::fs::write(
        &preset_path,
        r#"
name = "Quiet"

[[processors]]
type = "transient_splitter"
[processors.params]
attack = "0.5"
sustain = "0.5"
"#,
    )
    .unwrap();

    let status = transito_bin()
        .arg("process")
        .arg(&input)
        .arg(&output_path)
        .arg("--preset")
        .arg(&preset_path)
        .status()
        .unwrap();
    assert!(status.success());

    let (channels, _) = read_wav(&output_path).unwrap();
    let out_peak = peak(&channels[1]);
    assert!((out_peak - 0.25).abs() < 0.01, "peak {out_peak}");
}

#[test]
fn cli_process_rejects_out_of_range_param() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(&dir, "in.wav");

    let output = transito_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .args(["--processor", "compressor", "--param", "ratio=100"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.path().join("out.wav").exists());
}

#[test]
fn cli_process_requires_a_chain() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(&dir, "in.wav");

    let output = transito_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No processor specified"));
}

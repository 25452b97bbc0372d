//! Integration tests for transito-io WAV I/O and the processing engine.

use tempfile::NamedTempFile;
use transito_dynamics::{Compressor, ProcessorKind, TransientSplitter, create_processor};
use transito_io::{ProcessingEngine, WavFormat, WavSpec, read_wav, read_wav_info, write_wav};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sine_wave(sample_rate: u32, freq_hz: f32, amplitude: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            amplitude * (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin()
        })
        .collect()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

// ---------------------------------------------------------------------------
// WAV roundtrips
// ---------------------------------------------------------------------------

#[test]
fn wav_roundtrip_mono_f32() {
    let sr = 44100;
    let samples = sine_wave(sr, 440.0, 1.0, sr as usize);
    let spec = WavSpec {
        channels: 1,
        sample_rate: sr,
        bits_per_sample: 32,
    };

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), std::slice::from_ref(&samples), spec).unwrap();

    let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
    assert_eq!(loaded_spec, spec);
    assert_eq!(loaded.len(), 1);
    for (a, b) in samples.iter().zip(&loaded[0]) {
        assert!((a - b).abs() < 1e-6, "sample mismatch: {a} vs {b}");
    }
}

#[test]
fn wav_roundtrip_stereo_i24() {
    let sr = 48000;
    let left = sine_wave(sr, 220.0, 0.8, 4800);
    let right = sine_wave(sr, 330.0, 0.4, 4800);
    let spec = WavSpec {
        channels: 2,
        sample_rate: sr,
        bits_per_sample: 24,
    };

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &[left.clone(), right.clone()], spec).unwrap();

    let (loaded, _) = read_wav(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    for (expected, got) in [left, right].iter().zip(&loaded) {
        assert_eq!(expected.len(), got.len());
        for (a, b) in expected.iter().zip(got) {
            assert!((a - b).abs() < 1e-5, "24-bit mismatch: {a} vs {b}");
        }
    }
}

#[test]
fn wav_info_reports_frames_and_format() {
    let spec = WavSpec {
        channels: 2,
        sample_rate: 48000,
        bits_per_sample: 16,
    };
    let frames = 24000;
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &[vec![0.0; frames], vec![0.0; frames]], spec).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 48000);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_frames, frames as u64);
    assert!((info.duration_secs - 0.5).abs() < 1e-9);
    assert_eq!(info.format, WavFormat::Pcm);
}

#[test]
fn read_missing_file_is_error() {
    assert!(read_wav("/nonexistent/definitely_missing.wav").is_err());
}

// ---------------------------------------------------------------------------
// Engine with real processors
// ---------------------------------------------------------------------------

#[test]
fn engine_compresses_file_roundtrip() {
    let sr = 48000;
    let input = sine_wave(sr, 440.0, 0.9, sr as usize);
    let spec = WavSpec {
        channels: 1,
        sample_rate: sr,
        bits_per_sample: 32,
    };

    let in_file = NamedTempFile::new().unwrap();
    write_wav(in_file.path(), &[input], spec).unwrap();

    let (mut channels, spec) = read_wav(in_file.path()).unwrap();
    let mut compressor = Compressor::new();
    compressor.set_threshold(-20.0);
    compressor.set_ratio(8.0);

    let mut engine = ProcessingEngine::new(spec.sample_rate as f32, 256);
    engine.add_processor(compressor);
    engine.process_channels(&mut channels).unwrap();

    let out_file = NamedTempFile::new().unwrap();
    write_wav(out_file.path(), &channels, spec).unwrap();
    let (output, _) = read_wav(out_file.path()).unwrap();

    let tail = &output[0][sr as usize / 2..];
    assert!(tail.iter().all(|s| s.is_finite()));
    assert!(peak(tail) < 0.5, "tail peak {} not reduced", peak(tail));
}

#[test]
fn engine_runs_boxed_registry_processors() {
    let mut engine = ProcessingEngine::new(44100.0, 128);
    engine.add_processor(create_processor(ProcessorKind::TransientSplitter));
    engine.add_processor(create_processor(ProcessorKind::Compressor));
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.latency_samples(), 0);

    let mut channels = vec![
        sine_wave(44100, 100.0, 0.5, 10_000),
        sine_wave(44100, 150.0, 0.5, 10_000),
    ];
    engine.process_channels(&mut channels).unwrap();
    assert!(channels.iter().flatten().all(|s| s.is_finite()));
}

#[test]
fn bypassed_chain_leaves_audio_untouched() {
    let input = sine_wave(48000, 1000.0, 0.7, 5000);
    let mut engine = ProcessingEngine::new(48000.0, 512);
    let mut splitter = TransientSplitter::new();
    splitter.set_attack(3.0);
    let index = engine.add_processor(splitter);
    engine.set_bypassed(index, true);

    let mut channels = vec![input.clone()];
    engine.process_channels(&mut channels).unwrap();
    assert_eq!(channels[0], input);
}

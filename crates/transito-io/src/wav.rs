//! WAV file reading and writing.
//!
//! Samples are exchanged as one `Vec<f32>` per channel. Integer PCM is
//! normalised to `[-1, 1)` on read and clamped on write; 32-bit files are
//! IEEE float.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample: 16 or 24 (integer) or 32 (float).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Read a WAV file into one buffer per channel.
///
/// ```rust,no_run
/// let (channels, spec) = transito_io::read_wav("input.wav")?;
/// println!("{} channels of {} frames at {} Hz", channels.len(), channels[0].len(), spec.sample_rate);
/// # Ok::<(), transito_io::Error>(())
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<f32>>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channel_count = usize::from(spec.channels);
    if channel_count == 0 {
        return Err(Error::UnsupportedFormat("zero channels".to_string()));
    }

    let interleaved: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = int_scale(spec.bits_per_sample)?;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frames); channel_count];
    for frame in interleaved.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    tracing::debug!(
        path = %path.display(),
        channels = channel_count,
        frames,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "read wav"
    );
    Ok((channels, spec))
}

/// Write one buffer per channel to a WAV file.
///
/// The channel count must match `spec.channels` and all channels must have
/// the same length.
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Vec<f32>], spec: WavSpec) -> Result<()> {
    let path = path.as_ref();
    if channels.len() != usize::from(spec.channels) {
        return Err(Error::ChannelMismatch {
            expected: usize::from(spec.channels),
            found: channels.len(),
        });
    }
    let frames = channels.first().map_or(0, Vec::len);
    if let Some(bad) = channels.iter().find(|c| c.len() != frames) {
        return Err(Error::ChannelMismatch {
            expected: frames,
            found: bad.len(),
        });
    }
    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit output",
            spec.bits_per_sample
        )));
    }

    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;
    if spec.bits_per_sample == 32 {
        for j in 0..frames {
            for channel in channels {
                writer.write_sample(channel[j])?;
            }
        }
    } else {
        let max_val = int_scale(spec.bits_per_sample)?;
        for j in 0..frames {
            for channel in channels {
                let int_sample = (channel[j] * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(int_sample)?;
            }
        }
    }
    writer.finalize()?;

    tracing::debug!(
        path = %path.display(),
        channels = channels.len(),
        frames,
        bits = spec.bits_per_sample,
        "wrote wav"
    );
    Ok(())
}

/// Full-scale value for integer PCM of the given bit depth.
fn int_scale(bits: u16) -> Result<f32> {
    if !(2..=32).contains(&bits) {
        return Err(Error::UnsupportedFormat(format!("{bits}-bit PCM")));
    }
    Ok((1i64 << (bits - 1)) as f32)
}

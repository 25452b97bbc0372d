//! File-based processing command.

use super::common::{display_db, load_preset, parse_key_val, peak, rms};
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use transito_config::{Preset, ProcessorConfig};
use transito_io::{ProcessingEngine, WavSpec, read_wav, write_wav};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Single processor to apply (compressor, transient_splitter)
    #[arg(long, conflicts_with_all = ["preset", "factory"])]
    processor: Option<String>,

    /// Processor parameters (e.g., "threshold=-24dB")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1, requires = "processor")]
    param: Vec<(String, String)>,

    /// Preset file (TOML)
    #[arg(short, long, conflicts_with = "factory")]
    preset: Option<PathBuf>,

    /// Factory preset name
    #[arg(short, long)]
    factory: Option<String>,

    /// Processing block size (defaults to the preset's, or 512)
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let preset = chain_preset(&args)?;

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) =
        read_wav(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let frames = channels.first().map_or(0, Vec::len);
    println!(
        "  {} channel(s), {} frames, {} Hz, {:.2}s",
        channels.len(),
        frames,
        spec.sample_rate,
        frames as f32 / spec.sample_rate as f32
    );

    let block_size = args.block_size.unwrap_or(preset.max_block_size);
    let mut engine = ProcessingEngine::new(spec.sample_rate as f32, block_size);
    for (processor, bypassed) in preset.build_processors()? {
        let index = engine.add_processor(processor);
        engine.set_bypassed(index, bypassed);
    }
    if engine.is_empty() {
        anyhow::bail!("No processors to run");
    }

    println!(
        "Processing with '{}' ({})...",
        preset.name,
        preset.processor_types().join(" -> ")
    );
    tracing::info!(
        preset = %preset.name,
        processors = engine.len(),
        block_size = engine.max_block_size(),
        "processing {}",
        args.input.display()
    );

    let input_stats = Stats::measure(&channels);

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    engine.process_channels_with_progress(&mut channels, |done| pb.set_position(done as u64))?;
    pb.finish_with_message("done");

    let output_stats = Stats::measure(&channels);
    println!("\nStats:");
    println!("  Input:  {input_stats}");
    println!("  Output: {output_stats}");

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..spec
    };
    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &channels, out_spec)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Done!");

    Ok(())
}

/// Resolve the chain from `--preset`, `--factory` or `--processor`.
fn chain_preset(args: &ProcessArgs) -> anyhow::Result<Preset> {
    let preset = if let Some(path) = &args.preset {
        Preset::load(path).with_context(|| format!("loading preset {}", path.display()))?
    } else if let Some(name) = &args.factory {
        load_preset(name)?
    } else if let Some(processor) = &args.processor {
        let config = args
            .param
            .iter()
            .fold(ProcessorConfig::new(processor.as_str()), |config, (k, v)| {
                config.with_param(k.as_str(), v.as_str())
            });
        Preset::new(processor.as_str()).with_processor(config)
    } else {
        anyhow::bail!("No processor specified. Use --processor, --preset, or --factory");
    };
    Ok(preset)
}

struct Stats {
    rms_db: f32,
    peak_db: f32,
}

impl Stats {
    fn measure(channels: &[Vec<f32>]) -> Self {
        let all: Vec<f32> = channels.iter().flatten().copied().collect();
        Self {
            rms_db: display_db(rms(&all)),
            peak_db: display_db(peak(&all)),
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RMS {:.1} dB, Peak {:.1} dB", self.rms_db, self.peak_db)
    }
}

//! Preset listing and export commands.

use super::common::load_preset;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use transito_config::{factory_presets, validate_preset};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: Option<PresetsCommand>,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory presets
    List,

    /// Show details of a preset
    Show {
        /// Factory preset name or path to a preset file
        name: String,
    },

    /// Write a preset to a TOML file
    Export {
        /// Factory preset name or path to a preset file
        name: String,

        /// Destination file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command.unwrap_or(PresetsCommand::List) {
        PresetsCommand::List => list_presets(),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Export { name, path, force } => export_preset(&name, &path, force),
    }
}

fn list_presets() -> anyhow::Result<()> {
    println!("Factory Presets:");
    println!("================");
    for preset in factory_presets() {
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {:20} - {}", preset.name, desc);
    }
    println!();
    println!("Use 'transito presets show <name>' for the processor chain.");
    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    println!("Sample Rate: {} Hz", preset.sample_rate);
    println!("Max Block Size: {}", preset.max_block_size);
    println!();

    println!("Processors ({}):", preset.len());
    for (i, processor) in preset.iter().enumerate() {
        let bypass_marker = if processor.bypassed { " [BYPASSED]" } else { "" };
        println!("  {}. {}{}", i + 1, processor.processor_type, bypass_marker);

        let mut params: Vec<_> = processor.params.iter().collect();
        params.sort();
        for (key, value) in params {
            println!("      {} = {}", key, value);
        }
    }

    if let Err(e) = validate_preset(&preset) {
        println!();
        println!("Warning: {}", e);
    }

    Ok(())
}

fn export_preset(name: &str, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let preset = load_preset(name)?;
    preset.save(path)?;
    println!("Exported '{}' to {}", preset.name, path.display());
    Ok(())
}

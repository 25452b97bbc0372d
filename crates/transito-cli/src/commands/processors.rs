//! Processor listing and parameter tables.

#![allow(clippy::print_literal)] // Table headers use literal strings

use clap::Args;
use transito_core::{ParamDescriptor, ParamUnit};
use transito_dynamics::{ProcessorRegistry, create_processor};

#[derive(Args)]
pub struct ProcessorsArgs {
    /// Show parameters of a specific processor
    #[arg(value_name = "PROCESSOR")]
    processor: Option<String>,
}

pub fn run(args: ProcessorsArgs) -> anyhow::Result<()> {
    let registry = ProcessorRegistry::new();

    let Some(id) = &args.processor else {
        println!("Available Processors");
        println!("====================");
        println!();
        for desc in registry.all_processors() {
            println!("  {:20} - {}", desc.id, desc.description);
        }
        println!();
        println!("Use 'transito processors <name>' for detailed parameter info.");
        return Ok(());
    };

    let desc = registry
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Unknown processor: {}", id))?;
    let processor = create_processor(desc.kind);

    println!("{} ({})", desc.name, desc.id);
    println!("{}", "=".repeat(desc.name.len() + desc.id.len() + 3));
    println!();
    println!("{}", desc.description);
    println!();
    println!("Parameters:");
    println!();
    println!(
        "  {:20}  {:22}  {:>10}  {}",
        "Key", "Name", "Default", "Range"
    );
    println!(
        "  {:20}  {:22}  {:>10}  {}",
        "---", "----", "-------", "-----"
    );

    for info in (0..processor.processor_param_count())
        .filter_map(|i| processor.processor_param_info(i))
    {
        println!(
            "  {:20}  {:22}  {:>10}  {}",
            info.key,
            info.name,
            format_value(&info, info.default),
            format_range(&info)
        );
    }

    println!();
    println!("Example usage:");
    println!();
    println!(
        "  transito process input.wav output.wav --processor {} --param {}={}",
        desc.id,
        processor
            .processor_param_info(0)
            .map_or("", |info| info.key),
        processor
            .processor_param_info(0)
            .map_or(String::new(), |info| format_value(&info, info.default))
    );

    Ok(())
}

fn format_value(info: &ParamDescriptor, value: f32) -> String {
    match info.unit {
        ParamUnit::Toggle => String::from(if value >= 0.5 { "on" } else { "off" }),
        ParamUnit::Choice if info.key == "compression_type" => {
            String::from(if value >= 0.5 { "expander" } else { "upward" })
        }
        ParamUnit::Choice => format!("{}", value as u32),
        ParamUnit::Seconds if value < 1.0 => format!("{}ms", round3(value * 1000.0)),
        ParamUnit::Seconds => format!("{}s", round3(value)),
        ParamUnit::Decibels => format!("{}dB", round3(value)),
        ParamUnit::Ratio | ParamUnit::Linear => format!("{}", round3(value)),
    }
}

fn format_range(info: &ParamDescriptor) -> String {
    match info.unit {
        ParamUnit::Toggle => "on | off".to_string(),
        ParamUnit::Choice if info.key == "compression_type" => "upward | expander".to_string(),
        _ => format!(
            "{} .. {}",
            format_value(info, info.min),
            format_value(info, info.max)
        ),
    }
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

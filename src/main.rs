use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use habitability::{
    config::{ProfileConfig, ProfileLoader},
    display::describe_tolerance,
    logging::init_logging,
    presets::Preset,
    scoring::{self, HabitabilityReport},
    SpeciesProfile,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Species habitability scorer")]
struct Cli {
    /// Path to a species profile YAML file
    #[arg(long, conflicts_with = "preset")]
    profile: Option<PathBuf>,

    /// Built-in species profile (used when no file is given)
    #[arg(long, value_enum, default_value_t = Preset::Humanoid)]
    preset: Preset,

    /// Score as if the species had total terraforming
    #[arg(long)]
    total_terraforming: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the selected profile as YAML instead of scoring it
    #[arg(long)]
    dump: bool,

    /// List built-in presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
struct AxisSummary<'a> {
    name: &'a str,
    tolerance: String,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    name: &'a str,
    total_terraforming: bool,
    axes: Vec<AxisSummary<'a>>,
    report: HabitabilityReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    if cli.list_presets {
        for preset in Preset::value_variants() {
            println!("{}", preset.name());
        }
        return Ok(());
    }

    let (name, profile) = match &cli.profile {
        Some(path) => {
            let loader = ProfileLoader::new(".");
            let (config, profile) = loader.load_profile(path)?;
            (config.name, profile)
        }
        None => (cli.preset.name().to_string(), cli.preset.profile()?),
    };
    let profile = if cli.total_terraforming {
        profile.with_total_terraforming(true)
    } else {
        profile
    };

    if cli.dump {
        print!("{}", ProfileConfig::from_profile(name, &profile).to_yaml_string()?);
        return Ok(());
    }

    let report = scoring::evaluate(&profile);
    info!(profile = %name, score = report.score, "scored profile");

    let output = ScoreOutput {
        name: &name,
        total_terraforming: profile.total_terraforming(),
        axes: summarize_axes(&profile),
        report,
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&output);
    }
    Ok(())
}

fn summarize_axes(profile: &SpeciesProfile) -> Vec<AxisSummary<'_>> {
    profile
        .axes()
        .map(|(axis, tolerance)| AxisSummary {
            name: &axis.name,
            tolerance: describe_tolerance(axis, tolerance),
        })
        .collect()
}

fn print_report(output: &ScoreOutput<'_>) {
    println!("Species: {}", output.name);
    for axis in &output.axes {
        println!("  {:<12} {}", axis.name, axis.tolerance);
    }
    println!(
        "  Total terraforming: {}",
        if output.total_terraforming { "yes" } else { "no" }
    );
    println!(
        "Pass totals: {} / {} / {}",
        output.report.pass_totals[0], output.report.pass_totals[1], output.report.pass_totals[2]
    );
    println!("Habitability score: {}", output.report.score);
}

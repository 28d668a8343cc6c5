//! rhcheck - check a component's runtime ports against its descriptors
//!
//! Launches each implementation of a component package in the local
//! sandbox, exercises start/stop and compares the reported port set with
//! the ports declared in the component descriptor.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use rhcheck::core::descriptor::ComponentPackage;
use rhcheck::core::harness::{HarnessConfig, HarnessRunner, ImplementationSelection};
use rhcheck::core::ports::declared_port_definitions;
use rhcheck::LocalSandbox;

#[derive(Parser)]
#[command(name = "rhcheck")]
#[command(author, version, about = "Check component ports against their XML descriptors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test cases against a component package
    Run {
        /// Path to the software package descriptor (.spd.xml)
        spd: Option<PathBuf>,

        /// JSON harness configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Implementation to test (repeatable, default: all)
        #[arg(short = 'i', long = "impl")]
        implementations: Vec<String>,

        /// Test case to run (repeatable, default: all)
        #[arg(long = "case")]
        cases: Vec<String>,
    },

    /// Print the ports declared by a component package
    Ports {
        /// Path to the software package descriptor (.spd.xml)
        spd: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            spd,
            config,
            implementations,
            cases,
        } => run(spd, config, implementations, cases),
        Commands::Ports { spd } => {
            print_ports(&spd)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(
    spd: Option<PathBuf>,
    config_path: Option<PathBuf>,
    implementations: Vec<String>,
    cases: Vec<String>,
) -> anyhow::Result<ExitCode> {
    let mut config = match (config_path, spd.clone()) {
        (Some(path), _) => HarnessConfig::from_json_file(&path)?,
        (None, Some(spd)) => HarnessConfig::new(spd),
        (None, None) => anyhow::bail!("either an SPD path or --config is required"),
    };
    // Flags given on the command line win over the configuration file
    if let Some(spd) = spd {
        config.spd_file = spd;
        config.base_dir = None;
    }
    if !implementations.is_empty() {
        config.implementations = ImplementationSelection::Only(implementations);
    }
    if !cases.is_empty() {
        config.cases = Some(cases);
    }

    let mut runner = HarnessRunner::new(LocalSandbox::new(), config);
    let report = runner.run().context("harness run aborted")?;
    println!("{}", report);

    Ok(ExitCode::from(report.exit_code()))
}

fn print_ports(spd: &Path) -> anyhow::Result<()> {
    let package = ComponentPackage::load(spd)
        .with_context(|| format!("failed to load {}", spd.display()))?;

    println!("{} ({})", package.name(), package.implementation_ids().join(", "));
    println!("{:<24} {:<10} {:<40} DESCRIPTION", "PORT", "DIRECTION", "REPID");
    for (name, definition) in declared_port_definitions(package.scd()) {
        println!(
            "{:<24} {:<10} {:<40} {}",
            name,
            definition.direction.as_str(),
            definition.repid,
            definition.expected_description()
        );
    }
    Ok(())
}

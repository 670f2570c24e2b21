use orrery::{run, CsvSink, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file describing parameters and initial bodies
    #[arg(short, default_value = "scenario.yaml")]
    file_name: PathBuf,

    /// Destination for the per-step position table
    #[arg(short, default_value = "positions.csv")]
    output: PathBuf,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    info!(
        h0 = scenario.parameters.h0,
        t_end = scenario.parameters.t_end,
        bodies = scenario.system.bodies.len(),
        "scenario loaded"
    );

    let mut sink = CsvSink::create(&args.output)?;
    run(&mut scenario, &mut sink)?;

    info!("data written to {}", args.output.display());
    Ok(())
}

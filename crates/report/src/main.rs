use std::fs::File;
use std::io::BufReader;

use anyhow::Context;

use larder_report::{Report, ReportConfig, Simulation, cli};

fn main() -> anyhow::Result<()> {
    let Some(path) = cli::input_path(std::env::args().skip(1)) else {
        println!("{}", cli::USAGE);
        return Ok(());
    };

    larder_observability::init();
    let config = ReportConfig::from_env();

    let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
    let mut simulation = Simulation::new();
    let summary = simulation
        .run(BufReader::new(file))
        .with_context(|| format!("failed to read {path}"))?;

    if simulation.catalog().is_empty() {
        tracing::warn!(path = %path, "input declared no food items");
    }
    tracing::info!(
        applied = summary.applied,
        skipped = summary.skipped,
        days = summary.days_closed,
        reached_end = summary.reached_end,
        products = simulation.catalog().len(),
        warehouses = simulation.warehouse_count(),
        "simulation finished"
    );

    let report = Report::build(&simulation, config.title);
    print!("{}", report.render(config.format)?);
    Ok(())
}

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use epirt_track::{EpidemicStateTracker, ScriptedModel, TrackerReport};
use log::info;

use crate::io::{load_config, write_json, write_series_csv};

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// JSON population trace to replay through the tracker.
    #[arg(long)]
    pub trace: PathBuf,
    /// Optional YAML analysis configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for the tracker report and series.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &TrackArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let config = load_config(args.config.as_deref())?;
    let mut model = ScriptedModel::from_json_slice(&fs::read(&args.trace)?)?;

    let mut tracker = EpidemicStateTracker::new(config.tracker)?;
    tracker.run(&mut model)?;
    let report = TrackerReport::from_tracker(&tracker)?;

    write_json(args.out.join("tracker_report.json"), &report)?;
    write_series_csv(&args.out.join("series.csv"), &report.series)?;
    info!("wrote tracker report {}", report.report_hash);

    let summary = serde_json::json!({
        "trace": args.trace.display().to_string(),
        "total_days": report.total_days,
        "final_tau": report.final_tau,
        "report_hash": report.report_hash,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

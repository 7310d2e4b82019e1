use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use epirt_track::{analyse, ScriptedModel};

use crate::io::{
    load_config, write_json, write_network_csv, write_rt_csv, write_series_csv, write_yaml,
};

#[derive(Args, Debug)]
pub struct AnalyseArgs {
    /// JSON population trace, contact log included.
    #[arg(long)]
    pub trace: PathBuf,
    /// Optional YAML analysis configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Replace the settled tau when replaying the contact log.
    #[arg(long)]
    pub tau: Option<f64>,
    /// Output directory for all reports and tables.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &AnalyseArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let mut config = load_config(args.config.as_deref())?;
    if args.tau.is_some() {
        config.replay.tau_override = args.tau;
    }
    let mut model = ScriptedModel::from_json_slice(&fs::read(&args.trace)?)?;
    let report = analyse(&mut model, &config)?;

    write_json(args.out.join("analysis_report.json"), &report)?;
    write_yaml(&args.out.join("config.yaml"), &config)?;
    write_series_csv(&args.out.join("series.csv"), &report.tracker.series)?;
    write_rt_csv(&args.out.join("rt_aggregate.csv"), &report.contact.rt_aggregate)?;
    write_network_csv(
        &args.out.join("rt_by_network.csv"),
        &report.contact.rt_by_network,
    )?;

    let summary = serde_json::json!({
        "trace": args.trace.display().to_string(),
        "final_tau": report.tracker.final_tau,
        "replay_tau": report.contact.tau,
        "events": report.contact.event_count,
        "report_hash": report.report_hash,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

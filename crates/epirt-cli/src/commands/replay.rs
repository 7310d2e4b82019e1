use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use epirt_contact::ContactReport;
use epirt_core::events_since;
use epirt_track::ReplayOpts;
use log::info;

use crate::io::{read_events_csv, write_json, write_network_csv, write_rt_csv};

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// CSV contact log.
    #[arg(long)]
    pub events: PathBuf,
    /// Number of simulated days the log covers.
    #[arg(long)]
    pub days: u32,
    /// Population size used to normalise transmission probabilities.
    #[arg(long)]
    pub population: usize,
    /// Transmission rate, usually the final tau of a tracked run.
    #[arg(long)]
    pub tau: f64,
    /// Ignore events before this day.
    #[arg(long, default_value_t = 1)]
    pub since_day: u32,
    /// Output directory for the contact report and Rt tables.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ReplayArgs) -> Result<(), Box<dyn Error>> {
    let opts = ReplayOpts {
        since_day: args.since_day,
        tau_override: Some(args.tau),
    };
    opts.validate()?;
    fs::create_dir_all(&args.out)?;
    let events = read_events_csv(&args.events)?;
    let events = events_since(&events, opts.since_day);
    info!("found {} contact events", events.len());

    let report = ContactReport::build(&events, args.days, args.population, args.tau)?;
    write_json(args.out.join("contact_report.json"), &report)?;
    write_rt_csv(&args.out.join("rt_aggregate.csv"), &report.rt_aggregate)?;
    write_network_csv(&args.out.join("rt_by_network.csv"), &report.rt_by_network)?;

    let summary = serde_json::json!({
        "events": report.event_count,
        "total_days": report.total_days,
        "tau": report.tau,
        "report_hash": report.report_hash,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

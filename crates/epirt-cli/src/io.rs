use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use epirt_core::serde::{from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
use epirt_core::{ContactEvent, NetworkId};
use epirt_track::{AnalysisConfig, DailySeries};
use log::debug;
use serde::Serialize;

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_canonical_json_bytes(value)?)?;
    Ok(())
}

pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    fs::write(path, to_yaml_string(value)?)?;
    Ok(())
}

pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let config: AnalysisConfig = from_yaml_slice(&fs::read(path)?)?;
    config.validate()?;
    debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Reads a contact log with header
/// `infector_id,contact_id,day,infection_caused,network_id`.
pub fn read_events_csv(path: &Path) -> Result<Vec<ContactEvent>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut events = Vec::new();
    for row in reader.deserialize() {
        let event: ContactEvent = row?;
        events.push(event);
    }
    Ok(events)
}

pub fn write_series_csv(path: &Path, series: &DailySeries) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "day",
        "susceptible",
        "host",
        "immune",
        "infectious",
        "r0",
        "newly_recovered",
        "g_instant",
        "g_cumulative",
        "g_long",
        "g_short",
        "tau",
        "r0_fixed",
    ])?;
    for index in 0..series.len() {
        writer.write_record([
            (index + 2).to_string(),
            series.susceptible[index].to_string(),
            series.host[index].to_string(),
            series.immune[index].to_string(),
            series.infectious[index].to_string(),
            series.r0[index].to_string(),
            series.newly_recovered[index].to_string(),
            series.g_instant[index].to_string(),
            series.g_cumulative[index].to_string(),
            series.g_long[index].to_string(),
            series.g_short[index].to_string(),
            series.tau[index].to_string(),
            series.r0_fixed[index].to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_rt_csv(path: &Path, rates: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["day", "rt"])?;
    for (index, rt) in rates.iter().enumerate() {
        writer.write_record([(index + 1).to_string(), rt.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_network_csv(
    path: &Path,
    by_day: &[BTreeMap<NetworkId, f64>],
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["day", "network_id", "rt"])?;
    for (index, rates) in by_day.iter().enumerate() {
        for (network, rt) in rates {
            writer.write_record([
                (index + 1).to_string(),
                network.to_string(),
                rt.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_csv_uses_flat_field_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("events.csv");
        fs::write(
            &path,
            "infector_id,contact_id,day,infection_caused,network_id\n1,2,3,true,5\n1,4,3,false,1\n",
        )
        .expect("write");
        let events = read_events_csv(&path).expect("read");
        assert_eq!(
            events,
            vec![
                ContactEvent::new(1, 2, 3, true, 5),
                ContactEvent::new(1, 4, 3, false, 1),
            ]
        );
    }

    #[test]
    fn network_csv_lists_active_networks_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rt_by_network.csv");
        let mut day_two = BTreeMap::new();
        day_two.insert(NetworkId::from_raw(1), 0.5);
        day_two.insert(NetworkId::from_raw(5), 0.0);
        write_network_csv(&path, &[BTreeMap::new(), day_two]).expect("write");
        let body = fs::read_to_string(&path).expect("read");
        assert_eq!(body, "day,network_id,rt\n2,1,0.5\n2,5,0\n");
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        assert_eq!(load_config(None).expect("defaults"), AnalysisConfig::default());

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        fs::write(&path, "tracker:\n  short_window: 3\n").expect("write");
        let config = load_config(Some(path.as_path())).expect("partial config");
        assert_eq!(config.tracker.short_window, 3);
        assert_eq!(config.tracker.long_window, 10);

        fs::write(&path, "tracker:\n  short_window: 0\n").expect("write");
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        let mut config = AnalysisConfig::default();
        config.tracker.short_window = 4;
        config.replay.since_day = 3;
        config.replay.tau_override = Some(0.25);
        write_yaml(&path, &config).expect("write");
        assert_eq!(load_config(Some(path.as_path())).expect("load"), config);
    }
}

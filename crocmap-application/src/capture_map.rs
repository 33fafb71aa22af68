use crate::{
    csv::{read_capture_records, read_zones},
    output::{open_input, save_map},
    prelude::*,
};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct CaptureMapSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub center: MapPoint,
    pub zoom: u8,
    pub zones: Vec<Zone>,
    /// A CSV file that replaces the configured zones
    pub zones_file: Option<PathBuf>,
    /// Zones with more captures are highlighted
    pub threshold: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureMapReport {
    pub captures: usize,
    pub skipped: usize,
    pub zones: usize,
}

fn load_zones(settings: &CaptureMapSettings) -> Result<Vec<Zone>> {
    let Some(path) = &settings.zones_file else {
        return Ok(settings.zones.clone());
    };
    let mut names = HashSet::new();
    let zones = read_zones(open_input(path)?)?
        .into_iter()
        .filter_map(|zone| match zone {
            Ok(zone) if !names.insert(zone.name.clone()) => {
                log::warn!("Skipping duplicate zone '{}'", zone.name);
                None
            }
            Ok(zone) => Some(zone),
            Err(err) => {
                log::warn!("Skipping zone: {err}");
                None
            }
        })
        .collect();
    Ok(zones)
}

/// Places a marker with the number of captures on every zone.
pub fn create_capture_map<R>(renderer: &R, settings: &CaptureMapSettings) -> Result<CaptureMapReport>
where
    R: MapRenderer + ?Sized,
{
    let zones = load_zones(settings)?;
    let mut report = CaptureMapReport::default();
    let mut captures = vec![];
    for record in read_capture_records(open_input(&settings.input)?)? {
        match record {
            Ok(capture) => captures.push(capture),
            Err(err) => {
                log::warn!("Skipping capture: {err}");
                report.skipped += 1;
            }
        }
    }
    report.captures = captures.len();

    let mut map = MapDocument::new(settings.center, settings.zoom);
    for zone_captures in usecases::count_captures_per_zone(&captures, &zones) {
        log::info!(
            "Zone {} with {} captures added to the map",
            zone_captures.zone.name,
            zone_captures.total
        );
        map.add(usecases::zone_captures_marker(
            &zone_captures,
            settings.threshold,
        ));
        report.zones += 1;
    }
    save_map(renderer, &map, &settings.output)?;
    Ok(report)
}

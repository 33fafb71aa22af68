use crate::{
    csv::read_location_records,
    output::{open_input, save_map},
    prelude::*,
};
use crocmap_core::usecases::{BatchReport, BatchSettings, LocationStyle, RetryPolicy};

#[derive(Debug, Clone)]
pub struct LocationMapSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub center: MapPoint,
    pub zoom: u8,
    pub batch: BatchSettings,
    pub retry: RetryPolicy,
    pub style: LocationStyle,
}

/// Annotates every location of the input file and
/// saves the resulting map.
pub fn create_location_map<G, P, R>(
    gateway: &G,
    pause: &P,
    renderer: &R,
    settings: &LocationMapSettings,
) -> Result<BatchReport>
where
    G: ReverseGeocodingGateway + ?Sized,
    P: Pause + ?Sized,
    R: MapRenderer + ?Sized,
{
    let records = read_location_records(open_input(&settings.input)?)?;
    let mut map = MapDocument::new(settings.center, settings.zoom);
    let report = usecases::annotate_locations(
        gateway,
        pause,
        &mut map,
        &records,
        &settings.batch,
        &settings.retry,
        &settings.style,
    );
    save_map(renderer, &map, &settings.output)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use std::fs;

    fn settings(dir: &Path, style: LocationStyle) -> LocationMapSettings {
        LocationMapSettings {
            input: dir.join("locations.csv"),
            output: dir.join("map.html"),
            center: MapPoint::from_lat_lng_deg(0.0, 0.0),
            zoom: 2,
            batch: BatchSettings::default(),
            retry: RetryPolicy::default(),
            style,
        }
    }

    #[test]
    fn create_combined_map() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("locations.csv"),
            "name,latitude,longitude\nSite A,-12.46,130.84\nSite B,,130.9\nSite C,-12.46,130.84\n",
        )
        .unwrap();
        let settings = settings(dir.path(), LocationStyle::AddressMarker);
        let gw = FixedAddress("123 Example Rd");
        let report = create_location_map(&gw, &NoPause, &AnnotationLines, &settings).unwrap();
        assert_eq!(2, report.annotated);
        assert_eq!(1, report.skipped);
        assert_eq!(1, report.batches);
        let html = fs::read_to_string(&settings.output).unwrap();
        assert_eq!(
            "(-12.46, 130.84) Address: 123 Example Rd\n\
             (-12.46, 130.84) Address: 123 Example Rd\n",
            html
        );
    }

    #[test]
    fn create_highlighted_map() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let mut csv = String::from("name,latitude,longitude\n");
        for i in 0..11 {
            csv.push_str(&format!("L{i},{i}.0,1.0\n"));
        }
        fs::write(dir.path().join("locations.csv"), csv).unwrap();
        let mut settings = settings(dir.path(), LocationStyle::Highlight(Default::default()));
        settings.batch.sample_every = 5;
        let gw = FixedAddress("Darwin");
        let report = create_location_map(&gw, &NoPause, &AnnotationLines, &settings).unwrap();
        assert_eq!(3, report.annotated);
        let html = fs::read_to_string(&settings.output).unwrap();
        assert_eq!(6, html.lines().count());
        assert!(html.lines().all(|line| line.ends_with("circle")));
    }

    #[test]
    fn fail_without_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), LocationStyle::AddressMarker);
        let gw = FixedAddress("unused");
        let err = create_location_map(&gw, &NoPause, &AnnotationLines, &settings).unwrap_err();
        assert!(matches!(err, AppError::Input { .. }));
        assert!(!settings.output.exists());
    }
}

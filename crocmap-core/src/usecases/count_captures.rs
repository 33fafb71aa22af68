use super::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Counts the captures of every zone, in total and per year.
///
/// Captures in unknown zones are ignored. Zones without
/// any capture are omitted. The order of the zones is kept.
pub fn count_captures_per_zone(captures: &[CaptureRecord], zones: &[Zone]) -> Vec<ZoneCaptures> {
    let mut counts: HashMap<&str, BTreeMap<Year, usize>> = HashMap::new();
    for capture in captures {
        if !zones.iter().any(|z| z.name == capture.zone_name) {
            log::debug!("Ignoring capture in unknown zone '{}'", capture.zone_name);
            continue;
        }
        *counts
            .entry(capture.zone_name.as_str())
            .or_default()
            .entry(capture.year())
            .or_default() += 1;
    }
    zones
        .iter()
        .filter_map(|zone| {
            let per_year = counts.remove(zone.name.as_str())?;
            let total = per_year.values().sum();
            Some(ZoneCaptures {
                zone: zone.clone(),
                total,
                per_year,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{macros::date, Date};

    fn capture(zone_name: &str, date_captured: Date) -> CaptureRecord {
        CaptureRecord {
            zone_name: zone_name.into(),
            date_captured,
        }
    }

    fn zone(name: &str, lat: f64, lng: f64) -> Zone {
        Zone {
            name: name.into(),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
        }
    }

    #[test]
    fn count_per_zone_and_year() {
        let zones = vec![
            zone("Borroloola", -17.7414, 139.3268),
            zone("Litchfield", -13.0876, 130.9075),
            zone("Shoal Bay", -12.8456, 131.387),
        ];
        let captures = vec![
            capture("Shoal Bay", date!(2019 - 01 - 02)),
            capture("Borroloola", date!(2020 - 05 - 06)),
            capture("Shoal Bay", date!(2019 - 11 - 30)),
            capture("Shoal Bay", date!(2021 - 07 - 01)),
            capture("Nowhere", date!(2021 - 07 - 01)),
        ];
        let res = count_captures_per_zone(&captures, &zones);
        assert_eq!(2, res.len());

        assert_eq!("Borroloola", res[0].zone.name);
        assert_eq!(1, res[0].total);
        assert_eq!(Some(&1), res[0].per_year.get(&2020));

        assert_eq!("Shoal Bay", res[1].zone.name);
        assert_eq!(3, res[1].total);
        assert_eq!(
            vec![(2019, 2), (2021, 1)],
            res[1]
                .per_year
                .iter()
                .map(|(y, n)| (*y, *n))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn no_captures() {
        let zones = vec![zone("Litchfield", -13.0876, 130.9075)];
        assert!(count_captures_per_zone(&[], &zones).is_empty());
    }
}

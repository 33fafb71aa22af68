use crate::geo::MapPoint;
use std::collections::BTreeMap;
use time::Date;

pub type Year = i32;

/// A single crocodile capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRecord {
    pub zone_name: String,
    pub date_captured: Date,
}

impl CaptureRecord {
    pub fn year(&self) -> Year {
        self.date_captured.year()
    }
}

/// A management zone with a representative position.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub pos: MapPoint,
}

/// Capture counts of a single zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCaptures {
    pub zone: Zone,
    pub total: usize,
    pub per_year: BTreeMap<Year, usize>,
}

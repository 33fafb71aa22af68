use crate::geo::MapPoint;

/// A named position read from one row of a location dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub pos: MapPoint,
}

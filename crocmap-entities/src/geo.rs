use serde::Serialize;
use std::fmt;
use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordError {
    #[error("Latitude {0} is out of range")]
    Lat(f64),
    #[error("Longitude {0} is out of range")]
    Lng(f64),
}

/// A geographical position in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        let res = Self { lat, lng };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordError> {
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(CoordError::Lat(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(CoordError::Lng(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    /// NaN and out-of-range values are invalid.
    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_coordinates_within_range() {
        let pos = MapPoint::try_from_lat_lng_deg(-12.46, 130.84).unwrap();
        assert_eq!(-12.46, pos.lat());
        assert_eq!(130.84, pos.lng());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, -180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_coordinates_out_of_range() {
        assert_eq!(
            Err(CoordError::Lat(90.5)),
            MapPoint::try_from_lat_lng_deg(90.5, 0.0)
        );
        assert_eq!(
            Err(CoordError::Lng(-180.1)),
            MapPoint::try_from_lat_lng_deg(0.0, -180.1)
        );
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(!MapPoint::new_unchecked(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn display_as_pair() {
        let pos = MapPoint::from_lat_lng_deg(-12.5, 130.25);
        assert_eq!("(-12.5, 130.25)", pos.to_string());
    }
}

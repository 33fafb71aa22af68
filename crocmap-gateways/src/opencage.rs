use crate::status::error_from_status;
use crocmap_core::gateways::geocode::{GeocodingError, ReverseGeocodingGateway};
use crocmap_entities::geo::MapPoint;
use geocoding::{Opencage, Point, Reverse};
use std::time::Duration;

/// Reverse geocoding with the OpenCage API.
pub struct OpenCage {
    client: Opencage,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        let client = Opencage::new(api_key);
        Self { client }
    }
}

fn error_from_geocoding(err: geocoding::GeocodingError) -> GeocodingError {
    match err {
        geocoding::GeocodingError::Request(err) => {
            if err.is_timeout() {
                GeocodingError::TimedOut
            } else if let Some(status) = err.status() {
                error_from_status(status.as_u16())
            } else {
                GeocodingError::Unavailable(err.to_string())
            }
        }
        err => GeocodingError::Unavailable(err.to_string()),
    }
}

impl ReverseGeocodingGateway for OpenCage {
    fn resolve_lat_lng_address(
        &self,
        pos: MapPoint,
        _timeout: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        // The OpenCage client uses its own fixed request timeout.
        let point = Point::new(pos.lng(), pos.lat());
        self.client.reverse(&point).map_err(error_from_geocoding)
    }
}

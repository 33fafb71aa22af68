use crocmap_entities::geo::MapPoint;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Transient, worth another attempt.
    #[error("Geocoding service timed out")]
    TimedOut,
    /// Permanent for the current run.
    #[error("Geocoding service is unavailable: {0}")]
    Unavailable(String),
}

pub trait ReverseGeocodingGateway {
    /// Resolve the address at the given position.
    ///
    /// `Ok(None)` means that the service answered but
    /// doesn't know any address at this position.
    fn resolve_lat_lng_address(
        &self,
        pos: MapPoint,
        timeout: Duration,
    ) -> Result<Option<String>, GeocodingError>;
}

impl<T> ReverseGeocodingGateway for &T
where
    T: ReverseGeocodingGateway + ?Sized,
{
    fn resolve_lat_lng_address(
        &self,
        pos: MapPoint,
        timeout: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        (**self).resolve_lat_lng_address(pos, timeout)
    }
}

impl<T> ReverseGeocodingGateway for Box<T>
where
    T: ReverseGeocodingGateway + ?Sized,
{
    fn resolve_lat_lng_address(
        &self,
        pos: MapPoint,
        timeout: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        (**self).resolve_lat_lng_address(pos, timeout)
    }
}

use crocmap_core::gateways::geocode::GeocodingError;

/// Maps an unsuccessful HTTP status to a geocoding error.
///
/// Gateway timeouts and temporary overload are retried,
/// everything else is not.
pub(crate) fn error_from_status(status: u16) -> GeocodingError {
    match status {
        408 | 503 | 504 => GeocodingError::TimedOut,
        _ => GeocodingError::Unavailable(format!("HTTP status {status}")),
    }
}

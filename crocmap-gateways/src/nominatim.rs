use crate::status::error_from_status;
use crocmap_core::gateways::geocode::{GeocodingError, ReverseGeocodingGateway};
use crocmap_entities::geo::MapPoint;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Reverse geocoding with the OpenStreetMap Nominatim API.
///
/// The usage policy of the public instance requires
/// an identifying user agent and at most one request
/// per second.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

impl Nominatim {
    pub fn try_new(base_url: &str, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        log::debug!("Using Nominatim at {base_url} as '{user_agent}'");
        Ok(Self { client, base_url })
    }

    fn reverse_url(&self) -> String {
        format!("{}/reverse", self.base_url)
    }
}

fn address_from_response(response: ReverseResponse) -> Option<String> {
    let ReverseResponse {
        display_name,
        error,
    } = response;
    if let Some(err) = error {
        log::debug!("Nominatim responded: {err}");
    }
    display_name.filter(|name| !name.trim().is_empty())
}

fn error_from_request(err: reqwest::Error) -> GeocodingError {
    if err.is_timeout() {
        GeocodingError::TimedOut
    } else if let Some(status) = err.status() {
        error_from_status(status.as_u16())
    } else {
        GeocodingError::Unavailable(err.to_string())
    }
}

impl ReverseGeocodingGateway for Nominatim {
    fn resolve_lat_lng_address(
        &self,
        pos: MapPoint,
        timeout: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        let query = [
            ("format", "jsonv2".to_string()),
            ("lat", pos.lat().to_string()),
            ("lon", pos.lng().to_string()),
        ];
        let res = self
            .client
            .get(self.reverse_url())
            .query(&query)
            .timeout(timeout)
            .send()
            .map_err(error_from_request)?;
        let status = res.status();
        if !status.is_success() {
            return Err(error_from_status(status.as_u16()));
        }
        let response = res.json::<ReverseResponse>().map_err(error_from_request)?;
        Ok(address_from_response(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{net::TcpListener, thread};

    fn parse(json: &str) -> Option<String> {
        address_from_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parse_display_name() {
        let json = r#"{
          "place_id": 1234,
          "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
          "osm_type": "way",
          "lat": "-12.4600",
          "lon": "130.8400",
          "display_name": "Smith Street, Darwin City, Darwin, Northern Territory, 0800, Australia",
          "address": { "road": "Smith Street", "city": "Darwin" }
        }"#;
        assert_eq!(
            Some("Smith Street, Darwin City, Darwin, Northern Territory, 0800, Australia".into()),
            parse(json)
        );
    }

    #[test]
    fn parse_unable_to_geocode() {
        assert_eq!(None, parse(r#"{"error":"Unable to geocode"}"#));
        assert_eq!(None, parse(r#"{"display_name":"  "}"#));
    }

    #[test]
    fn strip_trailing_slash_from_base_url() {
        let gw = Nominatim::try_new("http://localhost:8080/", "crocmap-test").unwrap();
        assert_eq!("http://localhost:8080/reverse", gw.reverse_url());
    }

    #[test]
    fn silent_service_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            // Accept the connection but never answer.
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(1));
            drop(stream);
        });
        let gw = Nominatim::try_new(&format!("http://{addr}"), "crocmap-test").unwrap();
        let pos = MapPoint::from_lat_lng_deg(-12.46, 130.84);
        let res = gw.resolve_lat_lng_address(pos, Duration::from_millis(100));
        assert!(matches!(res, Err(GeocodingError::TimedOut)));
        server.join().unwrap();
    }

    #[test]
    fn unreachable_service_is_unavailable() {
        // Nothing listens on the discard port.
        let gw = Nominatim::try_new("http://127.0.0.1:9", "crocmap-test").unwrap();
        let pos = MapPoint::from_lat_lng_deg(-12.46, 130.84);
        let res = gw.resolve_lat_lng_address(pos, Duration::from_secs(2));
        assert!(matches!(res, Err(GeocodingError::Unavailable(_))));
    }
}

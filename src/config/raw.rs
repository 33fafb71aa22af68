use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("crocmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub batch: Option<Batch>,
    pub gateway: Option<Gateway>,
    pub combined: Option<CombinedMap>,
    pub highlighted: Option<HighlightedMap>,
    pub captures: Option<CaptureMap>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub retries: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub backoff_base: Option<Duration>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Opencage,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Batch {
    pub size: usize,
    #[serde(deserialize_with = "deserialize_duration")]
    pub pause: Duration,
}

impl Default for Batch {
    fn default() -> Self {
        Config::default().batch.expect("Batch configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapFiles {
    pub input: PathBuf,
    pub output: PathBuf,
    pub center: [f64; 2],
    pub zoom: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CombinedMap {
    #[serde(flatten)]
    pub files: MapFiles,
}

impl Default for CombinedMap {
    fn default() -> Self {
        Config::default()
            .combined
            .expect("Combined map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HighlightedMap {
    #[serde(flatten)]
    pub files: MapFiles,
    pub sample_every: usize,
    pub inner: Option<Circle>,
    pub outer: Option<Circle>,
}

impl Default for HighlightedMap {
    fn default() -> Self {
        Config::default()
            .highlighted
            .expect("Highlighted map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Circle {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CaptureMap {
    #[serde(flatten)]
    pub files: MapFiles,
    pub threshold: usize,
    pub zones_file: Option<PathBuf>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Default for CaptureMap {
    fn default() -> Self {
        Config::default()
            .captures
            .expect("Capture map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Zone {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

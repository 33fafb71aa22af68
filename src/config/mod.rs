use anyhow::{anyhow, bail, Result};
use crocmap_core::{
    entities::{Color, MapPoint, Zone},
    usecases::{BatchSettings, CircleStyle, HighlightStyle, RetryPolicy},
};
use crocmap_gateways::nominatim::DEFAULT_BASE_URL;
use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "crocmap.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";
const ENV_NAME_NOMINATIM_USER_AGENT: &str = "NOMINATIM_USER_AGENT";

const MAX_ZOOM: u8 = 19;

pub struct Config {
    pub geocoding: Geocoding,
    pub batch: BatchSettings,
    pub combined: MapFiles,
    pub highlighted: HighlightedMap,
    pub captures: CaptureMap,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config);
        Self::try_from(raw_config)
    }
}

fn apply_env_overrides(cfg: &mut raw::Config) {
    let gateway = cfg.gateway.get_or_insert_with(Default::default);
    if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
        gateway.opencage = Some(raw::OpenCage { api_key });
    }
    if let Ok(user_agent) = env::var(ENV_NAME_NOMINATIM_USER_AGENT) {
        match &mut gateway.nominatim {
            Some(nominatim) => nominatim.user_agent = user_agent,
            None => {
                gateway.nominatim = Some(raw::Nominatim {
                    base_url: None,
                    user_agent,
                });
            }
        }
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub retry: RetryPolicy,
}

pub enum GeocodingGateway {
    Nominatim { base_url: String, user_agent: String },
    OpenCage { api_key: String },
}

impl GeocodingGateway {
    /// The OpenCage client uses its own fixed request timeout.
    pub fn supports_request_timeout(&self) -> bool {
        matches!(self, Self::Nominatim { .. })
    }
}

pub struct MapFiles {
    pub input: PathBuf,
    pub output: PathBuf,
    pub center: MapPoint,
    pub zoom: u8,
}

pub struct HighlightedMap {
    pub files: MapFiles,
    /// Only every n-th location is highlighted
    pub sample_every: usize,
    pub style: HighlightStyle,
}

pub struct CaptureMap {
    pub files: MapFiles,
    pub threshold: usize,
    pub zones_file: Option<PathBuf>,
    pub zones: Vec<Zone>,
}

fn map_files(name: &str, from: raw::MapFiles) -> Result<MapFiles> {
    let raw::MapFiles {
        input,
        output,
        center,
        zoom,
    } = from;
    let [lat, lng] = center;
    let center = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid center of the {name} map: {err}"))?;
    if zoom > MAX_ZOOM {
        bail!("Invalid zoom level of the {name} map: {zoom} (max. {MAX_ZOOM})");
    }
    Ok(MapFiles {
        input,
        output,
        center,
        zoom,
    })
}

fn parse_color(color: &str) -> Result<Color> {
    color
        .parse()
        .map_err(|_| anyhow!("Unknown color '{color}'"))
}

fn circle_style(from: raw::Circle) -> Result<CircleStyle> {
    let raw::Circle {
        radius,
        color,
        fill_color,
        fill_opacity,
    } = from;
    if !radius.is_finite() || radius <= 0.0 {
        bail!("Invalid circle radius: {radius}");
    }
    if !(0.0..=1.0).contains(&fill_opacity) {
        bail!("Invalid fill opacity: {fill_opacity}");
    }
    Ok(CircleStyle {
        radius,
        color: parse_color(&color)?,
        fill_color: parse_color(&fill_color)?,
        fill_opacity,
    })
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            batch,
            gateway,
            combined,
            highlighted,
            captures,
        } = from;

        let raw::Geocoding {
            gateway: gw_name,
            retries,
            timeout,
            backoff_base,
        } = geocoding.unwrap_or_default();

        let gateway = gateway.unwrap_or_default();
        let gateway = match gw_name.unwrap_or(raw::GeocodingGateway::Nominatim) {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim {
                    base_url,
                    user_agent,
                } = gateway
                    .nominatim
                    .or_else(|| raw::Gateway::default().nominatim)
                    .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                if user_agent.trim().is_empty() {
                    bail!("Nominatim requires a user agent");
                }
                let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                log::info!("Use Nominatim geocoding gateway ({base_url})");
                GeocodingGateway::Nominatim {
                    base_url,
                    user_agent,
                }
            }
            raw::GeocodingGateway::Opencage => {
                let raw::OpenCage { api_key } = gateway
                    .opencage
                    .ok_or_else(|| anyhow!("Missing 'opencage' gateway configuration"))?;
                log::info!("Use OpenCage geocoding gateway");
                GeocodingGateway::OpenCage { api_key }
            }
        };

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            retries: retries.unwrap_or(defaults.retries),
            timeout: timeout.unwrap_or(defaults.timeout),
            backoff_base: backoff_base.unwrap_or(defaults.backoff_base),
        };
        if retry.retries == 0 {
            bail!("At least one geocoding attempt is required");
        }
        if !gateway.supports_request_timeout() {
            log::warn!(
                "The configured geocoding timeout of {:?} is ignored by this gateway",
                retry.timeout
            );
        }
        let geocoding = Geocoding { gateway, retry };

        let raw::Batch { size, pause } = batch.unwrap_or_default();
        if size == 0 {
            bail!("Invalid batch size: 0");
        }
        let batch = BatchSettings {
            size,
            pause,
            ..Default::default()
        };

        let raw::CombinedMap { files } = combined.unwrap_or_default();
        let combined = map_files("combined", files)?;

        let raw::HighlightedMap {
            files,
            sample_every,
            inner,
            outer,
        } = highlighted.unwrap_or_default();
        if sample_every == 0 {
            bail!("Invalid sampling interval of the highlighted map: 0");
        }
        let default_style = HighlightStyle::default();
        let style = HighlightStyle {
            inner: inner
                .map(circle_style)
                .transpose()?
                .unwrap_or(default_style.inner),
            outer: outer
                .map(circle_style)
                .transpose()?
                .unwrap_or(default_style.outer),
        };
        let highlighted = HighlightedMap {
            files: map_files("highlighted", files)?,
            sample_every,
            style,
        };

        let raw::CaptureMap {
            files,
            threshold,
            zones_file,
            zones,
        } = captures.unwrap_or_default();
        let zones = zones
            .into_iter()
            .map(|raw::Zone { name, lat, lng }| {
                let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
                    .map_err(|err| anyhow!("Invalid position of zone '{name}': {err}"))?;
                Ok(Zone { name, pos })
            })
            .collect::<Result<Vec<_>>>()?;
        let mut zone_names = HashSet::new();
        for zone in &zones {
            if !zone_names.insert(zone.name.as_str()) {
                bail!("Duplicate capture zone '{}'", zone.name);
            }
        }
        if zones.is_empty() && zones_file.is_none() {
            log::warn!("No capture zones defined");
        }
        let captures = CaptureMap {
            files: map_files("capture", files)?,
            threshold,
            zones_file,
            zones,
        };

        Ok(Self {
            geocoding,
            batch,
            combined,
            highlighted,
            captures,
        })
    }
}

use crate::config::{self, Config, GeocodingGateway};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use crocmap_application::{
    create_capture_map, create_location_map, CaptureMapSettings, LocationMapSettings,
};
use crocmap_core::{
    gateways::{geocode::ReverseGeocodingGateway, pause::ThreadSleep},
    usecases::{BatchSettings, LocationStyle},
};
use crocmap_gateways::{leaflet::LeafletRenderer, nominatim::Nominatim, opencage::OpenCage};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Create HTML maps from location and capture data")]
struct Cli {
    /// Configuration file
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One marker with the resolved address per location
    Combined(MapArgs),
    /// Two circles around every n-th location
    Highlighted {
        #[command(flatten)]
        map: MapArgs,
        /// Only highlight every n-th location
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        sample_every: Option<u64>,
    },
    /// Number of crocodile captures per zone
    Captures {
        #[command(flatten)]
        map: MapArgs,
        /// CSV file with the columns ZONE_NAME, LATITUDE and LONGITUDE
        #[arg(long, value_name = "CSV")]
        zones: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct MapArgs {
    /// Input CSV file
    #[arg(long, short, value_name = "CSV")]
    input: Option<PathBuf>,
    /// Output HTML file
    #[arg(long, short, value_name = "HTML")]
    output: Option<PathBuf>,
}

impl MapArgs {
    fn apply(self, files: &mut config::MapFiles) {
        let Self { input, output } = self;
        if let Some(input) = input {
            files.input = input;
        }
        if let Some(output) = output {
            files.output = output;
        }
    }
}

fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Box<dyn ReverseGeocodingGateway>> {
    let gateway: Box<dyn ReverseGeocodingGateway> = match &cfg.gateway {
        GeocodingGateway::Nominatim {
            base_url,
            user_agent,
        } => Box::new(Nominatim::try_new(base_url, user_agent)?),
        GeocodingGateway::OpenCage { api_key } => Box::new(OpenCage::new(api_key.clone())),
    };
    Ok(gateway)
}

fn location_map(
    geocoding: &config::Geocoding,
    files: config::MapFiles,
    batch: BatchSettings,
    style: LocationStyle,
    title: &str,
) -> Result<()> {
    let gateway = geocoding_gateway(geocoding)?;
    let renderer = LeafletRenderer::new(title);
    let config::MapFiles {
        input,
        output,
        center,
        zoom,
    } = files;
    log::info!("Create {title} from {}", input.display());
    let settings = LocationMapSettings {
        input,
        output,
        center,
        zoom,
        batch,
        retry: geocoding.retry.clone(),
        style,
    };
    let report = create_location_map(&gateway, &ThreadSleep, &renderer, &settings)?;
    log::info!("{report}");
    Ok(())
}

pub fn run() -> Result<()> {
    let Cli { config, command } = Cli::parse();
    let Config {
        geocoding,
        batch,
        combined,
        highlighted,
        captures,
    } = Config::try_load_from_file_or_default(config)?;
    match command {
        Command::Combined(args) => {
            let mut files = combined;
            args.apply(&mut files);
            location_map(
                &geocoding,
                files,
                batch,
                LocationStyle::AddressMarker,
                "Combined map",
            )
        }
        Command::Highlighted { map, sample_every } => {
            let config::HighlightedMap {
                mut files,
                sample_every: configured_sample_every,
                style,
            } = highlighted;
            map.apply(&mut files);
            let batch = BatchSettings {
                sample_every: sample_every
                    .map(|n| n as usize)
                    .unwrap_or(configured_sample_every),
                ..batch
            };
            location_map(
                &geocoding,
                files,
                batch,
                LocationStyle::Highlight(style),
                "Highlighted map",
            )
        }
        Command::Captures { map, zones } => {
            let config::CaptureMap {
                mut files,
                threshold,
                zones_file,
                zones: configured_zones,
            } = captures;
            map.apply(&mut files);
            let config::MapFiles {
                input,
                output,
                center,
                zoom,
            } = files;
            log::info!("Create crocodile capture map from {}", input.display());
            let settings = CaptureMapSettings {
                input,
                output,
                center,
                zoom,
                zones: configured_zones,
                zones_file: zones.or(zones_file),
                threshold,
            };
            let renderer = LeafletRenderer::new("Crocodile capture map");
            let report = create_capture_map(&renderer, &settings)?;
            log::info!(
                "{} captures in {} zones ({} skipped)",
                report.captures,
                report.zones,
                report.skipped
            );
            Ok(())
        }
    }
}

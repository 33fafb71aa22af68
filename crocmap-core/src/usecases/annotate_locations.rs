use super::{prelude::*, *};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationStyle {
    /// A marker that shows the resolved address
    AddressMarker,
    /// Circles around the location
    Highlight(HighlightStyle),
}

/// Resolves the address of every location and
/// annotates the map accordingly.
pub fn annotate_locations<G, P, E>(
    gateway: &G,
    pause: &P,
    map: &mut MapDocument,
    records: &[Result<LocationRecord, E>],
    batch: &BatchSettings,
    retry: &RetryPolicy,
    style: &LocationStyle,
) -> BatchReport
where
    G: ReverseGeocodingGateway + ?Sized,
    P: Pause + ?Sized,
    E: fmt::Display,
{
    process_in_batches(records, batch, pause, |record| {
        let LocationRecord { name, pos } = record;
        let resolution = reverse_geocode_with_retry(gateway, pause, *pos, retry);
        match style {
            LocationStyle::AddressMarker => {
                add_address_marker(map, *pos, &resolution);
                log::info!("Marker for {name} added to the map");
            }
            LocationStyle::Highlight(style) => {
                add_highlight_circles(map, *pos, style);
                log::info!(
                    "Circles for {name} added to the map ({})",
                    resolution.address_or_not_found()
                );
            }
        }
    })
}

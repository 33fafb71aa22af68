pub mod leaflet;
pub mod nominatim;
pub mod opencage;

mod status;

//! Load the input data, annotate a map and save it.

pub mod csv;
pub mod error;

mod capture_map;
mod date;
mod location_map;
mod output;

pub use self::{capture_map::*, error::*, location_map::*};

pub(crate) mod prelude {
    pub use crate::error::{AppError, Result};
    pub use crocmap_core::{
        entities::*,
        gateways::{geocode::*, pause::*, render::*},
        usecases,
    };
    pub use std::path::{Path, PathBuf};
}

mod annotate;
mod annotate_locations;
mod count_captures;
mod process_batches;
mod reverse_geocode;

#[cfg(test)]
pub mod tests;

pub use self::{
    annotate::*, annotate_locations::*, count_captures::*, process_batches::*,
    reverse_geocode::*,
};

mod prelude {
    pub use crate::{
        entities::*,
        gateways::{geocode::*, pause::*},
    };
}

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use crocmap_entities::{address::*, annotation::*, capture::*, geo::*, location::*, map::*};
}

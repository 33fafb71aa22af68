pub mod geocode;
pub mod pause;
pub mod render;
